use anyhow::Context as _;
use bevy::prelude::*;

use colorshapes::logic::{ldtk::Project, Config, Game};

const WORLD: &str = "assets/world.ldtk";

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    let project = Project::load(WORLD).with_context(|| format!("failed to load {WORLD}"))?;
    let session = Game::new(config.clone(), project, config.seed)
        .context("failed to start the first level")?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Colorshapes".into(),
                        resolution: (config.resolution.w as f32, config.resolution.h as f32)
                            .into(),
                        mode: if config.fullscreen {
                            bevy::window::WindowMode::BorderlessFullscreen
                        } else {
                            bevy::window::WindowMode::Windowed
                        },
                        // Tells wasm to resize the window according to the available canvas
                        fit_canvas_to_parent: true,
                        // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(config)
        .insert_resource(session)
        .add_plugin(colorshapes::game::Plugin)
        .run();
    Ok(())
}
