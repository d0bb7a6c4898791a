//! Bevy glue: keyboard in, [`Frame`]s and sound cues out. All game rules live in
//! [`crate::logic`].

use bevy::{app::AppExit, prelude::*, utils::HashMap};

use crate::logic::{Bounds, Config, Controls, Cue, Frame, Game, Rgb, Sheet};

use self::{
    assets::{ImageCache, SoundCache},
    audio::AudioExt,
};

mod assets;
mod audio;
mod debug;
mod input;
mod render;

pub struct Plugin;

/// Systems run in this order every bevy frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Stage {
    Input,
    Step,
    Present,
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Config>()
            .init_resource::<FrameLimiter>()
            .configure_sets((Stage::Input, Stage::Step, Stage::Present).chain())
            .add_system(sync_config.in_set(Stage::Step).before(step))
            .add_system(step.in_set(Stage::Step))
            .add_system(bevy::window::close_on_esc)
            .add_plugin(assets::Plugin)
            .add_plugin(input::Plugin)
            .add_plugin(render::Plugin)
            .add_plugin(audio::Plugin)
            .add_plugin(debug::Plugin);
        if cfg!(debug_assertions) {
            app.add_plugin(bevy_inspector_egui::quick::ResourceInspectorPlugin::<Config>::default());
        }
    }
}

/// Runs the simulation at the configured rate no matter how fast bevy renders. Each
/// tick gets the real time that passed since the previous one.
#[derive(Resource, Default)]
struct FrameLimiter {
    accumulated: f32,
}

impl FrameLimiter {
    /// Frames that end within this fraction of a tick still count as a full tick.
    const TOLERANCE: f32 = 0.05;
    /// Longest `dt` handed out after a stall, in ticks.
    const MAX_TICKS: f32 = 3.0;

    fn tick(&mut self, delta: f32, fps: f32) -> Option<f32> {
        let step = 1.0 / fps;
        self.accumulated += delta;
        if self.accumulated < step * (1.0 - Self::TOLERANCE) {
            return None;
        }
        let dt = self.accumulated.min(step * Self::MAX_TICKS);
        self.accumulated = 0.0;
        Some(dt)
    }
}

/// Edits made in the inspector reach the running session.
fn sync_config(config: Res<Config>, mut session: ResMut<Game>) {
    if config.is_changed() && !config.is_added() {
        session.set_config(config.clone());
    }
}

fn step(
    time: Res<Time>,
    controls: Res<Controls>,
    mut limiter: ResMut<FrameLimiter>,
    mut session: ResMut<Game>,
    mut exit: EventWriter<AppExit>,
) {
    let fps = session.config().fps;
    let Some(dt) = limiter.tick(time.delta_seconds(), fps) else {
        return;
    };
    if let Err(err) = session.run(dt, *controls) {
        error!("stopping: {err}");
        exit.send(AppExit);
    }
}

fn color(rgb: Rgb) -> Color {
    Color::rgb_u8(rgb.0, rgb.1, rgb.2)
}

/// Center of a screen-space rectangle in bevy world coordinates, where y points up.
fn translation(bounds: &Bounds, z: f32) -> Vec3 {
    let center = bounds.top_left().as_vec2() + bounds.size().as_vec2() / 2.0;
    Vec3::new(center.x, -center.y, z)
}
