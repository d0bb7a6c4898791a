use super::*;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(setup)
            .add_system(update_label.in_set(Stage::Present));
    }
}

#[derive(Component)]
struct DebugLabel;

fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font: asset_server.load("Pixellari.ttf"),
                font_size: 24.0,
                color: Color::WHITE,
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            position: UiRect {
                top: Val::Px(5.0),
                left: Val::Px(15.0),
                ..default()
            },
            ..default()
        }),
        DebugLabel,
    ));
}

fn update_label(
    session: Res<Game>,
    mut labels: Query<(&mut Text, &mut Visibility), With<DebugLabel>>,
) {
    let debug = session.config().debug;
    let player = session.player();
    for (mut text, mut visibility) in labels.iter_mut() {
        *visibility = if debug {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if debug {
            text.sections[0].value = format!(
                "pos: ({:.1}, {:.1})\nvel: ({:.1}, {:.1})\nlevel: {}",
                player.body.pos.x,
                player.body.pos.y,
                player.body.vel.x,
                player.body.vel.y,
                session.active(),
            );
        }
    }
}
