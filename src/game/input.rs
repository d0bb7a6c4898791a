use super::*;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Controls>()
            .add_system(update_controls.in_set(Stage::Input));
    }
}

fn update_controls(keyboard_input: Res<Input<KeyCode>>, mut controls: ResMut<Controls>) {
    *controls = Controls {
        left: keyboard_input.any_pressed([KeyCode::A, KeyCode::Left]),
        right: keyboard_input.any_pressed([KeyCode::D, KeyCode::Right]),
        jump: keyboard_input.any_pressed([KeyCode::Space, KeyCode::W, KeyCode::Up]),
        level_shift: keyboard_input.any_pressed([KeyCode::LShift, KeyCode::RShift]),
        reset: keyboard_input.pressed(KeyCode::R),
    };
}
