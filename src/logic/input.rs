use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
    LevelShift,
    Reset,
}

/// What is held down during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Resource)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub level_shift: bool,
    pub reset: bool,
}

impl Controls {
    pub fn pressed(&self, action: Action) -> bool {
        match action {
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Jump => self.jump,
            Action::LevelShift => self.level_shift,
            Action::Reset => self.reset,
        }
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        let slot = match action {
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Jump => &mut self.jump,
            Action::LevelShift => &mut self.level_shift,
            Action::Reset => &mut self.reset,
        };
        *slot = pressed;
    }

    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    /// 1 for right, -1 for left, 0 for both or neither.
    pub fn direction(&self) -> f32 {
        self.right as i32 as f32 - self.left as i32 as f32
    }

    /// Pressed now but not in `previous`.
    pub fn just_pressed(&self, previous: &Controls, action: Action) -> bool {
        self.pressed(action) && !previous.pressed(action)
    }
}

#[test]
fn opposite_directions_cancel() {
    let both = Controls::default().with(Action::Left).with(Action::Right);
    assert_eq!(both.direction(), 0.0);
    assert_eq!(Controls::default().with(Action::Left).direction(), -1.0);
    let reset = Controls::default().with(Action::Reset);
    assert!(reset.just_pressed(&Controls::default(), Action::Reset));
    assert!(!reset.just_pressed(&reset, Action::Reset));
}
