use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub solid: bool,
    pub interactable: bool,
    pub deadly: bool,
    pub creature: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        solid: false,
        interactable: false,
        deadly: false,
        creature: false,
    };
    pub const SOLID: Self = Self {
        solid: true,
        ..Self::NONE
    };
    pub const INTERACTABLE: Self = Self {
        interactable: true,
        ..Self::NONE
    };
    pub const DEADLY: Self = Self {
        interactable: true,
        deadly: true,
        ..Self::NONE
    };
    pub const DOOR: Self = Self {
        solid: true,
        interactable: true,
        ..Self::NONE
    };
    pub const CREATURE: Self = Self {
        interactable: true,
        creature: true,
        ..Self::NONE
    };
}

/// Sub-pixel position with the rounded integer bounds used for collision.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub bounds: Bounds,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: IVec2) -> Self {
        let mut body = Self {
            pos,
            bounds: Bounds::from_pos_size(IVec2::ZERO, size),
            vel: Vec2::ZERO,
        };
        body.sync_bounds();
        body
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
        self.sync_bounds();
    }

    /// Moves by `delta * dt` without any collision checks.
    pub fn translate(&mut self, dt: f32, delta: Vec2) {
        self.pos += delta * dt;
        self.sync_bounds();
    }

    /// Takes the position back from bounds that were snapped to an edge.
    pub fn sync_pos(&mut self) {
        self.pos = self.bounds.top_left().as_vec2();
    }

    fn sync_bounds(&mut self) {
        self.bounds.x = self.pos.x.round() as i32;
        self.bounds.y = self.pos.y.round() as i32;
    }
}

#[test]
fn bounds_follow_rounded_position() {
    let mut body = Body::new(Vec2::new(0.4, 0.6), IVec2::new(32, 32));
    assert_eq!(body.bounds.top_left(), IVec2::new(0, 1));
    body.translate(0.5, Vec2::new(3.0, -3.0));
    assert_eq!(body.bounds.top_left(), IVec2::new(2, -1));
    assert!((body.pos - Vec2::new(1.9, -0.9)).length() < 1e-5);
}
