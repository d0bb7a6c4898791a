use super::*;

/// Screen offset that follows the player only once it pushes against a box in the
/// middle of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World position of the screen's top-left corner
    pub offset: IVec2,
    screen: IVec2,
    camera_box: IVec2,
}

impl Camera {
    pub fn new(screen: IVec2, camera_box: IVec2) -> Self {
        Self {
            offset: IVec2::ZERO,
            screen,
            camera_box,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolution.ivec2(), config.camera_box.ivec2())
    }

    /// Keeps the offset, picks up new screen and box sizes.
    pub fn resize(&mut self, config: &Config) {
        self.screen = config.resolution.ivec2();
        self.camera_box = config.camera_box.ivec2();
    }

    pub fn center_on(&mut self, target: &Bounds) {
        self.offset = target.center() - self.screen / 2;
    }

    pub fn scroll_to(&mut self, target: &Bounds) {
        let half_screen = self.screen / 2;
        let half_box = self.camera_box / 2;
        self.offset.x = self
            .offset
            .x
            .min(target.left() - half_screen.x + half_box.x)
            .max(target.right() - half_screen.x - half_box.x);
        self.offset.y = self
            .offset
            .y
            .min(target.top() - half_screen.y + half_box.y)
            .max(target.bottom() - half_screen.y - half_box.y);
    }

    pub fn screen(&self) -> Bounds {
        Bounds::from_pos_size(self.offset, self.screen)
    }

    /// The camera box in screen space.
    pub fn camera_box(&self) -> Bounds {
        Bounds::from_pos_size((self.screen - self.camera_box) / 2, self.camera_box)
    }
}
