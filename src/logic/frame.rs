use super::*;

/// Cell of a sprite sheet laid out in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sheet {
    pub columns: usize,
    pub rows: usize,
    pub index: usize,
}

impl Sheet {
    pub fn new(columns: usize, rows: usize, (row, column): (usize, usize)) -> Self {
        Self {
            columns,
            rows,
            index: row * columns + column,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub image: &'static str,
    pub bounds: Bounds,
    pub tint: Rgb,
    pub sheet: Option<Sheet>,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Degrees, counterclockwise on screen
    pub rotation: f32,
}

impl SpriteDraw {
    pub fn new(image: &'static str, bounds: Bounds, tint: Rgb) -> Self {
        Self {
            image,
            bounds,
            tint,
            sheet: None,
            flip_x: false,
            flip_y: false,
            rotation: 0.0,
        }
    }

    pub fn sheet(mut self, sheet: Sheet) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn flipped(mut self, flip_x: bool, flip_y: bool) -> Self {
        self.flip_x = flip_x;
        self.flip_y = flip_y;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    fn to_screen(mut self, camera: IVec2) -> Self {
        self.bounds = self.bounds.translated(-camera);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub bounds: Bounds,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfo {
    pub player_pos: Vec2,
    pub player_vel: Vec2,
    pub camera_box: Bounds,
}

/// Everything needed to draw one frame, in screen space and back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Rgb,
    pub fills: Vec<Fill>,
    pub sprites: Vec<SpriteDraw>,
    pub debug: Option<DebugInfo>,
}

impl Frame {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            fills: Vec::new(),
            sprites: Vec::new(),
            debug: None,
        }
    }

    pub fn fill(&mut self, bounds: Bounds, color: Rgb, camera: IVec2) {
        self.fills.push(Fill {
            bounds: bounds.translated(-camera),
            color,
        });
    }

    pub fn draw(&mut self, sprite: SpriteDraw, camera: IVec2) {
        self.sprites.push(sprite.to_screen(camera));
    }
}
