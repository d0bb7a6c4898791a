use super::*;

/// Integer axis-aligned rectangle, `right = x + w` and `bottom = y + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn left(&self) -> i32 {
        self.x
    }
    pub fn right(&self) -> i32 {
        self.x + self.w
    }
    pub fn top(&self) -> i32 {
        self.y
    }
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Strict overlap: rectangles sharing only an edge do not collide, and neither does
    /// an empty rectangle.
    pub fn collides(&self, other: &Bounds) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn translated(&self, offset: IVec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

/// Like `f32::signum`, but zero stays zero.
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rotates `v` by `degrees` (y axis points down, so positive is clockwise on screen).
pub fn rotate_vector(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Same direction as `direction`, with the given length. The zero vector stays zero.
pub fn scale_vector(direction: Vec2, length: f32) -> Vec2 {
    direction.normalize_or_zero() * length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Bounds::new(0, 0, 32, 32);
        assert!(!a.collides(&Bounds::new(32, 0, 32, 32)));
        assert!(!a.collides(&Bounds::new(0, 32, 32, 32)));
        assert!(a.collides(&Bounds::new(31, 31, 32, 32)));
        assert!(!a.collides(&Bounds::new(10, 10, 0, 5)));
    }

    #[test]
    fn edge_setters_keep_size() {
        let mut b = Bounds::new(5, 5, 10, 20);
        b.set_right(40);
        b.set_bottom(100);
        assert_eq!(b, Bounds::new(30, 80, 10, 20));
        assert_eq!(b.center(), IVec2::new(35, 90));
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(0.1), 1.0);
    }

    #[test]
    fn rotation_and_scaling() {
        let v = rotate_vector(Vec2::new(10.0, 0.0), 90.0);
        assert!((v - Vec2::new(0.0, 10.0)).length() < 1e-4);
        let s = scale_vector(Vec2::new(3.0, 4.0), 10.0);
        assert!((s - Vec2::new(6.0, 8.0)).length() < 1e-4);
        assert_eq!(scale_vector(Vec2::ZERO, 10.0), Vec2::ZERO);
    }
}
