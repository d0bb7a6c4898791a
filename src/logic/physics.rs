//! Axis-separated movement against a snapshot of solid rectangles.

use super::*;

/// Bounds of one object at the moment a pass started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solid {
    pub id: Id,
    pub bounds: Bounds,
}

/// Which side of the mover hit the obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: Id,
    pub side: Side,
}

/// Result of moving along one axis.
#[derive(Debug, Default)]
pub struct Sweep {
    /// Everything the mover overlapped after the move, before resolution.
    pub overlapped: Vec<Id>,
    pub hits: Vec<Hit>,
}

impl Sweep {
    pub fn hit(&self, side: Side) -> bool {
        self.hits.iter().any(|hit| hit.side == side)
    }
}

pub fn apply_gravity(vel: &mut Vec2, gravity: f32) {
    vel.y += gravity;
}

pub fn overlapping(bounds: Bounds, candidates: &[Solid]) -> Vec<Id> {
    candidates
        .iter()
        .filter(|candidate| candidate.bounds.collides(&bounds))
        .map(|candidate| candidate.id)
        .collect()
}

/// Solids overlapping `body` right after a move. Each one is still resolved against
/// the mover's current bounds, which earlier snaps may have changed.
fn touching(body: &Body, solids: &[Solid]) -> Vec<Solid> {
    solids
        .iter()
        .filter(|solid| solid.bounds.collides(&body.bounds))
        .copied()
        .collect()
}

pub fn move_x(body: &mut Body, dt: f32, dx: f32, solids: &[Solid]) -> Sweep {
    body.translate(dt, Vec2::new(dx, 0.0));
    let mut sweep = Sweep::default();
    for solid in touching(body, solids) {
        sweep.overlapped.push(solid.id);
        let (mover, other) = (body.bounds, solid.bounds);
        if mover.right() > other.left() && mover.right() < other.right() {
            body.bounds.set_right(other.left());
            sweep.hits.push(Hit {
                id: solid.id,
                side: Side::Right,
            });
        } else if mover.left() < other.right() && mover.left() > other.left() {
            body.bounds.set_left(other.right());
            sweep.hits.push(Hit {
                id: solid.id,
                side: Side::Left,
            });
        }
        body.sync_pos();
    }
    sweep
}

pub fn move_y(body: &mut Body, dt: f32, dy: f32, solids: &[Solid]) -> Sweep {
    body.translate(dt, Vec2::new(0.0, dy));
    let mut sweep = Sweep::default();
    for solid in touching(body, solids) {
        sweep.overlapped.push(solid.id);
        let (mover, other) = (body.bounds, solid.bounds);
        // ceiling first
        if mover.top() < other.bottom() && mover.top() > other.top() {
            body.bounds.set_top(other.bottom());
            sweep.hits.push(Hit {
                id: solid.id,
                side: Side::Top,
            });
        } else if mover.bottom() > other.top() && mover.bottom() < other.bottom() {
            body.bounds.set_bottom(other.top());
            sweep.hits.push(Hit {
                id: solid.id,
                side: Side::Bottom,
            });
        }
        body.sync_pos();
    }
    sweep
}

/// Generic movement for non-player bodies: x then y, zeroing `vel.y` on a vertical hit.
pub fn solid_collision_check(body: &mut Body, dt: f32, solids: &[Solid]) -> (Sweep, Sweep) {
    let Vec2 { x: dx, y: dy } = body.vel;
    let horizontal = if dx != 0.0 {
        move_x(body, dt, dx, solids)
    } else {
        Sweep::default()
    };
    let vertical = if dy != 0.0 {
        move_y(body, dt, dy, solids)
    } else {
        Sweep::default()
    };
    if !vertical.hits.is_empty() {
        body.vel.y = 0.0;
    }
    (horizontal, vertical)
}
