use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(u64);

/// Short-lived sprite with its own velocity and gravity. Never collides.
#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    pub color: Hue,
    animator: Animator,
    speed: f32,
    gravity: f32,
    age: f32,
    frames: usize,
}

impl Particle {
    pub const DEFAULT_SPEED: f32 = 30.0;

    /// `center` is the middle of the particle, not its corner.
    pub fn new(
        center: Vec2,
        color: Hue,
        vel: Vec2,
        speed: f32,
        gravity: f32,
        config: &config::ParticleConfig,
    ) -> Self {
        let radius = config.radius;
        let mut body = Body::new(
            center - Vec2::splat(radius as f32),
            IVec2::splat(radius * 2),
        );
        body.vel = vel;
        Self {
            body,
            color,
            animator: Animator::single(Clip::new(0, config.frames, speed)),
            speed,
            gravity,
            age: 0.0,
            frames: config.frames,
        }
    }

    /// Returns `false` once the particle has played out.
    pub fn update(&mut self, dt: f32) -> bool {
        self.animator.animate(dt);
        self.age += self.speed.abs() * dt;
        if self.age > self.frames as f32 {
            return false;
        }
        physics::apply_gravity(&mut self.body.vel, self.gravity);
        let vel = self.body.vel;
        self.body.translate(dt, vel);
        true
    }

    pub fn draw(&self) -> SpriteDraw {
        SpriteDraw::new("particle", self.body.bounds, self.color.tint(0))
            .sheet(Sheet::new(self.frames, 1, self.animator.cell()))
    }
}

/// The particles of one level.
#[derive(Debug, Default)]
pub struct Particles {
    items: Vec<(ParticleId, Particle)>,
    next_id: u64,
}

impl Particles {
    pub fn emit(&mut self, particle: Particle) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.items.push((id, particle));
        id
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.items.iter().any(|(other, _)| *other == id)
    }

    pub fn update(&mut self, dt: f32) {
        self.items.retain_mut(|(_, particle)| particle.update(dt));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter().map(|(_, particle)| particle)
    }
}
