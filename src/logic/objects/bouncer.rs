use super::*;

/// Bounces players of its own color and kills everyone else.
#[derive(Debug, Clone, PartialEq)]
pub struct BouncerState {
    /// Set while a bounce or attack clip plays; interactions are ignored meanwhile.
    pub action: bool,
    pub mirrored: bool,
}

impl BouncerState {
    pub const IDLE: &'static str = "idle";
    pub const BOUNCE: &'static str = "bounce";
    pub const ATTACK: &'static str = "attack";

    pub fn animator() -> Animator {
        Animator::new(vec![
            (Self::IDLE, Clip::new(0, 1, 0.0)),
            (Self::BOUNCE, Clip::new(0, 3, 10.0)),
            (Self::ATTACK, Clip::new(1, 3, 10.0)),
        ])
    }

    pub(super) fn interact(
        &mut self,
        player: &Player,
        color: Hue,
        body: &Body,
        animator: Option<&mut Animator>,
        env: &mut Env,
        particles: &mut Particles,
    ) -> Vec<Reaction> {
        if self.action {
            return vec![];
        }
        self.action = true;
        if player.color() != color {
            if let Some(animator) = animator {
                animator.set_state(Self::ATTACK, 0.0);
            }
            return vec![Reaction::Kill];
        }

        if let Some(animator) = animator {
            animator.set_state(Self::BOUNCE, 0.0);
        }
        env.cues.push(Cue::Jump);
        let bounce_vel = env.config.bouncer.bounce_vel;
        let mut y_vel = -bounce_vel;
        if env.controls.jump {
            y_vel -= (bounce_vel / 3.0).floor();
        }

        let bounds = body.bounds;
        let gravity = (env.config.level.gravity / 2.0).floor();
        for i in -1..=1 {
            let pos = Vec2::new((bounds.center().x + 12 * i) as f32, bounds.bottom() as f32);
            let vel = Vec2::new(0.0, -env.rng.gen_range(80..=100) as f32);
            particles.emit(Particle::new(pos, color, vel, 20.0, gravity, &env.config.particle));
        }
        vec![Reaction::Bounce { y_vel }]
    }
}
