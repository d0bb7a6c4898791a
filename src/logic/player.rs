use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Reflect)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    /// Can shift into the level of its own color.
    Star,
}

impl Shape {
    fn state(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Star => "star",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldKey {
    pub id: Id,
    pub color: Hue,
    pub home: Hue,
}

/// Where the player comes back to life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub color: Hue,
    pub center: IVec2,
    pub angle: f32,
}

const JUMP_PARTICLE_SPREAD: f32 = 100.0;
const DEATH_PARTICLE_SPEED: f32 = 20.0;
const RESPAWN_RING: usize = 5;
const RESPAWN_RING_SPACING: f32 = 72.0;
const RESPAWN_PARTICLE_SPEED: f32 = 80.0;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    color: Hue,
    shape: Shape,
    animator: Animator,
    jump_timer: u32,
    jump_armed: bool,
    airborne: bool,
    dead: bool,
    respawning: bool,
    pause: u32,
    death_particle: Option<ParticleId>,
    keys: Vec<HeldKey>,
}

impl Player {
    pub fn new(color: Hue, shape: Shape, config: &config::PlayerConfig) -> Self {
        let mut animator = Animator::new(vec![
            ("circle", Clip::new(0, 1, 0.0)),
            ("star", Clip::new(1, 5, 5.0)),
        ]);
        animator.set_state(shape.state(), 0.0);
        Self {
            body: Body::new(Vec2::ZERO, config.size.ivec2()),
            color,
            shape,
            animator,
            jump_timer: 0,
            jump_armed: true,
            airborne: true,
            dead: false,
            respawning: false,
            pause: 0,
            death_particle: None,
            keys: Vec::new(),
        }
    }

    pub fn color(&self) -> Hue {
        self.color
    }

    pub fn set_color(&mut self, color: Hue) {
        self.color = color;
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.animator.set_state(shape.state(), 0.0);
    }

    pub fn keys(&self) -> &[HeldKey] {
        &self.keys
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_respawning(&self) -> bool {
        self.respawning
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn jump_timer(&self) -> u32 {
        self.jump_timer
    }

    /// Mixes `color` into the player's color.
    pub fn add_color(&mut self, color: Hue) {
        self.color = blend(self.color, color);
    }

    pub fn add_color_named(&mut self, name: &str) -> Result<(), Error> {
        let color = name.parse()?;
        self.add_color(color);
        Ok(())
    }

    pub fn hold(&mut self, key: HeldKey) {
        if !self.keys.iter().any(|held| held.id == key.id) {
            self.keys.push(key);
        }
    }

    pub fn drop_key(&mut self, id: Id) -> Option<HeldKey> {
        let index = self.keys.iter().position(|key| key.id == id)?;
        Some(self.keys.remove(index))
    }

    pub fn bounce(&mut self, y_vel: f32) {
        self.airborne = true;
        self.body.vel.y = y_vel;
    }

    pub fn animate(&mut self, dt: f32) {
        self.animator.animate(dt);
    }

    pub fn accelerate_x(&mut self, direction: f32, friction: f32, config: &config::PlayerConfig) {
        let vel = self.body.vel.x;
        if direction == 0.0 {
            self.body.vel.x = sign(vel) * (vel.abs() - friction).max(0.0);
            return;
        }
        let accel = if direction == sign(vel) {
            config.accel
                * (1.0 - (vel.abs() - config.accel_offset) / config.max_speed)
                    .powf(config.accel_exponent)
        } else {
            config.accel
        };
        self.body.vel.x = (vel + direction * accel).clamp(-config.max_speed, config.max_speed);
    }

    /// Starts a jump on a fresh press while grounded and keeps pushing while the
    /// button stays down and the timer runs.
    pub fn jump(&mut self, held: bool, particles: &mut Particles, env: &mut Env) {
        if !held {
            self.jump_armed = true;
        }
        let config = &env.config.player;
        if !self.airborne && held && self.jump_armed {
            self.airborne = true;
            self.jump_armed = false;
            self.jump_timer = config.jump_time;
            env.cues.push(Cue::Jump);

            let bounds = self.body.bounds;
            let (from, to) = (env.rng.gen_range(-1..=0), env.rng.gen_range(0..=1));
            for i in from..=to {
                let pos = Vec2::new((bounds.center().x - 4 * i) as f32, bounds.bottom() as f32);
                let vel = Vec2::new(
                    JUMP_PARTICLE_SPREAD * i as f32 - self.body.vel.x / 2.0,
                    -env.rng.gen_range(250..=300) as f32,
                );
                particles.emit(Particle::new(
                    pos,
                    self.color,
                    vel,
                    Particle::DEFAULT_SPEED,
                    env.config.level.gravity,
                    &env.config.particle,
                ));
            }
        }

        if self.jump_timer > 0 && held {
            let elapsed = (config.jump_time - self.jump_timer) as f32;
            let mut y_vel = config.jump_vel * elapsed.powf(config.jump_exponent)
                / (config.jump_time as f32).powf(config.jump_falloff)
                - config.jump_vel;
            y_vel *= 1.0 + self.body.vel.x.abs() / config.max_speed * (config.jump_vel_coef - 1.0);
            self.body.vel.y = y_vel;
            self.jump_timer -= 1;
        } else {
            self.jump_timer = 0;
        }
    }

    /// One frame of normal play: velocities, movement against the level's solids, then
    /// the trigger pass. Nothing is applied to the level itself; that is up to the
    /// returned reactions.
    pub fn step(&mut self, dt: f32, level: &mut Level, env: &mut Env) -> Result<Vec<Reaction>, Error> {
        self.accelerate_x(env.controls.direction(), level.x_friction, &env.config.player);
        physics::apply_gravity(&mut self.body.vel, level.gravity);
        self.jump(env.controls.jump, &mut level.particles, env);

        let mut reactions = self.solid_collision_check(dt, level, env)?;
        reactions.extend(self.interactive_collision_check(level, env)?);
        Ok(reactions)
    }

    fn solid_collision_check(
        &mut self,
        dt: f32,
        level: &mut Level,
        env: &mut Env,
    ) -> Result<Vec<Reaction>, Error> {
        let solids = level.solids();
        let mut reactions = Vec::new();

        let dx = self.body.vel.x;
        if dx != 0.0 {
            let sweep = physics::move_x(&mut self.body, dt, dx, &solids);
            for &id in &sweep.overlapped {
                if level.object(id).map_or(false, |object| object.caps.interactable) {
                    reactions.extend(level.interact(id, Actor::Player(self), env)?);
                }
            }
            if !sweep.hits.is_empty() {
                self.body.vel.x = 0.0;
            }
        }

        let dy = self.body.vel.y;
        if dy != 0.0 {
            let sweep = physics::move_y(&mut self.body, dt, dy, &solids);
            if sweep.hit(physics::Side::Top) {
                self.body.vel.y = 0.0;
                self.jump_timer = 0;
            }
            if sweep.hit(physics::Side::Bottom) {
                self.body.vel.y = 0.0;
                self.airborne = false;
                self.jump_timer = 0;
            }
            if sweep.overlapped.is_empty() {
                self.airborne = true;
            }
        }
        Ok(reactions)
    }

    fn interactive_collision_check(
        &mut self,
        level: &mut Level,
        env: &mut Env,
    ) -> Result<Vec<Reaction>, Error> {
        let triggers = level.interactives();
        let mut reactions = Vec::new();
        for id in physics::overlapping(self.body.bounds, &triggers) {
            let deadly = level.object(id).map_or(false, |object| object.caps.deadly);
            let result = level.interact(id, Actor::Player(self), env)?;
            let killed = result.contains(&Reaction::Kill);
            reactions.extend(result);
            if deadly && killed {
                // one death per frame
                break;
            }
        }
        Ok(reactions)
    }

    /// Ends the current life. Ignored while already dead or respawning.
    pub fn kill(&mut self, particles: &mut Particles, env: &mut Env) {
        if self.dead || self.respawning {
            return;
        }
        self.dead = true;
        env.cues.push(Cue::Death);

        let center = self.body.bounds.center().as_vec2();
        let gravity = env.config.level.gravity / 4.0;
        for x_dir in 0..4 {
            let mut vel = Vec2::new(
                env.rng.gen_range(200..=400) as f32 * (-1f32).powi(x_dir),
                0.0,
            );
            for angle in 0..3 {
                vel = rotate_vector(vel, env.rng.gen_range(0..=90) as f32 * (-1f32).powi(angle));
                vel += self.body.vel / 3.0;
                let particle = Particle::new(
                    center,
                    self.color,
                    vel,
                    DEATH_PARTICLE_SPEED,
                    gravity,
                    &env.config.particle,
                );
                self.death_particle = Some(particles.emit(particle));
            }
        }
    }

    /// Counts down after death. Returns `true` on the frame the respawn should begin.
    pub fn tick_death(&mut self, particles: &Particles, config: &config::TimersConfig) -> bool {
        if let Some(particle) = self.death_particle {
            if particles.contains(particle) {
                return false;
            }
        }
        if self.pause == 0 {
            self.pause = config.death_pause.max(1);
        }
        self.pause -= 1;
        if self.pause == 0 {
            self.dead = false;
            self.death_particle = None;
            return true;
        }
        false
    }

    /// Particle ids only mean something in the level that emitted them.
    pub fn particles_cleared(&mut self) {
        self.death_particle = None;
    }

    /// Puts the player back at `anchor` and hands back the keys it was holding.
    pub fn begin_respawn(&mut self, anchor: &Anchor, config: &Config) -> Vec<HeldKey> {
        self.dead = false;
        self.respawning = true;
        self.pause = config.timers.respawn_pause;
        self.color = anchor.color;
        let half = config.player.size.ivec2() / 2;
        self.body.set_pos((anchor.center - half).as_vec2());
        self.body.vel = Vec2::ZERO;
        self.jump_timer = 0;
        self.airborne = true;
        std::mem::take(&mut self.keys)
    }

    /// One frame of the respawn animation: a ring of particles closing in on the anchor.
    pub fn respawn_tick(&mut self, anchor: &Anchor, particles: &mut Particles, config: &Config) {
        for i in 0..RESPAWN_RING {
            let offset = rotate_vector(
                Vec2::new(config.checkpoint.radius, 0.0),
                -anchor.angle - RESPAWN_RING_SPACING * i as f32,
            );
            let vel = scale_vector(-offset, RESPAWN_PARTICLE_SPEED);
            particles.emit(Particle::new(
                offset + anchor.center.as_vec2(),
                anchor.color,
                vel,
                -10.0,
                0.0,
                &config.particle,
            ));
        }
        self.pause = self.pause.saturating_sub(1);
        if self.pause == 0 {
            self.respawning = false;
        }
    }

    pub fn draw(&self) -> Option<SpriteDraw> {
        if self.dead || self.respawning {
            return None;
        }
        Some(
            SpriteDraw::new("player", self.body.bounds, self.color.tint(0))
                .sheet(Sheet::new(5, 2, self.animator.cell())),
        )
    }
}
