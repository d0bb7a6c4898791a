use super::*;

mod bouncer;
mod key;
mod registry;

pub use bouncer::BouncerState;
pub use key::KeyState;
pub use registry::{Factory, ObjectRegistry, Spawn};

/// The one group of its level an object currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Solid,
    Interactive,
    Decorative,
    Inactive,
}

impl Membership {
    pub const UPDATE_ORDER: [Membership; 3] = [
        Membership::Decorative,
        Membership::Solid,
        Membership::Interactive,
    ];
    pub const DRAW_ORDER: [Membership; 3] = [
        Membership::Solid,
        Membership::Interactive,
        Membership::Decorative,
    ];

    fn initial(caps: Capabilities) -> Self {
        if caps.solid {
            Membership::Solid
        } else if caps.interactable {
            Membership::Interactive
        } else {
            Membership::Decorative
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointState {
    pub active: bool,
    /// Degrees in `[0, 360)`
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Platform,
    Spike { flip_x: bool, flip_y: bool },
    Checkpoint(CheckpointState),
    Portal,
    Orb,
    Key(KeyState),
    Door,
    Bouncer(BouncerState),
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Platform => "platform",
            Kind::Spike { .. } => "spike",
            Kind::Checkpoint(_) => "checkpoint",
            Kind::Portal => "portal",
            Kind::Orb => "orb",
            Kind::Key(_) => "key",
            Kind::Door => "door",
            Kind::Bouncer(_) => "bouncer",
        }
    }
}

/// Who touched an object.
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    Player(&'a Player),
    Creature(Hue),
}

impl Actor<'_> {
    pub fn color(&self) -> Hue {
        match self {
            Actor::Player(player) => player.color(),
            Actor::Creature(color) => *color,
        }
    }

    pub fn player(&self) -> Option<&Player> {
        match self {
            Actor::Player(player) => Some(*player),
            Actor::Creature(_) => None,
        }
    }
}

/// What an interaction asks the world to do once the current pass is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reaction {
    Kill,
    Collect { orb: Id, color: Hue },
    PickUp { key: Id, color: Hue, home: Hue },
    Unlock { door: Id, key: Id },
    Bounce { y_vel: f32 },
    SwitchLevel(Hue),
}

#[derive(Debug, Clone)]
pub struct Object {
    pub id: Id,
    pub body: Body,
    pub color: Hue,
    pub caps: Capabilities,
    pub membership: Membership,
    pub animator: Option<Animator>,
    pub kind: Kind,
}

impl Object {
    pub fn new(
        id: Id,
        kind: Kind,
        bounds: Bounds,
        color: Hue,
        caps: Capabilities,
        animator: Option<Animator>,
    ) -> Self {
        Self {
            id,
            body: Body::new(bounds.top_left().as_vec2(), bounds.size()),
            color,
            caps,
            membership: Membership::initial(caps),
            animator,
            kind,
        }
    }

    pub fn interact(
        &mut self,
        actor: Actor,
        env: &mut Env,
        particles: &mut Particles,
    ) -> Result<Vec<Reaction>, Error> {
        let reactions = match &mut self.kind {
            Kind::Platform | Kind::Spike { .. } | Kind::Checkpoint(_) => {
                if self.caps.deadly && self.color != actor.color() {
                    vec![Reaction::Kill]
                } else {
                    vec![]
                }
            }
            Kind::Portal => match actor {
                Actor::Player(_) => {
                    env.cues.push(Cue::LevelChange);
                    vec![Reaction::SwitchLevel(self.color)]
                }
                Actor::Creature(_) => vec![],
            },
            Kind::Orb => match actor {
                Actor::Player(_) => vec![Reaction::Collect {
                    orb: self.id,
                    color: self.color,
                }],
                Actor::Creature(_) => vec![],
            },
            Kind::Key(key) => match actor {
                Actor::Player(_) => {
                    env.cues.push(Cue::Key);
                    vec![Reaction::PickUp {
                        key: self.id,
                        color: self.color,
                        home: key.home,
                    }]
                }
                Actor::Creature(_) => vec![],
            },
            Kind::Door => {
                let player = actor.player().ok_or(Error::NotAPlayer { object: "door" })?;
                match player.keys().iter().find(|key| key.color == self.color) {
                    Some(key) => vec![Reaction::Unlock {
                        door: self.id,
                        key: key.id,
                    }],
                    None => vec![],
                }
            }
            Kind::Bouncer(bouncer) => match actor {
                Actor::Player(player) => {
                    let animator = self.animator.as_mut();
                    bouncer.interact(player, self.color, &self.body, animator, env, particles)
                }
                Actor::Creature(_) => vec![],
            },
        };
        Ok(reactions)
    }

    pub fn update(&mut self, dt: f32, player_center: IVec2, config: &Config) {
        let mut finished = false;
        match &mut self.kind {
            Kind::Checkpoint(checkpoint) => {
                if checkpoint.active {
                    checkpoint.angle = (checkpoint.angle + config.checkpoint.rotate_speed * dt) % 360.0;
                }
            }
            Kind::Bouncer(bouncer) => {
                if let Some(animator) = &mut self.animator {
                    if bouncer.action && animator.state() != BouncerState::IDLE {
                        finished = animator.animate(dt);
                    }
                }
            }
            Kind::Key(state) => {
                if let Some(animator) = &mut self.animator {
                    animator.animate(dt);
                }
                if state.following {
                    key::follow(&mut self.body, player_center, dt, &config.key);
                }
            }
            Kind::Portal | Kind::Orb => {
                if let Some(animator) = &mut self.animator {
                    animator.animate(dt);
                }
            }
            Kind::Platform | Kind::Spike { .. } | Kind::Door => {}
        }
        if finished {
            self.end_animation();
        }
    }

    /// Stops a creature's current action and rewinds it to its idle clip.
    pub fn end_animation(&mut self) {
        if let Kind::Bouncer(bouncer) = &mut self.kind {
            bouncer.action = false;
            if let Some(animator) = &mut self.animator {
                animator.set_state(BouncerState::IDLE, 0.0);
            }
        }
    }

    /// Makes the object collectable again. Keys also return to where they were placed.
    pub fn reset(&mut self) {
        if let Kind::Key(key) = &mut self.kind {
            key.following = false;
            let spawn = key.spawn;
            self.body.set_pos(spawn);
        }
        self.membership = Membership::Interactive;
    }

    pub fn draw(&self) -> SpriteDraw {
        let bounds = self.body.bounds;
        let tint = self.color.tint(0);
        let cell = self.animator.as_ref().map_or((0, 0), |animator| animator.cell());
        match &self.kind {
            Kind::Platform => SpriteDraw::new("platform", bounds, self.color.tint(color::FG_SHIFT)),
            Kind::Spike { flip_x, flip_y } => {
                SpriteDraw::new("spike", bounds, tint).flipped(*flip_x, *flip_y)
            }
            Kind::Checkpoint(checkpoint) => {
                SpriteDraw::new("checkpoint", bounds, tint).rotated(checkpoint.angle.round())
            }
            Kind::Door => SpriteDraw::new("door", bounds, tint),
            Kind::Portal => SpriteDraw::new("portal", bounds, tint),
            Kind::Orb => SpriteDraw::new("orb", bounds, tint).sheet(Sheet::new(4, 1, cell)),
            Kind::Key(_) => SpriteDraw::new("key", bounds, tint).sheet(Sheet::new(4, 1, cell)),
            Kind::Bouncer(bouncer) => {
                let attacking = self
                    .animator
                    .as_ref()
                    .map_or(false, |animator| animator.state() == BouncerState::ATTACK);
                SpriteDraw::new("bouncer", bounds, tint)
                    .sheet(Sheet::new(3, 2, cell))
                    .flipped(attacking && bouncer.mirrored, false)
            }
        }
    }
}
