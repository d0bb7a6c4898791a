use super::*;

/// Where and how a level wants an object placed.
#[derive(Debug, Clone)]
pub struct Spawn<'a> {
    pub id: Id,
    pub level: Hue,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Option<IVec2>,
    pub color: Hue,
    pub name: Option<&'a str>,
}

impl Spawn<'_> {
    fn bounds(&self, size: IVec2) -> Bounds {
        Bounds::from_pos_size(self.pos.round().as_ivec2(), size)
    }
}

pub type Factory = fn(&Spawn, &Config, &mut StdRng) -> Object;

/// Maps level data type tags to object constructors.
#[derive(Clone)]
pub struct ObjectRegistry {
    factories: BTreeMap<&'static str, Factory>,
}

impl ObjectRegistry {
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, tag: &'static str, factory: Factory) -> &mut Self {
        self.factories.insert(tag, factory);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    pub fn spawn(
        &self,
        tag: &str,
        spawn: &Spawn,
        config: &Config,
        rng: &mut StdRng,
    ) -> Option<Object> {
        self.factories
            .get(tag)
            .map(|factory| factory(spawn, config, rng))
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("Platform", platform)
            .register("Spike", spike)
            .register("Checkpoint", checkpoint)
            .register("Portal", portal)
            .register("Orb", orb)
            .register("Key", key)
            .register("Door", door)
            .register("Bouncer", bouncer);
        registry
    }
}

impl fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

fn platform(spawn: &Spawn, config: &Config, _: &mut StdRng) -> Object {
    let size = spawn.size.unwrap_or(IVec2::splat(config.tile_size));
    Object::new(
        spawn.id,
        Kind::Platform,
        spawn.bounds(size),
        spawn.level,
        Capabilities::SOLID,
        None,
    )
}

fn spike(spawn: &Spawn, _: &Config, rng: &mut StdRng) -> Object {
    let kind = Kind::Spike {
        flip_x: rng.gen_bool(0.5),
        flip_y: rng.gen_bool(0.5),
    };
    Object::new(
        spawn.id,
        kind,
        spawn.bounds(IVec2::new(32, 32)),
        spawn.color,
        Capabilities::DEADLY,
        None,
    )
}

fn checkpoint(spawn: &Spawn, _: &Config, _: &mut StdRng) -> Object {
    let kind = Kind::Checkpoint(CheckpointState {
        active: true,
        angle: 0.0,
    });
    Object::new(
        spawn.id,
        kind,
        spawn.bounds(IVec2::new(144, 144)),
        spawn.level,
        Capabilities::INTERACTABLE,
        None,
    )
}

fn portal(spawn: &Spawn, _: &Config, _: &mut StdRng) -> Object {
    Object::new(
        spawn.id,
        Kind::Portal,
        spawn.bounds(IVec2::new(54, 64)),
        spawn.color,
        Capabilities::INTERACTABLE,
        Some(Animator::single(Clip::new(0, 1, 0.0))),
    )
}

fn orb(spawn: &Spawn, _: &Config, _: &mut StdRng) -> Object {
    Object::new(
        spawn.id,
        Kind::Orb,
        spawn.bounds(IVec2::new(32, 32)),
        spawn.color,
        Capabilities::INTERACTABLE,
        Some(Animator::single(Clip::new(0, 4, 5.0))),
    )
}

fn key(spawn: &Spawn, _: &Config, _: &mut StdRng) -> Object {
    let kind = Kind::Key(KeyState {
        spawn: spawn.pos.round(),
        home: spawn.level,
        following: false,
        name: spawn.name.map(str::to_owned),
    });
    Object::new(
        spawn.id,
        kind,
        spawn.bounds(IVec2::new(40, 24)),
        spawn.color,
        Capabilities::INTERACTABLE,
        Some(Animator::single(Clip::new(0, 4, 3.0))),
    )
}

fn door(spawn: &Spawn, _: &Config, _: &mut StdRng) -> Object {
    Object::new(
        spawn.id,
        Kind::Door,
        spawn.bounds(IVec2::new(32, 96)),
        spawn.color,
        Capabilities::DOOR,
        None,
    )
}

fn bouncer(spawn: &Spawn, _: &Config, rng: &mut StdRng) -> Object {
    let kind = Kind::Bouncer(BouncerState {
        action: false,
        mirrored: rng.gen_bool(0.5),
    });
    Object::new(
        spawn.id,
        kind,
        spawn.bounds(IVec2::new(32, 32)),
        spawn.color,
        Capabilities::CREATURE,
        Some(BouncerState::animator()),
    )
}
