use super::*;

use super::ldtk::{EntityInstance, LevelDef};
use super::objects::Spawn;

/// One colored level: its objects, particles and camera views.
#[derive(Debug)]
pub struct Level {
    pub color: Hue,
    pub gravity: f32,
    pub x_friction: f32,
    pub background: Rgb,
    pub foreground: Rgb,
    pub particles: Particles,
    objects: BTreeMap<Id, Object>,
    views: BTreeMap<String, Vec<Bounds>>,
}

impl Level {
    pub fn new(color: Hue, config: &Config) -> Self {
        Self {
            color,
            gravity: config.level.gravity,
            x_friction: config.level.x_friction,
            background: color.background(),
            foreground: color.foreground(),
            particles: Particles::default(),
            objects: BTreeMap::new(),
            views: BTreeMap::new(),
        }
    }

    /// Builds a level from its LDtk definition. Every object is checked before any is
    /// created, so a bad level never comes out half-built.
    pub fn from_ldtk(
        def: &LevelDef,
        color: Hue,
        registry: &ObjectRegistry,
        config: &Config,
        rng: &mut StdRng,
        ids: &mut id::Gen,
    ) -> Result<Self, Error> {
        let mut placements = Vec::new();
        for entity in def.layer("Objects") {
            if entity.identifier.is_empty() {
                return Err(Error::MissingObjectType {
                    level: def.identifier.clone(),
                });
            }
            if !registry.contains(&entity.identifier) {
                return Err(Error::UnknownObjectType {
                    level: def.identifier.clone(),
                    tag: entity.identifier.clone(),
                });
            }
            placements.push((entity, object_color(def, entity, color)?));
        }

        let mut level = Self::new(color, config);
        for (entity, object_color) in placements {
            let spawn = Spawn {
                id: ids.gen(),
                level: color,
                pos: entity.pos().as_vec2(),
                size: entity.size(),
                color: object_color,
                name: entity.field("name").and_then(serde_json::Value::as_str),
            };
            if let Some(object) = registry.spawn(&entity.identifier, &spawn, config, rng) {
                level.insert(object);
            }
        }

        for entity in def.layer("Views") {
            let name = entity
                .field("name")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(&entity.identifier);
            let size = entity.size().unwrap_or(IVec2::splat(config.tile_size));
            level
                .views
                .entry(name.to_owned())
                .or_default()
                .push(Bounds::from_pos_size(entity.pos(), size));
        }

        info!(
            "built level {color} with {} objects and {} views",
            level.objects.len(),
            level.views.len(),
        );
        Ok(level)
    }

    pub fn object(&self, id: Id) -> Option<&Object> {
        self.objects.get(&id)
    }

    pub fn object_mut(&mut self, id: Id) -> Option<&mut Object> {
        self.objects.get_mut(&id)
    }

    /// All objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    pub fn objects_in(&self, membership: Membership) -> impl Iterator<Item = &Object> {
        self.objects
            .values()
            .filter(move |object| object.membership == membership)
    }

    pub fn group(&self, membership: Membership) -> Vec<Id> {
        self.objects_in(membership).map(|object| object.id).collect()
    }

    pub fn checkpoints(&self) -> impl Iterator<Item = &Object> {
        self.objects
            .values()
            .filter(|object| matches!(object.kind, Kind::Checkpoint(_)))
    }

    pub fn insert(&mut self, object: Object) {
        self.objects.insert(object.id, object);
    }

    pub fn take(&mut self, id: Id) -> Option<Object> {
        self.objects.remove(&id)
    }

    pub fn set_membership(&mut self, id: Id, membership: Membership) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.membership = membership;
        }
    }

    fn snapshot(&self, membership: Membership) -> Vec<physics::Solid> {
        self.objects_in(membership)
            .map(|object| physics::Solid {
                id: object.id,
                bounds: object.body.bounds,
            })
            .collect()
    }

    pub fn solids(&self) -> Vec<physics::Solid> {
        self.snapshot(Membership::Solid)
    }

    pub fn interactives(&self) -> Vec<physics::Solid> {
        self.snapshot(Membership::Interactive)
    }

    pub fn interact(&mut self, id: Id, actor: Actor, env: &mut Env) -> Result<Vec<Reaction>, Error> {
        match self.objects.get_mut(&id) {
            Some(object) => object.interact(actor, env, &mut self.particles),
            None => Ok(Vec::new()),
        }
    }

    pub fn update_objects(&mut self, dt: f32, player_center: IVec2, config: &Config) {
        for membership in Membership::UPDATE_ORDER {
            for id in self.group(membership) {
                if let Some(object) = self.objects.get_mut(&id) {
                    object.update(dt, player_center, config);
                }
            }
        }
    }

    /// Called when the player leaves: creatures stop mid-action.
    pub fn halt_creatures(&mut self) {
        for object in self.objects.values_mut() {
            if object.caps.creature && object.membership == Membership::Interactive {
                object.end_animation();
            }
        }
    }

    pub fn reset_inactive(&mut self) {
        for object in self.objects.values_mut() {
            if object.membership == Membership::Inactive {
                object.reset();
            }
        }
    }

    pub fn views(&self) -> &BTreeMap<String, Vec<Bounds>> {
        &self.views
    }

    /// Every rectangle of every view that `bounds` touches.
    pub fn views_touching(&self, bounds: &Bounds) -> Vec<Bounds> {
        self.views
            .values()
            .filter(|rects| rects.iter().any(|rect| rect.collides(bounds)))
            .flatten()
            .copied()
            .collect()
    }
}

fn object_color(def: &LevelDef, entity: &EntityInstance, level: Hue) -> Result<Hue, Error> {
    let invalid = |value: String| Error::InvalidField {
        level: def.identifier.clone(),
        field: "color".to_owned(),
        value,
    };
    match entity.field("color") {
        None => Ok(level),
        Some(serde_json::Value::String(name)) => name.parse().map_err(|_| invalid(name.clone())),
        Some(other) => Err(invalid(other.to_string())),
    }
}
