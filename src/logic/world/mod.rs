use super::*;

use super::ldtk::Project;

#[cfg(test)]
mod tests;

/// The respawn anchor: the checkpoint most recently instantiated by a level load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCheckpoint {
    pub id: Id,
    pub color: Hue,
    pub center: IVec2,
}

/// A whole play session: every level visited so far, the player and the camera.
#[derive(Resource)]
pub struct Game {
    config: Config,
    project: Project,
    registry: ObjectRegistry,
    levels: BTreeMap<Hue, Level>,
    active: Hue,
    player: Player,
    checkpoint: Option<ActiveCheckpoint>,
    camera: Camera,
    ids: id::Gen,
    rng: StdRng,
    controls: Controls,
    previous_controls: Controls,
    cues: Vec<Cue>,
}

impl Game {
    /// Loads the start level and begins the first respawn at its checkpoint.
    pub fn new(config: Config, project: Project, seed: u64) -> Result<Self, Error> {
        Self::with_registry(config, project, ObjectRegistry::default(), seed)
    }

    pub fn with_registry(
        config: Config,
        project: Project,
        registry: ObjectRegistry,
        seed: u64,
    ) -> Result<Self, Error> {
        let start = config.start_level;
        let mut game = Self {
            player: Player::new(start, config.player.start_shape, &config.player),
            camera: Camera::from_config(&config),
            config,
            project,
            registry,
            levels: BTreeMap::new(),
            active: start,
            checkpoint: None,
            ids: id::Gen::new(),
            rng: StdRng::seed_from_u64(seed),
            controls: Controls::default(),
            previous_controls: Controls::default(),
            cues: Vec::new(),
        };
        game.load_level(start)?;
        if game.checkpoint.is_none() {
            return Err(Error::NoCheckpoint { level: start });
        }
        game.begin_respawn()?;
        Ok(game)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Takes effect for everything that reads the config from now on. Levels that are
    /// already built keep their physics constants.
    pub fn set_config(&mut self, config: Config) {
        self.camera.resize(&config);
        self.config = config;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn active(&self) -> Hue {
        self.active
    }

    pub fn active_level(&self) -> &Level {
        &self.levels[&self.active]
    }

    pub fn level(&self, hue: Hue) -> Option<&Level> {
        self.levels.get(&hue)
    }

    pub fn checkpoint(&self) -> Option<ActiveCheckpoint> {
        self.checkpoint
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Sound cues produced since the last call.
    pub fn drain_cues(&mut self) -> impl Iterator<Item = Cue> + '_ {
        self.cues.drain(..)
    }

    /// Makes `target` the active level, building it on first visit. Held keys come
    /// along.
    pub fn switch_level(&mut self, target: Hue) -> Result<(), Error> {
        self.load_level(target)
    }

    fn load_level(&mut self, target: Hue) -> Result<(), Error> {
        let outgoing = self.active;
        if let Some(level) = self.levels.get_mut(&outgoing) {
            level.halt_creatures();
            level.particles.clear();
            self.player.particles_cleared();
        }

        if !self.levels.contains_key(&target) {
            let def = self.project.level(target)?;
            let level = Level::from_ldtk(
                def,
                target,
                &self.registry,
                &self.config,
                &mut self.rng,
                &mut self.ids,
            )?;
            if let Some(checkpoint) = level.checkpoints().last() {
                let active = ActiveCheckpoint {
                    id: checkpoint.id,
                    color: target,
                    center: checkpoint.body.bounds.center(),
                };
                debug!("checkpoint {:?} in {target} is now active", active.id);
                self.checkpoint = Some(active);
            }
            self.levels.insert(target, level);
        }

        let mut carried = Vec::new();
        if outgoing != target {
            if let Some(level) = self.levels.get_mut(&outgoing) {
                for key in self.player.keys() {
                    carried.extend(level.take(key.id));
                }
            }
        }

        self.active = target;
        let level = self.active_level_mut()?;
        level.reset_inactive();
        for mut key in carried {
            key.membership = Membership::Decorative;
            level.insert(key);
        }
        debug!("switched from {outgoing} to {target}");
        Ok(())
    }

    fn active_level_mut(&mut self) -> Result<&mut Level, Error> {
        self.levels
            .get_mut(&self.active)
            .ok_or(Error::MissingLevel { level: self.active })
    }

    fn anchor(&self, checkpoint: &ActiveCheckpoint) -> Anchor {
        let angle = self
            .levels
            .get(&checkpoint.color)
            .and_then(|level| level.object(checkpoint.id))
            .and_then(|object| match &object.kind {
                Kind::Checkpoint(state) => Some(state.angle),
                _ => None,
            })
            .unwrap_or(0.0);
        Anchor {
            color: checkpoint.color,
            center: checkpoint.center,
            angle,
        }
    }

    fn begin_respawn(&mut self) -> Result<(), Error> {
        let checkpoint = self.checkpoint.ok_or(Error::NoCheckpoint { level: self.active })?;
        self.load_level(checkpoint.color)?;
        self.cues.push(Cue::Spawn);
        let anchor = self.anchor(&checkpoint);
        for key in self.player.begin_respawn(&anchor, &self.config) {
            self.release_key(key);
        }
        self.camera.center_on(&self.player.body.bounds);
        debug!("respawning at {:?} in {}", checkpoint.id, checkpoint.color);
        self.respawn_tick()
    }

    fn respawn_tick(&mut self) -> Result<(), Error> {
        let Some(checkpoint) = self.checkpoint else {
            return Ok(());
        };
        let anchor = self.anchor(&checkpoint);
        let level = self
            .levels
            .get_mut(&self.active)
            .ok_or(Error::MissingLevel { level: self.active })?;
        self.player.respawn_tick(&anchor, &mut level.particles, &self.config);
        Ok(())
    }

    /// Sends a dropped key back to where its level placed it.
    fn release_key(&mut self, key: HeldKey) {
        let object = self
            .levels
            .values_mut()
            .find_map(|level| level.take(key.id));
        match (object, self.levels.get_mut(&key.home)) {
            (Some(mut object), Some(home)) => {
                object.reset();
                home.insert(object);
            }
            _ => warn!("lost track of key {:?}", key.id),
        }
    }

    fn kill_player(&mut self) {
        let Some(level) = self.levels.get_mut(&self.active) else {
            return;
        };
        let mut env = Env {
            config: &self.config,
            controls: &self.controls,
            rng: &mut self.rng,
            cues: &mut self.cues,
        };
        self.player.kill(&mut level.particles, &mut env);
    }

    /// Advances the session by one frame.
    pub fn run(&mut self, dt: f32, controls: Controls) -> Result<(), Error> {
        self.previous_controls = self.controls;
        self.controls = controls;

        if self.controls.just_pressed(&self.previous_controls, Action::Reset) {
            self.kill_player();
        }

        let player_center = self.player.body.bounds.center();
        let level = self
            .levels
            .get_mut(&self.active)
            .ok_or(Error::MissingLevel { level: self.active })?;
        level.update_objects(dt, player_center, &self.config);

        self.update_player(dt)?;

        self.active_level_mut()?.particles.update(dt);
        self.camera.scroll_to(&self.player.body.bounds);
        Ok(())
    }

    fn update_player(&mut self, dt: f32) -> Result<(), Error> {
        if self.player.is_dead() {
            let level = self
                .levels
                .get(&self.active)
                .ok_or(Error::MissingLevel { level: self.active })?;
            if self.player.tick_death(&level.particles, &self.config.timers) {
                self.begin_respawn()?;
            }
            return Ok(());
        }
        if self.player.is_respawning() {
            return self.respawn_tick();
        }

        self.player.animate(dt);
        let target = self.player.color();
        if self.player.shape() == Shape::Star && target != self.active && self.controls.level_shift {
            if self.levels.contains_key(&target) || self.project.level(target).is_ok() {
                self.load_level(target)?;
                self.cues.push(Cue::LevelChange);
            } else {
                debug!("no {target} level to shift into");
            }
        }

        let level = self
            .levels
            .get_mut(&self.active)
            .ok_or(Error::MissingLevel { level: self.active })?;
        let mut env = Env {
            config: &self.config,
            controls: &self.controls,
            rng: &mut self.rng,
            cues: &mut self.cues,
        };
        let reactions = self.player.step(dt, level, &mut env)?;
        self.apply(reactions)
    }

    fn apply(&mut self, reactions: Vec<Reaction>) -> Result<(), Error> {
        let mut switch = None;
        for reaction in reactions {
            match reaction {
                Reaction::Kill => self.kill_player(),
                Reaction::Collect { orb, color } => {
                    self.active_level_mut()?.set_membership(orb, Membership::Inactive);
                    self.player.add_color(color);
                }
                Reaction::PickUp { key, color, home } => {
                    let level = self.active_level_mut()?;
                    if let Some(object) = level.object_mut(key) {
                        object.membership = Membership::Decorative;
                        if let Kind::Key(state) = &mut object.kind {
                            state.following = true;
                            debug!("picked up key {:?} ({:?})", key, state.name);
                        }
                    }
                    self.player.hold(HeldKey { id: key, color, home });
                }
                Reaction::Unlock { door, key } => {
                    // doors in one pass all saw the same keys; the first one claims it
                    if self.player.drop_key(key).is_none() {
                        continue;
                    }
                    let level = self.active_level_mut()?;
                    level.take(door);
                    level.take(key);
                    self.cues.push(Cue::Unlock);
                    debug!("key {key:?} unlocked door {door:?}");
                }
                Reaction::Bounce { y_vel } => self.player.bounce(y_vel),
                Reaction::SwitchLevel(target) => switch = Some(target),
            }
        }
        if let Some(target) = switch {
            self.load_level(target)?;
        }
        Ok(())
    }

    /// Draw list for the current frame, in screen space.
    pub fn frame(&self) -> Frame {
        let level = self.active_level();
        let offset = self.camera.offset;
        let views = level.views_touching(&self.player.body.bounds);

        let mut frame = if views.is_empty() {
            Frame::new(level.background)
        } else {
            Frame::new(level.foreground)
        };
        for view in &views {
            frame.fill(*view, level.background, offset);
        }

        let screen = self.camera.screen();
        let visible = |bounds: &Bounds| {
            if views.is_empty() {
                bounds.collides(&screen)
            } else {
                views.iter().any(|view| view.collides(bounds))
            }
        };
        for membership in Membership::DRAW_ORDER {
            for object in level.objects_in(membership) {
                if visible(&object.body.bounds) {
                    frame.draw(object.draw(), offset);
                }
            }
        }
        if let Some(sprite) = self.player.draw() {
            frame.draw(sprite, offset);
        }
        for particle in level.particles.iter() {
            if visible(&particle.body.bounds) {
                frame.draw(particle.draw(), offset);
            }
        }

        if self.config.debug {
            frame.debug = Some(DebugInfo {
                player_pos: self.player.body.pos,
                player_vel: self.player.body.vel,
                camera_box: self.camera.camera_box(),
            });
        }
        frame
    }
}
