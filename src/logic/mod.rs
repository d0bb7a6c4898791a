//! Game rules without any rendering: bodies, collisions, objects, the player and the
//! multi-level world. The bevy front-end in [`crate::game`] only feeds [`Controls`]
//! in and turns [`Frame`]s into sprites.

use std::collections::BTreeMap;
use std::fmt;

use bevy::log::{debug, info, warn};
use bevy::math::{IVec2, Vec2};
use bevy::prelude::{Reflect, Resource};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;

mod animation;
mod body;
mod camera;
mod color;
pub mod config;
mod cue;
mod error;
mod frame;
pub mod id;
mod input;
pub mod ldtk;
mod level;
mod math;
pub mod objects;
mod particle;
pub mod physics;
mod player;
mod world;

pub use animation::{Animator, Clip};
pub use body::{Body, Capabilities};
pub use camera::Camera;
pub use color::{blend, Hue, Rgb};
pub use config::Config;
pub use cue::Cue;
pub use error::Error;
pub use frame::{DebugInfo, Fill, Frame, Sheet, SpriteDraw};
pub use id::Id;
pub use input::{Action, Controls};
pub use level::Level;
pub use math::{rotate_vector, scale_vector, sign, Bounds};
pub use objects::{Actor, Kind, Membership, Object, ObjectRegistry, Reaction};
pub use particle::{Particle, ParticleId, Particles};
pub use player::{Anchor, HeldKey, Player, Shape};
pub use world::{ActiveCheckpoint, Game};

/// Everything an object or the player may touch while reacting, borrowed from [`Game`]
/// for the duration of one pass.
pub struct Env<'a> {
    pub config: &'a Config,
    pub controls: &'a Controls,
    pub rng: &'a mut StdRng,
    pub cues: &'a mut Vec<Cue>,
}
