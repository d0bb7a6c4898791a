use super::*;

#[derive(Debug, Clone, Copy, Deserialize, Reflect)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn ivec2(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }
}

#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct PlayerConfig {
    pub size: Size,
    pub start_shape: Shape,
    /// px per second
    pub max_speed: f32,
    /// Base horizontal acceleration, applied per frame
    pub accel: f32,
    pub accel_offset: f32,
    pub accel_exponent: f32,
    pub jump_vel: f32,
    /// In frames
    pub jump_time: u32,
    pub jump_vel_coef: f32,
    pub jump_exponent: f32,
    pub jump_falloff: f32,
}

#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct LevelConfig {
    pub gravity: f32,
    pub x_friction: f32,
}

#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct BouncerConfig {
    pub bounce_vel: f32,
}

#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct KeyConfig {
    pub speed: f32,
    pub follow_min: f32,
    pub follow_max: f32,
}

#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct CheckpointConfig {
    pub radius: f32,
    /// Degrees per second
    pub rotate_speed: f32,
}

#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct ParticleConfig {
    pub radius: i32,
    pub frames: usize,
}

/// In frames
#[derive(Debug, Clone, Deserialize, Reflect)]
pub struct TimersConfig {
    pub death_pause: u32,
    pub respawn_pause: u32,
}

#[derive(Debug, Clone, Deserialize, Resource, Reflect)]
pub struct Config {
    pub debug: bool,
    pub sound: bool,
    pub fullscreen: bool,
    pub start_level: Hue,
    pub fps: f32,
    pub seed: u64,
    pub resolution: Size,
    pub camera_box: Size,
    pub tile_size: i32,
    pub player: PlayerConfig,
    pub level: LevelConfig,
    pub bouncer: BouncerConfig,
    pub key: KeyConfig,
    pub checkpoint: CheckpointConfig,
    pub particle: ParticleConfig,
    pub timers: TimersConfig,
}

impl Default for Config {
    fn default() -> Self {
        serde_json::from_str(include_str!("config.json")).expect("embedded config.json is valid")
    }
}

#[test]
fn embedded_config_parses() {
    let config = Config::default();
    assert_eq!(config.start_level, Hue::White);
    assert_eq!(config.player.jump_time, 20);
    assert_eq!(config.player.start_shape, Shape::Circle);
    assert_eq!(config.camera_box.w, config.resolution.w / 4);
}
