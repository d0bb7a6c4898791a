/// A sound the front-end should play this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Jump,
    Death,
    Spawn,
    LevelChange,
    Key,
    Unlock,
}

impl Cue {
    /// File stem of the sound asset.
    pub fn name(self) -> &'static str {
        match self {
            Cue::Jump => "jump",
            Cue::Death => "death",
            Cue::Spawn => "spawn",
            Cue::LevelChange => "level_change",
            Cue::Key => "key",
            Cue::Unlock => "unlock",
        }
    }
}
