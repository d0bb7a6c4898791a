use super::*;

#[derive(Debug)]
pub enum Error {
    UnknownObjectType { level: String, tag: String },
    MissingObjectType { level: String },
    InvalidField { level: String, field: String, value: String },
    MissingLevel { level: Hue },
    NoCheckpoint { level: Hue },
    Parse(serde_json::Error),
    Io(std::io::Error),
    InvalidColor(String),
    NotAPlayer { object: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObjectType { level, tag } => {
                write!(f, "level {level:?}: unknown object type {tag:?}")
            }
            Self::MissingObjectType { level } => {
                write!(f, "level {level:?}: object without a type")
            }
            Self::InvalidField { level, field, value } => {
                write!(f, "level {level:?}: invalid {field} {value:?}")
            }
            Self::MissingLevel { level } => write!(f, "no level named {level:?}"),
            Self::NoCheckpoint { level } => {
                write!(f, "level {level:?} has no checkpoint to spawn at")
            }
            Self::Parse(e) => write!(f, "failed to parse level data: {e}"),
            Self::Io(e) => write!(f, "failed to read level data: {e}"),
            Self::InvalidColor(name) => write!(f, "invalid color: {name:?}"),
            Self::NotAPlayer { object } => write!(f, "{object} can only interact with the player"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
