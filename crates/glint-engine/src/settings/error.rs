use std::fmt;

/// Rejected render configuration input.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Color is not of the form `#RRGGBB`.
    InvalidColor(String),
    /// Speed below [`MIN_SPEED`](super::MIN_SPEED) (or NaN).
    SpeedTooLow(f32),
    /// Shape name is not one of `circle`, `square`, `triangle`.
    UnknownShape(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColor(s) => write!(f, "invalid color {s:?}, expected #RRGGBB"),
            ConfigError::SpeedTooLow(v) => {
                write!(f, "speed {v} is below the minimum of {}", super::MIN_SPEED)
            }
            ConfigError::UnknownShape(s) => {
                write!(
                    f,
                    "unknown shape {s:?}, expected circle, square or triangle"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
