//! Crate-level error types.

use std::fmt;

/// A rejected [`ZoomOptions`](crate::options::ZoomOptions) value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min_height <= initial_height <= max_height` does not hold.
    HeightBounds {
        /// Configured lower height bound.
        min: f32,
        /// Configured starting height.
        initial: f32,
        /// Configured upper height bound.
        max: f32,
    },
    /// A numeric field is NaN or infinite.
    NonFinite(&'static str),
    /// A field that must be zero or positive is negative.
    Negative(&'static str),
    /// Smoothing factor outside `[0, 1]`.
    SmoothingOutOfRange(f32),
    /// The terrain filter names an area kind the terrain service does not
    /// recognize.
    UnknownTerrainArea(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeightBounds { min, initial, max } => write!(
                f,
                "height bounds must satisfy min <= initial <= max \
                 (min={min}, initial={initial}, max={max})"
            ),
            Self::NonFinite(field) => write!(f, "{field} must be finite"),
            Self::Negative(field) => write!(f, "{field} must not be negative"),
            Self::SmoothingOutOfRange(v) => {
                write!(f, "smoothing factor {v} is outside [0, 1]")
            }
            Self::UnknownTerrainArea(kind) => {
                write!(f, "unknown terrain area kind '{kind}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors produced by the zoomrig crate.
#[derive(Debug)]
pub enum ZoomError {
    /// Invalid zoom configuration; the controller was not created.
    Configuration(ConfigError),
    /// A collaborator required by the controller was never supplied.
    CollaboratorUnavailable(&'static str),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
            Self::CollaboratorUnavailable(name) => {
                write!(f, "collaborator unavailable: {name}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ZoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::CollaboratorUnavailable(_) | Self::OptionsParse(_) => None,
        }
    }
}

impl From<ConfigError> for ZoomError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration(e)
    }
}

impl From<std::io::Error> for ZoomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
