//! Error types for configuration and presentation.

use std::fmt;

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size or speed that must be strictly positive was not
    NonPositive { name: &'static str, value: f32 },

    /// Growth below 1.0 would slow the ball down every tick
    GrowthBelowOne { value: f32 },

    /// Paddle does not fit between the two dead-zone margins of its wall
    PaddleTooLong { length: f32, span: f32 },

    /// Ball diameter does not fit between the paddles
    BallTooLarge { diameter: f32, side: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "'{}' must be positive, got {}", name, value)
            }
            ConfigError::GrowthBelowOne { value } => {
                write!(f, "ball growth factor must be at least 1.0, got {}", value)
            }
            ConfigError::PaddleTooLong { length, span } => write!(
                f,
                "paddle length {} exceeds the playable wall span {}",
                length, span
            ),
            ConfigError::BallTooLarge { diameter, side } => write!(
                f,
                "ball diameter {} does not fit in an arena of side {}",
                diameter, side
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure reported by a rendering surface
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Adapter, device or surface could not be created
    Init(String),

    /// Next frame could not be acquired or presented
    Frame(String),

    /// Surface was already torn down
    Closed,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Init(msg) => write!(f, "renderer initialisation failed: {}", msg),
            RenderError::Frame(msg) => write!(f, "frame presentation failed: {}", msg),
            RenderError::Closed => write!(f, "renderer has been closed"),
        }
    }
}

impl std::error::Error for RenderError {}

pub type ConfigResult<T> = Result<T, ConfigError>;
