use crate::error::{ConfigError, ConfigResult};
use crate::map::Arena;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_side: f32,
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub ball_growth_factor: f32,
    pub paddle_thickness: f32,
    pub paddle_length: f32,
    pub paddle_speed: f32,
    /// Milliseconds
    pub key_repeat_interval: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_side: Params::ARENA_SIDE,
            ball_speed: Params::BALL_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_growth_factor: Params::BALL_GROWTH_FACTOR,
            paddle_thickness: Params::PADDLE_THICKNESS,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_speed: Params::PADDLE_SPEED,
            key_repeat_interval: Params::KEY_REPEAT_INTERVAL,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_side)
    }

    /// Distance a paddle must keep from either end of its wall
    pub fn paddle_margin(&self) -> f32 {
        2.0 * self.paddle_thickness
    }

    /// Length of wall a paddle may occupy
    pub fn paddle_span(&self) -> f32 {
        self.arena_side - 2.0 * self.paddle_margin()
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("arena_side", self.arena_side),
            ("ball_speed", self.ball_speed),
            ("ball_radius", self.ball_radius),
            ("paddle_thickness", self.paddle_thickness),
            ("paddle_length", self.paddle_length),
            ("paddle_speed", self.paddle_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.key_repeat_interval.is_nan() || self.key_repeat_interval < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "key_repeat_interval",
                value: self.key_repeat_interval as f32,
            });
        }
        if self.ball_growth_factor.is_nan() || self.ball_growth_factor < 1.0 {
            return Err(ConfigError::GrowthBelowOne {
                value: self.ball_growth_factor,
            });
        }
        if self.paddle_length > self.paddle_span() {
            return Err(ConfigError::PaddleTooLong {
                length: self.paddle_length,
                span: self.paddle_span(),
            });
        }
        // Paddles sit one thickness in from each wall and are one thickness deep
        let inner = self.arena_side - 4.0 * self.paddle_thickness;
        let diameter = 2.0 * self.ball_radius;
        if diameter >= inner {
            return Err(ConfigError::BallTooLarge {
                diameter,
                side: self.arena_side,
            });
        }
        Ok(())
    }
}
