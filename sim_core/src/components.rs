use glam::Vec2;

use crate::config::{Config, LaunchMode};
use crate::params::Params;

/// Projectile component - the simulated point mass
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Initial kinematic state for the configured launch mode.
    ///
    /// Coordinates are y-down (origin top-left), so "up" is negative y.
    pub fn launch(config: &Config) -> Self {
        match config.mode {
            LaunchMode::Oblique => Self {
                pos: Vec2::new(config.launch_x(), config.world_height - config.radius),
                vel: Vec2::new(
                    config.launch_speed * config.launch_angle.cos(),
                    -config.launch_speed * config.launch_angle.sin(),
                ),
            },
            LaunchMode::Horizontal => Self {
                pos: Vec2::new(config.launch_x(), Params::HORIZONTAL_LAUNCH_Y),
                vel: Vec2::new(config.launch_speed, 0.0),
            },
        }
    }
}
