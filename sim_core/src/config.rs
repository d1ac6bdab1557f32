use crate::params::Params;
use std::error::Error;
use std::fmt;

/// Initial-condition generator selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Launch from ground level at a configurable angle
    Oblique,
    /// Launch horizontally from a fixed drop height
    Horizontal,
}

/// Immutable launch configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    pub radius: f32,
    pub launch_speed: f32,
    pub launch_angle: f32, // radians
    pub gravity: f32,
    pub drag_coeff: f32,
    pub dt: f32,
    pub mode: LaunchMode,
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius: Params::RADIUS,
            launch_speed: Params::LAUNCH_SPEED,
            launch_angle: Params::LAUNCH_ANGLE_DEG.to_radians(),
            gravity: Params::GRAVITY,
            drag_coeff: Params::DRAG_COEFF,
            dt: Params::FIXED_DT,
            mode: LaunchMode::Oblique,
            world_width: Params::WORLD_WIDTH,
            world_height: Params::WORLD_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y coordinate of the ground line (y grows downward)
    pub fn ground_y(&self) -> f32 {
        self.world_height - self.radius
    }

    /// X coordinate projectiles launch from
    pub fn launch_x(&self) -> f32 {
        self.world_width / 4.0
    }
}

/// Rejected form input: which field and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw parameter-form fields, as entered by the user
///
/// Numeric fields are kept as text so that all parsing happens here, at the
/// validation boundary, before a run is ever initialized.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    pub radius: String,
    pub speed: String,
    pub angle_deg: String,
    pub gravity: String,
    pub drag: String,
    pub mode: LaunchMode,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            radius: Params::RADIUS.to_string(),
            speed: Params::LAUNCH_SPEED.to_string(),
            angle_deg: Params::LAUNCH_ANGLE_DEG.to_string(),
            gravity: Params::GRAVITY.to_string(),
            drag: Params::DRAG_COEFF.to_string(),
            mode: LaunchMode::Oblique,
        }
    }
}

impl ConfigForm {
    /// Validate the form and produce an immutable run configuration.
    ///
    /// Radius, speed, angle and gravity are strict: non-numeric input or a
    /// non-positive radius/speed/gravity rejects the whole form. The drag
    /// coefficient alone degrades gracefully: unparseable or negative input
    /// falls back to 0 (no drag), never an error.
    pub fn validate(&self) -> Result<Config, ValidationError> {
        let radius = parse_positive("radius", &self.radius)?;
        let launch_speed = parse_positive("speed", &self.speed)?;
        let angle_deg: f32 = self
            .angle_deg
            .trim()
            .parse()
            .map_err(|_| ValidationError::new("angle", "must be a number"))?;
        let gravity = parse_positive("gravity", &self.gravity)?;

        let drag_coeff = match self.drag.trim().parse::<f32>() {
            Ok(d) if d >= 0.0 => d,
            _ => 0.0,
        };

        Ok(Config {
            radius,
            launch_speed,
            launch_angle: angle_deg.to_radians(),
            gravity,
            drag_coeff,
            mode: self.mode,
            ..Config::default()
        })
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<f32, ValidationError> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(field, "must be a number"))?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::new(field, "must be positive"))
    }
}
