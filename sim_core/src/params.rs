/// Tuning parameters for the projectile simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // World
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 300.0;

    // Projectile
    pub const RADIUS: f32 = 10.0;
    pub const LAUNCH_SPEED: f32 = 50.0; // units per second
    pub const LAUNCH_ANGLE_DEG: f32 = 30.0;
    pub const HORIZONTAL_LAUNCH_Y: f32 = 50.0; // drop height for horizontal launches

    // Forces
    pub const GRAVITY: f32 = 9.8;
    pub const DRAG_COEFF: f32 = 0.0; // linear drag, 0 disables

    // Physics
    pub const FIXED_DT: f32 = 0.01; // simulated seconds per step
    pub const STEP_RATE: u32 = 120; // driver cadence, steps per wall-clock second
}
