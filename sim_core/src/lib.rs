pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use systems::landing::has_landed;

use hecs::World;
use systems::*;

/// Advance the projectile simulation by exactly one fixed timestep.
///
/// The cadence at which a driver calls this controls how fast simulated
/// time passes relative to wall-clock time; the physics itself only ever
/// sees `time.dt`.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    trail: &mut Trail,
    events: &mut Events,
) {
    // Clear events at start of step
    events.clear();

    // 1. Integrate velocity and position (records the trail point)
    apply_motion(world, time, config, trail);

    // 2. Check for ground contact
    check_landing(world, config, events);

    // Update time
    time.now += time.dt;
}

/// Helper to spawn the projectile in its launch-mode initial state
pub fn create_projectile(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Projectile::launch(config),))
}
