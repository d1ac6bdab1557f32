use crate::{Config, Projectile, Time, Trail};
use hecs::World;

/// Advance every projectile by one semi-implicit Euler step.
///
/// Velocity is updated first (linear drag against the pre-update velocity,
/// then gravity), and the position moves with the *new* velocity; swapping
/// that order changes the integrator and the resulting trajectories.
pub fn apply_motion(world: &mut World, time: &Time, config: &Config, trail: &mut Trail) {
    let dt = time.dt;
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.vel.x -= config.drag_coeff * projectile.vel.x * dt;
        projectile.vel.y += config.gravity * dt - config.drag_coeff * projectile.vel.y * dt;

        projectile.pos += projectile.vel * dt;

        trail.push(projectile.pos);
    }
}
