use crate::{Config, Events, Projectile};
use hecs::World;

/// True once the projectile's lower edge has crossed the ground line.
///
/// Checked by the driver after each step; with no projectile in the world
/// there is nothing left to land, so the run counts as over.
pub fn has_landed(world: &World, config: &Config) -> bool {
    let mut query = world.query::<&Projectile>();
    match query.iter().next() {
        Some((_entity, projectile)) => projectile.pos.y > config.ground_y(),
        None => true,
    }
}

/// Record a landing in this step's events
pub fn check_landing(world: &World, config: &Config, events: &mut Events) {
    if has_landed(world, config) {
        events.landed = true;
    }
}
