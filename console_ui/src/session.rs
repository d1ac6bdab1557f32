use std::thread;
use std::time::Duration;

use glam::Vec2;
use hecs::World;
use sim_core::{create_projectile, has_landed, step, Config, Events, Projectile, Time, Trail};

/// Everything one simulation run owns
///
/// The trail lives outside the world so it survives re-launches; only
/// `clear_trail` empties it.
pub struct Session {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub trail: Trail,
    pub events: Events,
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub steps: usize,
    pub sim_seconds: f32,
    pub impact_pos: Vec2,
    pub impact_vel: Vec2,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        create_projectile(&mut world, &config);

        Self {
            world,
            time: Time::new(config.dt, 0.0),
            config,
            trail: Trail::new(),
            events: Events::new(),
        }
    }

    /// Start a fresh run, possibly with new parameters. The trail carries
    /// over so repeated launches overlay their paths.
    pub fn relaunch(&mut self, config: Config) {
        self.world = World::new();
        create_projectile(&mut self.world, &config);
        self.time = Time::new(config.dt, 0.0);
        self.config = config;
        self.events = Events::new();
    }

    /// Advance one fixed step; true once the projectile has landed.
    pub fn step_once(&mut self) -> bool {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.trail,
            &mut self.events,
        );
        self.events.landed
    }

    pub fn landed(&self) -> bool {
        has_landed(&self.world, &self.config)
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Read-only kinematic snapshot for rendering
    pub fn projectile(&self) -> Option<(Vec2, Vec2)> {
        self.world
            .query::<&Projectile>()
            .iter()
            .next()
            .map(|(_e, p)| (p.pos, p.vel))
    }

    /// Drive the current run to the ground.
    ///
    /// `step_rate` throttles wall-clock pacing (steps per second); `None`
    /// runs flat out. Simulated time advances `dt` per step either way.
    pub fn drive(&mut self, step_rate: Option<u32>) -> RunSummary {
        let step_period = step_rate.map(|rate| Duration::from_secs_f64(1.0 / f64::from(rate)));
        let start_len = self.trail.len();

        while !self.step_once() {
            if let Some((pos, vel)) = self.projectile() {
                // One readout per simulated second
                let steps = self.trail.len() - start_len;
                if steps % 100 == 0 {
                    log::debug!(
                        "t={:.2}s pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
                        self.time.now,
                        pos.x,
                        pos.y,
                        vel.x,
                        vel.y
                    );
                }
            }
            if let Some(period) = step_period {
                thread::sleep(period);
            }
        }

        let (impact_pos, impact_vel) = self
            .projectile()
            .unwrap_or((Vec2::new(self.config.launch_x(), self.config.ground_y()), Vec2::ZERO));

        RunSummary {
            steps: self.trail.len() - start_len,
            sim_seconds: self.time.now,
            impact_pos,
            impact_vel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LaunchMode;

    #[test]
    fn test_session_drives_run_to_ground() {
        let mut session = Session::new(Config::new());
        let summary = session.drive(None);

        assert!(session.landed());
        assert!(summary.steps > 0);
        assert_eq!(session.trail.len(), summary.steps);
        assert!(summary.impact_pos.y > session.config.ground_y());
    }

    #[test]
    fn test_relaunch_keeps_trail() {
        let mut session = Session::new(Config::new());
        let first = session.drive(None);

        session.relaunch(Config::new());
        assert!(!session.landed(), "Relaunch starts a fresh airborne run");
        let second = session.drive(None);

        assert_eq!(
            session.trail.len(),
            first.steps + second.steps,
            "Paths overlay until the trail is cleared"
        );
    }

    #[test]
    fn test_relaunch_applies_new_config() {
        let mut session = Session::new(Config::new());
        session.drive(None);

        let mut horizontal = Config::new();
        horizontal.mode = LaunchMode::Horizontal;
        session.relaunch(horizontal);

        let (pos, vel) = session.projectile().expect("fresh projectile");
        assert_eq!(pos.y, 50.0);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_clear_trail_only_clears_trail() {
        let mut session = Session::new(Config::new());
        for _ in 0..50 {
            session.step_once();
        }
        let before = session.projectile().unwrap();

        session.clear_trail();

        assert!(session.trail.is_empty());
        assert_eq!(session.projectile().unwrap().0, before.0);
        assert_eq!(session.projectile().unwrap().1, before.1);
    }
}
