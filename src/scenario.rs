use crate::rng::SeededRng;
use crate::ship::Ship;
use crate::steering;
use crate::vector::Vector3;
use rand::Rng;

/// Movement behavior assigned to the evader for the length of one episode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvaderBehavior {
    /// Coast on the initial velocity.
    Drift,
    /// Accelerate directly away from the pursuer.
    Flee,
    /// Orbit the pursuer.
    Orbit,
}

impl EvaderBehavior {
    /// Episodes cycle through the three behaviors by index.
    pub fn from_index(k: usize) -> EvaderBehavior {
        match k % 3 {
            0 => EvaderBehavior::Drift,
            1 => EvaderBehavior::Flee,
            _ => EvaderBehavior::Orbit,
        }
    }

    /// Recompute the evader's acceleration for this tick.
    pub fn steer(&self, evader: &mut Ship, pursuer: &Ship, accel: f64) {
        match self {
            EvaderBehavior::Drift => evader.acceleration = Vector3::ZERO,
            EvaderBehavior::Flee => steering::flee(evader, pursuer.position, accel),
            EvaderBehavior::Orbit => steering::circle_target(evader, pursuer, accel),
        }
    }
}

/// A ship with position components uniform in `[0, position_range)` and
/// velocity components uniform in `[0, velocity_range)`.
pub fn random_ship(rng: &mut SeededRng, position_range: f64, velocity_range: f64) -> Ship {
    Ship::new(
        Vector3::new(
            rng.gen_range(0.0..position_range),
            rng.gen_range(0.0..position_range),
            rng.gen_range(0.0..position_range),
        ),
        Vector3::new(
            rng.gen_range(0.0..velocity_range),
            rng.gen_range(0.0..velocity_range),
            rng.gen_range(0.0..velocity_range),
        ),
    )
}
