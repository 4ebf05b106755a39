use crate::position::Positioned;
use crate::vector::Vector3;
use serde::{Deserialize, Serialize};

/// A point-mass vehicle. `acceleration` is overwritten each tick by exactly
/// one steering law or controller command and then consumed by one
/// [`Ship::advance`] call; `position` and `velocity` accumulate across ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vector3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
}

impl Ship {
    pub fn new(position: Vector3, velocity: Vector3) -> Ship {
        Ship {
            position,
            velocity,
            acceleration: Vector3::ZERO,
        }
    }

    /// Advance the ship by `dt` seconds under constant acceleration:
    /// `position += velocity*dt + acceleration*dt²/2; velocity += acceleration*dt`.
    ///
    /// Exact for piecewise-constant acceleration, so the trajectory is
    /// independent of step size. Callers vary `dt` between 0.001 and 1.0.
    pub fn advance(&mut self, dt: f64) {
        self.position.add_with_scale(self.velocity, dt);
        self.position.add_with_scale(self.acceleration, dt * dt / 2.0);
        self.velocity.add_with_scale(self.acceleration, dt);
    }

    pub fn squared_distance(&self, other: &Ship) -> f64 {
        self.position.squared_distance(other.position)
    }

    pub fn distance(&self, other: &Ship) -> f64 {
        self.position.distance(other.position)
    }
}

impl Positioned for Ship {
    fn position(&self) -> Vector3 {
        self.position
    }
}
