//! PID pursuit control: one stateful controller per spatial axis, composed
//! into a 3-axis motion controller whose total output is saturated to a
//! delta-v budget.

use crate::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Decay applied to the accumulated integral before each new error term is
/// added. The integral is leaky rather than a pure sum, which bounds windup:
/// a constant error `e` converges to `e * dt / (1 - INTEGRAL_DECAY)`.
const INTEGRAL_DECAY: f64 = 0.99;

/// A proportional/integral/derivative gain triple; the search space of the
/// external optimizer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gains {
    pub p: f64,
    pub i: f64,
    pub d: f64,
}

impl Gains {
    pub const fn new(p: f64, i: f64, d: f64) -> Gains {
        Gains { p, i, d }
    }
}

/// PID state for a single spatial axis. State is order-dependent: call
/// [`PidAxis::update`] exactly once per timestep, with the same `dt` the
/// integrator uses, or the integral and derivative terms are meaningless.
#[derive(Clone, Debug)]
pub struct PidAxis {
    gains: Gains,
    dt: f64,
    integral: f64,
    last_error: f64,
}

impl PidAxis {
    pub fn new(gains: Gains, dt: f64) -> PidAxis {
        PidAxis {
            gains,
            dt,
            integral: 0.0,
            last_error: 0.0,
        }
    }

    /// Clear accumulated state. Required before reuse in a new episode;
    /// stale integral or last-error state silently corrupts the next run.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.last_error = 0.0;
    }

    /// One control step against the current and target coordinate.
    pub fn update(&mut self, value: f64, target: f64) -> f64 {
        let error = value - target;
        self.integral = self.integral * INTEGRAL_DECAY + error * self.dt;
        let derivative = (error - self.last_error) / self.dt;
        self.last_error = error;
        self.gains.p * error + self.gains.i * self.integral + self.gains.d * derivative
    }
}

/// Three independent PID axes tracking a moving target position, with the
/// combined command saturated to a total delta-v budget.
#[derive(Clone, Debug)]
pub struct MotionController {
    axes: [PidAxis; 3],
    delta_v: f64,
}

impl MotionController {
    pub fn new(gains: Gains, delta_v: f64, dt: f64) -> MotionController {
        MotionController {
            axes: [
                PidAxis::new(gains, dt),
                PidAxis::new(gains, dt),
                PidAxis::new(gains, dt),
            ],
            delta_v,
        }
    }

    pub fn reset(&mut self) {
        for axis in &mut self.axes {
            axis.reset();
        }
    }

    /// Commanded acceleration toward `target`. When the raw output's 1-norm
    /// exceeds the delta-v budget the whole vector is rescaled uniformly,
    /// preserving direction; axes are never clamped individually.
    pub fn update(&mut self, position: Vector3, target: Vector3) -> Vector3 {
        let raw = Vector3::new(
            self.axes[0].update(position.x, target.x),
            self.axes[1].update(position.y, target.y),
            self.axes[2].update(position.z, target.z),
        );
        let norm = raw.norm1();
        if norm <= self.delta_v {
            raw
        } else {
            raw.scale(self.delta_v / norm)
        }
    }
}
