//! Point-mass pursuit/evasion simulation: 3D vector algebra, kinematic
//! ships, closed-form steering laws, a PID pursuit controller, and the
//! fitness harness handed to an external gain optimizer.

pub mod controller;
pub mod fitness;
pub mod position;
pub mod rng;
pub mod scenario;
pub mod ship;
pub mod starmap;
pub mod steering;
pub mod vector;
