//! Closed-form steering laws. Each law overwrites the commanding ship's
//! `acceleration` field with a vector of magnitude `accel` (or zero where
//! noted) computed purely from current state; no law keeps hidden memory.

use crate::ship::Ship;
use crate::vector::Vector3;

/// Substitute direction when a law's commanded direction degenerates to the
/// zero vector, so the output still has magnitude `accel`.
const FALLBACK_AXIS: Vector3 = Vector3::new(1.0, 0.0, 0.0);

/// Empirical damping applied to the radial closing velocity in
/// [`maintain_distance`].
const DISTANCE_DAMPING: f64 = 2.0;

/// Empirical gain on the radial distance error in [`maintain_distance`].
const RADIAL_GAIN: f64 = 0.5;

fn scale_or_fallback(direction: Vector3, accel: f64) -> Vector3 {
    if direction == Vector3::ZERO {
        FALLBACK_AXIS.scale(accel)
    } else {
        direction.scale_to(accel)
    }
}

/// The perpendicular to `u` that lies nearest `v`.
fn perpendicular_nearest(u: Vector3, v: Vector3) -> Vector3 {
    u.cross(v.cross(u))
}

/// The component of `v` perpendicular to `p` (the rejection of `v` off `p`).
fn rejection(v: Vector3, p: Vector3) -> Vector3 {
    let p2 = p.squared_length();
    if p2 == 0.0 {
        return v;
    }
    v - p.scale(v.dot(p) / p2)
}

/// Accelerate at `accel` directly away from `from`. A ship sitting exactly
/// on `from` flees along the +x axis.
pub fn flee(ship: &mut Ship, from: Vector3, accel: f64) {
    ship.acceleration = scale_or_fallback(ship.position - from, accel);
}

/// Accelerate at `accel` directly toward `center`. This is centripetal
/// acceleration: with `accel = v²/r` it holds a circular orbit of radius `r`.
pub fn circle(ship: &mut Ship, center: Vector3, accel: f64) {
    ship.acceleration = (center - ship.position).scale_to(accel);
}

/// Orbit a moving target: accelerate along the perpendicular to the relative
/// position that lies nearest the relative velocity. Falls back to the +x
/// axis when the two are parallel or either is zero.
pub fn circle_target(ship: &mut Ship, target: &Ship, accel: f64) {
    let p = ship.position - target.position;
    let v = ship.velocity - target.velocity;
    ship.acceleration = scale_or_fallback(perpendicular_nearest(p, v), accel);
}

/// Accelerate along the component of relative velocity perpendicular to the
/// relative position, producing an increasing-radius spiral.
pub fn spiral_away(ship: &mut Ship, target: &Ship, accel: f64) {
    let p = ship.position - target.position;
    let v = ship.velocity - target.velocity;
    ship.acceleration = scale_or_fallback(rejection(v, p), accel);
}

/// Accelerate perpendicular to both the relative position and the relative
/// velocity, producing a helical trajectory. Degenerates to zero
/// acceleration when the two are parallel.
pub fn corkscrew(ship: &mut Ship, target: &Ship, accel: f64) {
    let p = ship.position - target.position;
    let v = ship.velocity - target.velocity;
    ship.acceleration = p.cross(v).scale_to(accel);
}

/// Hold the separation from `target` near `desired` by blending a
/// tangential-speed correction against the ideal orbit speed
/// (`v² = accel * desired`), a radial pull toward the desired distance, and
/// damping of the radial closing speed, then scaling the blend to `accel`.
///
/// The two correction constants are empirical; the law is validated
/// statistically (separation stays within 25% of `desired` over long runs)
/// rather than closed-form. `desired = 0` produces undefined output.
pub fn maintain_distance(ship: &mut Ship, target: &Ship, accel: f64, desired: f64) {
    let p = ship.position - target.position;
    let v = ship.velocity - target.velocity;
    let d = p.length();
    if d == 0.0 {
        ship.acceleration = FALLBACK_AXIS.scale(accel);
        return;
    }
    let radial = p.scale(1.0 / d);
    let v_toward = radial.scale(v.dot(radial));
    let v_tangent = v - v_toward;
    let ideal_v_squared = accel * desired;
    let correction = v_tangent.scale_to(ideal_v_squared - v_tangent.squared_length())
        + radial.scale((desired - d) * RADIAL_GAIN)
        - v_toward.scale(DISTANCE_DAMPING);
    ship.acceleration = scale_or_fallback(correction, accel);
}
