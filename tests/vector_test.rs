use approx::assert_abs_diff_eq;
use pursuit_simulator::vector::Vector3;

#[test]
fn test_dot_product() {
    let u = Vector3::ZERO;
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(u.dot(v), 0.0);

    let u = Vector3::new(-1.0, 0.0, 2.0);
    assert_eq!(u.dot(v), 5.0);
    assert_eq!(u.dot(v), v.dot(u));
}

#[test]
fn test_squared_length() {
    assert_eq!(Vector3::ZERO.squared_length(), 0.0);
    assert_eq!(Vector3::new(-2.0, 1.0, 4.0).squared_length(), 21.0);
}

#[test]
fn test_length() {
    assert_eq!(Vector3::ZERO.length(), 0.0);
    assert_eq!(Vector3::new(-2.0, 3.0, 6.0).length(), 7.0);
}

#[test]
fn test_squared_distance() {
    assert_eq!(Vector3::ZERO.squared_distance(Vector3::ZERO), 0.0);
    let u = Vector3::new(-2.0, 1.0, 4.0);
    let v = Vector3::new(1.0, 0.0, 2.0);
    assert_eq!(u.squared_distance(v), 14.0);
}

#[test]
fn test_distance() {
    let u = Vector3::new(-2.0, 4.0, 3.0);
    let v = Vector3::new(0.0, 1.0, -3.0);
    assert_eq!(u.distance(v), 7.0);
}

#[test]
fn test_scale() {
    let v = Vector3::new(-2.0, 4.0, 3.0);
    assert_eq!(v.scale(0.5), Vector3::new(-1.0, 2.0, 1.5));
    assert_eq!(v.scale(0.0), Vector3::ZERO);
    assert_eq!(v.scale(1.0), v);
    assert_eq!(v * 0.5, v.scale(0.5));
    assert_eq!(-v, v.scale(-1.0));
}

#[test]
fn test_scale_to() {
    let v = Vector3::new(1.5, 0.3, 15.6);
    let s = v.scale_to(5.0);
    assert_abs_diff_eq!(s.length(), 5.0, epsilon = 1e-12);
    // The input is not mutated.
    assert_eq!(v.z, 15.6);

    let s = Vector3::new(5.0, 5.0, 5.0).scale_to(3.0_f64.sqrt());
    assert_abs_diff_eq!(s, Vector3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_scale_to_zero_vector() {
    // A direction that does not exist cannot be normalized.
    assert_eq!(Vector3::ZERO.scale_to(5.0), Vector3::ZERO);
    assert_eq!(Vector3::ZERO.unit(), Vector3::ZERO);
}

#[test]
fn test_unit() {
    let v = Vector3::new(1.5, 0.3, 15.6);
    assert_abs_diff_eq!(v.unit().length(), 1.0, epsilon = 1e-12);
    assert_eq!(v.z, 15.6);
}

#[test]
fn test_add() {
    let u = Vector3::new(-2.0, 4.0, 3.0);
    let v = Vector3::new(1.0, -2.0, 0.0);
    assert_eq!(u + v, Vector3::new(-1.0, 2.0, 3.0));
    assert_eq!(u + Vector3::ZERO, u);

    let mut w = u;
    w += v;
    assert_eq!(w, u + v);
}

#[test]
fn test_subtract() {
    let u = Vector3::new(-2.0, 4.0, 3.0);
    let v = Vector3::new(1.0, -2.0, 0.0);
    assert_eq!(u - v, Vector3::new(-3.0, 6.0, 3.0));
    assert_eq!(u - Vector3::ZERO, u);

    let mut w = u;
    w -= v;
    assert_eq!(w, u - v);
}

#[test]
fn test_cross() {
    let u = Vector3::new(-2.0, 4.0, 3.0);
    let v = Vector3::new(1.0, -2.0, 0.0);
    assert_eq!(u.cross(v), Vector3::new(6.0, 3.0, 0.0));
    assert_eq!(u.cross(u), Vector3::ZERO);
    assert_eq!(u.cross(Vector3::ZERO), Vector3::ZERO);
    // Right-hand rule and antisymmetry.
    assert_eq!(u.cross(v), -(v.cross(u)));
}

#[test]
fn test_add_with_scale() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v.add_with_scale(Vector3::new(2.0, -1.0, 0.5), 2.0);
    assert_eq!(v, Vector3::new(5.0, 0.0, 4.0));
}

#[test]
fn test_norm1() {
    assert_eq!(Vector3::ZERO.norm1(), 0.0);
    assert_eq!(Vector3::new(-2.0, 1.0, 4.0).norm1(), 7.0);
}
