use crate::vector::Vector3;

/// An entity with a location in 3-space. Lets the distance utilities work
/// against ships, catalog stars, or anything else with a position accessor.
pub trait Positioned {
    fn position(&self) -> Vector3;
}

pub fn squared_distance<A, B>(a: &A, b: &B) -> f64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    a.position().squared_distance(b.position())
}

pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    squared_distance(a, b).sqrt()
}
