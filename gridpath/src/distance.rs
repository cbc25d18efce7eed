use std::f64::consts::SQRT_2;

use crate::grid::Coordinate;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coordinate, b: Coordinate) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs()) as f64
}

/// Octile distance: exact cost on an open grid where diagonal steps cost √2
/// and orthogonal steps cost 1.
#[inline]
pub fn octile(a: Coordinate, b: Coordinate) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx > dy { (dy, dx) } else { (dx, dy) };
    SQRT_2 * lo as f64 + (hi - lo) as f64
}

/// Straight-line distance.
#[inline]
pub fn euclidean(a: Coordinate, b: Coordinate) -> f64 {
    ((a.x - b.x) as f64).hypot((a.y - b.y) as f64)
}
