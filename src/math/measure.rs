//! Distance and angle calculations between points in world space.
//!
//! All functions are pure. Degenerate inputs resolve to a defined value
//! instead of `NaN`.

use super::{Point3, Vector3, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point3, p2: &Point3) -> f64 {
    (p2 - p1).norm()
}

/// Squared Euclidean distance between two points.
///
/// Prefer this over [`distance`] when only the ordering of distances matters.
#[must_use]
pub fn distance_squared(p1: &Point3, p2: &Point3) -> f64 {
    (p2 - p1).norm_squared()
}

/// Angle in radians at `vertex` between the rays towards `p1` and `p2`.
///
/// The result lies in `[0, π]`. Returns `0` if either ray has zero length.
#[must_use]
pub fn angle(p1: &Point3, vertex: &Point3, p2: &Point3) -> f64 {
    angle_between_vectors(&(p1 - vertex), &(p2 - vertex))
}

/// Angle in radians between the directions `a2 - a1` and `b2 - b1`.
///
/// Same range and degenerate policy as [`angle`].
#[must_use]
pub fn angle_between_lines(a1: &Point3, a2: &Point3, b1: &Point3, b2: &Point3) -> f64 {
    angle_between_vectors(&(a2 - a1), &(b2 - b1))
}

fn angle_between_vectors(v1: &Vector3, v2: &Vector3) -> f64 {
    let len1 = v1.norm();
    let len2 = v2.norm();
    if len1 < TOLERANCE || len2 < TOLERANCE {
        return 0.0;
    }
    // Rounding can push the cosine slightly outside [-1, 1].
    let cos = (v1.dot(v2) / (len1 * len2)).clamp(-1.0, 1.0);
    cos.acos()
}

/// Converts radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Converts degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Foot of the perpendicular from `point` onto the infinite line through
/// `line_point1` and `line_point2`.
///
/// A zero-length line collapses to `line_point1`.
#[must_use]
pub fn closest_point_on_line(point: &Point3, line_point1: &Point3, line_point2: &Point3) -> Point3 {
    let dir = line_point2 - line_point1;
    let len = dir.norm();
    if len < TOLERANCE {
        return *line_point1;
    }
    let dir = dir / len;
    let t = (point - line_point1).dot(&dir);
    line_point1 + dir * t
}

/// Closest point to `point` on the segment from `start` to `end`.
#[must_use]
pub fn closest_point_on_segment(point: &Point3, start: &Point3, end: &Point3) -> Point3 {
    let dir = end - start;
    let len_sq = dir.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return *start;
    }
    // Project onto the infinite line, clamp to [0, 1].
    let t = ((point - start).dot(&dir) / len_sq).clamp(0.0, 1.0);
    start + dir * t
}

/// Perpendicular distance from `point` to the infinite line through
/// `line_point1` and `line_point2`.
///
/// If the two line points coincide, this is the distance to `line_point1`.
#[must_use]
pub fn point_to_line_distance(point: &Point3, line_point1: &Point3, line_point2: &Point3) -> f64 {
    distance(point, &closest_point_on_line(point, line_point1, line_point2))
}
