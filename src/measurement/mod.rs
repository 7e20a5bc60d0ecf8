//! Measurement results assembled from picked points.
//!
//! The editor collects points one pick at a time; once a measurement has
//! enough of them, [`measure`] computes a [`MeasurementResult`] that the
//! caller holds for display.

use std::fmt;

use crate::error::{MeasurementError, Result};
use crate::math::measure::{angle, distance, point_to_line_distance, radians_to_degrees};
use crate::math::Point3;

/// The quantity a measurement reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    /// Distance between two points.
    Distance,
    /// Angle at the second point between rays to the first and third.
    Angle,
    /// Perpendicular distance from the first point to the line through the
    /// second and third.
    PointToLineDistance,
}

impl MeasurementKind {
    /// Number of picked points the measurement consumes.
    #[must_use]
    pub fn required_points(self) -> usize {
        match self {
            Self::Distance => 2,
            Self::Angle | Self::PointToLineDistance => 3,
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Distance => "distance",
            Self::Angle => "angle",
            Self::PointToLineDistance => "point-to-line distance",
        };
        f.write_str(name)
    }
}

/// Unit attached to a measured value.
///
/// Lengths are reported in scene units, which the editor treats as
/// millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millimeter,
    Radian,
    Degree,
}

impl Unit {
    /// Display suffix for the unit.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => " mm",
            Self::Radian => " rad",
            Self::Degree => "°",
        }
    }
}

/// The outcome of one measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    /// What was measured.
    pub kind: MeasurementKind,
    /// The measured value, never negative.
    pub value: f64,
    /// Unit of `value`.
    pub unit: Unit,
    /// The points the value was computed from, in pick order.
    pub input_points: Vec<Point3>,
}

impl MeasurementResult {
    /// Measures the distance between `p1` and `p2`.
    #[must_use]
    pub fn distance(p1: Point3, p2: Point3) -> Self {
        Self {
            kind: MeasurementKind::Distance,
            value: distance(&p1, &p2),
            unit: Unit::Millimeter,
            input_points: vec![p1, p2],
        }
    }

    /// Measures the angle at `vertex`, in radians.
    #[must_use]
    pub fn angle(p1: Point3, vertex: Point3, p2: Point3) -> Self {
        Self {
            kind: MeasurementKind::Angle,
            value: angle(&p1, &vertex, &p2),
            unit: Unit::Radian,
            input_points: vec![p1, vertex, p2],
        }
    }

    /// Measures the distance from `point` to the line through `line_point1`
    /// and `line_point2`.
    #[must_use]
    pub fn point_to_line(point: Point3, line_point1: Point3, line_point2: Point3) -> Self {
        Self {
            kind: MeasurementKind::PointToLineDistance,
            value: point_to_line_distance(&point, &line_point1, &line_point2),
            unit: Unit::Millimeter,
            input_points: vec![point, line_point1, line_point2],
        }
    }

    /// Returns the result with an angle expressed in degrees.
    ///
    /// Non-radian results are returned unchanged.
    #[must_use]
    pub fn to_degrees(&self) -> Self {
        let mut out = self.clone();
        if self.unit == Unit::Radian {
            out.value = radians_to_degrees(self.value);
            out.unit = Unit::Degree;
        }
        out
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(match self.unit {
            Unit::Radian => 4,
            Unit::Millimeter | Unit::Degree => 2,
        });
        write!(f, "{:.*}{}", precision, self.value, self.unit.symbol())
    }
}

/// Computes a measurement of `kind` from the first picked `points`.
///
/// Extra points beyond [`MeasurementKind::required_points`] are ignored.
///
/// # Errors
///
/// Returns an error if fewer points than required were supplied.
pub fn measure(kind: MeasurementKind, points: &[Point3]) -> Result<MeasurementResult> {
    let required = kind.required_points();
    if points.len() < required {
        return Err(MeasurementError::InsufficientPoints {
            kind,
            required,
            got: points.len(),
        }
        .into());
    }
    let result = match kind {
        MeasurementKind::Distance => MeasurementResult::distance(points[0], points[1]),
        MeasurementKind::Angle => MeasurementResult::angle(points[0], points[1], points[2]),
        MeasurementKind::PointToLineDistance => {
            MeasurementResult::point_to_line(points[0], points[1], points[2])
        }
    };
    Ok(result)
}
