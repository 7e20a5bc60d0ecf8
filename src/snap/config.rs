use std::fmt;

use crate::error::{Result, SnapError};

/// A snapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapType {
    /// Nearest grid intersection.
    Grid,
    /// Nearest object vertex.
    Vertex,
    /// Nearest point on an object edge.
    Edge,
    /// Centre of an object's bounding box.
    Center,
}

impl SnapType {
    /// All snap types, in evaluation order.
    pub const ALL: [SnapType; 4] = [Self::Grid, Self::Vertex, Self::Edge, Self::Center];

    const fn bit(self) -> u8 {
        match self {
            Self::Grid => 1 << 0,
            Self::Vertex => 1 << 1,
            Self::Edge => 1 << 2,
            Self::Center => 1 << 3,
        }
    }
}

impl fmt::Display for SnapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grid => "grid",
            Self::Vertex => "vertex",
            Self::Edge => "edge",
            Self::Center => "center",
        };
        f.write_str(name)
    }
}

/// A set of enabled [`SnapType`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapTypes {
    bits: u8,
}

impl SnapTypes {
    pub const NONE: SnapTypes = SnapTypes { bits: 0 };
    pub const ALL: SnapTypes = SnapTypes { bits: 0b1111 };

    /// Returns the set with `snap_type` added.
    #[must_use]
    pub const fn with(self, snap_type: SnapType) -> Self {
        Self {
            bits: self.bits | snap_type.bit(),
        }
    }

    /// Returns the set with `snap_type` removed.
    #[must_use]
    pub const fn without(self, snap_type: SnapType) -> Self {
        Self {
            bits: self.bits & !snap_type.bit(),
        }
    }

    #[must_use]
    pub const fn contains(self, snap_type: SnapType) -> bool {
        self.bits & snap_type.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates the enabled types in evaluation order.
    pub fn iter(self) -> impl Iterator<Item = SnapType> {
        SnapType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<SnapType> for SnapTypes {
    fn from_iter<I: IntoIterator<Item = SnapType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Maximum snap distance per strategy, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapDistances {
    pub grid: f64,
    pub vertex: f64,
    pub edge: f64,
    pub center: f64,
}

impl SnapDistances {
    /// Uses the same threshold for every strategy.
    #[must_use]
    pub const fn uniform(distance: f64) -> Self {
        Self {
            grid: distance,
            vertex: distance,
            edge: distance,
            center: distance,
        }
    }

    /// Threshold for `snap_type`.
    #[must_use]
    pub const fn get(&self, snap_type: SnapType) -> f64 {
        match snap_type {
            SnapType::Grid => self.grid,
            SnapType::Vertex => self.vertex,
            SnapType::Edge => self.edge,
            SnapType::Center => self.center,
        }
    }
}

/// Settings for one snap query.
///
/// Built by the caller for each query; the snapping functions supply no
/// defaults of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    enabled: bool,
    grid_spacing: f64,
    max_distances: SnapDistances,
    enabled_types: SnapTypes,
}

impl SnapConfig {
    /// Creates an enabled configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_spacing` is not a positive finite number or
    /// any threshold is negative or not finite.
    pub fn new(
        grid_spacing: f64,
        max_distances: SnapDistances,
        enabled_types: SnapTypes,
    ) -> Result<Self> {
        if !(grid_spacing.is_finite() && grid_spacing > 0.0) {
            return Err(SnapError::InvalidConfiguration(format!(
                "grid spacing must be positive, got {grid_spacing}"
            ))
            .into());
        }
        for snap_type in SnapType::ALL {
            let d = max_distances.get(snap_type);
            if !(d.is_finite() && d >= 0.0) {
                return Err(SnapError::InvalidConfiguration(format!(
                    "{snap_type} max distance must be non-negative, got {d}"
                ))
                .into());
            }
        }
        Ok(Self {
            enabled: true,
            grid_spacing,
            max_distances,
            enabled_types,
        })
    }

    /// Sets the master switch.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    #[must_use]
    pub fn max_distances(&self) -> &SnapDistances {
        &self.max_distances
    }

    #[must_use]
    pub fn enabled_types(&self) -> SnapTypes {
        self.enabled_types
    }

    /// Whether a query with this configuration can produce a candidate.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && !self.enabled_types.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SnapgeoError;

    #[test]
    fn types_set_operations() {
        let types = SnapTypes::NONE.with(SnapType::Vertex).with(SnapType::Grid);
        assert!(types.contains(SnapType::Grid));
        assert!(types.contains(SnapType::Vertex));
        assert!(!types.contains(SnapType::Center));
        assert!(!types.without(SnapType::Grid).contains(SnapType::Grid));
        assert!(SnapTypes::NONE.is_empty());
    }

    #[test]
    fn types_iterate_in_evaluation_order() {
        let types: SnapTypes = [SnapType::Center, SnapType::Grid, SnapType::Vertex]
            .into_iter()
            .collect();
        let order: Vec<_> = types.iter().collect();
        assert_eq!(order, vec![SnapType::Grid, SnapType::Vertex, SnapType::Center]);
        assert_eq!(SnapTypes::ALL.iter().count(), 4);
    }

    #[test]
    fn valid_config_starts_enabled() {
        let config = SnapConfig::new(1.0, SnapDistances::uniform(0.5), SnapTypes::ALL).unwrap();
        assert!(config.enabled());
        assert!(config.is_active());
        assert!(!config.with_enabled(false).is_active());
    }

    #[test]
    fn empty_types_are_inactive() {
        let config = SnapConfig::new(1.0, SnapDistances::uniform(0.5), SnapTypes::NONE).unwrap();
        assert!(config.enabled());
        assert!(!config.is_active());
    }

    #[test]
    fn non_positive_spacing_rejected() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = SnapConfig::new(spacing, SnapDistances::uniform(0.5), SnapTypes::ALL);
            assert!(matches!(
                result,
                Err(SnapgeoError::Snap(SnapError::InvalidConfiguration(_)))
            ));
        }
    }

    #[test]
    fn negative_threshold_rejected() {
        let distances = SnapDistances {
            edge: -0.1,
            ..SnapDistances::uniform(0.5)
        };
        let err = SnapConfig::new(1.0, distances, SnapTypes::ALL).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid snap configuration: edge max distance must be non-negative, got -0.1"
        );
    }

    #[test]
    fn zero_threshold_allowed() {
        assert!(SnapConfig::new(1.0, SnapDistances::uniform(0.0), SnapTypes::ALL).is_ok());
    }
}
