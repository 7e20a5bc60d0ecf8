//! Snapping a free-form position to nearby grid points and scene geometry.
//!
//! Each strategy proposes at most one candidate within its own distance
//! threshold; [`closest_snap_point`] keeps the globally nearest of them.
//! All queries are pure: scene geometry is borrowed for the duration of the
//! call and nothing is retained.

mod config;
mod strategy;

pub use config::{SnapConfig, SnapDistances, SnapType, SnapTypes};
pub use strategy::{snap_to_center, snap_to_edge, snap_to_grid, snap_to_vertex};

use tracing::{debug, trace};

use crate::math::measure::distance;
use crate::math::Point3;
use crate::scene::{ObjectId, SceneQuery};

/// A possible snap target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapCandidate {
    /// World-space position to snap to.
    pub position: Point3,
    /// Strategy that produced the candidate.
    pub snap_type: SnapType,
    /// Object the candidate was derived from; `None` for grid points.
    pub object: Option<ObjectId>,
    /// Distance from the query position.
    pub distance: f64,
}

/// Returns the nearest candidate across every enabled strategy, or `None`
/// when snapping is disabled or nothing lies within its threshold.
///
/// Strategies run in the order grid, vertex, edge, center. A later candidate
/// replaces the current best only when strictly closer.
pub fn closest_snap_point<Q>(
    position: &Point3,
    objects: &[ObjectId],
    scene: &Q,
    config: &SnapConfig,
) -> Option<SnapCandidate>
where
    Q: SceneQuery + ?Sized,
{
    if !config.enabled() {
        return None;
    }

    let limits = config.max_distances();
    let mut best: Option<SnapCandidate> = None;

    for snap_type in config.enabled_types().iter() {
        let candidate = match snap_type {
            SnapType::Grid => grid_candidate(position, config),
            SnapType::Vertex => snap_to_vertex(position, objects, scene, limits.vertex),
            SnapType::Edge => snap_to_edge(position, objects, scene, limits.edge),
            SnapType::Center => snap_to_center(position, objects, scene, limits.center),
        };
        trace!(%snap_type, ?candidate, "snap strategy evaluated");

        if let Some(candidate) = candidate {
            if best.map_or(true, |b| candidate.distance < b.distance) {
                best = Some(candidate);
            }
        }
    }

    if let Some(b) = &best {
        debug!(snap_type = %b.snap_type, distance = b.distance, "snap candidate selected");
    }
    best
}

/// Grid candidate, accepted only when closer than both the grid spacing and
/// the grid threshold.
fn grid_candidate(position: &Point3, config: &SnapConfig) -> Option<SnapCandidate> {
    let spacing = config.grid_spacing();
    let snapped = snap_to_grid(position, spacing);
    let d = distance(position, &snapped);
    (d < spacing && d < config.max_distances().grid).then_some(SnapCandidate {
        position: snapped,
        snap_type: SnapType::Grid,
        object: None,
        distance: d,
    })
}

/// Returns `position` moved to its best snap target, or unchanged if there
/// is none.
#[must_use]
pub fn apply_snap<Q>(position: &Point3, objects: &[ObjectId], scene: &Q, config: &SnapConfig) -> Point3
where
    Q: SceneQuery + ?Sized,
{
    closest_snap_point(position, objects, scene, config).map_or(*position, |c| c.position)
}
