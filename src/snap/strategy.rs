use tracing::{debug, warn};

use super::{SnapCandidate, SnapType};
use crate::math::measure::{closest_point_on_segment, distance_squared};
use crate::math::Point3;
use crate::scene::{ObjectId, SceneQuery};

/// Rounds each coordinate of `position` to the nearest multiple of
/// `grid_spacing`.
///
/// A spacing that is not positive and finite leaves `position` unchanged.
#[must_use]
pub fn snap_to_grid(position: &Point3, grid_spacing: f64) -> Point3 {
    if !(grid_spacing.is_finite() && grid_spacing > 0.0) {
        warn!(grid_spacing, "ignoring grid snap with invalid spacing");
        return *position;
    }
    position.map(|v| (v / grid_spacing).round() * grid_spacing)
}

/// Finds the world-space vertex closest to `position` among `objects`,
/// strictly within `max_distance`.
///
/// Ties keep the first vertex encountered.
pub fn snap_to_vertex<Q>(
    position: &Point3,
    objects: &[ObjectId],
    scene: &Q,
    max_distance: f64,
) -> Option<SnapCandidate>
where
    Q: SceneQuery + ?Sized,
{
    let mut nearest = Nearest::new(position, max_distance);
    for &id in objects {
        let Some(vertices) = resolve(id, scene.world_vertices(id)) else {
            continue;
        };
        for vertex in vertices {
            nearest.offer(vertex, id);
        }
    }
    nearest.finish(SnapType::Vertex)
}

/// Finds the closest point on any world-space edge of `objects`, strictly
/// within `max_distance`.
pub fn snap_to_edge<Q>(
    position: &Point3,
    objects: &[ObjectId],
    scene: &Q,
    max_distance: f64,
) -> Option<SnapCandidate>
where
    Q: SceneQuery + ?Sized,
{
    let mut nearest = Nearest::new(position, max_distance);
    for &id in objects {
        let Some(edges) = resolve(id, scene.world_edges(id)) else {
            continue;
        };
        for (start, end) in edges {
            nearest.offer(closest_point_on_segment(position, &start, &end), id);
        }
    }
    nearest.finish(SnapType::Edge)
}

/// Finds the world-space bounding-box centre closest to `position` among
/// `objects`, strictly within `max_distance`.
pub fn snap_to_center<Q>(
    position: &Point3,
    objects: &[ObjectId],
    scene: &Q,
    max_distance: f64,
) -> Option<SnapCandidate>
where
    Q: SceneQuery + ?Sized,
{
    let mut nearest = Nearest::new(position, max_distance);
    for &id in objects {
        if let Some(Some(bounds)) = resolve(id, scene.world_bounds(id)) {
            nearest.offer(bounds.center(), id);
        }
    }
    nearest.finish(SnapType::Center)
}

/// Drops handles the scene can no longer resolve.
fn resolve<T>(id: ObjectId, result: Result<T, crate::error::SceneError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(?id, %err, "skipping unresolved snap object");
            None
        }
    }
}

/// Running minimum over squared distances to a query point.
struct Nearest<'a> {
    query: &'a Point3,
    best_sq: f64,
    best: Option<(Point3, ObjectId)>,
}

impl<'a> Nearest<'a> {
    fn new(query: &'a Point3, max_distance: f64) -> Self {
        Self {
            query,
            best_sq: max_distance * max_distance,
            best: None,
        }
    }

    fn offer(&mut self, point: Point3, object: ObjectId) {
        let d_sq = distance_squared(self.query, &point);
        if d_sq < self.best_sq {
            self.best_sq = d_sq;
            self.best = Some((point, object));
        }
    }

    fn finish(self, snap_type: SnapType) -> Option<SnapCandidate> {
        let (position, object) = self.best?;
        Some(SnapCandidate {
            position,
            snap_type,
            object: Some(object),
            distance: self.best_sq.sqrt(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Matrix4, Vector3};
    use crate::scene::{SceneObjectData, SceneStore};
    use approx::assert_relative_eq;

    fn store_with(objects: Vec<SceneObjectData>) -> (SceneStore, Vec<ObjectId>) {
        let mut store = SceneStore::new();
        let ids = objects
            .into_iter()
            .map(|o| store.add_object(o).unwrap())
            .collect();
        (store, ids)
    }

    fn box_corners(min: f64, max: f64) -> SceneObjectData {
        let mut verts = Vec::new();
        for x in [min, max] {
            for y in [min, max] {
                for z in [min, max] {
                    verts.push(Point3::new(x, y, z));
                }
            }
        }
        SceneObjectData::new(verts)
    }

    // ── grid ──

    #[test]
    fn grid_rounds_each_axis() {
        let p = snap_to_grid(&Point3::new(1.3, 2.6, -0.4), 1.0);
        assert_eq!(p, Point3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn grid_with_fractional_spacing() {
        let p = snap_to_grid(&Point3::new(0.26, -0.74, 1.0), 0.5);
        assert_relative_eq!(p, Point3::new(0.5, -0.5, 1.0));
    }

    #[test]
    fn grid_invalid_spacing_is_identity() {
        let p = Point3::new(1.3, 2.6, -0.4);
        assert_eq!(snap_to_grid(&p, 0.0), p);
        assert_eq!(snap_to_grid(&p, -2.0), p);
    }

    // ── vertex ──

    #[test]
    fn vertex_within_threshold() {
        let (store, ids) = store_with(vec![SceneObjectData::new(vec![
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(0.3, 0.0, 0.0),
        ])]);
        let c = snap_to_vertex(&Point3::origin(), &ids, &store, 0.5).unwrap();
        assert_eq!(c.snap_type, SnapType::Vertex);
        assert_eq!(c.object, Some(ids[0]));
        assert_relative_eq!(c.position, Point3::new(0.3, 0.0, 0.0));
        assert_relative_eq!(c.distance, 0.3, max_relative = 1e-12);
    }

    #[test]
    fn vertex_outside_threshold() {
        let (store, ids) = store_with(vec![SceneObjectData::new(vec![Point3::new(0.3, 0.0, 0.0)])]);
        assert!(snap_to_vertex(&Point3::origin(), &ids, &store, 0.2).is_none());
    }

    #[test]
    fn vertex_at_exact_threshold_is_rejected() {
        let (store, ids) = store_with(vec![SceneObjectData::new(vec![Point3::new(0.5, 0.0, 0.0)])]);
        assert!(snap_to_vertex(&Point3::origin(), &ids, &store, 0.5).is_none());
    }

    #[test]
    fn vertex_tie_keeps_first_object() {
        let (store, ids) = store_with(vec![
            SceneObjectData::new(vec![Point3::new(0.0, 0.2, 0.0)]),
            SceneObjectData::new(vec![Point3::new(0.2, 0.0, 0.0)]),
        ]);
        let c = snap_to_vertex(&Point3::origin(), &ids, &store, 1.0).unwrap();
        assert_eq!(c.object, Some(ids[0]));
    }

    #[test]
    fn vertex_uses_world_space() {
        let (store, ids) = store_with(vec![SceneObjectData::new(vec![Point3::origin()])
            .with_transform(Matrix4::new_translation(&Vector3::new(10.0, 0.0, 0.0)))]);
        assert!(snap_to_vertex(&Point3::origin(), &ids, &store, 1.0).is_none());
        let c = snap_to_vertex(&Point3::new(9.9, 0.0, 0.0), &ids, &store, 1.0).unwrap();
        assert_relative_eq!(c.position, Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn vertex_skips_removed_objects() {
        let (mut store, ids) = store_with(vec![
            SceneObjectData::new(vec![Point3::new(0.1, 0.0, 0.0)]),
            SceneObjectData::new(vec![Point3::new(0.4, 0.0, 0.0)]),
        ]);
        store.remove_object(ids[0]);
        let c = snap_to_vertex(&Point3::origin(), &ids, &store, 1.0).unwrap();
        assert_eq!(c.object, Some(ids[1]));
    }

    // ── edge ──

    #[test]
    fn edge_projects_onto_segment() {
        let (store, ids) = store_with(vec![SceneObjectData::new(vec![
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ])
        .with_edges(vec![[0, 1]])
        .unwrap()]);
        let c = snap_to_edge(&Point3::new(0.25, 0.1, 0.0), &ids, &store, 0.5).unwrap();
        assert_eq!(c.snap_type, SnapType::Edge);
        assert_relative_eq!(c.position, Point3::new(0.25, 0.0, 0.0));
        assert_relative_eq!(c.distance, 0.1, max_relative = 1e-12);
    }

    #[test]
    fn edge_without_edges_is_none() {
        let (store, ids) = store_with(vec![box_corners(0.0, 1.0)]);
        assert!(snap_to_edge(&Point3::new(0.0, 0.0, 0.01), &ids, &store, 1.0).is_none());
    }

    // ── center ──

    #[test]
    fn center_of_bounding_box() {
        let (store, ids) = store_with(vec![box_corners(0.0, 2.0), box_corners(10.0, 12.0)]);
        let c = snap_to_center(&Point3::new(1.1, 1.0, 0.9), &ids, &store, 0.5).unwrap();
        assert_eq!(c.snap_type, SnapType::Center);
        assert_eq!(c.object, Some(ids[0]));
        assert_relative_eq!(c.position, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn center_ignores_empty_objects() {
        let (store, ids) = store_with(vec![SceneObjectData::new(Vec::new())]);
        assert!(snap_to_center(&Point3::origin(), &ids, &store, 100.0).is_none());
    }
}
