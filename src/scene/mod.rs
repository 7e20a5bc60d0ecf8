//! World-space geometry access for snapping.
//!
//! Snap queries read geometry through [`SceneQuery`], borrowing it for the
//! duration of one call. [`SceneStore`] is an in-process implementation
//! backed by a generational arena.

mod object;
mod store;

pub use object::{ObjectId, SceneObjectData};
pub use store::SceneStore;

use crate::error::SceneError;
use crate::math::{Aabb, Point3};

/// Read access to world-space geometry of scene objects.
pub trait SceneQuery {
    /// Returns the object's vertices in world space.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn world_vertices(&self, id: ObjectId) -> Result<Vec<Point3>, SceneError>;

    /// Returns the object's edges as world-space segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn world_edges(&self, id: ObjectId) -> Result<Vec<(Point3, Point3)>, SceneError>;

    /// Returns the world-space bounding box, or `None` for an object with no
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn world_bounds(&self, id: ObjectId) -> Result<Option<Aabb>, SceneError> {
        let vertices = self.world_vertices(id)?;
        Ok(Aabb::from_points(&vertices))
    }
}
