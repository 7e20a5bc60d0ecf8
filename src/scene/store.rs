use slotmap::SlotMap;

use super::{ObjectId, SceneObjectData, SceneQuery};
use crate::error::SceneError;
use crate::math::{transform_point, Matrix4, Point3};

/// Arena that owns scene objects and resolves their world-space geometry.
///
/// Objects reference their parent via [`ObjectId`] (a generational index),
/// so a removed parent never aliases a newer object.
#[derive(Debug, Default)]
pub struct SceneStore {
    objects: SlotMap<ObjectId, SceneObjectData>,
}

impl SceneStore {
    /// Creates a new, empty scene store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the object's parent is not in the store.
    pub fn add_object(&mut self, data: SceneObjectData) -> Result<ObjectId, SceneError> {
        if let Some(parent) = data.parent() {
            self.object(parent)?;
        }
        Ok(self.objects.insert(data))
    }

    /// Removes an object, returning its data if it was present.
    ///
    /// Children of the removed object stay in the store but no longer
    /// resolve to world space.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObjectData> {
        self.objects.remove(id)
    }

    /// Returns a reference to the object data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn object(&self, id: ObjectId) -> Result<&SceneObjectData, SceneError> {
        self.objects
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("scene object".into()))
    }

    /// Replaces the model-to-parent transform of an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn set_transform(&mut self, id: ObjectId, transform: Matrix4) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("scene object".into()))?;
        object.transform = transform;
        Ok(())
    }

    /// Iterates over all object IDs.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys()
    }

    /// Number of objects in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Model-to-world transform: the object's transform composed with every
    /// ancestor's.
    ///
    /// # Errors
    ///
    /// Returns an error if the object or any ancestor is missing.
    pub fn world_transform(&self, id: ObjectId) -> Result<Matrix4, SceneError> {
        let mut object = self.object(id)?;
        let mut matrix = object.transform;
        while let Some(parent) = object.parent() {
            object = self.object(parent)?;
            matrix = object.transform * matrix;
        }
        Ok(matrix)
    }
}

impl SceneQuery for SceneStore {
    fn world_vertices(&self, id: ObjectId) -> Result<Vec<Point3>, SceneError> {
        let matrix = self.world_transform(id)?;
        let object = self.object(id)?;
        Ok(object
            .vertices()
            .iter()
            .map(|p| transform_point(&matrix, p))
            .collect())
    }

    fn world_edges(&self, id: ObjectId) -> Result<Vec<(Point3, Point3)>, SceneError> {
        let vertices = self.world_vertices(id)?;
        let object = self.object(id)?;
        // Indices were validated against the vertex count on construction.
        Ok(object
            .edges()
            .iter()
            .map(|&[a, b]| (vertices[a], vertices[b]))
            .collect())
    }
}
