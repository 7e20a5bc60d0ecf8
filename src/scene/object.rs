use crate::error::SceneError;
use crate::math::{Matrix4, Point3};

slotmap::new_key_type! {
    /// Handle to an object in a [`SceneStore`](super::SceneStore).
    ///
    /// Handles are lookup keys only; holding one does not keep the object
    /// alive.
    pub struct ObjectId;
}

/// Geometry and placement of a scene object.
#[derive(Debug, Clone)]
pub struct SceneObjectData {
    vertices: Vec<Point3>,
    edges: Vec<[usize; 2]>,
    /// Model-to-parent transform.
    pub transform: Matrix4,
    parent: Option<ObjectId>,
}

impl SceneObjectData {
    /// Creates an object from model-space vertices with an identity
    /// transform and no edges.
    #[must_use]
    pub fn new(vertices: Vec<Point3>) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
            transform: Matrix4::identity(),
            parent: None,
        }
    }

    /// Sets the edges as pairs of vertex indices.
    ///
    /// # Errors
    ///
    /// Returns an error if an index does not name a vertex.
    pub fn with_edges(mut self, edges: Vec<[usize; 2]>) -> Result<Self, SceneError> {
        let count = self.vertices.len();
        if let Some(bad) = edges.iter().find(|[a, b]| *a >= count || *b >= count) {
            return Err(SceneError::InvalidGeometry(format!(
                "edge {bad:?} references a vertex outside 0..{count}"
            )));
        }
        self.edges = edges;
        Ok(self)
    }

    /// Sets the model-to-parent transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }

    /// Places the object under `parent`; its transform becomes relative to
    /// the parent's world transform.
    #[must_use]
    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Model-space vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Edge vertex index pairs.
    #[must_use]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    #[must_use]
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }
}
