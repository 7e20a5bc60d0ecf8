//! Measurement and snapping geometry for CAD-style editors.
//!
//! - [`math::measure`] computes distances and angles between world-space
//!   points.
//! - [`measurement`] packages those values with their unit and inputs.
//! - [`snap`] moves a cursor position to nearby grid points, vertices, edges
//!   or object centres, reading geometry through [`scene::SceneQuery`].

pub mod error;
pub mod math;
pub mod measurement;
pub mod scene;
pub mod snap;

pub use error::{Result, SnapgeoError};
