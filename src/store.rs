//! Freehand element store.
//!
//! Shapes drawn by direct pointer input, independent of the commander
//! history but rendered in the same pass. A shape is created degenerate on
//! pointer-down, its second endpoint is replaced on every pointer-move while
//! the draw gesture is active (regenerating the render descriptor each
//! time), and it is frozen on pointer-up. Shapes are never deleted by any
//! engine path; `remove` exists for completeness of the contract.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::INK_COLOR;
use crate::error::SketchError;
use crate::render::{self, Sketch};
use crate::viewport::Point;

/// Unique identifier for a freehand element.
pub type ShapeId = Uuid;

/// The primitive kind of a freehand element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Straight line segment between the two endpoints.
    Line,
    /// Axis-aligned rectangle with the endpoints as opposite corners.
    Rect,
}

/// A freehand element: two endpoints in world coordinates plus the
/// precomputed render descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ShapeId,
    pub kind: ElementKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Regenerated on every endpoint mutation.
    pub sketch: Sketch,
}

/// Append/update list of freehand elements, with at most one active shape.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
    active: Option<ShapeId>,
}

impl ElementStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a degenerate shape (both endpoints equal) of the requested
    /// kind and make it the active shape.
    pub fn begin(&mut self, kind: ElementKind, point: Point) -> ShapeId {
        let id = Uuid::new_v4();
        self.elements.push(Element {
            id,
            kind,
            x1: point.x,
            y1: point.y,
            x2: point.x,
            y2: point.y,
            sketch: render::sketch_element(kind, point.x, point.y, point.x, point.y, INK_COLOR),
        });
        self.active = Some(id);
        id
    }

    /// Replace the active shape's second endpoint and regenerate its
    /// descriptor.
    ///
    /// # Errors
    ///
    /// [`SketchError::NoActiveShape`] if no draw gesture is in progress.
    pub fn extend(&mut self, point: Point) -> Result<(), SketchError> {
        let Some(id) = self.active else {
            return Err(SketchError::NoActiveShape);
        };
        let Some(element) = self.elements.iter_mut().rfind(|e| e.id == id) else {
            return Err(SketchError::NoActiveShape);
        };
        element.x2 = point.x;
        element.y2 = point.y;
        element.sketch =
            render::sketch_element(element.kind, element.x1, element.y1, element.x2, element.y2, INK_COLOR);
        Ok(())
    }

    /// Deactivate the active shape; it remains in the store permanently.
    ///
    /// # Errors
    ///
    /// [`SketchError::NoActiveShape`] if no draw gesture is in progress.
    pub fn end(&mut self) -> Result<ShapeId, SketchError> {
        match self.active.take() {
            Some(id) => Ok(id),
            None => Err(SketchError::NoActiveShape),
        }
    }

    /// Remove an element by identity, returning it if it was present.
    ///
    /// No engine path calls this; the contract exists for completeness.
    pub fn remove(&mut self, id: ShapeId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(self.elements.remove(index))
    }

    /// All elements in creation order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Id of the shape currently being drawn, if any.
    #[must_use]
    pub fn active(&self) -> Option<ShapeId> {
        self.active
    }

    /// Number of elements in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
