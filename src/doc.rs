//! Document model: shapes, their properties, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! canvas (`Shape`, `ShapeKind`), a sparse-update type for incremental edits
//! (`PartialShape`), and the store that owns all live shapes in paint order
//! (`ShapeStore`).
//!
//! Mutations flow into this layer from the engine; the host presentation
//! layer reads back through [`crate::view`] to determine what to draw.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Unique identifier for a shape.
///
/// Ids are opaque strings, assigned at creation and immutable thereafter.
/// The store mints them from a monotonic counter (`"1"`, `"2"`, ...).
pub type ShapeId = String;

/// The kind of a shape. Fixed at creation, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Ellipse inscribed within the bounding box.
    Ellipse,
    /// Text label; `Shape::text` carries its content.
    Text,
}

/// A shape as stored in the document and handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Shape kind.
    pub kind: ShapeKind,
    /// Left edge in canvas units (top-left origin).
    pub x: f64,
    /// Top edge in canvas units.
    pub y: f64,
    /// Width in canvas units. No minimum is enforced; zero or negative
    /// extents are representable.
    pub width: f64,
    /// Height in canvas units. Same caveat as `width`.
    pub height: f64,
    /// Fill color as a CSS color string (hex, named, or `hsl(...)`).
    pub fill: String,
    /// Text content; meaningful only when `kind` is [`ShapeKind::Text`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialShape {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// New text content, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PartialShape {
    /// Returns `true` if no field is set; applying it changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.fill.is_none()
            && self.text.is_none()
    }
}

/// In-memory store of shapes.
///
/// Shapes are kept in insertion order, which IS paint order: later entries
/// draw on top of earlier ones.
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: u64,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new(), next_id: 1 }
    }

    /// The document every editing session starts with: a rectangle, an
    /// ellipse, and a greeting text label.
    #[must_use]
    pub fn demo() -> Self {
        let mut store = Self::new();
        store.insert(Shape {
            id: "1".into(),
            kind: ShapeKind::Rectangle,
            x: 100.0,
            y: 100.0,
            width: 200.0,
            height: 150.0,
            fill: "#5B5FC7".into(),
            text: None,
        });
        store.insert(Shape {
            id: "2".into(),
            kind: ShapeKind::Ellipse,
            x: 350.0,
            y: 120.0,
            width: 120.0,
            height: 120.0,
            fill: "#F24E1E".into(),
            text: None,
        });
        store.insert(Shape {
            id: "3".into(),
            kind: ShapeKind::Text,
            x: 150.0,
            y: 300.0,
            width: 200.0,
            height: 40.0,
            fill: consts::DEFAULT_TEXT_FILL.into(),
            text: Some("Hello Figma!".into()),
        });
        store
    }

    /// Mint a fresh id, distinct from every id this store has seen.
    pub fn mint_id(&mut self) -> ShapeId {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    /// Insert a shape at the end of paint order (top-most). If a shape with
    /// the same `id` already exists it is replaced in place, keeping its
    /// paint position.
    ///
    /// Numeric ids advance the minting counter past themselves so later
    /// minted ids never collide.
    pub fn insert(&mut self, shape: Shape) {
        if let Ok(n) = shape.id.parse::<u64>() {
            if n >= self.next_id {
                self.next_id = n + 1;
            }
        }
        match self.shapes.iter_mut().find(|s| s.id == shape.id) {
            Some(existing) => *existing = shape,
            None => self.shapes.push(shape),
        }
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| &s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    /// Whether a shape with this id is present.
    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Apply a sparse update to an existing shape. Fields not present in
    /// `partial` are left unchanged; paint order is untouched. Returns
    /// `false` if no shape has this id.
    pub fn apply_partial(&mut self, id: &ShapeId, partial: &PartialShape) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        if let Some(x) = partial.x {
            shape.x = x;
        }
        if let Some(y) = partial.y {
            shape.y = y;
        }
        if let Some(w) = partial.width {
            shape.width = w;
        }
        if let Some(h) = partial.height {
            shape.height = h;
        }
        if let Some(ref fill) = partial.fill {
            shape.fill = fill.clone();
        }
        if let Some(ref text) = partial.text {
            shape.text = Some(text.clone());
        }
        true
    }

    /// All shapes in paint order (first = bottom-most).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
