//! Derived display values for the presentation layer.
//!
//! The host renders from data, not from callbacks: after processing a
//! gesture it takes a [`DocumentView`] snapshot and draws it. Nothing here
//! is stored — every value is recomputed from engine state on demand, so
//! the display can never drift from the document.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;

use crate::doc::{Shape, ShapeId, ShapeKind};
use crate::engine::EngineCore;
use crate::input::Tool;

/// One shape as the host should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeView {
    /// Shape id, for click-to-select payloads.
    pub id: ShapeId,
    /// Shape kind.
    pub kind: ShapeKind,
    /// Left edge in canvas units.
    pub x: f64,
    /// Top edge in canvas units.
    pub y: f64,
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
    /// Fill color. For text shapes the host renders this as the glyph
    /// color, not a background.
    pub fill: String,
    /// Text content, for text shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether this shape is the current selection (drawn with a
    /// highlighted border).
    pub selected: bool,
}

impl ShapeView {
    fn of(shape: &Shape, selected_id: Option<&ShapeId>) -> Self {
        Self {
            id: shape.id.clone(),
            kind: shape.kind,
            x: shape.x,
            y: shape.y,
            width: shape.width,
            height: shape.height,
            fill: shape.fill.clone(),
            text: shape.text.clone(),
            selected: selected_id == Some(&shape.id),
        }
    }
}

/// Snapshot of everything the single-screen UI displays.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    /// Shapes in paint order (first = bottom-most).
    pub shapes: Vec<ShapeView>,
    /// Current selection, if any.
    pub selected_id: Option<ShapeId>,
    /// Active tool, for toolbar highlighting.
    pub tool: Tool,
    /// Display zoom in percent.
    pub zoom_percent: i32,
    /// Footer object-count label, e.g. `"3 objects"`.
    pub object_label: String,
    /// Footer zoom label, e.g. `"100%"`.
    pub zoom_label: String,
}

impl DocumentView {
    /// Snapshot the current engine state.
    #[must_use]
    pub fn of(core: &EngineCore) -> Self {
        let selected_id = core.selection().cloned();
        let shapes = core
            .doc
            .shapes()
            .iter()
            .map(|shape| ShapeView::of(shape, selected_id.as_ref()))
            .collect();
        Self {
            shapes,
            selected_id,
            tool: core.tool(),
            zoom_percent: core.zoom_percent(),
            object_label: format!("{} objects", core.doc.len()),
            zoom_label: core.zoom.label(),
        }
    }

    /// The selected shape's view, if any. This is what the property panel
    /// binds its fields to.
    #[must_use]
    pub fn selected_shape(&self) -> Option<&ShapeView> {
        self.shapes.iter().find(|s| s.selected)
    }
}
