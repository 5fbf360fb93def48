//! Input model: tools, editable fields, gesture events, and UI state.
//!
//! This module defines the closed set of user gestures the host can feed to
//! the engine, plus the persistent UI state (active tool, selection) those
//! gestures act on. Every gesture carries only the minimal payload its
//! handler needs; everything else is read from current state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::doc::{PartialShape, ShapeId, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place a rectangle.
    Rectangle,
    /// Place an ellipse.
    Ellipse,
    /// Place a text label.
    Text,
}

/// A tool id string was not one of the known tools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool id: {0}")]
pub struct ParseToolError(pub String);

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Rectangle, Tool::Ellipse, Tool::Text];

    /// Stable string id, as carried in gesture payloads.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Text => "text",
        }
    }

    /// Human-readable toolbar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Text => "Text",
        }
    }

    /// The kind of shape this tool places, or `None` for the select tool.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Ellipse => Some(ShapeKind::Ellipse),
            Self::Text => Some(ShapeKind::Text),
        }
    }
}

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| ParseToolError(s.to_owned()))
    }
}

/// A numeric shape field editable from the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Left edge.
    X,
    /// Top edge.
    Y,
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Field {
    /// A sparse update setting just this field.
    #[must_use]
    pub fn to_partial(self, value: f64) -> PartialShape {
        let mut partial = PartialShape::default();
        match self {
            Self::X => partial.x = Some(value),
            Self::Y => partial.y = Some(value),
            Self::Width => partial.width = Some(value),
            Self::Height => partial.height = Some(value),
        }
        partial
    }
}

/// A user gesture, as translated by the host from raw UI events.
///
/// This is the complete input surface; no other gestures exist.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// A toolbar button was clicked. Non-select tools place one shape and
    /// auto-revert to [`Tool::Select`].
    ToolButton(Tool),
    /// A shape on the canvas was clicked. The host must stop propagation so
    /// the same click does not also arrive as [`Gesture::CanvasClick`].
    ShapeClick(ShapeId),
    /// The canvas background was clicked (no shape hit).
    CanvasClick,
    /// A numeric property field changed for the selected shape.
    FieldEdit {
        /// Which field changed.
        field: Field,
        /// The new value, as entered.
        value: f64,
    },
    /// The fill color changed for the selected shape.
    FillEdit(String),
    /// The text content changed for the selected (text) shape.
    TextEdit(String),
    /// The delete button was clicked.
    DeleteButton,
    /// The zoom − button was clicked.
    ZoomOut,
    /// The zoom + button was clicked.
    ZoomIn,
}

/// Persistent UI state visible to the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the currently selected shape, if any. Never dangling: the
    /// engine clears it when the referenced shape is deleted.
    pub selected_id: Option<ShapeId>,
}
