//! The editing engine: document state, the operation contract, and gesture
//! dispatch.
//!
//! `EngineCore` owns everything one editing session holds — the shape store,
//! the UI state (tool + selection), and the display zoom — and funnels every
//! mutation through a small set of total operations. The host feeds it
//! [`Gesture`] values and processes the returned [`Action`]s; between
//! gestures the state is at rest. No operation fails: unknown ids and
//! out-of-range zoom deltas degrade to silent no-ops or clamps.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts;
use crate::doc::{PartialShape, Shape, ShapeId, ShapeKind, ShapeStore};
use crate::input::{Gesture, Tool, UiState};
use crate::rng::{RandomSource, ThreadRandom};
use crate::zoom::Zoom;

/// Actions returned from gesture dispatch for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A shape was created and appended top-most.
    ShapeCreated(Shape),
    /// Fields of an existing shape changed.
    ShapeUpdated {
        /// Id of the updated shape.
        id: ShapeId,
        /// The sparse update that was applied.
        fields: PartialShape,
    },
    /// A shape was removed from the document.
    ShapeDeleted {
        /// Id of the removed shape.
        id: ShapeId,
    },
    /// Visible state changed; the host should redraw.
    RenderNeeded,
}

/// Core engine state for one editing session.
pub struct EngineCore {
    /// The shape document, in paint order.
    pub doc: ShapeStore,
    /// Active tool and selection.
    pub ui: UiState,
    /// Display zoom percent.
    pub zoom: Zoom,
    rng: Box<dyn RandomSource>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_rng(Box::new(ThreadRandom))
    }
}

impl EngineCore {
    /// An empty session using the thread-local randomness source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty session with an injected randomness source.
    #[must_use]
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self { doc: ShapeStore::new(), ui: UiState::default(), zoom: Zoom::default(), rng }
    }

    /// The session every launch starts with: the three-shape demo document,
    /// nothing selected, select tool, 100% zoom.
    #[must_use]
    pub fn demo() -> Self {
        Self { doc: ShapeStore::demo(), ..Self::default() }
    }

    // --- Operations ---

    /// Create a shape of the given kind: fresh id, jittered spawn position,
    /// kind-specific default size and fill. The new shape is appended
    /// (top-most), becomes the selection, and the tool reverts to select.
    /// Returns a copy of the created shape.
    pub fn create_shape(&mut self, kind: ShapeKind) -> Shape {
        let id = self.doc.mint_id();
        let x = consts::SPAWN_ORIGIN + self.rng.unit() * consts::SPAWN_BAND;
        let y = consts::SPAWN_ORIGIN + self.rng.unit() * consts::SPAWN_BAND;
        let (width, height, fill, text) = match kind {
            ShapeKind::Text => (
                consts::DEFAULT_TEXT_WIDTH,
                consts::DEFAULT_TEXT_HEIGHT,
                consts::DEFAULT_TEXT_FILL.to_owned(),
                Some(consts::DEFAULT_TEXT.to_owned()),
            ),
            ShapeKind::Rectangle | ShapeKind::Ellipse => {
                let hue = self.rng.unit() * 360.0;
                (
                    consts::DEFAULT_SHAPE_SIZE,
                    consts::DEFAULT_SHAPE_SIZE,
                    format!("hsl({hue:.0}, 70%, 60%)"),
                    None,
                )
            }
        };
        let shape = Shape { id: id.clone(), kind, x, y, width, height, fill, text };
        self.doc.insert(shape.clone());
        self.ui.selected_id = Some(id);
        self.ui.tool = Tool::Select;
        tracing::debug!(id = %shape.id, kind = ?kind, "shape created");
        shape
    }

    /// Apply a sparse update to the shape with this id. Unmentioned fields
    /// and paint order are untouched. Silent no-op when the id is unknown.
    pub fn update_shape(&mut self, id: &ShapeId, fields: &PartialShape) -> bool {
        let applied = self.doc.apply_partial(id, fields);
        if applied {
            tracing::debug!(%id, "shape updated");
        }
        applied
    }

    /// Remove the selected shape and clear the selection. No-op when
    /// nothing is selected. Returns the removed shape, if any.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.ui.selected_id.take()?;
        let removed = self.doc.remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "shape deleted");
        }
        removed
    }

    /// Set the selection. `Some(id)` takes effect only if the shape exists
    /// (selecting an unknown id is ignored); `None` clears the selection.
    pub fn select(&mut self, id: Option<ShapeId>) {
        match id {
            Some(id) if self.doc.contains(&id) => self.ui.selected_id = Some(id),
            Some(_) => {}
            None => self.ui.selected_id = None,
        }
    }

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Adjust zoom by `delta` percent, clamped. Returns `true` if the zoom
    /// changed.
    pub fn zoom_by(&mut self, delta: i32) -> bool {
        self.zoom.step(delta)
    }

    // --- Gesture dispatch ---

    /// Translate one user gesture into operations. Returns the actions the
    /// host should process; an empty vec means nothing changed.
    pub fn apply_gesture(&mut self, gesture: Gesture) -> Vec<Action> {
        match gesture {
            Gesture::ToolButton(tool) => {
                self.set_tool(tool);
                match tool.shape_kind() {
                    // create_shape selects the new shape and reverts the
                    // tool to select.
                    Some(kind) => {
                        let shape = self.create_shape(kind);
                        vec![Action::ShapeCreated(shape), Action::RenderNeeded]
                    }
                    None => vec![Action::RenderNeeded],
                }
            }
            Gesture::ShapeClick(id) => {
                let before = self.ui.selected_id.clone();
                self.select(Some(id));
                if self.ui.selected_id == before {
                    vec![]
                } else {
                    vec![Action::RenderNeeded]
                }
            }
            Gesture::CanvasClick => {
                if self.ui.selected_id.take().is_some() {
                    vec![Action::RenderNeeded]
                } else {
                    vec![]
                }
            }
            Gesture::FieldEdit { field, value } => self.edit_selected(field.to_partial(value)),
            Gesture::FillEdit(fill) => {
                self.edit_selected(PartialShape { fill: Some(fill), ..PartialShape::default() })
            }
            Gesture::TextEdit(text) => {
                self.edit_selected(PartialShape { text: Some(text), ..PartialShape::default() })
            }
            Gesture::DeleteButton => match self.delete_selected() {
                Some(shape) => vec![Action::ShapeDeleted { id: shape.id }, Action::RenderNeeded],
                None => vec![],
            },
            Gesture::ZoomOut => self.zoom_action(-consts::ZOOM_STEP),
            Gesture::ZoomIn => self.zoom_action(consts::ZOOM_STEP),
        }
    }

    /// Apply a property-panel edit to the current selection. No-op when
    /// nothing is selected.
    fn edit_selected(&mut self, fields: PartialShape) -> Vec<Action> {
        let Some(id) = self.ui.selected_id.clone() else {
            return vec![];
        };
        // Selection is never dangling, so the update always applies.
        self.update_shape(&id, &fields);
        vec![Action::ShapeUpdated { id, fields }, Action::RenderNeeded]
    }

    fn zoom_action(&mut self, delta: i32) -> Vec<Action> {
        if self.zoom_by(delta) {
            vec![Action::RenderNeeded]
        } else {
            vec![]
        }
    }

    // --- Queries ---

    /// The currently selected shape id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&ShapeId> {
        self.ui.selected_id.as_ref()
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.doc.get(id)
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Current display zoom in percent.
    #[must_use]
    pub fn zoom_percent(&self) -> i32 {
        self.zoom.percent()
    }
}
