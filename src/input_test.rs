use std::str::FromStr;

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_all_in_toolbar_order() {
    assert_eq!(Tool::ALL, [Tool::Select, Tool::Rectangle, Tool::Ellipse, Tool::Text]);
}

#[test]
fn tool_ids_and_labels() {
    let cases = [
        (Tool::Select, "select", "Select"),
        (Tool::Rectangle, "rectangle", "Rectangle"),
        (Tool::Ellipse, "ellipse", "Ellipse"),
        (Tool::Text, "text", "Text"),
    ];
    for (tool, id, label) in cases {
        assert_eq!(tool.id(), id);
        assert_eq!(tool.label(), label);
    }
}

#[test]
fn tool_from_str_roundtrips_every_id() {
    for tool in Tool::ALL {
        assert_eq!(Tool::from_str(tool.id()), Ok(tool));
    }
}

#[test]
fn tool_from_str_rejects_unknown_id() {
    let err = Tool::from_str("star").unwrap_err();
    assert_eq!(err, ParseToolError("star".into()));
    assert_eq!(err.to_string(), "unknown tool id: star");
}

#[test]
fn tool_shape_kind_mapping() {
    assert_eq!(Tool::Select.shape_kind(), None);
    assert_eq!(Tool::Rectangle.shape_kind(), Some(ShapeKind::Rectangle));
    assert_eq!(Tool::Ellipse.shape_kind(), Some(ShapeKind::Ellipse));
    assert_eq!(Tool::Text.shape_kind(), Some(ShapeKind::Text));
}

#[test]
fn tool_serde_uses_lowercase_ids() {
    for tool in Tool::ALL {
        let json = serde_json::to_string(&tool).unwrap();
        assert_eq!(json, format!("\"{}\"", tool.id()));
        let back: Tool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tool);
    }
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_to_partial_sets_only_its_field() {
    let cases: [(Field, fn(&PartialShape) -> Option<f64>); 4] = [
        (Field::X, |p| p.x),
        (Field::Y, |p| p.y),
        (Field::Width, |p| p.width),
        (Field::Height, |p| p.height),
    ];
    for (field, getter) in cases {
        let partial = field.to_partial(7.5);
        assert_eq!(getter(&partial), Some(7.5));
        let mut cleared = partial.clone();
        cleared.x = None;
        cleared.y = None;
        cleared.width = None;
        cleared.height = None;
        assert!(cleared.is_empty(), "{field:?} set a non-numeric field");
    }
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
    assert!(ui.selected_id.is_none());
}

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_equality_carries_payload() {
    assert_eq!(Gesture::ShapeClick("1".into()), Gesture::ShapeClick("1".into()));
    assert_ne!(Gesture::ShapeClick("1".into()), Gesture::ShapeClick("2".into()));
    assert_ne!(Gesture::ZoomIn, Gesture::ZoomOut);
    assert_eq!(
        Gesture::FieldEdit { field: Field::X, value: 1.0 },
        Gesture::FieldEdit { field: Field::X, value: 1.0 },
    );
}
