//! Shared defaults for the sketchboard crate.

// ── Spawn placement ─────────────────────────────────────────────

/// Left/top edge of the band new shapes spawn in, in canvas units.
pub const SPAWN_ORIGIN: f64 = 200.0;

/// Extent of the random spawn band along each axis.
pub const SPAWN_BAND: f64 = 100.0;

// ── Default extents ─────────────────────────────────────────────

/// Default width and height for new rectangles and ellipses.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

/// Default width for new text shapes.
pub const DEFAULT_TEXT_WIDTH: f64 = 150.0;

/// Default height for new text shapes.
pub const DEFAULT_TEXT_HEIGHT: f64 = 30.0;

// ── Default styling ─────────────────────────────────────────────

/// Fill for new text shapes (rendered as the glyph color by the host).
pub const DEFAULT_TEXT_FILL: &str = "#000";

/// Content of a freshly created text shape.
pub const DEFAULT_TEXT: &str = "New text";

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum display zoom, in percent.
pub const ZOOM_MIN: i32 = 25;

/// Maximum display zoom, in percent.
pub const ZOOM_MAX: i32 = 200;

/// Zoom change per −/+ button press, in percent.
pub const ZOOM_STEP: i32 = 25;

/// Zoom at the start of an editing session.
pub const ZOOM_DEFAULT: i32 = 100;
