//! Shape-store core for a single-screen design-tool mockup.
//!
//! This crate owns the document and interaction state of a toy design
//! canvas: an ordered list of shapes (rectangle, ellipse, text), a single
//! selection, the active tool, and a display-only zoom percent. A host
//! presentation layer feeds it user gestures and renders the resulting
//! state; this crate prescribes the values, never the pixels. All
//! operations are synchronous, total, and run on one thread.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: the operation contract and gesture dispatch |
//! | [`doc`] | Shape types, sparse updates, and the ordered shape store |
//! | [`input`] | Tools, gesture events, and persistent UI state |
//! | [`zoom`] | Clamped display zoom percent |
//! | [`view`] | Derived display values for the presentation layer |
//! | [`rng`] | Injected randomness source for spawn placement and fill hue |
//! | [`consts`] | Shared defaults (spawn band, default sizes, zoom limits) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod rng;
pub mod view;
pub mod zoom;
