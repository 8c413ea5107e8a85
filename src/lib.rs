//! Drawing-surface engine: an infinite pan/zoom canvas with a turtle commander.
//!
//! This crate owns the full logic of an interactive drawing surface without
//! touching any rendering backend or UI toolkit. The host layer is responsible
//! only for delivering normalized pointer/wheel/key events, forwarding
//! commander input, and providing a [`render::RenderSink`] that can sketch the
//! descriptors this crate produces. Two drawing paths share one coordinate
//! space: freehand shapes drawn by direct pointer input, and line segments
//! produced by turtle-style movement commands with linear undo/redo.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine: event handlers and the render tick |
//! | [`viewport`] | Pan/zoom viewport and screen/world coordinate conversions |
//! | [`history`] | Turtle commander: snapshots, segments, linear undo/redo |
//! | [`store`] | Freehand element store (begin/extend/end/remove) |
//! | [`input`] | Input event types and the pointer gesture state machine |
//! | [`render`] | Frame assembly and sketch descriptor generation |
//! | [`error`] | Closed enum of recoverable engine errors |
//! | [`consts`] | Shared numeric constants (zoom limits, wheel steps, colors) |

pub mod consts;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod render;
pub mod store;
pub mod viewport;
