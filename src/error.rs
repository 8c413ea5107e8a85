//! Recoverable engine errors.
//!
//! Every condition here is reported to the caller and never fatal; the
//! operation that raised it leaves all engine state unchanged. There is no
//! corruption-recovery path because nothing is persisted — a dropped engine
//! simply drops its in-memory state.

/// Error returned by engine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SketchError {
    /// Undo requested while the identity snapshot is already active.
    #[error("already at the start of command history")]
    AtHistoryStart,
    /// Redo requested while the most recent snapshot is already active.
    #[error("already at the end of command history")]
    AtHistoryEnd,
    /// A zoom step was requested while the scale is pinned at a bound.
    #[error("zoom rejected: requested scale {requested} is outside the permitted range")]
    DegenerateZoom {
        /// The scale the step would have produced before clamping.
        requested: f64,
    },
    /// Extend or end was called with no shape being drawn.
    #[error("no shape is being drawn")]
    NoActiveShape,
}
