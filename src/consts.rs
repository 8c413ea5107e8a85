//! Shared numeric constants for the sketchboard crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest permitted zoom factor. The viewport scale never reaches zero;
/// `screen_to_world` divides by it.
pub const MIN_SCALE: f64 = 0.1;

/// Largest permitted zoom factor.
pub const MAX_SCALE: f64 = 20.0;

/// Scale delta applied per wheel pixel when zooming with the modifier held.
pub const ZOOM_WHEEL_STEP: f64 = 0.01;

// ── Colors ──────────────────────────────────────────────────────

/// Default pen color for the commander cursor.
pub const DEFAULT_COLOR: &str = "black";

/// Ink color for freehand elements.
pub const INK_COLOR: &str = "black";
