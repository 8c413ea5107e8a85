//! Input model: buttons, keys, wheel deltas, and the pointer gesture state
//! machine.
//!
//! The host layer delivers normalized events; these types capture the user's
//! intent at the time of each pointer event. `PointerState` is the active
//! gesture being tracked between pointer-down and pointer-up, carrying the
//! context needed to compute incremental deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::store::{ElementKind, ShapeId};
use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (code 0) — draw mode.
    Primary,
    /// Middle mouse button (code 1) — pan mode.
    Middle,
    /// Right mouse button (code 2).
    Secondary,
}

impl Button {
    /// Map a browser-style button code to a button, if recognized.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A keyboard key, holding the key name as reported by the host
/// (e.g. `" "`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the space key, which latches pan mode while held.
    #[must_use]
    pub fn is_pan_modifier(&self) -> bool {
        self.0 == " "
    }
}

/// Wheel / trackpad scroll delta in pixels.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount.
    pub dx: f64,
    /// Vertical scroll amount (positive = down).
    pub dy: f64,
}

/// Persistent UI state outside any single gesture.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Primitive drawn by the next draw gesture.
    pub tool: ElementKind,
    /// Space key is held, selecting pan mode for primary-button drags.
    pub space_held: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: ElementKind::Line, space_held: false }
    }
}

/// The pointer gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum PointerState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the viewport by dragging.
    Panning {
        /// Screen position of the previous pointer event, used to compute
        /// the pan delta.
        last_screen: Point,
    },
    /// The user is drawing a shape; pointer moves extend its second endpoint.
    Drawing {
        /// Id of the provisional shape being sized.
        id: ShapeId,
    },
}
