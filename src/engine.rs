//! Top-level engine: event handlers and the render tick.
//!
//! All mutation happens synchronously on the calling event; the host's event
//! queue serializes handlers, so no locking is needed. Each handler completes
//! its mutation plus any dependent recompute (e.g. the viewport's centering
//! correction) before returning, so a render pass never observes a
//! half-updated shape. Instead of reactive dependency tracking, mutations
//! mark a dirty flag and the host redraws on its next frame tick via
//! [`Engine::take_render_request`] / [`Engine::render_frame`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::consts::ZOOM_WHEEL_STEP;
use crate::error::SketchError;
use crate::history::{Command, History};
use crate::input::{Button, Key, PointerState, UiState, WheelDelta};
use crate::render::{self, RenderSink};
use crate::store::{ElementKind, ElementStore};
use crate::viewport::{Point, Viewport};

/// Result of an event handler, for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible changed.
    None,
    /// State changed; redraw on the next frame tick.
    RenderNeeded,
    /// A user-visible notice must be surfaced (never a silent failure).
    Notice(Notice),
}

/// User-visible notices raised at history boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Undo requested with nothing left to undo.
    HistoryStart,
    /// Redo requested with nothing left to redo.
    HistoryEnd,
}

/// The drawing-surface engine: viewport, freehand store, commander history,
/// and the pointer gesture state machine, in one explicitly-constructed
/// container. No ambient singletons; the host owns the instance.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    viewport: Viewport,
    store: ElementStore,
    history: History,
    ui: UiState,
    pointer: PointerState,
    dirty: bool,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// The current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The freehand element store.
    #[must_use]
    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    /// Read-only view of the commander history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The primitive drawn by the next draw gesture.
    #[must_use]
    pub fn tool(&self) -> ElementKind {
        self.ui.tool
    }

    // --- Setup ---

    /// Select the primitive for subsequent draw gestures.
    pub fn set_tool(&mut self, tool: ElementKind) {
        self.ui.tool = tool;
    }

    /// One-time mount initialization: place the commander cursor at the
    /// world point under the viewport center. Bypasses history on purpose.
    pub fn center_cursor(&mut self) {
        let (width, height) = self.viewport.size();
        let center = Point::new(width * 0.5, height * 0.5);
        self.history.set_coordinates(self.viewport.screen_to_world(center));
        self.dirty = true;
    }

    // --- Pointer events ---

    /// Handle pointer-down. Middle button or a held space selects pan mode;
    /// the primary button begins a draw gesture at the world point under the
    /// pointer, captured with the transform active at this instant.
    pub fn pointer_down(&mut self, button: Button, screen: Point) -> Action {
        match button {
            Button::Middle => {
                self.pointer = PointerState::Panning { last_screen: screen };
                Action::None
            }
            Button::Primary if self.ui.space_held => {
                self.pointer = PointerState::Panning { last_screen: screen };
                Action::None
            }
            Button::Primary => {
                let world = self.viewport.screen_to_world(screen);
                let id = self.store.begin(self.ui.tool, world);
                debug!(%id, tool = ?self.ui.tool, "draw gesture started");
                self.pointer = PointerState::Drawing { id };
                self.dirty = true;
                Action::RenderNeeded
            }
            Button::Secondary => Action::None,
        }
    }

    /// Handle pointer-move: pan by the screen delta or extend the active
    /// shape in world coordinates.
    pub fn pointer_move(&mut self, screen: Point) -> Action {
        match self.pointer {
            PointerState::Idle => Action::None,
            PointerState::Panning { last_screen } => {
                self.viewport
                    .pan_by(Point::new(screen.x - last_screen.x, screen.y - last_screen.y));
                self.pointer = PointerState::Panning { last_screen: screen };
                self.dirty = true;
                Action::RenderNeeded
            }
            PointerState::Drawing { .. } => {
                let world = self.viewport.screen_to_world(screen);
                match self.store.extend(world) {
                    Ok(()) => {
                        self.dirty = true;
                        Action::RenderNeeded
                    }
                    // Stray move with no active shape is a no-op.
                    Err(_) => Action::None,
                }
            }
        }
    }

    /// Handle pointer-up: freeze the active shape or stop panning.
    pub fn pointer_up(&mut self) -> Action {
        let finished = std::mem::take(&mut self.pointer);
        match finished {
            PointerState::Drawing { id } => {
                match self.store.end() {
                    Ok(done) => debug!(id = %done, "draw gesture finished"),
                    // The shape was already gone; nothing to freeze.
                    Err(_) => debug!(%id, "pointer up with no active shape"),
                }
                Action::None
            }
            PointerState::Panning { .. } | PointerState::Idle => Action::None,
        }
    }

    // --- Wheel / keys / resize ---

    /// Handle a wheel event. With the zoom modifier held the vertical delta
    /// becomes a zoom step; otherwise the deltas wheel-pan the viewport.
    pub fn wheel(&mut self, delta: WheelDelta, zoom_modifier: bool) -> Action {
        if zoom_modifier {
            match self.viewport.zoom(-delta.dy * ZOOM_WHEEL_STEP) {
                Ok(()) => {
                    self.dirty = true;
                    Action::RenderNeeded
                }
                Err(SketchError::DegenerateZoom { requested }) => {
                    debug!(requested, scale = self.viewport.scale(), "zoom pinned at bound");
                    Action::None
                }
                Err(_) => Action::None,
            }
        } else {
            self.viewport.wheel_pan(delta.dx, delta.dy);
            self.dirty = true;
            Action::RenderNeeded
        }
    }

    /// Handle key-down: the space key latches pan mode.
    pub fn key_down(&mut self, key: &Key) -> Action {
        if key.is_pan_modifier() {
            self.ui.space_held = true;
        }
        Action::None
    }

    /// Handle key-up: releasing space leaves pan mode.
    pub fn key_up(&mut self, key: &Key) -> Action {
        if key.is_pan_modifier() {
            self.ui.space_held = false;
        }
        Action::None
    }

    /// Handle a viewport resize. Recomputes the centering correction before
    /// the next conversion or render pass.
    pub fn resize(&mut self, width: f64, height: f64) -> Action {
        self.viewport.resize(width, height);
        self.dirty = true;
        Action::RenderNeeded
    }

    // --- Commander surface ---

    /// Apply one commander command. History boundary errors surface as
    /// user-visible notices, never silent failures.
    pub fn apply(&mut self, command: Command) -> Action {
        debug!(command = ?command, "commander command");
        match self.history.apply(command) {
            Ok(()) => {
                self.dirty = true;
                Action::RenderNeeded
            }
            Err(SketchError::AtHistoryStart) => Action::Notice(Notice::HistoryStart),
            Err(SketchError::AtHistoryEnd) => Action::Notice(Notice::HistoryEnd),
            Err(_) => Action::None,
        }
    }

    /// Commander input box: a submitted distance moves the cursor forward.
    pub fn submit_distance(&mut self, distance: f64) -> Action {
        self.apply(Command::Forward { distance })
    }

    /// Commander undo button.
    pub fn request_undo(&mut self) -> Action {
        self.apply(Command::Undo)
    }

    /// Commander redo button.
    pub fn request_redo(&mut self) -> Action {
        self.apply(Command::Redo)
    }

    // --- Render tick ---

    /// Take the dirty flag. The host calls this on its frame tick and
    /// renders when it returns `true`.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Draw the full scene through the host's sink and clear the dirty flag.
    pub fn render_frame(&mut self, sink: &mut dyn RenderSink) {
        render::draw_frame(sink, &self.viewport, self.store.elements(), &self.history);
        self.dirty = false;
    }
}
