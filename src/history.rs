//! Turtle commander: snapshots, derived segments, and linear undo/redo.
//!
//! Every commander action captures a full [`Snapshot`] of the logical cursor
//! (position, heading angle, color) plus the count of segments visible under
//! it. Shapes are not duplicated per history entry; coupling `drawings_index`
//! to each snapshot keeps one shared segment list consistent with whichever
//! snapshot is active. History is linear and branch-discarding: issuing a new
//! command from a non-tip cursor permanently drops the redo tail of both
//! lists before appending. Truncation applies uniformly to movement, rotate,
//! and color commands.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLOR;
use crate::error::SketchError;
use crate::render::{self, Sketch};
use crate::viewport::Point;

/// One captured point in command history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cursor position in world coordinates.
    pub coordinates: Point,
    /// Heading in degrees; 0 points up, positive turns counter-clockwise.
    pub angle: f64,
    /// Pen color as a CSS color string.
    pub color: String,
    /// Count of segments visible under this snapshot.
    pub drawings_index: usize,
}

/// A line segment produced by a movement command, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Precomputed render descriptor, generated when the segment is created.
    pub sketch: Sketch,
}

/// A commander command as submitted by the host UI.
///
/// Closed tagged-variant type processed by one exhaustive handler. Direct
/// cursor placement is deliberately not a variant — it bypasses history and
/// is only reachable through [`History::set_coordinates`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Move the cursor forward along its heading, drawing a segment.
    Forward { distance: f64 },
    /// Move the cursor opposite its heading, drawing a segment.
    Backward { distance: f64 },
    /// Turn the cursor without drawing.
    Rotate { degrees: f64 },
    /// Change the pen color for subsequent segments.
    SetColor { color: String },
    /// Step one snapshot back in history.
    Undo,
    /// Step one snapshot forward in history.
    Redo,
}

/// The command history engine.
///
/// Owns the snapshot log and the derived segment list exclusively; render
/// code only reads the live prefix via [`History::visible_segments`].
#[derive(Debug, Clone)]
pub struct History {
    coordinates: Point,
    angle: f64,
    color: String,
    drawings: Vec<Segment>,
    snapshots: Vec<Snapshot>,
    drawings_index: usize,
    instance_index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            coordinates: Point::new(0.0, 0.0),
            angle: 0.0,
            color: DEFAULT_COLOR.to_owned(),
            drawings: Vec::new(),
            // The identity snapshot is the undo terminal; it is never removed.
            snapshots: vec![Snapshot {
                coordinates: Point::new(0.0, 0.0),
                angle: 0.0,
                color: DEFAULT_COLOR.to_owned(),
                drawings_index: 0,
            }],
            drawings_index: 0,
            instance_index: 0,
        }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Current cursor position in world coordinates.
    #[must_use]
    pub fn coordinates(&self) -> Point {
        self.coordinates
    }

    /// Current heading in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current pen color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Index of the active snapshot (the "present").
    #[must_use]
    pub fn instance_index(&self) -> usize {
        self.instance_index
    }

    /// Count of segments visible under the active snapshot.
    #[must_use]
    pub fn drawings_index(&self) -> usize {
        self.drawings_index
    }

    /// All snapshots, oldest first. `snapshots()[0]` is the identity snapshot.
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The segments visible under the active snapshot, in draw order.
    #[must_use]
    pub fn visible_segments(&self) -> &[Segment] {
        &self.drawings[..self.drawings_index]
    }

    /// Whether undo is unavailable (the identity snapshot is active).
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.instance_index == 0
    }

    /// Whether redo is unavailable (the most recent snapshot is active).
    #[must_use]
    pub fn at_tip(&self) -> bool {
        self.instance_index == self.snapshots.len() - 1
    }

    // --- Commands ---

    /// Apply one commander command.
    ///
    /// # Errors
    ///
    /// [`SketchError::AtHistoryStart`] / [`SketchError::AtHistoryEnd`] for
    /// undo/redo at a history boundary; state is unchanged.
    pub fn apply(&mut self, command: Command) -> Result<(), SketchError> {
        match command {
            Command::Forward { distance } => {
                self.advance(distance, self.angle);
                Ok(())
            }
            Command::Backward { distance } => {
                self.advance(distance, self.angle + 180.0);
                Ok(())
            }
            Command::Rotate { degrees } => {
                self.rotate(degrees);
                Ok(())
            }
            Command::SetColor { color } => {
                self.set_color(color);
                Ok(())
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        }
    }

    /// Move the cursor `distance` along its heading, drawing a segment.
    pub fn forward(&mut self, distance: f64) {
        self.advance(distance, self.angle);
    }

    /// Move the cursor `distance` opposite its heading, drawing a segment.
    pub fn backward(&mut self, distance: f64) {
        self.advance(distance, self.angle + 180.0);
    }

    /// Turn the cursor by `degrees` without drawing. Still captures a
    /// snapshot, so the turn participates in undo/redo.
    pub fn rotate(&mut self, degrees: f64) {
        self.truncate_redo_tail();
        self.angle += degrees;
        self.push_snapshot();
    }

    /// Change the pen color for subsequent segments. Captured as a snapshot
    /// so color changes undo like any other command.
    pub fn set_color(&mut self, color: String) {
        self.truncate_redo_tail();
        self.color = color;
        self.push_snapshot();
    }

    /// Restore the previous snapshot.
    ///
    /// # Errors
    ///
    /// [`SketchError::AtHistoryStart`] when the identity snapshot is active.
    pub fn undo(&mut self) -> Result<(), SketchError> {
        if self.at_start() {
            return Err(SketchError::AtHistoryStart);
        }
        self.instance_index -= 1;
        self.restore();
        Ok(())
    }

    /// Restore the next snapshot.
    ///
    /// # Errors
    ///
    /// [`SketchError::AtHistoryEnd`] when the tip snapshot is active.
    pub fn redo(&mut self) -> Result<(), SketchError> {
        if self.at_tip() {
            return Err(SketchError::AtHistoryEnd);
        }
        self.instance_index += 1;
        self.restore();
        Ok(())
    }

    /// Place the cursor directly, without capturing a snapshot.
    ///
    /// One-time initialization only (centering the cursor on mount); not an
    /// undoable user action.
    pub fn set_coordinates(&mut self, point: Point) {
        self.coordinates = point;
    }

    // --- Internals ---

    /// Heading 0 points up: x moves by `-d*sin`, y by `-d*cos`.
    fn advance(&mut self, distance: f64, heading: f64) {
        let rad = heading.to_radians();
        let next = Point::new(
            self.coordinates.x - distance * rad.sin(),
            self.coordinates.y - distance * rad.cos(),
        );
        self.truncate_redo_tail();
        self.drawings.push(Segment {
            from: self.coordinates,
            to: next,
            sketch: render::sketch_line(self.coordinates, next, &self.color),
        });
        self.drawings_index += 1;
        self.coordinates = next;
        self.push_snapshot();
    }

    /// Discard any branch of history past the current cursor. Runs before
    /// every append so a command issued from a non-tip cursor permanently
    /// drops the redo tail of both lists.
    fn truncate_redo_tail(&mut self) {
        self.drawings.truncate(self.drawings_index);
        self.snapshots.truncate(self.instance_index + 1);
    }

    fn push_snapshot(&mut self) {
        self.snapshots.push(Snapshot {
            coordinates: self.coordinates,
            angle: self.angle,
            color: self.color.clone(),
            drawings_index: self.drawings_index,
        });
        self.instance_index += 1;
    }

    fn restore(&mut self) {
        let snapshot = self.snapshots[self.instance_index].clone();
        self.coordinates = snapshot.coordinates;
        self.angle = snapshot.angle;
        self.color = snapshot.color;
        self.drawings_index = snapshot.drawings_index;
    }
}
