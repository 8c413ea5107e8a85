//! Frame assembly and sketch descriptor generation.
//!
//! The rendering backend is an external collaborator: this crate never draws
//! pixels. Instead every shape carries a precomputed [`Sketch`] descriptor,
//! regenerated once per shape mutation, and [`draw_frame`] replays the full
//! scene through the host's [`RenderSink`]. Drawing a frame is a pure
//! function of `(viewport, elements, history)` — it reads state and produces
//! sink calls, nothing else.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::history::History;
use crate::store::{Element, ElementKind};
use crate::viewport::{FrameTransform, Point, Viewport};

/// Opaque precomputed sketch descriptor for one shape.
///
/// Generated once per shape mutation; the sink consumes it verbatim. All
/// coordinates are in world space — the sink applies the frame transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    /// Polyline strokes making up the shape.
    pub strokes: Vec<(Point, Point)>,
    /// Stroke color as a CSS color string.
    pub color: String,
}

/// The host's drawing capability.
///
/// [`draw_frame`] calls `clear` first, then `set_transform`, then `sketch`
/// once per visible shape in draw order.
pub trait RenderSink {
    /// Clear the full viewport.
    fn clear(&mut self);
    /// Pre-apply the viewport transform to the drawing context.
    fn set_transform(&mut self, transform: FrameTransform);
    /// Draw one precomputed shape descriptor.
    fn sketch(&mut self, sketch: &Sketch);
}

/// Build the descriptor for a single line segment.
#[must_use]
pub fn sketch_line(from: Point, to: Point, color: &str) -> Sketch {
    Sketch { strokes: vec![(from, to)], color: color.to_owned() }
}

/// Build the descriptor for a freehand element from its endpoints.
///
/// A line is one stroke; a rectangle is the four edges of the box whose
/// opposite corners are the endpoints.
#[must_use]
pub fn sketch_element(kind: ElementKind, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> Sketch {
    let strokes = match kind {
        ElementKind::Line => vec![(Point::new(x1, y1), Point::new(x2, y2))],
        ElementKind::Rect => {
            let tl = Point::new(x1, y1);
            let tr = Point::new(x2, y1);
            let br = Point::new(x2, y2);
            let bl = Point::new(x1, y2);
            vec![(tl, tr), (tr, br), (br, bl), (bl, tl)]
        }
    };
    Sketch { strokes, color: color.to_owned() }
}

/// Draw the full scene: freehand elements, then the live history prefix.
///
/// Clears the sink, applies the current viewport transform, and replays
/// every visible shape. Must observe a fully-settled store/viewport state —
/// the engine guarantees each mutation completes before the next tick.
pub fn draw_frame(sink: &mut dyn RenderSink, viewport: &Viewport, elements: &[Element], history: &History) {
    sink.clear();
    sink.set_transform(viewport.frame_transform());
    for element in elements {
        sink.sketch(&element.sketch);
    }
    for segment in history.visible_segments() {
        sink.sketch(&segment.sketch);
    }
}
