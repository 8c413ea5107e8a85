//! Pan/zoom viewport and coordinate conversions.
//!
//! The viewport maps between screen coordinates (pixels, as delivered by
//! pointer events) and world coordinates (the logical infinite drawing
//! plane). Zoom is anchored on the viewport center: changing the scale never
//! touches the pan offset; instead `scale_offset` is recomputed so the
//! visual center stays fixed. The reverse transform divides by the scale, so
//! the scale is clamped strictly positive before any conversion uses it.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::error::SketchError;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine transform the host pre-applies to its drawing context so shape
/// coordinates can stay in world space: translate, then scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    /// Screen-space translation: `pan * scale - scale_offset`.
    pub translate: Point,
    /// Uniform scale factor.
    pub scale: f64,
}

/// Viewport state for pan/zoom on the infinite drawing plane.
///
/// `pan` is a world-space translation applied before scaling. `scale_offset`
/// is the derived centering correction; it must be recomputed whenever the
/// viewport size or the scale changes, before the next conversion or render
/// pass, otherwise the round-trip law between the two conversions breaks.
#[derive(Debug, Clone)]
pub struct Viewport {
    pan: Point,
    scale: f64,
    scale_offset: Point,
    width: f64,
    height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Point::new(0.0, 0.0),
            scale: 1.0,
            scale_offset: Point::new(0.0, 0.0),
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pan offset in world units.
    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Current zoom factor, always within `[MIN_SCALE, MAX_SCALE]`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current centering correction in screen pixels.
    #[must_use]
    pub fn scale_offset(&self) -> Point {
        self.scale_offset
    }

    /// Viewport size in screen pixels as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Update the viewport pixel size and recompute the centering correction.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.recompute_scale_offset();
    }

    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan.x * self.scale + self.scale_offset.x) / self.scale,
            y: (screen.y - self.pan.y * self.scale + self.scale_offset.y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates.
    ///
    /// Exact algebraic inverse of [`Self::screen_to_world`] for the same
    /// `(pan, scale, scale_offset)` triple.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: (world.x + self.pan.x) * self.scale - self.scale_offset.x,
            y: (world.y + self.pan.y) * self.scale - self.scale_offset.y,
        }
    }

    /// The transform a render sink pre-applies so draw calls stay in world
    /// coordinates: translate by `pan * scale - scale_offset`, then scale.
    #[must_use]
    pub fn frame_transform(&self) -> FrameTransform {
        FrameTransform {
            translate: Point {
                x: self.pan.x * self.scale - self.scale_offset.x,
                y: self.pan.y * self.scale - self.scale_offset.y,
            },
            scale: self.scale,
        }
    }

    /// Drag-pan: content moves with the gesture, so deltas are added.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan.x += delta.x;
        self.pan.y += delta.y;
    }

    /// Wheel-pan: content moves opposite the scroll, so deltas are subtracted.
    pub fn wheel_pan(&mut self, dx: f64, dy: f64) {
        self.pan.x -= dx;
        self.pan.y -= dy;
    }

    /// Apply a zoom step, clamping the scale to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// The pan offset is never touched; the recomputed `scale_offset` keeps
    /// the viewport center fixed instead.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::DegenerateZoom`] when the scale is already
    /// pinned at a bound and the step pushes further out. State is unchanged.
    #[allow(clippy::float_cmp)]
    pub fn zoom(&mut self, delta: f64) -> Result<(), SketchError> {
        let requested = self.scale + delta;
        let clamped = requested.clamp(MIN_SCALE, MAX_SCALE);
        if clamped == self.scale {
            if requested == self.scale {
                return Ok(());
            }
            return Err(SketchError::DegenerateZoom { requested });
        }
        self.scale = clamped;
        self.recompute_scale_offset();
        Ok(())
    }

    /// Recompute the centering correction from the current size and scale.
    ///
    /// A `0x0` viewport (not yet mounted) yields `(0, 0)`.
    fn recompute_scale_offset(&mut self) {
        self.scale_offset = Point {
            x: (self.width * self.scale - self.width) / 2.0,
            y: (self.height * self.scale - self.height) / 2.0,
        };
    }
}
