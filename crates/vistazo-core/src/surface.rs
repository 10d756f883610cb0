//! The rendering-surface boundary.
//!
//! The explorer never draws pixels itself: it talks to a [`Surface`]
//! supplied by the host environment. All rendering reduces to the
//! directives in [`SurfaceOp`].

use crate::color::Color;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a text slot owned by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u16);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// Identifier for a visibility-toggleable element owned by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u16);

impl ElementId {
    /// Create a new element ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// A draw call was rejected by the surface.
///
/// Render faults are per-frame: the interaction loop logs them and skips
/// the frame, and the next pointer event is processed normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFault {
    /// The surface has no text slot with this ID.
    #[error("unknown text slot {0:?}")]
    UnknownSlot(SlotId),
    /// The surface has no element with this ID.
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),
    /// Backend-specific failure.
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Drawing directive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceOp {
    /// Draw the scatter points with per-point colors
    Scatter {
        /// Point positions in data space
        points: Vec<Point>,
        /// One color per point
        colors: Vec<Color>,
    },
    /// Set the text of a slot
    Text {
        /// Target slot
        slot: SlotId,
        /// Text content
        content: String,
        /// Text color
        color: Color,
        /// Anchor position in the slot's coordinate space
        position: Point,
    },
    /// Show or hide an element
    Visibility {
        /// Target element
        element: ElementId,
        /// Whether the element is visible
        visible: bool,
    },
    /// Request that the surface repaint
    Redraw,
}

/// Rendering surface consumed by the explorer.
///
/// This is a minimal abstraction over the host's rendering backend. The
/// surface also owns the data-to-pixel transform used for hit testing.
pub trait Surface {
    /// Draw the scatter points, one color per point.
    fn draw_scatter(&mut self, points: &[Point], colors: &[Color]) -> Result<(), RenderFault>;

    /// Set the text of a slot.
    fn draw_text(
        &mut self,
        slot: SlotId,
        text: &str,
        color: Color,
        position: Point,
    ) -> Result<(), RenderFault>;

    /// Show or hide an element.
    fn set_visibility(&mut self, element: ElementId, visible: bool) -> Result<(), RenderFault>;

    /// Request a repaint after the current frame's directives are applied.
    fn request_redraw(&mut self);

    /// Transform a data-space point into the surface's pixel space.
    fn to_surface_space(&self, point: Point) -> Point;

    /// Transform a surface-space point back into data space.
    fn from_surface_space(&self, point: Point) -> Point;
}

/// A [`Surface`] implementation that records directives as [`SurfaceOp`]s.
///
/// This is useful for:
/// - Testing (verify what was presented)
/// - Serialization (ship directives to a remote renderer)
/// - Diffing (compare frame outputs)
///
/// The recording surface uses an identity data-to-pixel transform, so
/// surface space and data space coincide in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded directives.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Take ownership of the recorded directives, clearing the surface.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Get the number of recorded directives.
    #[must_use]
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Check if no directives have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Clear all recorded directives.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_scatter(&mut self, points: &[Point], colors: &[Color]) -> Result<(), RenderFault> {
        self.ops.push(SurfaceOp::Scatter {
            points: points.to_vec(),
            colors: colors.to_vec(),
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        slot: SlotId,
        text: &str,
        color: Color,
        position: Point,
    ) -> Result<(), RenderFault> {
        self.ops.push(SurfaceOp::Text {
            slot,
            content: text.to_string(),
            color,
            position,
        });
        Ok(())
    }

    fn set_visibility(&mut self, element: ElementId, visible: bool) -> Result<(), RenderFault> {
        self.ops.push(SurfaceOp::Visibility { element, visible });
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.ops.push(SurfaceOp::Redraw);
    }

    fn to_surface_space(&self, point: Point) -> Point {
        point
    }

    fn from_surface_space(&self, point: Point) -> Point {
        point
    }
}
