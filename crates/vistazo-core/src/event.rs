//! Pointer events consumed by the interaction loop.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Which logical surface a pointer position falls in.
///
/// The host environment classifies positions before delivering events; the
/// core never re-derives this from raw window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// The scatter-plot surface
    Scatter,
    /// The side-panel surface
    Panel,
    /// Neither surface (still inside the scene)
    Outside,
}

/// A pointer event delivered by the host environment.
///
/// Events arrive serially; each is handled to completion before the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer moved to a position on a logical surface
    Move {
        /// Surface the position falls in
        surface: SurfaceKind,
        /// Position in that surface's coordinate space
        position: Point,
    },
    /// Pointer left the entire scene
    Leave,
}
