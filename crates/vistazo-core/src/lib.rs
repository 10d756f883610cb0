//! Core types and traits for the Vistazo explorer.
//!
//! This crate provides the foundational types used throughout Vistazo:
//! - Geometric primitives: [`Point`], [`Rect`], [`Polygon`]
//! - Color representation: [`Color`] and the min/max [`ColorScale`]
//! - Pointer events: [`PointerEvent`], [`SurfaceKind`]
//! - The rendering boundary: [`Surface`], [`SurfaceOp`], [`RecordingSurface`]

mod color;
mod event;
mod geometry;
mod surface;

pub use color::{Color, ColorParseError, ColorScale};
pub use event::{PointerEvent, SurfaceKind};
pub use geometry::{Point, Polygon, Rect};
pub use surface::{ElementId, RecordingSurface, RenderFault, SlotId, Surface, SurfaceOp};
