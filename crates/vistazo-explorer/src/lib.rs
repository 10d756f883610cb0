//! Interactive two-view data explorer: a scatter plot of entities next
//! to an indicator panel, linked by hover.
//!
//! The crate owns everything between a pointer event and the draw
//! operations it implies. Data loading, windowing, and actual rendering
//! stay outside, behind [`DataTable`] on the way in and the
//! [`Surface`](vistazo_core::Surface) trait on the way out.
//!
//! ```
//! use vistazo_core::{PointerEvent, Point, RecordingSurface, SurfaceKind};
//! use vistazo_explorer::{DataTable, Explorer, ExplorerConfig};
//!
//! let table = DataTable::new()
//!     .with_text_column("Country name", ["Aland"])
//!     .with_column("Healthy life expectancy", [60.0])
//!     .with_column("Freedom to make life choices", [0.5])
//!     .with_column("Logged GDP per capita", [8.0])
//!     .with_column("Social support", [0.7])
//!     .with_column("Generosity", [0.0])
//!     .with_column("Perceptions of corruption", [0.3]);
//!
//! let mut explorer = Explorer::new(&table, ExplorerConfig::default()).unwrap();
//! let mut surface = RecordingSurface::new();
//! explorer.handle_pointer(
//!     &PointerEvent::Move {
//!         surface: SurfaceKind::Scatter,
//!         position: Point::new(60.0, 0.5),
//!     },
//!     &mut surface,
//! );
//! assert!(explorer.state().tooltip_visible);
//! ```

pub mod config;
pub mod error;
pub mod explorer;
pub mod hittest;
pub mod interaction;
pub mod presenter;
pub mod scene;
pub mod store;
pub mod table;

pub use config::{ExplorerConfig, IndicatorKey, IndicatorSpec};
pub use error::{ConfigError, DataError, ExplorerError};
pub use explorer::Explorer;
pub use hittest::{nearest_entity, region_at, ScatterHit};
pub use interaction::{format_value, InteractionState};
pub use presenter::present;
pub use scene::{HotRegion, Scene, NAME_SLOT, TOOLTIP_ELEMENT, TOOLTIP_SLOT};
pub use store::{AxisBounds, Entity, EntityId, EntityStore};
pub use table::DataTable;
