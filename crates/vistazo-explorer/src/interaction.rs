//! Hover state and the transitions pointer events drive through it.
//!
//! The state is a plain value; transitions mutate it and nothing else.
//! Drawing consequences are derived from it afterwards, so a transition
//! can never leave the screen half-updated.

use crate::config::IndicatorKey;
use crate::hittest::ScatterHit;
use crate::store::{EntityId, EntityStore};
use log::debug;
use vistazo_core::Point;

/// Everything the hover interaction remembers between events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    /// Entity the panel describes, if any
    pub active_entity: Option<EntityId>,
    /// All entities under the last scatter hit, store order
    pub contained: Vec<EntityId>,
    /// Indicator driving the color scale, if any
    pub active_indicator: Option<IndicatorKey>,
    /// Whether the tooltip is shown
    pub tooltip_visible: bool,
    /// Surface-space anchor the tooltip was last placed at
    pub tooltip_anchor: Point,
    /// (min, max) of the active indicator, cached at activation
    pub color_scale: Option<(f64, f64)>,
}

impl InteractionState {
    /// Fresh state: nothing selected, tooltip hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer move over the scatter plot.
    ///
    /// A hit selects the primary entity, anchors the tooltip, and drops
    /// any indicator coloring. A miss deselects and hides the tooltip but
    /// leaves indicator coloring alone.
    pub fn on_scatter_move(&mut self, hit: Option<ScatterHit>, anchor: Point) {
        match hit {
            Some(hit) => {
                debug!(
                    "scatter hit: primary={:?} contained={}",
                    hit.primary,
                    hit.contained.len()
                );
                self.active_entity = Some(hit.primary);
                self.contained = hit.contained;
                self.tooltip_visible = true;
                self.tooltip_anchor = anchor;
                self.active_indicator = None;
                self.color_scale = None;
            }
            None => {
                self.active_entity = None;
                self.contained.clear();
                self.tooltip_visible = false;
            }
        }
    }

    /// Apply a pointer move over the side panel.
    ///
    /// Entering a band activates its indicator and caches the scale
    /// bounds; leaving all bands deactivates coloring. The tooltip is
    /// untouched either way.
    pub fn on_panel_move(&mut self, region: Option<IndicatorKey>, store: &EntityStore) {
        match region {
            Some(key) => {
                if self.active_indicator != Some(key) {
                    debug!("indicator activated: {key}");
                }
                self.active_indicator = Some(key);
                self.color_scale = store.indicator_range(key);
            }
            None => {
                self.active_indicator = None;
                self.color_scale = None;
            }
        }
    }

    /// The pointer left the window entirely. Everything resets.
    pub fn on_leave(&mut self) {
        debug!("pointer left, clearing hover state");
        *self = Self::default();
    }
}

/// Render an indicator value in a fixed seven-character field so the
/// panel labels never shift as the selection changes. Non-finite values
/// render as a dashed placeholder of the same width.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        " --.---".to_string()
    } else if value < 0.0 {
        format!("-{:06.3}", -value)
    } else {
        format!(" {value:06.3}")
    }
}
