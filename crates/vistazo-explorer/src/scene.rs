//! Static scene model: scatter positions, panel layout, slot mapping.
//!
//! Built once after the store loads and never mutated afterwards. Every
//! pointer frame reads from it; nothing writes to it.

use crate::config::{ExplorerConfig, IndicatorKey};
use crate::store::EntityStore;
use serde::{Deserialize, Serialize};
use vistazo_core::{ElementId, Point, Polygon, Rect, SlotId};

/// Text slot carrying the tooltip contents.
pub const TOOLTIP_SLOT: SlotId = SlotId::new(0);
/// Text slot carrying the selected entity's name in the panel.
pub const NAME_SLOT: SlotId = SlotId::new(1);
/// Toggleable element for the tooltip box.
pub const TOOLTIP_ELEMENT: ElementId = ElementId::new(0);

/// Width and height of the panel's local coordinate space.
const PANEL_EXTENT: f32 = 2.0;
/// Top edge of the topmost hot region in panel space.
const REGIONS_TOP: f32 = 1.6;
/// Panel-space anchor of the entity name line.
const NAME_ANCHOR: Point = Point::new(1.0, 1.8);
/// X coordinate the per-indicator labels are anchored at.
const LABEL_X: f32 = 1.8;

/// One hoverable band of the side panel, bound to an indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotRegion {
    /// Indicator this band selects
    pub key: IndicatorKey,
    /// Hit geometry in panel space
    pub polygon: Polygon,
    /// Text slot the band's label is drawn into
    pub slot: SlotId,
    /// Panel-space anchor of the label text
    pub label_anchor: Point,
}

/// Everything the hit tester and presenter need to know about layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    positions: Vec<Point>,
    regions: Vec<HotRegion>,
    panel_bounds: Rect,
}

impl Scene {
    /// Lay out the scene for a loaded store.
    ///
    /// Scatter positions are the entities' data coordinates narrowed to
    /// `f32`; the panel is a fixed square with one hot region per
    /// configured indicator, stacked top to bottom in indicator order.
    #[must_use]
    pub fn build(store: &EntityStore, config: &ExplorerConfig) -> Self {
        let positions = store
            .entities()
            .iter()
            .map(|e| Point::new(e.x as f32, e.y as f32))
            .collect();

        let height = config.panel_region_height;
        let regions = config
            .indicators
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let top = REGIONS_TOP - height * i as f32;
                HotRegion {
                    key: spec.key,
                    polygon: Polygon::quad(Rect::new(0.0, top - height, PANEL_EXTENT, height)),
                    slot: SlotId::new(2 + i as u16),
                    label_anchor: Point::new(LABEL_X, top - height / 2.0),
                }
            })
            .collect();

        Self {
            positions,
            regions,
            panel_bounds: Rect::new(0.0, 0.0, PANEL_EXTENT, PANEL_EXTENT),
        }
    }

    /// Scatter positions in entity order, data space.
    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Panel hot regions, topmost first.
    #[must_use]
    pub fn regions(&self) -> &[HotRegion] {
        &self.regions
    }

    /// The region bound to a given indicator, if configured.
    #[must_use]
    pub fn region_for(&self, key: IndicatorKey) -> Option<&HotRegion> {
        self.regions.iter().find(|r| r.key == key)
    }

    /// The panel's local coordinate rectangle.
    #[must_use]
    pub fn panel_bounds(&self) -> Rect {
        self.panel_bounds
    }

    /// Panel-space anchor of the entity name line.
    #[must_use]
    pub fn name_anchor(&self) -> Point {
        NAME_ANCHOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DataTable;
    use crate::store::EntityStore;

    fn scene() -> (EntityStore, Scene) {
        let config = ExplorerConfig::default();
        let table = DataTable::new()
            .with_text_column("Country name", ["Aland", "Borduria"])
            .with_column("Healthy life expectancy", [60.0, 70.0])
            .with_column("Freedom to make life choices", [0.5, 0.9])
            .with_column("Logged GDP per capita", [8.0, 10.0])
            .with_column("Social support", [0.7, 0.9])
            .with_column("Generosity", [0.0, 0.1])
            .with_column("Perceptions of corruption", [0.3, 0.6]);
        let store = EntityStore::load(&table, &config).unwrap();
        let scene = Scene::build(&store, &config);
        (store, scene)
    }

    #[test]
    fn test_positions_follow_entity_order() {
        let (_, scene) = scene();
        assert_eq!(scene.positions().len(), 2);
        assert_eq!(scene.positions()[0], Point::new(60.0, 0.5));
        assert_eq!(scene.positions()[1], Point::new(70.0, 0.9));
    }

    #[test]
    fn test_regions_stack_downwards() {
        let (_, scene) = scene();
        let regions = scene.regions();
        assert_eq!(regions.len(), 4);
        assert_eq!(regions[0].key, IndicatorKey::Gdp);
        assert!(regions[0].polygon.contains(&Point::new(1.0, 1.5)));
        assert!(regions[1].polygon.contains(&Point::new(1.0, 1.3)));
        assert!(regions[3].polygon.contains(&Point::new(1.0, 0.9)));
        // Below the last band there is nothing.
        assert!(!regions[3].polygon.contains(&Point::new(1.0, 0.7)));
    }

    #[test]
    fn test_region_slots_are_unique_and_reserved() {
        let (_, scene) = scene();
        let mut slots: Vec<SlotId> = scene.regions().iter().map(|r| r.slot).collect();
        slots.push(TOOLTIP_SLOT);
        slots.push(NAME_SLOT);
        let count = slots.len();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), count);
    }

    #[test]
    fn test_label_anchor_is_band_midline() {
        let (_, scene) = scene();
        let first = &scene.regions()[0];
        assert!((first.label_anchor.y - 1.5).abs() < 1e-6);
        assert!((first.label_anchor.x - 1.8).abs() < 1e-6);
    }

    #[test]
    fn test_region_for_lookup() {
        let (_, scene) = scene();
        assert!(scene.region_for(IndicatorKey::Generosity).is_some());
        let bounds = scene.panel_bounds();
        assert_eq!(bounds.width, 2.0);
        assert_eq!(bounds.height, 2.0);
    }
}
