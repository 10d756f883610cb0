//! Pointer hit testing against the scatter cloud and the panel bands.

use crate::config::IndicatorKey;
use crate::scene::Scene;
use crate::store::EntityId;
use vistazo_core::{Point, Surface};

/// Result of a scatter probe: every entity within tolerance, in store
/// order, with the first one carrying the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterHit {
    /// Entity that drives the panel and color scale
    pub primary: EntityId,
    /// All entities within tolerance, store order, includes `primary`
    pub contained: Vec<EntityId>,
}

/// Probe the scatter cloud at a pointer position.
///
/// Distances are measured in surface space so the tolerance is a screen
/// quantity, independent of the data ranges. Returns `None` when no
/// entity is within `tolerance_px`.
#[must_use]
pub fn nearest_entity(
    scene: &Scene,
    pointer: Point,
    tolerance_px: f32,
    surface: &dyn Surface,
) -> Option<ScatterHit> {
    let contained: Vec<EntityId> = scene
        .positions()
        .iter()
        .enumerate()
        .filter(|(_, data_point)| {
            surface.to_surface_space(**data_point).distance(&pointer) <= tolerance_px
        })
        .map(|(i, _)| EntityId(i))
        .collect();

    let primary = *contained.first()?;
    Some(ScatterHit { primary, contained })
}

/// Find the panel band under a pointer position, topmost band first.
#[must_use]
pub fn region_at(scene: &Scene, pointer: Point) -> Option<IndicatorKey> {
    scene
        .regions()
        .iter()
        .find(|region| region.polygon.contains(&pointer))
        .map(|region| region.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::store::EntityStore;
    use crate::table::DataTable;
    use proptest::prelude::*;
    use vistazo_core::RecordingSurface;

    fn scene() -> Scene {
        let config = ExplorerConfig::default();
        let table = DataTable::new()
            .with_text_column("Country name", ["A", "B", "C"])
            .with_column("Healthy life expectancy", [10.0, 10.0, 50.0])
            .with_column("Freedom to make life choices", [10.0, 12.0, 50.0])
            .with_column("Logged GDP per capita", [8.0, 9.0, 10.0])
            .with_column("Social support", [0.7, 0.8, 0.9])
            .with_column("Generosity", [0.0, 0.1, 0.2])
            .with_column("Perceptions of corruption", [0.3, 0.4, 0.5]);
        let store = EntityStore::load(&table, &config).unwrap();
        Scene::build(&store, &config)
    }

    #[test]
    fn test_nearest_entity_exact_hit() {
        let surface = RecordingSurface::new();
        let hit = nearest_entity(&scene(), Point::new(50.0, 50.0), 5.0, &surface).unwrap();
        assert_eq!(hit.primary, EntityId(2));
        assert_eq!(hit.contained, vec![EntityId(2)]);
    }

    #[test]
    fn test_nearest_entity_outside_tolerance_is_none() {
        let surface = RecordingSurface::new();
        assert!(nearest_entity(&scene(), Point::new(30.0, 30.0), 5.0, &surface).is_none());
    }

    #[test]
    fn test_nearest_entity_boundary_is_inclusive() {
        let surface = RecordingSurface::new();
        // Exactly 5 px below C.
        let hit = nearest_entity(&scene(), Point::new(50.0, 45.0), 5.0, &surface).unwrap();
        assert_eq!(hit.primary, EntityId(2));
    }

    #[test]
    fn test_overlapping_entities_all_contained_store_order() {
        let surface = RecordingSurface::new();
        // A and B are 2 units apart; probing between them catches both.
        let hit = nearest_entity(&scene(), Point::new(10.0, 11.0), 5.0, &surface).unwrap();
        assert_eq!(hit.primary, EntityId(0));
        assert_eq!(hit.contained, vec![EntityId(0), EntityId(1)]);
    }

    #[test]
    fn test_region_at_each_band() {
        let scene = scene();
        assert_eq!(
            region_at(&scene, Point::new(1.0, 1.5)),
            Some(IndicatorKey::Gdp)
        );
        assert_eq!(
            region_at(&scene, Point::new(1.0, 1.3)),
            Some(IndicatorKey::SocialSupport)
        );
        assert_eq!(
            region_at(&scene, Point::new(1.0, 1.1)),
            Some(IndicatorKey::Generosity)
        );
        assert_eq!(
            region_at(&scene, Point::new(1.0, 0.9)),
            Some(IndicatorKey::CorruptionPerception)
        );
    }

    #[test]
    fn test_region_at_dead_zone_is_none() {
        let scene = scene();
        assert_eq!(region_at(&scene, Point::new(1.0, 0.4)), None);
        assert_eq!(region_at(&scene, Point::new(1.0, 1.9)), None);
    }

    proptest! {
        #[test]
        fn prop_no_panel_point_is_in_two_regions(x in 0.0f32..2.0, y in 0.0f32..2.0) {
            let scene = scene();
            let p = Point::new(x, y);
            let containing = scene
                .regions()
                .iter()
                .filter(|r| r.polygon.contains(&p))
                .count();
            prop_assert!(containing <= 1);
        }

        #[test]
        fn prop_nearest_entity_never_false_positive(x in 20.0f32..40.0, y in 20.0f32..40.0) {
            let surface = RecordingSurface::new();
            // The band between the clustered pair and C is empty.
            prop_assert!(nearest_entity(&scene(), Point::new(x, y), 5.0, &surface).is_none());
        }
    }
}
