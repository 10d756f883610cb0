//! Top-level driver tying store, scene, state, and presenter together.

use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::hittest;
use crate::interaction::InteractionState;
use crate::presenter;
use crate::scene::Scene;
use crate::store::EntityStore;
use crate::table::DataTable;
use log::warn;
use vistazo_core::{PointerEvent, Surface, SurfaceKind};

/// The two-view explorer: scatter plot plus indicator panel.
///
/// Owns all hover state. The embedding event loop feeds it
/// [`PointerEvent`]s together with the surface to draw on; everything
/// else happens in here.
#[derive(Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    store: EntityStore,
    scene: Scene,
    state: InteractionState,
}

impl Explorer {
    /// Validate the configuration, load the table, and lay out the scene.
    pub fn new(table: &DataTable, config: ExplorerConfig) -> Result<Self, ExplorerError> {
        config.validate()?;
        let store = EntityStore::load(table, &config)?;
        let scene = Scene::build(&store, &config);
        Ok(Self {
            config,
            store,
            scene,
            state: InteractionState::new(),
        })
    }

    /// Feed one pointer event through hit testing, the state machine,
    /// and the presenter.
    ///
    /// A backend fault skips the frame: the warning is logged, no redraw
    /// is requested, and the state already holds the intended picture so
    /// the next event repaints it in full.
    pub fn handle_pointer(&mut self, event: &PointerEvent, surface: &mut dyn Surface) {
        match event {
            PointerEvent::Move {
                surface: kind,
                position,
            } => match kind {
                SurfaceKind::Scatter => {
                    let hit = hittest::nearest_entity(
                        &self.scene,
                        *position,
                        self.config.hit_tolerance_px,
                        &*surface,
                    );
                    self.state.on_scatter_move(hit, *position);
                }
                SurfaceKind::Panel => {
                    let region = hittest::region_at(&self.scene, *position);
                    self.state.on_panel_move(region, &self.store);
                }
                SurfaceKind::Outside => return,
            },
            PointerEvent::Leave => self.state.on_leave(),
        }

        if let Err(fault) = presenter::present(
            &self.state,
            &self.scene,
            &self.store,
            &self.config,
            surface,
        ) {
            warn!("frame skipped: {fault}");
            return;
        }
        surface.request_redraw();
    }

    /// Current hover state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The loaded entities.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// The static layout.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The configuration the explorer was built with.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorSpec;
    use crate::config::IndicatorKey;
    use crate::error::ConfigError;

    fn table() -> DataTable {
        DataTable::new()
            .with_text_column("Country name", ["Aland"])
            .with_column("Healthy life expectancy", [60.0])
            .with_column("Freedom to make life choices", [0.5])
            .with_column("Logged GDP per capita", [8.0])
            .with_column("Social support", [0.7])
            .with_column("Generosity", [0.0])
            .with_column("Perceptions of corruption", [0.3])
    }

    #[test]
    fn test_new_with_default_config() {
        let explorer = Explorer::new(&table(), ExplorerConfig::default()).unwrap();
        assert_eq!(explorer.store().len(), 1);
        assert_eq!(explorer.scene().regions().len(), 4);
        assert_eq!(explorer.state(), &InteractionState::default());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ExplorerConfig::default();
        config.hit_tolerance_px = 0.0;
        let err = Explorer::new(&table(), config).unwrap_err();
        assert_eq!(
            err,
            ExplorerError::Config(ConfigError::NonPositiveTolerance(0.0))
        );
    }

    #[test]
    fn test_new_rejects_duplicate_indicator() {
        let mut config = ExplorerConfig::default();
        config
            .indicators
            .push(IndicatorSpec::new(IndicatorKey::Gdp, "GDP again", "Log GDP per capita"));
        assert!(matches!(
            Explorer::new(&table(), config),
            Err(ExplorerError::Config(ConfigError::DuplicateKey(
                IndicatorKey::Gdp
            )))
        ));
    }
}
