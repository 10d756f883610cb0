//! Projection of an [`InteractionState`](crate::interaction::InteractionState)
//! onto a [`Surface`].
//!
//! Presenting is a pure readout of state, scene, and store. Calling it
//! twice with the same inputs issues the same operations, so a dropped
//! frame costs nothing but the redraw.

use crate::config::ExplorerConfig;
use crate::interaction::{format_value, InteractionState};
use crate::scene::{Scene, NAME_SLOT, TOOLTIP_ELEMENT, TOOLTIP_SLOT};
use crate::store::EntityStore;
use vistazo_core::{Color, ColorScale, RenderFault, Surface};

/// Low end of the indicator color ramp (#440154).
fn ramp_low() -> Color {
    Color::rgb(0x44 as f32 / 255.0, 0x01 as f32 / 255.0, 0x54 as f32 / 255.0)
}

/// High end of the indicator color ramp (#FDE725).
fn ramp_high() -> Color {
    Color::rgb(0xFD as f32 / 255.0, 0xE7 as f32 / 255.0, 0x25 as f32 / 255.0)
}

/// Label color of the active panel band (#2A74A2).
fn highlight() -> Color {
    Color::rgb(0x2A as f32 / 255.0, 0x74 as f32 / 255.0, 0xA2 as f32 / 255.0)
}

/// Push the full visual consequence of `state` onto `surface`.
///
/// Operations are issued in a fixed order: scatter colors, tooltip,
/// entity name, then one label per panel band. The first backend fault
/// aborts the frame; state is untouched so the next frame retries from
/// scratch.
pub fn present(
    state: &InteractionState,
    scene: &Scene,
    store: &EntityStore,
    config: &ExplorerConfig,
    surface: &mut dyn Surface,
) -> Result<(), RenderFault> {
    let colors = match (state.active_indicator, state.color_scale) {
        (Some(key), Some((min, max))) => {
            let scale = ColorScale::new(min, max, ramp_low(), ramp_high(), Color::BLACK);
            store
                .entities()
                .iter()
                .map(|e| scale.color_for(e.indicators.get(&key).copied().unwrap_or(f64::NAN)))
                .collect()
        }
        _ => vec![Color::BLACK; store.len()],
    };
    surface.draw_scatter(scene.positions(), &colors)?;

    if state.tooltip_visible {
        let text = state
            .contained
            .iter()
            .map(|id| store.get(*id).label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        surface.draw_text(TOOLTIP_SLOT, &text, Color::BLACK, state.tooltip_anchor)?;
    }
    surface.set_visibility(TOOLTIP_ELEMENT, state.tooltip_visible)?;

    if let Some(id) = state.active_entity {
        surface.draw_text(
            NAME_SLOT,
            &store.get(id).label,
            Color::BLACK,
            scene.name_anchor(),
        )?;
    }

    for region in scene.regions() {
        let display_name = config
            .indicator(region.key)
            .map_or_else(|| region.key.as_str().to_string(), |s| s.display_name.clone());
        let content = match state.active_entity {
            Some(id) => {
                let value = store
                    .get(id)
                    .indicators
                    .get(&region.key)
                    .copied()
                    .unwrap_or(f64::NAN);
                format!("{display_name}: {}", format_value(value))
            }
            None => display_name,
        };
        let color = if state.active_indicator == Some(region.key) {
            highlight()
        } else {
            Color::BLACK
        };
        surface.draw_text(region.slot, &content, color, region.label_anchor)?;
    }

    Ok(())
}
