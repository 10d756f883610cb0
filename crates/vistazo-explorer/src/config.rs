//! Static startup configuration.
//!
//! Indicators are a typed ordered list resolved once at startup; the
//! panel's region order follows the list order.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerated identifier for a per-entity numeric indicator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKey {
    /// Log GDP per capita
    Gdp,
    /// Social support
    SocialSupport,
    /// Generosity
    Generosity,
    /// Perceptions of corruption
    CorruptionPerception,
}

impl IndicatorKey {
    /// Stable snake_case name, matching the serde representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gdp => "gdp",
            Self::SocialSupport => "social_support",
            Self::Generosity => "generosity",
            Self::CorruptionPerception => "corruption_perception",
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor binding an indicator key to its display name and dataset column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    /// Indicator identity
    pub key: IndicatorKey,
    /// Human-readable name shown in the panel
    pub display_name: String,
    /// Dataset column the values come from
    pub source_field: String,
}

impl IndicatorSpec {
    /// Create a new indicator descriptor.
    #[must_use]
    pub fn new(
        key: IndicatorKey,
        display_name: impl Into<String>,
        source_field: impl Into<String>,
    ) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            source_field: source_field.into(),
        }
    }
}

/// Startup configuration for the explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Dataset column providing scatter X coordinates
    pub x_field: String,
    /// Dataset column providing scatter Y coordinates
    pub y_field: String,
    /// Dataset column providing entity labels
    pub label_field: String,
    /// Ordered indicator descriptors; panel regions follow this order
    pub indicators: Vec<IndicatorSpec>,
    /// Scatter hit tolerance in surface pixels
    pub hit_tolerance_px: f32,
    /// Height of each panel hot region in panel-local units
    pub panel_region_height: f32,
}

impl Default for ExplorerConfig {
    /// The World Happiness Report 2021 dataset fields.
    fn default() -> Self {
        Self {
            x_field: "Healthy life expectancy".to_string(),
            y_field: "Freedom to make life choices".to_string(),
            label_field: "Country name".to_string(),
            indicators: vec![
                IndicatorSpec::new(IndicatorKey::Gdp, "Log GDP per capita", "Logged GDP per capita"),
                IndicatorSpec::new(IndicatorKey::SocialSupport, "Social support", "Social support"),
                IndicatorSpec::new(IndicatorKey::Generosity, "Generosity", "Generosity"),
                IndicatorSpec::new(
                    IndicatorKey::CorruptionPerception,
                    "Perceptions of corruption",
                    "Perceptions of corruption",
                ),
            ],
            hit_tolerance_px: 5.0,
            panel_region_height: 0.2,
        }
    }
}

impl ExplorerConfig {
    /// Validate internal consistency.
    ///
    /// Dataset-dependent checks (unknown source fields) happen at store
    /// load time, when the table is available.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indicators.is_empty() {
            return Err(ConfigError::EmptyIndicators);
        }
        for (i, spec) in self.indicators.iter().enumerate() {
            if self.indicators[..i].iter().any(|s| s.key == spec.key) {
                return Err(ConfigError::DuplicateKey(spec.key));
            }
        }
        if self.hit_tolerance_px <= 0.0 {
            return Err(ConfigError::NonPositiveTolerance(self.hit_tolerance_px));
        }
        if self.panel_region_height <= 0.0 {
            return Err(ConfigError::NonPositiveRegionHeight(
                self.panel_region_height,
            ));
        }
        Ok(())
    }

    /// Look up the descriptor for a key.
    #[must_use]
    pub fn indicator(&self, key: IndicatorKey) -> Option<&IndicatorSpec> {
        self.indicators.iter().find(|s| s.key == key)
    }
}
