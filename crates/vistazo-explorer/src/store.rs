//! Immutable entity store built from the input table.

use crate::config::{ExplorerConfig, IndicatorKey};
use crate::error::{ConfigError, DataError, ExplorerError};
use crate::table::DataTable;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::BTreeMap;

/// Positional identity of an entity within the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub usize);

/// One row of the dataset: label, axis coordinates, indicator values.
///
/// Immutable after load. Indicator values may be NaN; the store and every
/// downstream consumer treat non-finite values as present-but-unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Positional identity
    pub id: EntityId,
    /// Display label (e.g. country name)
    pub label: String,
    /// X coordinate in data space
    pub x: f64,
    /// Y coordinate in data space
    pub y: f64,
    /// Per-indicator values
    pub indicators: BTreeMap<IndicatorKey, f64>,
}

/// Padded data-space limits for the scatter axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// (min, max) over the x field, padded
    pub x: (f64, f64),
    /// (min, max) over the y field, padded
    pub y: (f64, f64),
}

/// Immutable view over the dataset.
#[derive(Debug)]
pub struct EntityStore {
    entities: Vec<Entity>,
    indicator_keys: Vec<IndicatorKey>,
    // Lazily computed (min, max) per indicator, NaN excluded.
    ranges: Vec<OnceCell<Option<(f64, f64)>>>,
}

impl EntityStore {
    /// Build the store from a loaded table.
    ///
    /// Fails fast before any rendering: an empty table or a missing
    /// label/axis column is a [`DataError`]; an indicator referencing a
    /// column the table does not have is a [`ConfigError`].
    pub fn load(table: &DataTable, config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        let rows = table.row_count();
        if rows == 0 {
            return Err(DataError::EmptyTable.into());
        }

        let labels = table
            .text_column(&config.label_field)
            .ok_or_else(|| DataError::MissingColumn(config.label_field.clone()))?;
        let xs = Self::numeric_column(table, &config.x_field, rows)?;
        let ys = Self::numeric_column(table, &config.y_field, rows)?;
        if labels.len() != rows {
            return Err(DataError::LengthMismatch {
                column: config.label_field.clone(),
                actual: labels.len(),
                expected: rows,
            }
            .into());
        }

        let mut indicator_columns = Vec::with_capacity(config.indicators.len());
        for spec in &config.indicators {
            let column = table.column(&spec.source_field).ok_or_else(|| {
                ConfigError::UnknownField {
                    key: spec.key,
                    field: spec.source_field.clone(),
                }
            })?;
            if column.len() != rows {
                return Err(DataError::LengthMismatch {
                    column: spec.source_field.clone(),
                    actual: column.len(),
                    expected: rows,
                }
                .into());
            }
            indicator_columns.push((spec.key, column));
        }

        let entities = (0..rows)
            .map(|i| Entity {
                id: EntityId(i),
                label: labels[i].clone(),
                x: xs[i],
                y: ys[i],
                indicators: indicator_columns
                    .iter()
                    .map(|(key, column)| (*key, column[i]))
                    .collect(),
            })
            .collect();

        let indicator_keys: Vec<IndicatorKey> =
            config.indicators.iter().map(|s| s.key).collect();
        let ranges = indicator_keys.iter().map(|_| OnceCell::new()).collect();

        Ok(Self {
            entities,
            indicator_keys,
            ranges,
        })
    }

    fn numeric_column<'t>(
        table: &'t DataTable,
        name: &str,
        rows: usize,
    ) -> Result<&'t [f64], ExplorerError> {
        let column = table
            .column(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
        if column.len() != rows {
            return Err(DataError::LengthMismatch {
                column: name.to_string(),
                actual: column.len(),
                expected: rows,
            }
            .into());
        }
        Ok(column)
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store is empty (never true after a successful load).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in store order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range. Ids come from this store's own hit
    /// results, so an out-of-range id is a programmer error, never a
    /// user-facing condition.
    #[must_use]
    pub fn get(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// The (min, max) of an indicator across all entities, computed once
    /// and cached. Non-finite values are excluded from the bounds but
    /// still count as present for iteration. Returns `None` for a key the
    /// store was not built with, or when no finite value exists.
    #[must_use]
    pub fn indicator_range(&self, key: IndicatorKey) -> Option<(f64, f64)> {
        let idx = self.indicator_keys.iter().position(|k| *k == key)?;
        *self.ranges[idx].get_or_init(|| {
            let mut bounds: Option<(f64, f64)> = None;
            for entity in &self.entities {
                let Some(value) = entity.indicators.get(&key).copied() else {
                    continue;
                };
                if !value.is_finite() {
                    continue;
                }
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(value), max.max(value)),
                    None => (value, value),
                });
            }
            bounds
        })
    }

    /// Padded axis limits for the scatter plot (min·0.95, max·1.05) so
    /// edge points don't sit on the axes.
    #[must_use]
    pub fn axis_bounds(&self) -> AxisBounds {
        let fold = |values: &mut dyn Iterator<Item = f64>| {
            values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            })
        };
        let (x_min, x_max) = fold(&mut self.entities.iter().map(|e| e.x));
        let (y_min, y_max) = fold(&mut self.entities.iter().map(|e| e.y));
        AxisBounds {
            x: (x_min * 0.95, x_max * 1.05),
            y: (y_min * 0.95, y_max * 1.05),
        }
    }
}
