//! core/dataset.rs: One metric measured over a full sweep grid.
//!
//! Datasets are built once from literal tables and never mutated; charts
//! always render from that snapshot.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::error::DatasetError;
use crate::core::sweep::{CellKey, SweepAxis, SweepDomain, Variant};

/// Identity and presentation strings of a metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricMeta {
    /// Stable identifier, e.g. `llc_misses` or `cycles_per_byte`.
    pub metric_id: String,
    pub unit_label: String,
    pub display_title: String,
}

impl MetricMeta {
    pub fn new(metric_id: &str, unit_label: &str, display_title: &str) -> Self {
        Self {
            metric_id: metric_id.to_string(),
            unit_label: unit_label.to_string(),
            display_title: display_title.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
struct TableRow {
    variant: Variant,
    key: u32,
    values: Vec<f64>,
}

/// Literal measurement table: one row per (variant, series value), each row
/// listing the values along the other axis in domain order.
///
/// Rows keyed by thread count read `[512, 1024, 2048, 4096]`, rows keyed by
/// message size read `[t1, t2, t4, t8]`.
#[derive(Clone, Debug)]
pub struct SweepTable {
    row_axis: SweepAxis,
    rows: Vec<TableRow>,
}

impl SweepTable {
    /// Rows keyed by thread count, columns along message size.
    pub fn by_thread_count() -> Self {
        Self {
            row_axis: SweepAxis::ThreadCount,
            rows: Vec::new(),
        }
    }

    /// Rows keyed by message size, columns along thread count.
    pub fn by_message_size() -> Self {
        Self {
            row_axis: SweepAxis::MessageSize,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, variant: Variant, key: u32, values: &[f64]) -> Self {
        self.rows.push(TableRow {
            variant,
            key,
            values: values.to_vec(),
        });
        self
    }

    pub fn row_axis(&self) -> SweepAxis {
        self.row_axis
    }

    /// Axis the row values run along.
    pub fn column_axis(&self) -> SweepAxis {
        self.row_axis.other()
    }
}

/// Scalar measurements of one metric over variants × thread counts ×
/// message sizes. Every cell of the domain grid is present, finite and
/// non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSweepDataset {
    meta: MetricMeta,
    domain: SweepDomain,
    x_axis: SweepAxis,
    values: BTreeMap<CellKey, f64>,
}

impl MetricSweepDataset {
    /// Build a dataset from a literal table. The table's column axis becomes
    /// the configured x-axis for [`series_for`](Self::series_for).
    pub fn from_table(
        meta: MetricMeta,
        domain: SweepDomain,
        table: &SweepTable,
    ) -> Result<Self, DatasetError> {
        let metric = meta.metric_id.as_str();
        let row_axis = table.row_axis();
        let column_axis = table.column_axis();
        let row_keys = domain.values(row_axis);
        let columns = domain.values(column_axis);

        let mut values = BTreeMap::new();
        let mut seen: Vec<(Variant, u32)> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            if !domain.contains_variant(row.variant) {
                return Err(DatasetError::shape(
                    metric,
                    format!("row for {} which is not in the sweep domain", row.variant),
                ));
            }
            if !row_keys.contains(&row.key) {
                return Err(DatasetError::shape(
                    metric,
                    format!(
                        "{} row keyed by {} which is not in {:?}",
                        row.variant, row.key, row_keys
                    ),
                ));
            }
            if seen.contains(&(row.variant, row.key)) {
                return Err(DatasetError::shape(
                    metric,
                    format!("duplicate row for {} at {}", row.variant, row.key),
                ));
            }
            seen.push((row.variant, row.key));
            if row.values.len() > columns.len() {
                return Err(DatasetError::shape(
                    metric,
                    format!(
                        "{} row {} has {} values, expected {}",
                        row.variant,
                        row.key,
                        row.values.len(),
                        columns.len()
                    ),
                ));
            }
            for (&x, &value) in columns.iter().zip(&row.values) {
                let key = CellKey::along(row.variant, column_axis, x, row.key);
                values.insert(key, value);
            }
        }

        Self::from_cells(meta, domain, column_axis, values)
    }

    /// Validate a cell map against the domain grid.
    pub(crate) fn from_cells(
        meta: MetricMeta,
        domain: SweepDomain,
        x_axis: SweepAxis,
        values: BTreeMap<CellKey, f64>,
    ) -> Result<Self, DatasetError> {
        let metric = meta.metric_id.as_str();
        for &variant in domain.variants() {
            for &thread_count in domain.thread_counts() {
                for &message_size in domain.message_sizes() {
                    let key = CellKey::new(variant, thread_count, message_size);
                    let Some(&value) = values.get(&key) else {
                        return Err(DatasetError::IncompleteData {
                            metric: metric.to_string(),
                            variant,
                            thread_count,
                            message_size,
                        });
                    };
                    if !value.is_finite() {
                        return Err(DatasetError::NonFiniteValue {
                            metric: metric.to_string(),
                            variant,
                            thread_count,
                            message_size,
                            value,
                        });
                    }
                    if value < 0.0 {
                        return Err(DatasetError::NegativeValue {
                            metric: metric.to_string(),
                            variant,
                            thread_count,
                            message_size,
                            value,
                        });
                    }
                }
            }
        }
        if values.len() != domain.n_cells() {
            return Err(DatasetError::shape(
                metric,
                format!(
                    "{} cells for a {}-cell sweep grid",
                    values.len(),
                    domain.n_cells()
                ),
            ));
        }

        debug!(
            metric,
            variants = domain.variants().len(),
            cells = values.len(),
            "dataset populated"
        );
        Ok(Self {
            meta,
            domain,
            x_axis,
            values,
        })
    }

    pub fn meta(&self) -> &MetricMeta {
        &self.meta
    }

    pub fn metric_id(&self) -> &str {
        &self.meta.metric_id
    }

    pub fn domain(&self) -> &SweepDomain {
        &self.domain
    }

    pub fn variants(&self) -> &[Variant] {
        self.domain.variants()
    }

    /// Axis used as panel x-axis by [`series_for`](Self::series_for).
    pub fn x_axis(&self) -> SweepAxis {
        self.x_axis
    }

    /// Same values with another configured x-axis.
    pub fn with_x_axis(mut self, x_axis: SweepAxis) -> Self {
        self.x_axis = x_axis;
        self
    }

    pub fn value(&self, variant: Variant, thread_count: u32, message_size: u32) -> Option<f64> {
        self.values
            .get(&CellKey::new(variant, thread_count, message_size))
            .copied()
    }

    /// All cells in key order.
    pub fn cells(&self) -> impl Iterator<Item = (CellKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Points `(x, y)` along the configured x-axis for one variant and one
    /// value of the secondary axis, ascending in x.
    pub fn series_for(&self, variant: Variant, secondary: u32) -> Option<Vec<(u32, f64)>> {
        self.series_along(self.x_axis, variant, secondary)
    }

    /// Like [`series_for`](Self::series_for) with an explicit x-axis.
    pub fn series_along(
        &self,
        x_axis: SweepAxis,
        variant: Variant,
        secondary: u32,
    ) -> Option<Vec<(u32, f64)>> {
        if !self.domain.contains_variant(variant)
            || !self.domain.values(x_axis.other()).contains(&secondary)
        {
            return None;
        }
        self.domain
            .values(x_axis)
            .iter()
            .map(|&x| {
                let key = CellKey::along(variant, x_axis, x, secondary);
                self.values.get(&key).map(|&y| (x, y))
            })
            .collect()
    }

    pub fn max_value(&self) -> f64 {
        self.values.values().copied().fold(0.0, f64::max)
    }

    /// Single-variant slice of this dataset.
    pub fn select(&self, variant: Variant) -> Result<Self, DatasetError> {
        if !self.domain.contains_variant(variant) {
            return Err(DatasetError::shape(
                self.metric_id(),
                format!("variant {variant} not present"),
            ));
        }
        let values = self
            .values
            .iter()
            .filter(|(k, _)| k.variant == variant)
            .map(|(k, v)| (*k, *v))
            .collect();
        Ok(Self {
            meta: self.meta.clone(),
            domain: self.domain.restricted_to(variant),
            x_axis: self.x_axis,
            values,
        })
    }
}
