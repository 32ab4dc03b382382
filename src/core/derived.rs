//! core/derived.rs: Metrics computed from raw counters.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::dataset::{MetricMeta, MetricSweepDataset};
use crate::core::error::DatasetError;

/// Elementwise `numerator / denominator` over two datasets sweeping the same
/// grid. Any zero denominator cell is an error.
pub fn derive_ratio(
    numerator: &MetricSweepDataset,
    denominator: &MetricSweepDataset,
    meta: MetricMeta,
) -> Result<MetricSweepDataset, DatasetError> {
    if numerator.domain() != denominator.domain() {
        return Err(DatasetError::shape(
            &meta.metric_id,
            format!(
                "{} and {} sweep different grids",
                numerator.metric_id(),
                denominator.metric_id()
            ),
        ));
    }

    let mut values = BTreeMap::new();
    for (key, num) in numerator.cells() {
        let den = denominator
            .value(key.variant, key.thread_count, key.message_size)
            .ok_or_else(|| DatasetError::IncompleteData {
                metric: denominator.metric_id().to_string(),
                variant: key.variant,
                thread_count: key.thread_count,
                message_size: key.message_size,
            })?;
        if den == 0.0 {
            return Err(DatasetError::DivideByZero {
                metric: meta.metric_id.clone(),
                variant: key.variant,
                thread_count: key.thread_count,
                message_size: key.message_size,
            });
        }
        values.insert(key, num / den);
    }

    debug!(
        metric = %meta.metric_id,
        numerator = numerator.metric_id(),
        denominator = denominator.metric_id(),
        "derived ratio metric"
    );
    MetricSweepDataset::from_cells(
        meta,
        numerator.domain().clone(),
        numerator.x_axis(),
        values,
    )
}

/// CPU cycles spent per byte moved.
pub fn cycles_per_byte(
    cycles: &MetricSweepDataset,
    bytes: &MetricSweepDataset,
) -> Result<MetricSweepDataset, DatasetError> {
    derive_ratio(
        cycles,
        bytes,
        MetricMeta::new("cycles_per_byte", "cycles/byte", "CPU Cycles per Byte"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::SweepTable;
    use crate::core::sweep::{SweepDomain, Variant};
    use approx::assert_relative_eq;

    fn domain() -> SweepDomain {
        SweepDomain::new(vec![Variant::TwoCopy], vec![512, 1024], vec![1]).unwrap()
    }

    fn dataset(id: &str, values: &[f64]) -> MetricSweepDataset {
        let table = SweepTable::by_thread_count().row(Variant::TwoCopy, 1, values);
        MetricSweepDataset::from_table(MetricMeta::new(id, "", id), domain(), &table).unwrap()
    }

    #[test]
    fn ratio_divides_cellwise() {
        let cycles = dataset("cycles", &[10.0, 9.0]);
        let bytes = dataset("bytes", &[4.0, 3.0]);
        let cpb = cycles_per_byte(&cycles, &bytes).unwrap();
        assert_eq!(cpb.metric_id(), "cycles_per_byte");
        assert_relative_eq!(cpb.value(Variant::TwoCopy, 1, 512).unwrap(), 2.5);
        assert_relative_eq!(cpb.value(Variant::TwoCopy, 1, 1024).unwrap(), 3.0);
    }

    #[test]
    fn zero_denominator_is_an_error() {
        let cycles = dataset("cycles", &[10.0, 9.0]);
        let bytes = dataset("bytes", &[4.0, 0.0]);
        let err = cycles_per_byte(&cycles, &bytes).unwrap_err();
        assert_eq!(
            err,
            DatasetError::DivideByZero {
                metric: "cycles_per_byte".to_string(),
                variant: Variant::TwoCopy,
                thread_count: 1,
                message_size: 1024,
            }
        );
    }

    #[test]
    fn mismatched_grids_are_rejected() {
        let cycles = dataset("cycles", &[10.0, 9.0]);
        let other = SweepDomain::new(vec![Variant::TwoCopy], vec![512, 2048], vec![1]).unwrap();
        let table = SweepTable::by_thread_count().row(Variant::TwoCopy, 1, &[1.0, 1.0]);
        let bytes =
            MetricSweepDataset::from_table(MetricMeta::new("bytes", "", ""), other, &table)
                .unwrap();
        let err = cycles_per_byte(&cycles, &bytes).unwrap_err();
        assert!(matches!(err, DatasetError::ShapeMismatch { .. }));
    }
}
