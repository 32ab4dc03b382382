use approx::assert_abs_diff_eq;

use ipc_charts::core::dataset::{MetricMeta, MetricSweepDataset, SweepTable};
use ipc_charts::core::derived::{self, derive_ratio};
use ipc_charts::core::error::DatasetError;
use ipc_charts::core::sweep::{SweepDomain, Variant};
use ipc_charts::report::measurements;

/// Rounded cycles/byte as published with the report, rows t1..t8,
/// columns 512..4096.
const PUBLISHED: [(Variant, [[f64; 4]; 4]); 3] = [
    (
        Variant::TwoCopy,
        [
            [4.39, 2.56, 1.85, 1.45],
            [5.45, 3.07, 2.24, 1.54],
            [6.31, 3.64, 2.42, 1.61],
            [7.15, 4.35, 4.56, 4.94],
        ],
    ),
    (
        Variant::OneCopy,
        [
            [1.64, 1.16, 0.90, 0.76],
            [2.02, 1.45, 1.11, 0.93],
            [3.05, 3.52, 4.07, 3.15],
            [4.64, 4.72, 4.87, 5.50],
        ],
    ),
    (
        Variant::ZeroCopy,
        [
            [1.58, 1.27, 1.16, 0.95],
            [2.09, 1.55, 1.58, 1.14],
            [2.91, 2.06, 3.44, 2.17],
            [5.27, 7.47, 5.60, 7.54],
        ],
    ),
];

fn single_cell(id: &str, value: f64) -> MetricSweepDataset {
    let domain = SweepDomain::new(vec![Variant::TwoCopy], vec![512], vec![1]).unwrap();
    let table = SweepTable::by_thread_count().row(Variant::TwoCopy, 1, &[value]);
    MetricSweepDataset::from_table(MetricMeta::new(id, "u", id), domain, &table).unwrap()
}

#[test]
fn two_copy_single_thread_512_bytes() {
    let cycles = single_cell("cpu_cycles", 211_972_758_136.0);
    let bytes = single_cell("total_bytes", 48_253_067_264.0);
    let cpb = derived::cycles_per_byte(&cycles, &bytes).unwrap();
    assert_eq!(cpb.metric_id(), "cycles_per_byte");
    let v = cpb.value(Variant::TwoCopy, 1, 512).unwrap();
    assert_abs_diff_eq!(v, 4.39, epsilon = 0.01);
}

#[test]
fn ratio_times_denominator_recovers_numerator() {
    let cycles = measurements::cpu_cycles().unwrap();
    let bytes = measurements::total_bytes().unwrap();
    let cpb = derived::cycles_per_byte(&cycles, &bytes).unwrap();
    for (key, ratio) in cpb.cells() {
        let num = cycles
            .value(key.variant, key.thread_count, key.message_size)
            .unwrap();
        let den = bytes
            .value(key.variant, key.thread_count, key.message_size)
            .unwrap();
        assert_abs_diff_eq!(ratio * den, num, epsilon = num * 1e-12);
    }
}

#[test]
fn zero_denominator_is_rejected() {
    let num = single_cell("num", 10.0);
    let den = single_cell("den", 0.0);
    let err = derive_ratio(&num, &den, MetricMeta::new("ratio", "x", "Ratio")).unwrap_err();
    assert_eq!(
        err,
        DatasetError::DivideByZero {
            metric: "ratio".to_string(),
            variant: Variant::TwoCopy,
            thread_count: 1,
            message_size: 512,
        }
    );
}

#[test]
fn mismatched_grids_are_rejected() {
    let num = single_cell("num", 10.0);
    let den = measurements::total_bytes().unwrap();
    let err = derive_ratio(&num, &den, MetricMeta::new("ratio", "x", "Ratio")).unwrap_err();
    assert!(matches!(err, DatasetError::ShapeMismatch { .. }));
}

#[test]
fn recomputed_values_match_published_literals() {
    let cpb = measurements::cycles_per_byte().unwrap();
    for (variant, rows) in PUBLISHED {
        for (t, row) in SweepDomain::THREAD_COUNTS.iter().zip(rows) {
            for (m, published) in SweepDomain::MESSAGE_SIZES.iter().zip(row) {
                let value = cpb.value(variant, *t, *m).unwrap();
                assert_abs_diff_eq!(value, published, epsilon = 0.01);
            }
        }
    }
}
