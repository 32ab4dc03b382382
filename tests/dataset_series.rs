use ipc_charts::core::dataset::{MetricMeta, MetricSweepDataset, SweepTable};
use ipc_charts::core::error::DatasetError;
use ipc_charts::core::sweep::{SweepAxis, SweepDomain, Variant};
use ipc_charts::report::measurements;

#[test]
fn llc_two_copy_single_thread_series() {
    let llc = measurements::llc_misses().unwrap();
    assert_eq!(llc.x_axis(), SweepAxis::MessageSize);
    assert_eq!(
        llc.series_for(Variant::TwoCopy, 1),
        Some(vec![
            (512, 1_182_965.0),
            (1024, 1_650_106.0),
            (2048, 38_389_687.0),
            (4096, 202_979_544.0),
        ])
    );
}

#[test]
fn every_series_has_four_ascending_points() {
    let datasets = [
        measurements::llc_misses().unwrap(),
        measurements::cycles_per_byte().unwrap(),
        measurements::latency_us().unwrap(),
        measurements::throughput_gbps().unwrap(),
    ];
    for ds in &datasets {
        let secondaries = ds.domain().values(ds.x_axis().other()).to_vec();
        for &variant in ds.variants() {
            for &s in &secondaries {
                let points = ds
                    .series_for(variant, s)
                    .unwrap_or_else(|| panic!("{} {variant} {s}", ds.metric_id()));
                assert_eq!(points.len(), 4);
                assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
                assert!(points.iter().all(|&(_, y)| y.is_finite() && y >= 0.0));
            }
        }
    }
}

#[test]
fn latency_runs_along_thread_count() {
    let latency = measurements::latency_us().unwrap();
    assert_eq!(latency.x_axis(), SweepAxis::ThreadCount);
    let xs: Vec<u32> = latency
        .series_for(Variant::ZeroCopy, 4096)
        .unwrap()
        .into_iter()
        .map(|(x, _)| x)
        .collect();
    assert_eq!(xs, vec![1, 2, 4, 8]);
}

#[test]
fn missing_cell_is_reported_with_its_coordinates() {
    let mut table = SweepTable::by_thread_count();
    for variant in Variant::ALL {
        for t in SweepDomain::THREAD_COUNTS {
            if variant == Variant::OneCopy && t == 4 {
                table = table.row(variant, t, &[1.0, 2.0, 3.0]);
            } else {
                table = table.row(variant, t, &[1.0, 2.0, 3.0, 4.0]);
            }
        }
    }
    let err = MetricSweepDataset::from_table(
        MetricMeta::new("partial", "units", "Partial"),
        SweepDomain::standard(),
        &table,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DatasetError::IncompleteData {
            metric: "partial".to_string(),
            variant: Variant::OneCopy,
            thread_count: 4,
            message_size: 4096,
        }
    );
    assert!(err.to_string().contains("4096"));
}

#[test]
fn selected_variant_still_covers_the_full_grid() {
    let tput = measurements::throughput_gbps().unwrap();
    let one = tput.select(Variant::OneCopy).unwrap();
    assert_eq!(one.variants(), &[Variant::OneCopy]);
    assert_eq!(one.cells().count(), 16);
    assert_eq!(
        one.value(Variant::OneCopy, 2, 1024),
        tput.value(Variant::OneCopy, 2, 1024)
    );
    assert_eq!(one.value(Variant::TwoCopy, 2, 1024), None);
}
