//! core/sweep.rs: IPC variants, sweep axes and domains.
//!
//! A sweep is the cross product variants × thread counts × message sizes.
//! `SweepDomain` carries the concrete values so several sweeps with
//! different domains can coexist in one process.

use std::fmt;

use crate::core::error::DatasetError;

/// IPC implementation strategy under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    TwoCopy,
    OneCopy,
    ZeroCopy,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::TwoCopy, Variant::OneCopy, Variant::ZeroCopy];

    pub fn id(self) -> &'static str {
        match self {
            Variant::TwoCopy => "two_copy",
            Variant::OneCopy => "one_copy",
            Variant::ZeroCopy => "zero_copy",
        }
    }

    /// Default panel title, naming the syscall path each variant exercises.
    pub fn panel_title(self) -> &'static str {
        match self {
            Variant::TwoCopy => "A1: Two-Copy (send/recv)",
            Variant::OneCopy => "A2: One-Copy (sendmsg + iovec)",
            Variant::ZeroCopy => "A3: Zero-Copy (MSG_ZEROCOPY)",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Independent experimental parameter varied across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SweepAxis {
    MessageSize,
    ThreadCount,
}

impl SweepAxis {
    pub fn other(self) -> Self {
        match self {
            SweepAxis::MessageSize => SweepAxis::ThreadCount,
            SweepAxis::ThreadCount => SweepAxis::MessageSize,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            SweepAxis::MessageSize => "Message Size (bytes)",
            SweepAxis::ThreadCount => "Number of Threads",
        }
    }

    /// Legend label for one value of this axis used as the series dimension.
    pub fn series_label(self, value: u32) -> String {
        match self {
            SweepAxis::MessageSize => format!("{value} bytes"),
            SweepAxis::ThreadCount if value == 1 => "1 Thread".to_string(),
            SweepAxis::ThreadCount => format!("{value} Threads"),
        }
    }
}

/// Concrete values of a sweep. Each domain is non-empty, positive and
/// strictly ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepDomain {
    variants: Vec<Variant>,
    message_sizes: Vec<u32>,
    thread_counts: Vec<u32>,
}

impl SweepDomain {
    pub const MESSAGE_SIZES: [u32; 4] = [512, 1024, 2048, 4096];
    pub const THREAD_COUNTS: [u32; 4] = [1, 2, 4, 8];

    pub fn new(
        variants: Vec<Variant>,
        message_sizes: Vec<u32>,
        thread_counts: Vec<u32>,
    ) -> Result<Self, DatasetError> {
        if variants.is_empty() {
            return Err(DatasetError::InvalidDomain {
                reason: "no variants".to_string(),
            });
        }
        for (i, v) in variants.iter().enumerate() {
            if variants[..i].contains(v) {
                return Err(DatasetError::InvalidDomain {
                    reason: format!("variant {v} listed twice"),
                });
            }
        }
        check_axis_values("message_sizes", &message_sizes)?;
        check_axis_values("thread_counts", &thread_counts)?;
        Ok(Self {
            variants,
            message_sizes,
            thread_counts,
        })
    }

    /// All three variants over {512,1024,2048,4096} × {1,2,4,8}.
    pub fn standard() -> Self {
        Self {
            variants: Variant::ALL.to_vec(),
            message_sizes: Self::MESSAGE_SIZES.to_vec(),
            thread_counts: Self::THREAD_COUNTS.to_vec(),
        }
    }

    /// Same axis values, a single variant.
    pub fn restricted_to(&self, variant: Variant) -> Self {
        Self {
            variants: vec![variant],
            message_sizes: self.message_sizes.clone(),
            thread_counts: self.thread_counts.clone(),
        }
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn message_sizes(&self) -> &[u32] {
        &self.message_sizes
    }

    pub fn thread_counts(&self) -> &[u32] {
        &self.thread_counts
    }

    pub fn values(&self, axis: SweepAxis) -> &[u32] {
        match axis {
            SweepAxis::MessageSize => &self.message_sizes,
            SweepAxis::ThreadCount => &self.thread_counts,
        }
    }

    pub fn contains_variant(&self, variant: Variant) -> bool {
        self.variants.contains(&variant)
    }

    /// True when both domains sweep the same axis values, regardless of
    /// which variants they cover.
    pub fn same_axes(&self, other: &SweepDomain) -> bool {
        self.message_sizes == other.message_sizes && self.thread_counts == other.thread_counts
    }

    /// Number of cells in the full grid.
    pub fn n_cells(&self) -> usize {
        self.variants.len() * self.message_sizes.len() * self.thread_counts.len()
    }
}

fn check_axis_values(name: &str, values: &[u32]) -> Result<(), DatasetError> {
    if values.is_empty() {
        return Err(DatasetError::InvalidDomain {
            reason: format!("{name} is empty"),
        });
    }
    if values.contains(&0) {
        return Err(DatasetError::InvalidDomain {
            reason: format!("{name} contains 0"),
        });
    }
    if values.windows(2).any(|w| w[0] >= w[1]) {
        return Err(DatasetError::InvalidDomain {
            reason: format!("{name} must be strictly ascending: {values:?}"),
        });
    }
    Ok(())
}

/// Address of one measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub variant: Variant,
    pub thread_count: u32,
    pub message_size: u32,
}

impl CellKey {
    pub fn new(variant: Variant, thread_count: u32, message_size: u32) -> Self {
        Self {
            variant,
            thread_count,
            message_size,
        }
    }

    /// Build a key from a value on `x_axis` and a value on the other axis.
    pub fn along(variant: Variant, x_axis: SweepAxis, x: u32, secondary: u32) -> Self {
        match x_axis {
            SweepAxis::MessageSize => Self::new(variant, secondary, x),
            SweepAxis::ThreadCount => Self::new(variant, x, secondary),
        }
    }

    pub fn coordinate(&self, axis: SweepAxis) -> u32 {
        match axis {
            SweepAxis::MessageSize => self.message_size,
            SweepAxis::ThreadCount => self.thread_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_labels_follow_axis() {
        assert_eq!(SweepAxis::ThreadCount.series_label(1), "1 Thread");
        assert_eq!(SweepAxis::ThreadCount.series_label(8), "8 Threads");
        assert_eq!(SweepAxis::MessageSize.series_label(2048), "2048 bytes");
    }

    #[test]
    fn domain_rejects_unsorted_and_duplicate_values() {
        let err = SweepDomain::new(Variant::ALL.to_vec(), vec![1024, 512], vec![1, 2]);
        assert!(matches!(err, Err(DatasetError::InvalidDomain { .. })));

        let err = SweepDomain::new(
            vec![Variant::OneCopy, Variant::OneCopy],
            vec![512],
            vec![1],
        );
        assert!(matches!(err, Err(DatasetError::InvalidDomain { .. })));

        let err = SweepDomain::new(vec![Variant::OneCopy], vec![], vec![1]);
        assert!(matches!(err, Err(DatasetError::InvalidDomain { .. })));
    }

    #[test]
    fn cell_key_along_swaps_axes() {
        let by_size = CellKey::along(Variant::TwoCopy, SweepAxis::MessageSize, 512, 4);
        let by_threads = CellKey::along(Variant::TwoCopy, SweepAxis::ThreadCount, 4, 512);
        assert_eq!(by_size, by_threads);
        assert_eq!(by_size.coordinate(SweepAxis::MessageSize), 512);
        assert_eq!(by_size.coordinate(SweepAxis::ThreadCount), 4);
    }

    #[test]
    fn restricted_domain_keeps_axes() {
        let full = SweepDomain::standard();
        let one = full.restricted_to(Variant::ZeroCopy);
        assert_eq!(one.variants(), &[Variant::ZeroCopy]);
        assert!(one.same_axes(&full));
        assert_eq!(full.n_cells(), 48);
    }
}
