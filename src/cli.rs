use clap::Parser;
use std::path::PathBuf;

use crate::report::MetricKind;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory the figures are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub out_dir: PathBuf,

    /// Path to config TOML (created with commented defaults if missing)
    #[arg(long)]
    pub config: Option<String>,

    /// Render only these figures (repeatable; default: all)
    #[arg(long, value_enum)]
    pub metric: Vec<MetricKind>,
}

impl Args {
    pub fn metrics(&self) -> Vec<MetricKind> {
        if self.metric.is_empty() {
            MetricKind::ALL.to_vec()
        } else {
            self.metric.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_renders_everything_here() {
        let args = Args::try_parse_from(["ipc-charts"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(args.config.is_none());
        assert_eq!(args.metrics(), MetricKind::ALL.to_vec());
    }

    #[test]
    fn metric_filter_and_out_dir() {
        let args = Args::try_parse_from([
            "ipc-charts",
            "--out-dir",
            "plots",
            "--metric",
            "latency",
            "--metric",
            "cycles-per-byte",
        ])
        .unwrap();
        assert_eq!(args.out_dir, PathBuf::from("plots"));
        assert_eq!(
            args.metrics(),
            vec![MetricKind::Latency, MetricKind::CyclesPerByte]
        );
    }

    #[test]
    fn unknown_metric_is_rejected() {
        assert!(Args::try_parse_from(["ipc-charts", "--metric", "power"]).is_err());
    }
}
