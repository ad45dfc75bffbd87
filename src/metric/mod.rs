//! Sort metrics: which column is normalized, how, and how it is labelled.

pub mod value;

pub use value::MetricValue;

use crate::profile::ProfileRow;
use anyhow::{Context, anyhow};
use clap::ValueEnum;

/// Length (in characters) of the unit suffix stripped from time columns.
pub const SUFFIX_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Total time per function (column 2), parsed as a float, reported in ms.
    #[value(name = "total")]
    TotalTime,
    /// Self time per function (column 3), parsed as an integer, reported in ns.
    #[value(name = "self")]
    SelfTime,
}

impl Metric {
    pub fn field_name(self) -> &'static str {
        match self {
            Metric::TotalTime => "total_time",
            Metric::SelfTime => "self_time",
        }
    }

    /// Unit printed after the value. Independent of the suffix in the input.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::TotalTime => "ms",
            Metric::SelfTime => "ns",
        }
    }

    /// Column label used in the text report.
    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalTime => "Time",
            Metric::SelfTime => "Self Time",
        }
    }

    pub fn raw_field(self, row: &ProfileRow) -> &str {
        match self {
            Metric::TotalTime => &row.total_time,
            Metric::SelfTime => &row.self_time,
        }
    }

    /// Strip the unit suffix from this metric's column and parse the rest.
    ///
    /// The suffix is not checked: any two trailing characters are dropped.
    pub fn normalize(self, row: &ProfileRow) -> anyhow::Result<MetricValue> {
        let raw = self.raw_field(row);
        let digits = strip_suffix(raw).ok_or_else(|| {
            anyhow!(
                "line {}: {} {:?} is shorter than its {}-character unit suffix",
                row.line,
                self.field_name(),
                raw,
                SUFFIX_LEN
            )
        })?;

        let value = match self {
            Metric::TotalTime => digits.parse::<f64>().map(MetricValue::Float).with_context(|| {
                format!(
                    "line {}: {} {:?}: {:?} is not a number",
                    row.line,
                    self.field_name(),
                    raw,
                    digits
                )
            })?,
            Metric::SelfTime => digits.parse::<i64>().map(MetricValue::Int).with_context(|| {
                format!(
                    "line {}: {} {:?}: {:?} is not an integer",
                    row.line,
                    self.field_name(),
                    raw,
                    digits
                )
            })?,
        };
        Ok(value)
    }
}

/// Drop the last `SUFFIX_LEN` characters. None if the text is too short.
fn strip_suffix(raw: &str) -> Option<&str> {
    let (idx, _) = raw.char_indices().rev().nth(SUFFIX_LEN - 1)?;
    Some(&raw[..idx])
}
