//! Report model: normalize rows for one metric and order them.

use crate::Result;
use crate::metric::{Metric, MetricValue};
use crate::profile::ProfileRow;
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub function: String,
    pub value: MetricValue,
    /// Call count exactly as it appeared in the input.
    pub calls: String,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub metric: Metric,
    /// Entries sorted by value, descending.
    pub entries: Vec<Entry>,
}

/// Knobs applied after parsing.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub metric: Metric,
    /// Keep only functions whose name matches.
    pub filter: Option<Regex>,
    /// Keep at most this many entries after sorting.
    pub top: Option<usize>,
}

impl ReportOptions {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            filter: None,
            top: None,
        }
    }
}

/// Build report data. Every row is normalized before anything is filtered,
/// so a bad value anywhere in the file aborts the whole report.
pub fn build_report(rows: Vec<ProfileRow>, opts: &ReportOptions) -> Result<Report> {
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let value = opts.metric.normalize(&row)?;
        // With three columns the name shares the self-time column, so it
        // reports the normalized value rather than the raw text.
        let function = if row.name_is_self_time && opts.metric == Metric::SelfTime {
            value.to_string()
        } else {
            row.function
        };
        entries.push(Entry {
            function,
            value,
            calls: row.calls,
        });
    }

    // Stable: equal keys keep file order.
    entries.sort_by(|a, b| b.value.total_cmp(&a.value));

    if let Some(re) = &opts.filter {
        entries.retain(|e| re.is_match(&e.function));
    }
    if let Some(n) = opts.top {
        entries.truncate(n);
    }

    Ok(Report {
        metric: opts.metric,
        entries,
    })
}
