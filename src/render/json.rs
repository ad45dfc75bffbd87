use crate::metric::MetricValue;
use crate::model::Report;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    metric: &'static str,
    unit: &'static str,
    entries: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    function: &'a str,
    value: MetricValue,
    unit: &'static str,
    calls: &'a str,
}

/// Render the report as pretty-printed JSON. Non-finite floats become null.
pub fn render_json(report: &Report) -> anyhow::Result<String> {
    let unit = report.metric.unit();
    let doc = JsonReport {
        metric: report.metric.field_name(),
        unit,
        entries: report
            .entries
            .iter()
            .map(|e| JsonEntry {
                function: &e.function,
                value: e.value,
                unit,
                calls: &e.calls,
            })
            .collect(),
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
