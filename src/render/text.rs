use crate::model::Report;

/// One line per entry:
/// `Function: <name>, <label>: <value><unit>, Calls: <calls>`
pub fn render_text(report: &Report) -> String {
    let label = report.metric.label();
    let unit = report.metric.unit();

    report
        .entries
        .iter()
        .map(|e| {
            format!(
                "Function: {}, {}: {}{}, Calls: {}\n",
                e.function, label, e.value, unit, e.calls
            )
        })
        .collect()
}
