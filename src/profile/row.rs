/// A single function row from the profile table.
///
/// Only the first three columns and the last one carry meaning; anything in
/// between is dropped during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    /// 1-based line number in the source file.
    pub line: usize,
    /// Call count, kept verbatim.
    pub calls: String,
    /// Total time with its unit suffix, e.g. "12.5ms".
    pub total_time: String,
    /// Self time with its unit suffix, e.g. "340ns".
    pub self_time: String,
    pub function: String,
    /// The line had exactly three columns, so the name column is also the
    /// self-time column.
    pub name_is_self_time: bool,
}
