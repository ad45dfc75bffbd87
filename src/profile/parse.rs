use crate::profile::row::ProfileRow;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Minimum number of whitespace-separated columns on a data line.
const MIN_FIELDS: usize = 3;

/// Read a profile table from disk and parse it into rows (file order).
pub fn parse_profile_file(path: &Path) -> anyhow::Result<Vec<ProfileRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read profile file {}", path.display()))?;
    parse_profile_str(&text, &path.display().to_string())
}

/// Parse profile table text. `origin` is only used in error messages.
///
/// Expected columns (whitespace-separated):
/// calls  total_time  self_time  [ignored...]  function
///
/// Example:
/// 10   5.00ms   200ns   foo
pub fn parse_profile_str(text: &str, origin: &str) -> anyhow::Result<Vec<ProfileRow>> {
    // "\n", "\r\n" and a lone "\r" all end a line.
    let line_break = Regex::new(r"\r\n|\r|\n")?;

    let mut out = Vec::new();
    for (lineno, line) in line_break.split(text).enumerate() {
        let lno = lineno + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            bail!(
                "profile parse error at {}:{}: expected at least {} fields, found {}: {:?}",
                origin,
                lno,
                MIN_FIELDS,
                fields.len(),
                line
            );
        }

        out.push(ProfileRow {
            line: lno,
            calls: fields[0].to_string(),
            total_time: fields[1].to_string(),
            self_time: fields[2].to_string(),
            function: fields[fields.len() - 1].to_string(),
            name_is_self_time: fields.len() == MIN_FIELDS,
        });
    }

    Ok(out)
}
