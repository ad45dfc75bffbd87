use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A normalized sort key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Float(f64),
    Int(i64),
}

impl MetricValue {
    /// Total order over values of the same kind. Floats use `total_cmp`, so
    /// NaN ranks above +inf. Values of different kinds compare equal.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MetricValue::Float(a), MetricValue::Float(b)) => a.total_cmp(b),
            (MetricValue::Int(a), MetricValue::Int(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Float(v) => f.write_str(&format_float(*v)),
            MetricValue::Int(v) => write!(f, "{}", v),
        }
    }
}

/// Shortest round-trip rendering with a mandatory fractional part, and a
/// signed two-digit exponent when scientific notation kicks in
/// ("5.0", "12.5", "1e+16", "2.5e-05").
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already picks the shortest representation and switches to
    // exponent form outside [1e-4, 1e16).
    let s = format!("{:?}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}
