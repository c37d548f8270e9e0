//! Human-readable duration strings such as `10s`, `500ms` or `1m30s`.

use std::time::Duration;

/// Parse a duration made of one or more `<number><unit>` terms.
///
/// Units are `ms`, `s`, `m` and `h`. Numbers may carry a fraction (`1.5s`).
///
/// # Errors
///
/// Returns a message naming the offending input when a term has no unit, an
/// unknown unit, or an unparsable number.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("duration cannot be empty".into());
    }

    let mut total = Duration::ZERO;
    let mut rest = s;

    while !rest.is_empty() {
        let unit_start = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration: {input}"))?;
        if unit_start == 0 {
            return Err(format!("invalid duration: {input}"));
        }
        let (number, tail) = rest.split_at(unit_start);

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, remaining) = tail.split_at(unit_end);

        let unit_ms: u64 = match unit {
            "ms" => 1,
            "s" => 1_000,
            "m" => 60_000,
            "h" => 3_600_000,
            _ => return Err(format!("unknown unit '{unit}' in duration: {input}")),
        };

        let step = term(number, unit_ms).ok_or_else(|| format!("invalid duration: {input}"))?;
        total = total
            .checked_add(step)
            .ok_or_else(|| format!("duration too large: {input}"))?;
        rest = remaining;
    }

    Ok(total)
}

fn term(number: &str, unit_ms: u64) -> Option<Duration> {
    if let Ok(whole) = number.parse::<u64>() {
        return whole.checked_mul(unit_ms).map(Duration::from_millis);
    }
    let fractional: f64 = number.parse().ok()?;
    Duration::try_from_secs_f64(fractional * unit_ms as f64 / 1_000.0).ok()
}

/// Serde adapter for durations written as strings in TOML.
pub mod serde_string {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
