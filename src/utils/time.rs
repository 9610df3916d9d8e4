use crate::models::half_day::HalfDay;
use chrono::FixedOffset;

/// Parse an UTC offset string ("+07:00", "-05:30") into a FixedOffset.
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => (1, s),
    };

    let (hh, mm) = rest.split_once(':')?;
    let hours: i32 = hh.parse().ok()?;
    let minutes: i32 = mm.parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Parse an optional AM/PM marker from CLI input.
pub fn parse_optional_half(s: Option<&String>) -> Result<Option<HalfDay>, String> {
    match s {
        None => Ok(None),
        Some(v) => HalfDay::from_input(v)
            .map(Some)
            .ok_or_else(|| format!("Invalid half-day marker '{}'. Use AM or PM.", v)),
    }
}
