//! Formatting utilities used for CLI and export outputs.

/// Render a fractional day amount ("1", "0.5", "2.75"), optionally signed.
pub fn fmt_days(days: f64, want_sign: bool) -> String {
    let sign = if days > 0.0 && want_sign {
        "+"
    } else {
        "" // negatives carry their own sign
    };

    // drop trailing zeros: 1.00 → "1", 0.50 → "0.5"
    let mut s = format!("{:.2}", days);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }

    format!("{}{}", sign, s)
}
