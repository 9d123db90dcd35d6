//! Compact number formatting for readouts.

/// Format a number with a magnitude suffix (`k`, `M`, `B`).
///
/// Values below 0.01 in magnitude switch to exponent form with two
/// decimals; zero is always `"0"`.
#[must_use]
pub fn format_number(n: f64, digits: usize) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e9 {
        format!("{:.digits$}B", n / 1e9)
    } else if abs >= 1e6 {
        format!("{:.digits$}M", n / 1e6)
    } else if abs >= 1e3 {
        format!("{:.digits$}k", n / 1e3)
    } else if abs < 0.01 {
        format!("{n:.2e}")
    } else {
        format!("{n:.digits$}")
    }
}
