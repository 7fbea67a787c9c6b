//! Display strings for metric cards: currency, percentages, unit suffixes.

use crate::metric::PerformanceMetric;

/// `$` prefix, thousands separators, no cents.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Render `value` with its unit the way metric cards show it.
pub fn format_value(value: f64, unit: &str) -> String {
    match unit {
        "$" => format_currency(value),
        "%" => format!("{}%", format_number(value)),
        "/5" => format!("{}/5", format_number(value)),
        _ => format!("{} {unit}", format_number(value)),
    }
}

/// Rounded progress label, e.g. `"85%"`.
pub fn format_progress(progress: f64) -> String {
    format!("{:.0}%", progress.round())
}

/// One-line card text: label, value, target and progress.
pub fn format_metric_line(metric: &PerformanceMetric) -> String {
    format!(
        "{}: {} of {} ({})",
        metric.label,
        format_value(metric.current_value, &metric.unit),
        format_value(metric.target_value, &metric.unit),
        format_progress(metric.progress),
    )
}

/// Integral values without decimals, fractional values with one.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
