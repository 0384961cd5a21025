//! pt-BR number formatting and the amount-field input mask.

/// Groups a plain digit string with `.` every three digits, pt-BR style.
fn group_thousands(digits: &str) -> String {
    let chars = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Formats a value as pt-BR currency with two decimals, e.g. `R$ 1.234,56`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("R$ {}", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u128;
    let integer = cents / 100;
    let fraction = cents % 100;
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(&integer.to_string()),
        fraction
    )
}

/// Formats a percentage with two decimals, e.g. `12,35%`.
///
/// The input is the percentage itself (`12.35` renders as `12,35%`), matching
/// how the page displays allocation shares.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let hundredths = (value.abs() * 100.0).round() as u128;
    let integer = hundredths / 100;
    let fraction = hundredths % 100;
    format!(
        "{}{},{:02}%",
        sign,
        group_thousands(&integer.to_string()),
        fraction
    )
}

/// Currency input mask for the amount field.
///
/// Keeps only digits, `,` and `.`; the last separator typed wins as the
/// decimal separator and is normalized to `,`; the integer portion is
/// regrouped with `.` every three digits. Re-running the mask over its own
/// output leaves it unchanged.
pub fn mask_amount(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.chars().all(|c| c.is_ascii_digit()) {
        return group_thousands(&cleaned);
    }

    // A value like "1.234.567" is a grouped integer, not a decimal.
    if is_grouped_integer(&cleaned) {
        return cleaned;
    }

    let last_sep = cleaned
        .rfind(|c| c == ',' || c == '.')
        .unwrap_or(cleaned.len());
    let integer: String = cleaned[..last_sep]
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let decimal: String = cleaned[last_sep..]
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    format!("{},{}", group_thousands(&integer), decimal)
}

/// Parses a masked amount (`1.234,56`) back into a number.
pub fn parse_amount(masked: &str) -> Option<f64> {
    let normalized: String = masked
        .trim()
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

fn is_grouped_integer(value: &str) -> bool {
    let mut groups = value.split('.');
    match groups.next() {
        Some(first) if !first.is_empty() && first.len() <= 3 => {}
        _ => return false,
    }
    let mut rest = 0usize;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        rest += 1;
    }
    rest > 0 && !value.contains(',')
}
