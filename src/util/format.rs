//! Number rendering for the result panel and crop cards.

const MAX_FRACTION_DIGITS: usize = 3;

/// Groups thousands with `,` and keeps at most three fraction digits (`34720` -> `34,720`).
pub fn format_number(value: f64) -> String {
    if let Some(label) = non_finite_label(value) {
        return label.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Plain rendering for multipliers and factor labels (`140`, `2.5`).
pub fn format_multiplier(value: f64) -> String {
    match non_finite_label(value) {
        Some(label) => label.to_string(),
        None if value == 0.0 => "0".to_string(),
        None => value.to_string(),
    }
}

fn non_finite_label(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(34_720.0), "34,720");
        assert_eq!(format_number(248.0), "248");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(100_000.0), "100,000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(2.0004), "2");
        assert_eq!(format_number(9.9996), "10");
    }

    #[test]
    fn handles_signs_and_non_finite_values() {
        assert_eq!(format_number(-4200.0), "-4,200");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn multipliers_render_plainly() {
        assert_eq!(format_multiplier(140.0), "140");
        assert_eq!(format_multiplier(2.5), "2.5");
        assert_eq!(format_multiplier(-0.0), "0");
        assert_eq!(format_multiplier(15000.0), "15000");
    }
}
