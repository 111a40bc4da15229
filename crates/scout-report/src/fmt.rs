//! Small formatting helpers shared by the synthesis stages.

/// Format a dollar amount with thousands separators and no cents,
/// e.g. `1250.0` → `"$1,250"`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Round to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1250.0), "$1,250");
        assert_eq!(format_usd(2_450_000.0), "$2,450,000");
        assert_eq!(format_usd(-1500.0), "-$1,500");
    }

    #[test]
    fn round1_half_up() {
        assert!((round1(71.25) - 71.3).abs() < f64::EPSILON);
        assert!((round1(0.0) - 0.0).abs() < f64::EPSILON);
    }
}
