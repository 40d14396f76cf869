//! Number formatting shared by every frontend.

/// Shown in place of a metric the provider has no figure for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a metric with comma thousands separators, or [`NOT_AVAILABLE`].
pub fn format_metric(value: Option<u64>) -> String {
    match value {
        Some(value) => group_thousands(value),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_metric(Some(0)), "0");
        assert_eq!(format_metric(Some(999)), "999");
        assert_eq!(format_metric(Some(1000)), "1,000");
        assert_eq!(format_metric(Some(246_000)), "246,000");
        assert_eq!(format_metric(Some(1_234_567)), "1,234,567");
        assert_eq!(
            format_metric(Some(u64::MAX)),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn absent_metric_uses_sentinel() {
        assert_eq!(format_metric(None), "N/A");
    }
}
