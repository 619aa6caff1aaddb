/// Formats a balance for display. Precision follows magnitude so dust is
/// still legible in exponential form while large balances stay compact.
///
/// Buckets: 0 -> "0"; below 0.001 -> 2-digit exponential; below 1 -> six
/// fractional digits; below 1000 -> three; otherwise two.
pub fn format_balance(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value < 0.001 {
        format!("{:.2e}", value)
    } else if value < 1.0 {
        format!("{:.6}", value)
    } else if value < 1000.0 {
        format!("{:.3}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_bare() {
        assert_eq!(format_balance(0.0), "0");
    }

    #[test]
    fn dust_uses_exponential_notation() {
        assert_eq!(format_balance(0.0005), "5.00e-4");
        assert_eq!(format_balance(0.000123), "1.23e-4");
        assert_eq!(format_balance(0.00000001), "1.00e-8");
    }

    #[test]
    fn sub_unit_values_get_six_digits() {
        assert_eq!(format_balance(0.5), "0.500000");
        assert_eq!(format_balance(0.001), "0.001000");
        assert_eq!(format_balance(0.999999), "0.999999");
    }

    #[test]
    fn small_balances_get_three_digits() {
        assert_eq!(format_balance(1.0), "1.000");
        assert_eq!(format_balance(500.0), "500.000");
        assert_eq!(format_balance(999.5), "999.500");
    }

    #[test]
    fn large_balances_get_two_digits() {
        assert_eq!(format_balance(1000.0), "1000.00");
        assert_eq!(format_balance(1500.0), "1500.00");
        assert_eq!(format_balance(118423.0), "118423.00");
    }
}
