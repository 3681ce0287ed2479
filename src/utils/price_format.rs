/// Placeholder shown for values the API did not report.
pub const UNAVAILABLE: &str = "unavailable";

/// `4.0` renders as `4 vCPUs`, fractional shares keep their decimals (`0.5 vCPUs`).
pub fn format_cpus(cpus: f64) -> String {
    format!("{} vCPUs", cpus)
}

pub fn format_memory(gigabytes: f64) -> String {
    format!("{:.2} GB", gigabytes)
}

/// Hourly price in dollars with five decimal places.
pub fn format_price(dollars: f64) -> String {
    format!("${:.5}", dollars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpus_drop_trailing_zero() {
        assert_eq!(format_cpus(4.0), "4 vCPUs");
        assert_eq!(format_cpus(0.5), "0.5 vCPUs");
    }

    #[test]
    fn memory_has_two_decimals() {
        assert_eq!(format_memory(8.0), "8.00 GB");
        assert_eq!(format_memory(0.613), "0.61 GB");
    }

    #[test]
    fn price_has_five_decimals() {
        assert_eq!(format_price(0.1), "$0.10000");
        assert_eq!(format_price((0.05 + 0.07) / 2.0), "$0.06000");
        assert_eq!(format_price(1.234567), "$1.23457");
    }
}
