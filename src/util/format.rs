//! Display formatting for calculator outputs. Numbers stay numeric until they
//! reach these helpers.

pub const CURRENCY_SYMBOL: &str = "£";

/// Thousands-separated number with at most two fraction digits, trailing
/// zeros trimmed (`2550000` → `2,550,000`, `1234.5` → `1,234.5`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "–".to_string();
    }

    // Decimal text keeps every whole digit, however large the value.
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let is_zero = whole.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    let whole = group_digits(whole);

    if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_number(value))
}

pub fn format_hours(value: f64) -> String {
    format!("{} hrs", format_number(value))
}

/// Compact form used on the chart's hour axis.
pub fn format_hours_tick(value: f64) -> String {
    format!("{}hrs", format_number(value))
}

pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
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
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(2_550_000.0), "2,550,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn keeps_at_most_two_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(36_428.571), "36,428.57");
        assert_eq!(format_number(2.999), "3");
        assert_eq!(format_number(0.05), "0.05");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_number(-1500.25), "-1,500.25");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn currency_and_hours_affixes() {
        assert_eq!(format_currency(2_550_000.0), "£2,550,000");
        assert_eq!(format_hours(51_000.0), "51,000 hrs");
        assert_eq!(format_hours_tick(12_345.0), "12,345hrs");
    }

    #[test]
    fn values_beyond_u64_keep_every_digit() {
        assert_eq!(format_number(1.8e19), "18,000,000,000,000,000,000");
        assert_eq!(format_currency(5.1e19), "£51,000,000,000,000,000,000");
        assert_eq!(format_hours_tick(-2e20), "-200,000,000,000,000,000,000hrs");
    }

    #[test]
    fn large_money_agrees_with_bursary_count() {
        let money: f64 = 5.1e19;
        let bursaries = (money / 1000.0).floor() as u64;
        assert_eq!(format_count(bursaries), "51,000,000,000,000,000");
        assert_eq!(format_currency(money), "£51,000,000,000,000,000,000");
    }

    #[test]
    fn non_finite_values_render_as_dash() {
        assert_eq!(format_number(f64::NAN), "–");
    }
}
