//! Display formatting for proposal figures.

use rust_decimal::Decimal;

use crate::pricing::calculators::{round_money, MONEY_PLACES};

/// Format an amount with thousands separators and two decimals, e.g. `348,217.88`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_money(amount, MONEY_PLACES);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

/// Plain number without trailing zeros: `3900.0` -> `3900`, `12.50` -> `12.5`
pub fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Tax label derived from the GST rate, e.g. `GST @ 18%`
pub fn tax_label(gst_rate_percent: Decimal) -> String {
    format!("GST @ {}%", format_plain(gst_rate_percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(dec!(348217.88)), "348,217.88");
        assert_eq!(format_money(dec!(1266911.31)), "1,266,911.31");
        assert_eq!(format_money(dec!(999.5)), "999.50");
        assert_eq!(format_money(dec!(1000)), "1,000.00");
        assert_eq!(format_money(dec!(0)), "0.00");
    }

    #[test]
    fn test_format_money_rounds_half_up() {
        assert_eq!(format_money(dec!(10.005)), "10.01");
        assert_eq!(format_money(dec!(123456.784)), "123,456.78");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(dec!(3900)), "3900");
        assert_eq!(format_plain(dec!(3900.0)), "3900");
        assert_eq!(format_plain(dec!(304.80)), "304.8");
    }

    #[test]
    fn test_tax_label() {
        assert_eq!(tax_label(dec!(18)), "GST @ 18%");
        assert_eq!(tax_label(dec!(18.00)), "GST @ 18%");
        assert_eq!(tax_label(dec!(12.5)), "GST @ 12.5%");
        assert_eq!(tax_label(dec!(0)), "GST @ 0%");
    }
}
