//! Money helpers shared by the calculator and the UI.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value as US dollars: `$` prefix, comma thousands separators,
/// two fraction digits and a leading minus sign for negative amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::format_usd;
///
/// assert_eq!(format_usd(dec!(6835)), "$6,835.00");
/// assert_eq!(format_usd(dec!(-1234.5)), "-$1,234.50");
/// ```
pub fn format_usd(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_repeating_fractions() {
        let third = dec!(100) / dec!(3);

        assert_eq!(round_half_up(third), dec!(33.33));
    }

    // =========================================================================
    // format_usd tests
    // =========================================================================

    #[test]
    fn format_usd_pads_two_fraction_digits() {
        assert_eq!(format_usd(dec!(142.5)), "$142.50");
        assert_eq!(format_usd(dec!(1000)), "$1,000.00");
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(999.99)), "$999.99");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(120000)), "$120,000.00");
    }

    #[test]
    fn format_usd_prefixes_minus_before_symbol() {
        assert_eq!(format_usd(dec!(-50)), "-$50.00");
        assert_eq!(format_usd(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn format_usd_renders_zero_without_sign() {
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn format_usd_rounds_half_up() {
        assert_eq!(format_usd(dec!(0.005)), "$0.01");
        assert_eq!(format_usd(dec!(384.6153846)), "$384.62");
    }
}
