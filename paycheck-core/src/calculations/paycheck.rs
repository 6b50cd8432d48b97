//! Per-period paycheck breakdown using flat mock rates.
//!
//! # Calculation
//!
//! | Row                | Formula |
//! |--------------------|---------|
//! | Gross Pay          | annual gross / periods |
//! | Pre-Tax Deductions | (annual gross × 5%) / periods |
//! | Taxable Gross      | Gross Pay − Pre-Tax Deductions |
//! | Federal Tax        | Taxable Gross × federal rate |
//! | State Tax          | Taxable Gross × state rate |
//! | FICA               | Gross Pay × FICA rate |
//! | Total Deductions   | Federal + State + FICA + Pre-Tax Deductions |
//! | Net Pay            | Gross Pay − Total Deductions |
//!
//! FICA applies to the full period gross, not to taxable gross. Net pay is
//! not clamped at zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycheck_core::{PayFrequency, PaycheckCalculator};
//!
//! let breakdown = PaycheckCalculator::default().calculate(dec!(120000), PayFrequency::Monthly);
//!
//! assert_eq!(breakdown.gross_period_pay, dec!(10000));
//! assert_eq!(breakdown.net_pay, dec!(6835));
//! assert_eq!(breakdown.summary(), "Net Pay: $6,835.00 (Monthly)");
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::{LineItem, LineItemKind, PRE_TAX_DEDUCTION_RATE, PayFrequency, PaycheckBreakdown, TaxRates};

/// Calculator bound to a set of withholding rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaycheckCalculator {
    rates: TaxRates,
}

impl PaycheckCalculator {
    pub fn new(rates: TaxRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }

    /// Computes the breakdown for one pay period.
    ///
    /// The caller is expected to pass a positive `gross_annual_pay`; there is
    /// no error path here.
    pub fn calculate(
        &self,
        gross_annual_pay: Decimal,
        frequency: PayFrequency,
    ) -> PaycheckBreakdown {
        let periods = frequency.periods_per_year();
        let divisor = Decimal::from(periods);

        let gross_period_pay = gross_annual_pay / divisor;
        let pre_tax_deduction = gross_annual_pay * PRE_TAX_DEDUCTION_RATE / divisor;
        let taxable_gross = gross_period_pay - pre_tax_deduction;

        let federal_tax = taxable_gross * self.rates.federal;
        let state_tax = taxable_gross * self.rates.state;
        let fica_tax = gross_period_pay * self.rates.fica;

        let total_taxes = federal_tax + state_tax + fica_tax;
        let total_deductions = total_taxes + pre_tax_deduction;
        let net_pay = gross_period_pay - total_deductions;

        trace!(%gross_annual_pay, %frequency, %net_pay, "paycheck calculated");

        let line_items = vec![
            LineItem::new(LineItemKind::Gross, gross_period_pay),
            LineItem::new(LineItemKind::PreTaxDeduction, pre_tax_deduction),
            LineItem::new(LineItemKind::TaxableGross, taxable_gross),
            LineItem::new(LineItemKind::FederalTax, federal_tax),
            LineItem::new(LineItemKind::StateTax, state_tax),
            LineItem::new(LineItemKind::Fica, fica_tax),
            LineItem::new(LineItemKind::TotalDeductions, total_deductions),
            LineItem::new(LineItemKind::NetPay, net_pay),
        ];

        PaycheckBreakdown {
            frequency,
            periods,
            gross_period_pay,
            pre_tax_deduction,
            taxable_gross,
            federal_tax,
            state_tax,
            fica_tax,
            total_taxes,
            total_deductions,
            net_pay,
            line_items,
        }
    }
}

/// Shorthand for [`PaycheckCalculator::calculate`] with the mock rates.
pub fn calculate_paycheck(
    gross_annual_pay: Decimal,
    frequency: PayFrequency,
) -> PaycheckBreakdown {
    PaycheckCalculator::default().calculate(gross_annual_pay, frequency)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn rounded(values: &[Decimal]) -> Vec<Decimal> {
        values.iter().copied().map(round_half_up).collect()
    }

    #[test]
    fn monthly_120k_scenario() {
        let b = calculate_paycheck(dec!(120000), PayFrequency::Monthly);

        assert_eq!(b.periods, 12);
        assert_eq!(
            rounded(&[
                b.gross_period_pay,
                b.pre_tax_deduction,
                b.taxable_gross,
                b.federal_tax,
                b.state_tax,
                b.fica_tax,
                b.total_deductions,
                b.net_pay,
            ]),
            vec![
                dec!(10000.00),
                dec!(500.00),
                dec!(9500.00),
                dec!(1425.00),
                dec!(475.00),
                dec!(765.00),
                dec!(3165.00),
                dec!(6835.00),
            ]
        );
    }

    #[test]
    fn weekly_52k_scenario() {
        let b = calculate_paycheck(dec!(52000), PayFrequency::Weekly);

        assert_eq!(b.periods, 52);
        assert_eq!(
            rounded(&[
                b.gross_period_pay,
                b.pre_tax_deduction,
                b.taxable_gross,
                b.federal_tax,
                b.state_tax,
                b.fica_tax,
                b.total_deductions,
                b.net_pay,
            ]),
            vec![
                dec!(1000.00),
                dec!(50.00),
                dec!(950.00),
                dec!(142.50),
                dec!(47.50),
                dec!(76.50),
                dec!(316.50),
                dec!(683.50),
            ]
        );
    }

    #[test]
    fn line_items_are_in_display_order() {
        let b = calculate_paycheck(dec!(65000), PayFrequency::Biweekly);
        let labels: Vec<&str> = b.line_items.iter().map(|i| i.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Gross Pay",
                "Pre-Tax Deductions",
                "Taxable Gross",
                "Federal Tax",
                "State Tax",
                "FICA (SS & Medicare)",
                "Total Deductions",
                "Net Pay (Take-Home)",
            ]
        );
        assert_eq!(
            b.line_items.iter().filter(|i| i.is_highlight).count(),
            1,
            "only the net pay row is highlighted"
        );
        assert!(b.line_items[7].is_highlight);
    }

    #[test]
    fn line_item_values_match_fields() {
        let b = calculate_paycheck(dec!(65000), PayFrequency::Biweekly);
        let values: Vec<Decimal> = b.line_items.iter().map(|i| i.value).collect();

        assert_eq!(
            values,
            vec![
                b.gross_period_pay,
                b.pre_tax_deduction,
                b.taxable_gross,
                b.federal_tax,
                b.state_tax,
                b.fica_tax,
                b.total_deductions,
                b.net_pay,
            ]
        );
    }

    #[test]
    fn fica_uses_full_period_gross() {
        let b = calculate_paycheck(dec!(120000), PayFrequency::Monthly);

        assert_eq!(b.fica_tax, b.gross_period_pay * dec!(0.0765));
        assert_ne!(b.fica_tax, b.taxable_gross * dec!(0.0765));
    }

    #[test]
    fn custom_rates_can_drive_net_pay_negative() {
        let calculator = PaycheckCalculator::new(TaxRates {
            federal: dec!(0.9),
            state: dec!(0.5),
            fica: dec!(0.0765),
        });
        let b = calculator.calculate(dec!(10000), PayFrequency::Annual);

        assert!(b.net_pay < Decimal::ZERO);
        assert_eq!(b.net_pay, b.gross_period_pay - b.total_deductions);
    }

    #[test]
    fn summary_and_clipboard_text() {
        let b = calculate_paycheck(dec!(52000), PayFrequency::Weekly);

        assert_eq!(b.summary(), "Net Pay: $683.50 (Weekly)");
        assert_eq!(
            b.clipboard_text(),
            "Gross Pay: $1,000.00\n\
             Pre-Tax Deductions: $50.00\n\
             Taxable Gross: $950.00\n\
             Federal Tax: $142.50\n\
             State Tax: $47.50\n\
             FICA (SS & Medicare): $76.50\n\
             Total Deductions: $316.50\n\
             Net Pay (Take-Home): $683.50"
        );
    }

    #[test]
    fn calculation_is_deterministic() {
        let a = calculate_paycheck(dec!(87654.32), PayFrequency::Biweekly);
        let b = calculate_paycheck(dec!(87654.32), PayFrequency::Biweekly);

        assert_eq!(a, b);
    }
}
