use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PayFrequency;
use crate::calculations::common::format_usd;

/// What a breakdown row represents; drives row styling in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItemKind {
    Gross,
    PreTaxDeduction,
    TaxableGross,
    FederalTax,
    StateTax,
    Fica,
    TotalDeductions,
    NetPay,
}

impl LineItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gross => "Gross Pay",
            Self::PreTaxDeduction => "Pre-Tax Deductions",
            Self::TaxableGross => "Taxable Gross",
            Self::FederalTax => "Federal Tax",
            Self::StateTax => "State Tax",
            Self::Fica => "FICA (SS & Medicare)",
            Self::TotalDeductions => "Total Deductions",
            Self::NetPay => "Net Pay (Take-Home)",
        }
    }
}

/// One row of the breakdown. `value` is unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub value: Decimal,
    pub is_highlight: bool,
    pub kind: LineItemKind,
}

impl LineItem {
    pub fn new(
        kind: LineItemKind,
        value: Decimal,
    ) -> Self {
        Self {
            label: kind.label().to_string(),
            value,
            is_highlight: kind == LineItemKind::NetPay,
            kind,
        }
    }

    pub fn formatted_value(&self) -> String {
        format_usd(self.value)
    }
}

/// Result of a single paycheck calculation, for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    pub frequency: PayFrequency,
    pub periods: u32,

    pub gross_period_pay: Decimal,
    pub pre_tax_deduction: Decimal,
    pub taxable_gross: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub fica_tax: Decimal,
    pub total_taxes: Decimal,
    pub total_deductions: Decimal,
    pub net_pay: Decimal,

    /// Always eight rows, in display order, net pay last.
    pub line_items: Vec<LineItem>,
}

impl PaycheckBreakdown {
    pub fn formatted_net_pay(&self) -> String {
        format_usd(self.net_pay)
    }

    /// `Net Pay: $6,835.00 (Monthly)`
    pub fn summary(&self) -> String {
        format!(
            "Net Pay: {} ({})",
            self.formatted_net_pay(),
            self.frequency.label()
        )
    }

    /// One `label: value` line per row, in row order.
    pub fn clipboard_text(&self) -> String {
        self.line_items
            .iter()
            .map(|item| format!("{}: {}", item.label, item.formatted_value()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn only_net_pay_is_highlighted() {
        assert!(LineItem::new(LineItemKind::NetPay, dec!(1)).is_highlight);
        assert!(!LineItem::new(LineItemKind::TotalDeductions, dec!(1)).is_highlight);
    }

    #[test]
    fn line_item_label_comes_from_kind() {
        let item = LineItem::new(LineItemKind::Fica, dec!(76.5));

        assert_eq!(item.label, "FICA (SS & Medicare)");
        assert_eq!(item.formatted_value(), "$76.50");
    }
}
