use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat share of annual salary withheld before tax (mock benefits deduction).
pub const PRE_TAX_DEDUCTION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Flat withholding rates, expressed as fractions.
///
/// These are mock values for demonstration; real withholding depends on
/// brackets, filing status and jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    pub federal: Decimal,
    pub state: Decimal,
    /// Social Security + Medicare.
    pub fica: Decimal,
}

impl TaxRates {
    /// 15% federal, 5% state, 7.65% FICA.
    pub fn mock() -> Self {
        Self {
            federal: Decimal::new(15, 2),
            state: Decimal::new(5, 2),
            fica: Decimal::new(765, 4),
        }
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        Self::mock()
    }
}
