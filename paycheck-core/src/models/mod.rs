mod breakdown;
mod pay_frequency;
mod tax_rates;

pub use breakdown::{LineItem, LineItemKind, PaycheckBreakdown};
pub use pay_frequency::{ParseFrequencyError, PayFrequency};
pub use tax_rates::{PRE_TAX_DEDUCTION_RATE, TaxRates};
