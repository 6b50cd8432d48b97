use rust_decimal::Decimal;
use thiserror::Error;

/// Why a gross pay entry was rejected by the calculator form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrossPayError {
    #[error("gross pay is required")]
    Empty,

    #[error("invalid gross pay '{input}'")]
    NotANumber { input: String },

    #[error("gross pay must be greater than zero, got {0}")]
    NotPositive(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses the gross annual pay field into a positive [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"120,000"`) and ignores a
/// leading `$`. Zero and negative amounts are rejected.
pub fn parse_gross_pay(s: &str) -> Result<Decimal, GrossPayError> {
    let normalized = normalize_decimal_input(s);
    let normalized = normalized.strip_prefix('$').unwrap_or(&normalized);
    if normalized.is_empty() {
        return Err(GrossPayError::Empty);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid gross pay: {}", e);
        GrossPayError::NotANumber {
            input: s.to_string(),
        }
    })?;

    if value <= Decimal::ZERO {
        return Err(GrossPayError::NotPositive(value));
    }
    Ok(value)
}
