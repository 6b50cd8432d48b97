//! Paycheck calculation and money formatting.

pub mod common;
pub mod paycheck;

pub use paycheck::{PaycheckCalculator, calculate_paycheck};
