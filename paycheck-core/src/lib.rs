pub mod calculations;
pub mod models;

pub use calculations::{PaycheckCalculator, calculate_paycheck};
pub use models::*;
