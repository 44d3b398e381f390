pub mod ids;
pub mod input;
pub mod models;
mod money;
mod result;

pub use ids::AccountId;
pub use models::{CreditCheckOutcome, CreditCheckResponse};
pub use money::{Money, MoneyError};
pub use result::Result;
