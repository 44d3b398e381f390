mod credit_check_response;
mod outcome;

pub use credit_check_response::CreditCheckResponse;
pub use outcome::CreditCheckOutcome;
