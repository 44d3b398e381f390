use crate::CreditCheckResponse;
use crate::Money;
use crate::Result;

use thiserror::Error;

/// Represents a credit check result as raw text, before any parsing
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCheckInput {
    pub account: String,
    pub value: String,
    pub pass_fail: String,
    pub reason: Option<String>,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input: pass/fail flag must be one of pass, passed, true, fail, failed, false: {0:?}")]
    PassFail(String),
}

impl CreditCheckInput {
    pub fn parse_response(self) -> Result<CreditCheckResponse> {
        let value = Money::parse(&self.value)?;
        let pass_fail = parse_pass_fail(&self.pass_fail)?;

        log::debug!("Parsed value {value} and pass/fail flag {pass_fail} for account {:?}", self.account);

        return Ok(CreditCheckResponse::new(self.account, value, pass_fail, self.reason));
    }
}

fn parse_pass_fail(flag: &str) -> Result<bool> {
    let pass_fail = match flag.trim().to_ascii_lowercase().as_str() {
        "pass" | "passed" | "true" => true,
        "fail" | "failed" | "false" => false,
        _ => Err(InputParseError::PassFail(flag.to_string()))?,
    };

    return Ok(pass_fail);
}
