use ccr::{input::CreditCheckInput, Result};

use std::{env, ffi::OsString};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),
}

const USAGE: &str = "usage: credit-check <account> <value> <pass|fail> [reason]";

/// Parses the input arguments into a raw credit check: account, value, pass/fail flag and an optional reason
pub fn parse_input_args() -> Result<CreditCheckInput> {
    return input_from_args(env::args_os().skip(1));
}

fn input_from_args(args: impl Iterator<Item = OsString>) -> Result<CreditCheckInput> {
    let mut args = args
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| InputArgsError::Parse(format!("argument is not valid UTF-8: {arg:?}")))
        })
        .collect::<std::result::Result<Vec<String>, InputArgsError>>()?
        .into_iter();

    let mut next = |name: &str| {
        args.next()
            .ok_or_else(|| InputArgsError::Parse(format!("missing {name}. {USAGE}")))
    };

    let account = next("account")?;
    let value = next("value")?;
    let pass_fail = next("pass/fail flag")?;
    let reason = args.next();

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("unexpected argument {extra:?}. {USAGE}")))?
    }

    return Ok(CreditCheckInput {
        account,
        value,
        pass_fail,
        reason,
    });
}
