use ccr::{CreditCheckOutcome, CreditCheckResponse, Money};

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn library_examples() {
    let passed = CreditCheckResponse::new(
        "ACC-123",
        Money::parse("500.00").unwrap(),
        true,
        Some("ignored".to_string()),
    );

    assert_eq!(passed.reason(), None);
    assert_eq!(passed.account().as_str(), "ACC-123");
    assert_eq!(passed.value().to_string(), "500.00");
    assert!(passed.pass_fail());

    let failed = CreditCheckResponse::new(
        "ACC-456",
        Money::parse("0.00").unwrap(),
        false,
        Some("insufficient funds".to_string()),
    );

    assert_eq!(
        failed.outcome(),
        CreditCheckOutcome::Failed {
            reason: Some("insufficient funds")
        }
    );
}

#[test]
fn cli_passed_check() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("credit-check")?;
    cmd.args(["ACC-123", "500.00", "pass", "ignored"]);

    cmd.assert()
        .success()
        .stdout("ACC-123 500.00 passed\n");

    Ok(())
}

#[test]
fn cli_failed_check() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("credit-check")?;
    cmd.args(["ACC-456", "0.00", "fail", "insufficient funds"]);

    cmd.assert()
        .success()
        .stdout("ACC-456 0.00 failed: insufficient funds\n");

    Ok(())
}

#[test]
fn cli_rejects_bad_input() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("credit-check")?
        .args(["ACC-1", "not-money", "pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a decimal amount"));

    Command::cargo_bin("credit-check")?
        .args(["ACC-1", "1.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing pass/fail flag"));

    Ok(())
}
