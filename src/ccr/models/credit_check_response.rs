use super::CreditCheckOutcome;

use crate::ids::AccountId;
use crate::Money;

use std::fmt;

/// Immutable result of a credit check against an account for a given value.
///
/// A reason is only ever held when the check failed: `new` drops any reason handed to it
/// alongside a passing flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreditCheckResponse {
    account: AccountId,
    value: Money,
    pass_fail: bool,
    reason: Option<String>,
}

impl CreditCheckResponse {
    pub fn new(
        account: impl Into<AccountId>,
        value: Money,
        pass_fail: bool,
        reason: Option<String>,
    ) -> Self {
        let account = account.into();

        let reason = if pass_fail {
            if let Some(reason) = reason {
                log::debug!("Discarding reason for passed credit check on {account}: {reason:?}");
            }
            None
        } else {
            reason
        };

        return Self {
            account,
            value,
            pass_fail,
            reason,
        };
    }

    pub fn passed(account: impl Into<AccountId>, value: Money) -> Self {
        return Self::new(account, value, true, None);
    }

    pub fn failed(account: impl Into<AccountId>, value: Money, reason: Option<String>) -> Self {
        return Self::new(account, value, false, reason);
    }

    pub fn account(&self) -> &AccountId {
        return &self.account;
    }

    pub fn value(&self) -> Money {
        return self.value;
    }

    pub fn pass_fail(&self) -> bool {
        return self.pass_fail;
    }

    /// Always `None` when the check passed
    pub fn reason(&self) -> Option<&str> {
        return self.reason.as_deref();
    }

    pub fn outcome(&self) -> CreditCheckOutcome<'_> {
        if self.pass_fail {
            return CreditCheckOutcome::Passed;
        }

        return CreditCheckOutcome::Failed {
            reason: self.reason(),
        };
    }
}

impl fmt::Display for CreditCheckResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verdict = if self.pass_fail { "passed" } else { "failed" };

        write!(f, "{} {} {}", self.account, self.value, verdict)?;

        if let Some(reason) = &self.reason {
            write!(f, ": {reason}")?;
        }

        return Ok(());
    }
}
