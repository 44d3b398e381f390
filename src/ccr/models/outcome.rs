/// Tagged view of a credit check result, borrowed from a `CreditCheckResponse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditCheckOutcome<'a> {
    Passed,
    Failed { reason: Option<&'a str> },
}

impl CreditCheckOutcome<'_> {
    pub fn is_passed(&self) -> bool {
        return matches!(self, Self::Passed);
    }
}
