use std::fmt;

/// Identifier of the account a credit check was run against. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        return Self(id);
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        return Self(id.to_string());
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_identifier_verbatim() {
        let id = AccountId::from(" ACC-123 ");

        assert_eq!(id.as_str(), " ACC-123 ");
        assert_eq!(id.to_string(), " ACC-123 ");
    }

    #[test]
    fn empty_identifier_is_accepted() {
        assert_eq!(AccountId::from(String::new()).as_str(), "");
    }
}
