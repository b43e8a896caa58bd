use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

/// Surrogate identifier for an author, with the nil UUID as the
/// transient sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn new(value: Uuid) -> DomainResult<Self> {
        if value.is_nil() {
            Err(DomainError::Validation(
                "author id cannot be the empty sentinel".into(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn empty() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<AuthorId> for Uuid {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated first/last name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> DomainResult<Self> {
        let first = first.into();
        let last = last.into();
        if first.trim().is_empty() || last.trim().is_empty() {
            return Err(DomainError::Validation(
                "first and last name cannot be empty".into(),
            ));
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let name = PersonName::new("John", "Doe").unwrap();
        assert_eq!(name.full(), "John Doe");
    }

    #[test]
    fn rejects_blank_parts() {
        assert!(PersonName::new("", "Doe").is_err());
        assert!(PersonName::new("John", "  ").is_err());
    }

    #[test]
    fn rejects_nil_id() {
        assert!(AuthorId::new(Uuid::nil()).is_err());
        assert!(AuthorId::empty().is_empty());
    }
}
