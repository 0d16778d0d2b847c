//! Self-validating value objects for the user aggregate.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Outcome, ValidationError};

/// Minimum display name length.
pub const NAME_MIN_LENGTH: usize = 5;
/// Maximum display name length.
pub const NAME_MAX_LENGTH: usize = 30;
/// Minimum raw password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// One-way password hashing service.
///
/// The algorithm is an infrastructure concern; the domain only relies on
/// hashing being deterministic per stored hash and verification being
/// constant-time. Hashing is CPU-bound and runs synchronously - callers
/// needing throughput must isolate it on a blocking pool.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a raw password into an opaque storable string.
    fn hash(&self, raw: &SecretString) -> String;

    /// Verifies a raw password against a stored hash.
    fn verify(&self, raw: &SecretString, hash: &str) -> bool;
}

/// User display name, trimmed, 5 to 30 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Validates and constructs a name.
    pub fn new(raw: impl Into<String>) -> Outcome<ValidationError, Self> {
        let trimmed = raw.into().trim().to_string();
        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return Outcome::failure(ValidationError::length_out_of_range(
                "name",
                NAME_MIN_LENGTH,
                NAME_MAX_LENGTH,
                length,
            ));
        }
        Outcome::success(Self(trimmed))
    }

    /// Reconstitutes a name from storage that is assumed valid.
    pub fn reconstitute(trusted: impl Into<String>) -> Self {
        Self(trusted.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address with a structural grammar check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates and constructs an email address.
    pub fn new(raw: impl Into<String>) -> Outcome<ValidationError, Self> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Outcome::failure(ValidationError::invalid_format(
                "email",
                "address is empty",
            ));
        }
        match Self::grammar_violation(&raw) {
            None => Outcome::success(Self(raw)),
            Some(reason) => Outcome::failure(ValidationError::invalid_format("email", reason)),
        }
    }

    /// Reconstitutes an email from storage that is assumed valid.
    pub fn reconstitute(trusted: impl Into<String>) -> Self {
        Self(trusted.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn grammar_violation(raw: &str) -> Option<&'static str> {
        if raw.chars().any(char::is_whitespace) {
            return Some("address contains whitespace");
        }
        let mut parts = raw.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = match parts.next() {
            Some(domain) => domain,
            None => return Some("missing @ separator"),
        };
        if local.is_empty() {
            return Some("local part is empty");
        }
        if domain.contains('@') {
            return Some("more than one @ separator");
        }
        if domain.is_empty() || !domain.contains('.') {
            return Some("domain must contain a dot");
        }
        if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
            return Some("domain has a misplaced dot");
        }
        None
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Password stored only as an opaque one-way hash.
///
/// Hashing happens eagerly during construction; the raw input never
/// outlives `new`. Equality with a candidate password goes through
/// [`Password::matches`], never through comparing hashes directly.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Validates the raw password and hashes it.
    ///
    /// The hash is produced before the outcome is returned, so a success
    /// always carries a storable value.
    pub fn new(raw: &SecretString, hasher: &dyn PasswordHasher) -> Outcome<ValidationError, Self> {
        let length = raw.expose_secret().chars().count();
        if length < PASSWORD_MIN_LENGTH {
            return Outcome::failure(ValidationError::too_short(
                "password",
                PASSWORD_MIN_LENGTH,
                length,
            ));
        }
        Outcome::success(Self {
            hash: hasher.hash(raw),
        })
    }

    /// Reconstitutes a password from a stored hash.
    pub fn reconstitute(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// One-way comparison against a raw candidate.
    pub fn matches(&self, raw: &SecretString, hasher: &dyn PasswordHasher) -> bool {
        hasher.verify(raw, &self.hash)
    }

    /// The stored hash, for persistence only.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
