//! Admin credential hash.
//!
//! The single shared admin password is stored as a lowercase hex SHA-256
//! digest. The hash doubles as the session token, so it is treated as a
//! bearer secret: `Debug` is redacted and comparison is constant-time.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Length of a SHA-256 digest in hex characters.
pub const HASH_HEX_LEN: usize = 64;

/// Errors produced when parsing a password hash.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Wrong length for a SHA-256 hex digest.
    #[error("password hash must be {HASH_HEX_LEN} hex characters, got {0}")]
    InvalidLength(usize),

    /// Non-hex characters in the input.
    #[error("password hash contains non-hex characters")]
    InvalidHex,
}

/// A lowercase hex SHA-256 password verification hash.
///
/// Construction goes through [`PasswordHash::digest`] or
/// [`PasswordHash::parse`], so every value is a well-formed, normalized
/// 64-character lowercase hex string.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a secret with SHA-256.
    #[must_use]
    pub fn digest(secret: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Parse and normalize a hex digest.
    ///
    /// Surrounding whitespace is trimmed and uppercase hex is lowered, the
    /// same normalization the store applies before persisting.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the input is not a 64-character hex
    /// string.
    pub fn parse(input: &str) -> Result<Self, CredentialError> {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized.len() != HASH_HEX_LEN {
            return Err(CredentialError::InvalidLength(normalized.len()));
        }
        if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CredentialError::InvalidHex);
        }
        Ok(Self(normalized))
    }

    /// The lowercase hex representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time equality check.
    ///
    /// Both sides are normalized lowercase hex of equal length, so comparing
    /// the raw bytes leaks nothing but the (fixed) length.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for PasswordHash {}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> Self {
        hash.0
    }
}
