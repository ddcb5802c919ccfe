//! Authenticator configuration.
//!
//! The reserved field names decide which parameters carry the public key,
//! the signature token, and the access token; the hash algorithm decides
//! the digest primitive. Signer and verifier must share one configuration,
//! otherwise every signature is rejected.

use std::str::FromStr;

use crate::error::AuthError;

/// Hash primitive used to digest the canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// SHA-1, 40 hex characters. Legacy interop only.
    Sha1,
    /// SHA-256, 64 hex characters.
    #[default]
    Sha256,
    /// SHA-512, 128 hex characters.
    Sha512,
}

impl HashAlgorithm {
    /// Length of the lowercase hex digest this algorithm produces.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            other => Err(AuthError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}

/// Reserved parameter names and the digest primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Parameter carrying the `digest-timestamp` signature token.
    pub signature_field: String,
    /// Parameter carrying the caller's public key identifier.
    pub public_key_field: String,
    /// Parameter carrying the opaque access token.
    pub token_field: String,
    /// Digest primitive for the canonical string.
    pub algorithm: HashAlgorithm,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signature_field: "signature".to_owned(),
            public_key_field: "key".to_owned(),
            token_field: "token".to_owned(),
            algorithm: HashAlgorithm::default(),
        }
    }
}
