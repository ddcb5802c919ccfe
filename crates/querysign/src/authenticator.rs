//! Signing and the layered validation chain.
//!
//! Validation is a strict pipeline: token validity requires signature
//! validity, which requires key validity, which requires a resolvable
//! secret. Each `check_*` function reports the first failure it hits; the
//! `has_valid_*` wrappers collapse that to the boolean contract expected
//! by integrating request handlers and log the reason at debug level.
//!
//! The signature token has the wire format:
//!
//! ```text
//! <lowercase-hex-digest>-<decimal-millisecond-timestamp>
//! ```

use std::collections::HashMap;

use chrono::Utc;
use digest::Digest;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::string_to_sign;
use crate::config::{AuthConfig, HashAlgorithm};
use crate::error::AuthError;
use crate::resolve::{SecretResolver, TokenResolver};

/// Maximum accepted signature age in milliseconds (5 minutes).
pub const REPLAY_WINDOW_MS: i64 = 300_000;

/// Request authenticator with injected secret and token stores.
///
/// Stateless apart from its configuration; every operation reads the
/// parameter set, consults the resolvers, and computes. Concurrent calls
/// need no coordination as long as the resolvers are consistent snapshots.
pub struct RequestAuthenticator {
    config: AuthConfig,
    secrets: Box<dyn SecretResolver>,
    tokens: Box<dyn TokenResolver>,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RequestAuthenticator {
    /// Create an authenticator with the default configuration.
    #[must_use]
    pub fn new(secrets: Box<dyn SecretResolver>, tokens: Box<dyn TokenResolver>) -> Self {
        Self::with_config(AuthConfig::default(), secrets, tokens)
    }

    /// Create an authenticator with an explicit configuration.
    #[must_use]
    pub fn with_config(
        config: AuthConfig,
        secrets: Box<dyn SecretResolver>,
        tokens: Box<dyn TokenResolver>,
    ) -> Self {
        Self {
            config,
            secrets,
            tokens,
        }
    }

    /// Sign a parameter set, producing `"{digest}-{timestamp_ms}"`.
    ///
    /// `timestamp_ms` defaults to the current wall clock. The digest is
    /// the configured hash over the canonical serialization of `params`
    /// (signature field excluded), the resolved secret, and the timestamp.
    /// An unknown public key signs with an empty secret; such a request is
    /// rejected later by the key check, not here.
    #[must_use]
    pub fn sign(&self, params: &HashMap<String, String>, timestamp_ms: Option<i64>) -> String {
        let timestamp_ms = timestamp_ms.unwrap_or_else(|| Utc::now().timestamp_millis());
        let secret = params
            .get(&self.config.public_key_field)
            .and_then(|public_key| self.secrets.private_key(public_key))
            .unwrap_or_default();
        let preimage = string_to_sign(
            params,
            &self.config.signature_field,
            &secret,
            timestamp_ms,
        );
        let digest = hash_hex(self.config.algorithm, &preimage);
        format!("{digest}-{timestamp_ms}")
    }

    /// Validate the public-key stage, reporting the failure reason.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingField`] when the public-key field is absent,
    /// [`AuthError::UnknownKey`] when it resolves to no non-empty secret.
    pub fn check_key(&self, params: &HashMap<String, String>) -> Result<(), AuthError> {
        let public_key = params
            .get(&self.config.public_key_field)
            .ok_or_else(|| AuthError::MissingField(self.config.public_key_field.clone()))?;
        match self.secrets.private_key(public_key) {
            Some(secret) if !secret.is_empty() => Ok(()),
            _ => Err(AuthError::UnknownKey),
        }
    }

    /// Does the parameter set carry a valid public key?
    #[must_use]
    pub fn has_valid_key(&self, params: &HashMap<String, String>) -> bool {
        log_outcome("key", self.check_key(params))
    }

    /// Validate the signature stage against the current wall clock.
    ///
    /// # Errors
    ///
    /// See [`Self::check_signature_at`].
    pub fn check_signature(&self, params: &HashMap<String, String>) -> Result<(), AuthError> {
        self.check_signature_at(params, Utc::now().timestamp_millis())
    }

    /// Validate the signature stage against a caller-supplied clock.
    ///
    /// The chain short-circuits: a missing signature field, an invalid
    /// key, or a separator-free value all reject before any hashing. The
    /// timestamp is everything after the LAST `-` in the token and must
    /// parse as a decimal `i64`; parse failure is a rejection, never an
    /// accidental pass. Only the past-facing replay bound is enforced —
    /// timestamps ahead of `now_ms` pass.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingField`] when the signature field is absent, a
    /// key-stage error when [`Self::check_key`] fails,
    /// [`AuthError::MalformedSignature`] for a separator-free token or a
    /// non-numeric timestamp, [`AuthError::Expired`] when the timestamp is
    /// more than [`REPLAY_WINDOW_MS`] behind `now_ms`, and
    /// [`AuthError::DigestMismatch`] when the recomputed token differs.
    pub fn check_signature_at(
        &self,
        params: &HashMap<String, String>,
        now_ms: i64,
    ) -> Result<(), AuthError> {
        let provided = params
            .get(&self.config.signature_field)
            .ok_or_else(|| AuthError::MissingField(self.config.signature_field.clone()))?;
        self.check_key(params)?;

        let (_, timestamp) = provided
            .rsplit_once('-')
            .ok_or(AuthError::MalformedSignature)?;
        let timestamp_ms: i64 = timestamp
            .parse()
            .map_err(|_| AuthError::MalformedSignature)?;

        let age_ms = now_ms - timestamp_ms;
        if age_ms > REPLAY_WINDOW_MS {
            return Err(AuthError::Expired { age_ms });
        }

        // Recompute with the embedded timestamp and compare the whole
        // token in constant time.
        let expected = self.sign(params, Some(timestamp_ms));
        if expected.as_bytes().ct_eq(provided.as_bytes()).into() {
            Ok(())
        } else {
            Err(AuthError::DigestMismatch)
        }
    }

    /// Does the parameter set carry a valid, unexpired signature?
    #[must_use]
    pub fn has_valid_signature(&self, params: &HashMap<String, String>) -> bool {
        log_outcome("signature", self.check_signature(params))
    }

    /// Validate the token stage, reporting the failure reason.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingField`] when the token field is absent, a
    /// signature-stage error when [`Self::check_signature`] fails, and
    /// [`AuthError::InvalidToken`] when the token store rejects the token.
    pub fn check_token(&self, params: &HashMap<String, String>) -> Result<(), AuthError> {
        let token = params
            .get(&self.config.token_field)
            .ok_or_else(|| AuthError::MissingField(self.config.token_field.clone()))?;
        self.check_signature(params)?;
        if self.tokens.is_valid(token) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    /// Does the parameter set carry a valid token? The outermost gate an
    /// integrating request handler should call.
    #[must_use]
    pub fn has_valid_token(&self, params: &HashMap<String, String>) -> bool {
        log_outcome("token", self.check_token(params))
    }
}

/// Collapse a stage result to the boolean contract, logging the outcome.
fn log_outcome(stage: &'static str, result: Result<(), AuthError>) -> bool {
    match result {
        Ok(()) => {
            debug!(stage, "validation succeeded");
            true
        }
        Err(reason) => {
            debug!(stage, %reason, "validation rejected");
            false
        }
    }
}

/// Lowercase hex digest of `input` under `algorithm`.
fn hash_hex(algorithm: HashAlgorithm, input: &str) -> String {
    match algorithm {
        HashAlgorithm::Sha1 => hex::encode(Sha1::digest(input.as_bytes())),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(input.as_bytes())),
    }
}
