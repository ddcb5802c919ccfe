//! Rejection reasons for request authentication.
//!
//! The public validation surface is boolean (`has_valid_*`); these variants
//! exist so the `check_*` functions and log output can tell a missing field
//! apart from an expired or forged signature. Validation never panics and
//! never surfaces a fatal error: untrusted input always collapses to a
//! rejection.

/// Why a parameter set failed a validation stage.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A reserved field (public key, signature, or token) is absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The signature token has no separator or a non-numeric timestamp.
    #[error("malformed signature token")]
    MalformedSignature,

    /// The signature timestamp is older than the replay window.
    #[error("signature expired ({age_ms} ms old)")]
    Expired {
        /// Milliseconds elapsed since the embedded timestamp.
        age_ms: i64,
    },

    /// The recomputed signature does not match the provided one.
    #[error("signature digest does not match")]
    DigestMismatch,

    /// The public key is unknown or resolves to an empty secret.
    #[error("unknown or revoked public key")]
    UnknownKey,

    /// The token store does not consider the token active.
    #[error("token is not active")]
    InvalidToken,

    /// The configured hash algorithm name is not recognized.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
