//! Pluggable lookup collaborators.
//!
//! The authenticator never stores secrets or tokens itself; it resolves
//! them through these traits on every operation. Implementations must be
//! read-only, idempotent, and safe to call concurrently — the secret
//! resolver is consulted at least twice per full validation (once by the
//! key check, once inside the signature recomputation).

use std::collections::{HashMap, HashSet};

/// Resolves a public key identifier to its private secret.
pub trait SecretResolver: Send + Sync {
    /// Return the secret for `public_key`, or `None` when the key is
    /// unknown or revoked. An empty string is treated the same as `None`.
    fn private_key(&self, public_key: &str) -> Option<String>;
}

/// Checks whether an opaque access token is currently active.
pub trait TokenResolver: Send + Sync {
    /// Return `true` when `token` is active and assigned.
    fn is_valid(&self, token: &str) -> bool;
}

/// In-memory secret resolver backed by a fixed key/secret map.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretResolver {
    secrets: HashMap<String, String>,
}

impl StaticSecretResolver {
    /// Create a resolver from `(public_key, secret)` pairs.
    #[must_use]
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self {
            secrets: pairs.into_iter().collect(),
        }
    }
}

impl SecretResolver for StaticSecretResolver {
    fn private_key(&self, public_key: &str) -> Option<String> {
        self.secrets.get(public_key).cloned()
    }
}

/// In-memory token resolver backed by a fixed set of active tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenResolver {
    tokens: HashSet<String>,
}

impl StaticTokenResolver {
    /// Create a resolver from the set of currently active tokens.
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }
}

impl TokenResolver for StaticTokenResolver {
    fn is_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}
