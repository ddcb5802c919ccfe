//! Layered request authentication over query parameters.
//!
//! A request proves itself in three stages, each depending on the last:
//!
//! 1. **Key** — the parameter set names a public key that resolves to a
//!    non-empty secret ([`RequestAuthenticator::has_valid_key`]).
//! 2. **Signature** — the set carries a `digest-timestamp` token whose
//!    digest matches a recomputation over the canonically serialized
//!    parameters and whose timestamp is at most five minutes old
//!    ([`RequestAuthenticator::has_valid_signature`]).
//! 3. **Token** — the set carries an opaque token the token store still
//!    considers active ([`RequestAuthenticator::has_valid_token`]).
//!
//! Secrets and tokens live behind the [`SecretResolver`] and
//! [`TokenResolver`] traits; the authenticator holds no state of its own
//! and is safe to share across threads.
//!
//! # Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use querysign::{RequestAuthenticator, StaticSecretResolver, StaticTokenResolver};
//!
//! let auth = RequestAuthenticator::new(
//!     Box::new(StaticSecretResolver::new(vec![(
//!         "key-1".to_owned(),
//!         "s3cret".to_owned(),
//!     )])),
//!     Box::new(StaticTokenResolver::new(vec!["tok-1".to_owned()])),
//! );
//!
//! // The client signs its parameters and attaches the signature token.
//! let mut params = HashMap::new();
//! params.insert("key".to_owned(), "key-1".to_owned());
//! params.insert("token".to_owned(), "tok-1".to_owned());
//! params.insert("q".to_owned(), "rust".to_owned());
//! let signature = auth.sign(&params, None);
//! params.insert("signature".to_owned(), signature);
//!
//! // The server gates the request on the outermost check.
//! assert!(auth.has_valid_token(&params));
//! ```
//!
//! # Modules
//!
//! - [`authenticator`] - Signing and the layered validation chain
//! - [`canonical`] - Canonical parameter serialization
//! - [`config`] - Reserved field names and hash algorithm selection
//! - [`error`] - Rejection reasons
//! - [`query`] - Raw query-string parsing
//! - [`resolve`] - Secret and token lookup traits

pub mod authenticator;
pub mod canonical;
pub mod config;
pub mod error;
pub mod query;
pub mod resolve;

pub use authenticator::{REPLAY_WINDOW_MS, RequestAuthenticator};
pub use config::{AuthConfig, HashAlgorithm};
pub use error::AuthError;
pub use query::parse_query;
pub use resolve::{SecretResolver, StaticSecretResolver, StaticTokenResolver, TokenResolver};
