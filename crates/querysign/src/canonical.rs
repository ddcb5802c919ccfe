//! Canonical serialization of a parameter set.
//!
//! Signing and verification must hash identical byte sequences, so the
//! parameter bag is flattened deterministically:
//!
//! ```text
//! key1=value1key2=value2...keyN=valueN<secret><timestamp-ms>
//! ```
//!
//! Keys are sorted byte-wise ascending, the signature field itself is
//! excluded, and there is no separator between successive pairs. The
//! resolved secret and the decimal millisecond timestamp are appended last.

use std::collections::HashMap;

/// Build the exact digest preimage for a parameter set.
///
/// The signature field is excluded from the key set by value; all other
/// parameters, including the public-key field, participate. An unknown
/// public key contributes an empty `secret` — rejecting that case belongs
/// to the key-validation stage, not to serialization.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use querysign::canonical::string_to_sign;
///
/// let mut params = HashMap::new();
/// params.insert("foo".to_owned(), "1".to_owned());
/// params.insert("bar".to_owned(), "2".to_owned());
///
/// assert_eq!(
///     string_to_sign(&params, "signature", "s3cret", 1_000_000_000_000),
///     "bar=2foo=1s3cret1000000000000"
/// );
/// ```
#[must_use]
pub fn string_to_sign(
    params: &HashMap<String, String>,
    signature_field: &str,
    secret: &str,
    timestamp_ms: i64,
) -> String {
    let mut keys: Vec<&str> = params
        .keys()
        .map(String::as_str)
        .filter(|key| *key != signature_field)
        .collect();
    keys.sort_unstable();

    let mut preimage = String::new();
    for key in keys {
        preimage.push_str(key);
        preimage.push('=');
        preimage.push_str(&params[key]);
    }
    preimage.push_str(secret);
    preimage.push_str(&timestamp_ms.to_string());
    preimage
}
