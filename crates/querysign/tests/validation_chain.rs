//! End-to-end tests for the sign/verify pipeline with in-memory stores.

use std::collections::HashMap;

use querysign::{
    AuthConfig, HashAlgorithm, RequestAuthenticator, StaticSecretResolver, StaticTokenResolver,
    parse_query,
};

const PUBLIC_KEY: &str = "AKEXAMPLE";
const SECRET: &str = "wJalrXUtnFEMI";
const TOKEN: &str = "session-123";

fn authenticator() -> RequestAuthenticator {
    RequestAuthenticator::new(
        Box::new(StaticSecretResolver::new(vec![(
            PUBLIC_KEY.to_owned(),
            SECRET.to_owned(),
        )])),
        Box::new(StaticTokenResolver::new(vec![TOKEN.to_owned()])),
    )
}

fn base_params() -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("key".to_owned(), PUBLIC_KEY.to_owned());
    params.insert("token".to_owned(), TOKEN.to_owned());
    params.insert("action".to_owned(), "list".to_owned());
    params.insert("page".to_owned(), "2".to_owned());
    params
}

#[test]
fn test_should_pass_all_three_gates_for_signed_request() {
    let auth = authenticator();
    let mut params = base_params();
    let signature = auth.sign(&params, None);
    params.insert("signature".to_owned(), signature);

    assert!(auth.has_valid_key(&params));
    assert!(auth.has_valid_signature(&params));
    assert!(auth.has_valid_token(&params));
}

#[test]
fn test_should_gate_token_check_on_missing_token_field() {
    let auth = authenticator();
    let mut params = base_params();
    params.remove("token");
    let signature = auth.sign(&params, None);
    params.insert("signature".to_owned(), signature);

    // Key and signature still validate; only the outermost gate fails.
    assert!(auth.has_valid_key(&params));
    assert!(auth.has_valid_signature(&params));
    assert!(!auth.has_valid_token(&params));
}

#[test]
fn test_should_gate_signature_check_on_missing_signature_field() {
    let auth = authenticator();
    let params = base_params();

    assert!(auth.has_valid_key(&params));
    assert!(!auth.has_valid_signature(&params));
    assert!(!auth.has_valid_token(&params));
}

#[test]
fn test_should_fail_every_gate_without_public_key() {
    let auth = authenticator();
    let mut params = base_params();
    let signature = auth.sign(&params, None);
    params.insert("signature".to_owned(), signature);
    params.remove("key");

    assert!(!auth.has_valid_key(&params));
    assert!(!auth.has_valid_signature(&params));
    assert!(!auth.has_valid_token(&params));
}

#[test]
fn test_should_reject_request_signed_for_unknown_key() {
    let auth = authenticator();
    let mut params = base_params();
    params.insert("key".to_owned(), "AKUNKNOWN".to_owned());
    let signature = auth.sign(&params, None);
    params.insert("signature".to_owned(), signature);

    assert!(!auth.has_valid_key(&params));
    assert!(!auth.has_valid_signature(&params));
}

#[test]
fn test_should_detect_tampering_after_signing() {
    let auth = authenticator();
    let mut params = base_params();
    let signature = auth.sign(&params, None);
    params.insert("signature".to_owned(), signature);

    params.insert("page".to_owned(), "999".to_owned());
    assert!(!auth.has_valid_signature(&params));
    assert!(!auth.has_valid_token(&params));
}

#[test]
fn test_should_verify_request_parsed_from_raw_query_string() {
    let auth = authenticator();
    let mut params = base_params();
    params.insert("q".to_owned(), "hello world".to_owned());
    let signature = auth.sign(&params, None);

    let raw = format!(
        "key={PUBLIC_KEY}&token={TOKEN}&action=list&page=2&q=hello%20world&signature={signature}"
    );
    let parsed = parse_query(&raw);

    assert!(auth.has_valid_token(&parsed));
}

#[test]
fn test_should_reject_signature_from_differently_configured_verifier() {
    let signer = authenticator();
    let verifier = RequestAuthenticator::with_config(
        AuthConfig {
            algorithm: HashAlgorithm::Sha512,
            ..AuthConfig::default()
        },
        Box::new(StaticSecretResolver::new(vec![(
            PUBLIC_KEY.to_owned(),
            SECRET.to_owned(),
        )])),
        Box::new(StaticTokenResolver::new(vec![TOKEN.to_owned()])),
    );

    let mut params = base_params();
    let signature = signer.sign(&params, None);
    params.insert("signature".to_owned(), signature);

    assert!(!verifier.has_valid_signature(&params));
}

#[test]
fn test_should_reject_stale_signature() {
    let auth = authenticator();
    let mut params = base_params();
    // Signed well outside the five-minute replay window.
    let stale = chrono_now_ms() - 600_000;
    let signature = auth.sign(&params, Some(stale));
    params.insert("signature".to_owned(), signature);

    assert!(!auth.has_valid_signature(&params));
}

fn chrono_now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
