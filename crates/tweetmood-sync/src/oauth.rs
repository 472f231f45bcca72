//! OAuth 1.0a request signing (HMAC-SHA1, user context).
//!
//! Builds the `Authorization: OAuth ...` header for a request from the
//! consumer and access-token credentials. Parameters and URL are encoded with
//! the RFC 3986 unreserved set, which is what the signature base string
//! requires (spaces as `%20`, never `+`).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use ring::hmac;
use ring::rand::{SecureRandom, SystemRandom};
use tweetmood_core::Credentials;

/// Everything except `A-Z a-z 0-9 - . _ ~`.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";

pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, RFC3986).to_string()
}

/// `k1=v1&k2=v2` with both sides encoded, in the given order.
pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `METHOD&url&params`, params encoded then sorted by key and value.
pub fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

/// Base64 HMAC-SHA1 of `base_string` keyed by `consumer_secret&token_secret`.
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let signing_key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
    let tag = hmac::sign(&key, base_string.as_bytes());
    STANDARD.encode(tag.as_ref())
}

/// Signs requests with one set of user-context credentials.
pub struct OAuthSigner {
    credentials: Credentials,
    rng: SystemRandom,
}

impl OAuthSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rng: SystemRandom::new(),
        }
    }

    /// Random 32-byte nonce, hex encoded. `None` only if the OS RNG fails.
    pub fn nonce(&self) -> Option<String> {
        let mut bytes = [0u8; 32];
        self.rng.fill(&mut bytes).ok()?;
        Some(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// `Authorization` header value for a request.
    ///
    /// `params` are the request's query (or form) parameters; they take part
    /// in the signature but are not copied into the header.
    pub fn authorization(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        nonce: &str,
        timestamp: i64,
    ) -> String {
        let mut oauth_params: Vec<(String, String)> = vec![
            ("oauth_consumer_key".into(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".into(), nonce.to_string()),
            ("oauth_signature_method".into(), SIGNATURE_METHOD.into()),
            ("oauth_timestamp".into(), timestamp.to_string()),
            ("oauth_token".into(), self.credentials.access_token.clone()),
            ("oauth_version".into(), VERSION.into()),
        ];

        let mut all = oauth_params.clone();
        all.extend_from_slice(params);
        let base = signature_base_string(method, url, &all);
        let signature = sign(
            &base,
            &self.credentials.consumer_secret,
            &self.credentials.access_token_secret,
        );

        oauth_params.push(("oauth_signature".into(), signature));
        oauth_params.sort();

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {fields}")
    }
}
