//! Fetch layer: OAuth 1.0a signed access to the standard search endpoint.

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub mod oauth;

#[cfg(feature = "http")]
pub use http::{FetchError, SearchClient};
#[cfg(feature = "http")]
pub use oauth::OAuthSigner;
