//! HMAC-SHA256 request signing
//!
//! Binance authenticates `SIGNED` endpoints with a `signature` parameter:
//! the lowercase hex HMAC-SHA256 of the URL-encoded query string (all other
//! parameters, in the order they are sent), keyed by the API secret.
//!
//! The encoding is `application/x-www-form-urlencoded`: spaces become `+`,
//! everything outside the unreserved set is percent-encoded.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use super::types::{ParamValue, RequestParameters};
use crate::adapters::errors::{ExchangeError, ExchangeResult};

type HmacSha256 = Hmac<Sha256>;

/// Name of the appended parameter
pub const SIGNATURE_PARAM: &str = "signature";

/// Lowercase hex HMAC-SHA256 of `payload` keyed by `secret`
pub fn hmac_sha256_hex(secret: &str, payload: &str) -> String {
    // HMAC accepts keys of any length, new_from_slice cannot fail for it
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any size"),
    };
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// The exact query string that was signed, plus its signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    query: String,
    signature: String,
}

impl SignedParams {
    /// Canonical encoding of the parameters, without the signature
    pub fn unsigned_query(&self) -> &str {
        &self.query
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Query string to send: the signed bytes followed by `signature=<hex>`
    pub fn query_string(&self) -> String {
        if self.query.is_empty() {
            format!("{}={}", SIGNATURE_PARAM, self.signature)
        } else {
            format!("{}&{}={}", self.query, SIGNATURE_PARAM, self.signature)
        }
    }
}

/// Sign any query-serializable parameter set
///
/// Works for the typed requests, [`RequestParameters`] and plain slices of
/// `(name, value)` pairs. Parameters that already carry a `signature` are
/// rejected instead of being signed a second time.
pub fn sign_params<P: Serialize>(params: P, secret: &str) -> ExchangeResult<SignedParams> {
    let query = serde_urlencoded::to_string(&params)?;

    if query_has_signature(&query) {
        return Err(ExchangeError::InvalidRequest(
            "parameters already contain a signature".to_string(),
        ));
    }

    let signature = hmac_sha256_hex(secret, &query);
    tracing::trace!(
        query = %query,
        signature = %crate::core::logging::sanitize_signature(&signature),
        "Parameters signed"
    );

    Ok(SignedParams { query, signature })
}

fn query_has_signature(query: &str) -> bool {
    query
        .split('&')
        .any(|pair| pair.split('=').next() == Some(SIGNATURE_PARAM))
}

impl RequestParameters {
    /// Append `signature` in place and return its value
    pub fn sign(&mut self, secret: &str) -> ExchangeResult<String> {
        if self.contains_key(SIGNATURE_PARAM) {
            return Err(ExchangeError::InvalidRequest(
                "parameters already contain a signature".to_string(),
            ));
        }
        let query = serde_urlencoded::to_string(&*self)?;
        let signature = hmac_sha256_hex(secret, &query);
        self.push(SIGNATURE_PARAM, ParamValue::Text(signature.clone()));
        Ok(signature)
    }
}
