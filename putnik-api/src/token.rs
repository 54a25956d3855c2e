//! Bearer-token payload introspection.
//!
//! The guide API hands out JWTs. The client never verifies them (the
//! server is the security boundary) but it does peek at the payload to
//! learn the account identifier and login for display and for addressing
//! the account endpoints. A token that does not decode simply yields no
//! claims.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Claims the client cares about, both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClaims {
    /// Account identifier used in `/users/{id}` paths.
    pub user_id: Option<String>,
    /// Account login.
    pub username: Option<String>,
}

/// Decode the payload segment of a JWT, without verification.
///
/// Accepts base64url with or without padding. Returns `None` when the
/// token has no payload segment or the payload is not JSON; claims of
/// the wrong JSON type are ignored individually.
///
/// # Examples
/// ```
/// use putnik_api::decode_claims;
///
/// // header "{}" . payload {"user_id":"u1"} . no signature
/// let claims = decode_claims("e30.eyJ1c2VyX2lkIjoidTEifQ.").unwrap();
/// assert_eq!(claims.user_id.as_deref(), Some("u1"));
/// ```
#[must_use]
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    Some(TokenClaims {
        user_id: value
            .get("user_id")
            .and_then(Value::as_str)
            .map(str::to_owned),
        username: value
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}
