//! Session extractors for Axum (cookie-based cart sessions)

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

/// Name of the cookie carrying the cart session id
pub const SESSION_COOKIE: &str = "vitrine_session";

/// Cart session id extracted from the request cookie.
///
/// Absent, malformed and expired ids all extract to `None`; the cart
/// service then issues a fresh session, so this extractor never rejects.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Option<Uuid>);

/// Helper function to extract a cookie value from request parts
fn extract_cookie_from_parts(parts: &Parts, cookie_name: &str) -> Option<String> {
    parts
        .headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with(&format!("{}=", cookie_name)))?
        .strip_prefix(&format!("{}=", cookie_name))
        .map(|s| s.to_string())
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = extract_cookie_from_parts(parts, SESSION_COOKIE)
            .and_then(|raw| Uuid::parse_str(&raw).ok());
        Ok(SessionId(id))
    }
}

/// Build the Set-Cookie value that pins a cart session to the client
pub fn session_cookie(id: Uuid, ttl_minutes: u64) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSION_COOKIE,
        id,
        ttl_minutes * 60
    )
}
