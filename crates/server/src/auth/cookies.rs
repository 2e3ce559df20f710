use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;

pub const SESSION_COOKIE: &str = "catalog_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

/// Build a Set-Cookie header value carrying the session token.
pub fn build_session_cookie(token: &str, max_age_minutes: i64) -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes * 60))
        .secure(cookie_secure())
        .build();

    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Build a Set-Cookie header value that clears the session cookie.
pub fn build_clear_session_cookie() -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Extract the session token from the cookie (preferred) or a Bearer header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}
