use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies;
use super::jwt::validate_session_token;

/// Permissive session middleware.
///
/// Validates the session token from the cookie (or Bearer header) and inserts
/// the `Session` into request extensions. A token that fails validation is
/// treated as no session and the stale cookie is cleared on the response.
///
/// Never rejects a request; handlers decide what an absent session means.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let mut stale = false;

    if let Some(token) = cookies::extract_session_token(req.headers()) {
        match validate_session_token(&token) {
            Ok(session) => {
                req.extensions_mut().insert(session);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Discarding invalid session token");
                stale = true;
            }
        }
    }

    let mut response = next.run(req).await;

    if stale {
        if let Some(clear) = cookies::build_clear_session_cookie() {
            response.headers_mut().append(header::SET_COOKIE, clear);
        }
    }

    response
}
