pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;

pub use jwt::Session;

/// Session of the current Dioxus server-function request, if any.
///
/// Reads the `Session` the middleware stored in request extensions, falling
/// back to parsing the token directly when the middleware did not run.
pub fn current_session() -> Option<Session> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(session) = parts.extensions.get::<Session>() {
        return Some(session.clone());
    }

    let token = cookies::extract_session_token(&parts.headers)?;
    jwt::validate_session_token(&token).ok()
}
