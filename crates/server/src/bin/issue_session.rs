//! Mint a session token for local testing, standing in for the identity provider.
//!
//! Usage: issue-session <user_id> <email>

use server::auth::{cookies, jwt};

fn main() {
    let _ = dotenvy::dotenv();

    let mut args = std::env::args().skip(1);
    let user_id: i64 = args.next().and_then(|v| v.parse().ok()).unwrap_or(1);
    let email = args
        .next()
        .unwrap_or_else(|| "curator@herbarium.test".to_string());

    let token = match jwt::create_session_token(user_id, &email) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Failed to create session token (is SESSION_SECRET set?): {e}");
            std::process::exit(1);
        }
    };

    println!("{token}");
    if let Some(cookie) = cookies::build_session_cookie(&token, jwt::session_expiry_minutes()) {
        if let Ok(value) = cookie.to_str() {
            eprintln!("Set-Cookie: {value}");
        }
    }
}
