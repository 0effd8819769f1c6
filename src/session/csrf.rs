//! Per-session CSRF token for the HTML forms. The JSON API is guarded by
//! its content-type check instead.

use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const SESSION_KEY: &str = "csrf_token";

/// The session's token, minted on first use.
pub fn get_or_create_token(session: &Session) -> Result<String, AppError> {
    if let Some(token) = stored_token(session) {
        return Ok(token);
    }
    let token = hex::encode(rand::rng().random::<[u8; 32]>());
    session.insert(SESSION_KEY, &token)?;
    Ok(token)
}

/// Reject a form post whose token does not match the session's.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    match stored_token(session) {
        Some(stored) if tokens_match(stored.as_bytes(), submitted.as_bytes()) => Ok(()),
        _ => {
            log::warn!("Rejected form post with invalid CSRF token");
            Err(AppError::Forbidden("Invalid or missing CSRF token".to_string()))
        }
    }
}

fn stored_token(session: &Session) -> Option<String> {
    session
        .get::<String>(SESSION_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

/// Byte comparison whose running time does not depend on where the inputs
/// first differ.
fn tokens_match(stored: &[u8], submitted: &[u8]) -> bool {
    stored.len() == submitted.len()
        && stored
            .iter()
            .zip(submitted)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_session::SessionExt;
    use actix_web::test::TestRequest;

    #[test]
    fn token_is_stable_within_a_session() {
        let session = TestRequest::default().to_http_request().get_session();
        let first = get_or_create_token(&session).unwrap();
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(get_or_create_token(&session).unwrap(), first);
        assert!(validate_csrf(&session, &first).is_ok());
    }

    #[test]
    fn sessions_get_different_tokens() {
        let a = TestRequest::default().to_http_request().get_session();
        let b = TestRequest::default().to_http_request().get_session();
        let token_a = get_or_create_token(&a).unwrap();
        assert_ne!(token_a, get_or_create_token(&b).unwrap());
        assert!(matches!(validate_csrf(&b, &token_a), Err(AppError::Forbidden(_))));
    }

    #[test]
    fn missing_session_token_rejects_everything() {
        let session = TestRequest::default().to_http_request().get_session();
        assert!(validate_csrf(&session, "").is_err());
        assert!(validate_csrf(&session, "deadbeef").is_err());
    }

    #[test]
    fn comparison_requires_exact_match() {
        assert!(tokens_match(b"abc", b"abc"));
        assert!(!tokens_match(b"abc", b"abd"));
        assert!(!tokens_match(b"abc", b"abcd"));
    }
}
