//! Cookie-session helpers: one-shot flash messages and CSRF tokens.

pub mod csrf;

use actix_session::Session;

use crate::errors::AppError;

const FLASH: &str = "flash";
const FLASH_ERROR: &str = "flash_error";

/// Remove and return the pending success message, if any.
pub fn take_flash(session: &Session) -> Option<String> {
    take(session, FLASH)
}

/// Remove and return the pending error message, if any.
pub fn take_flash_error(session: &Session) -> Option<String> {
    take(session, FLASH_ERROR)
}

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session.insert(FLASH, message)?;
    Ok(())
}

pub fn set_flash_error(session: &Session, message: &str) -> Result<(), AppError> {
    session.insert(FLASH_ERROR, message)?;
    Ok(())
}

fn take(session: &Session, key: &str) -> Option<String> {
    let value = session.get::<String>(key).unwrap_or(None);
    if value.is_some() {
        session.remove(key);
    }
    value
}
