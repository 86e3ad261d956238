//! Environment loader
//!
//! Credentials live in the process environment, optionally seeded from a
//! flat `KEY=value` file (`.env`). Nothing here keeps global state: callers
//! read what they need once and pass it on in a config struct.

use crate::error::AppError;

/// Load `.env` from the working directory (or a parent) if there is one
///
/// Returns whether a file was found.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), ".env loaded");
            true
        }
        Err(_) => false,
    }
}

/// Read a required variable, rejecting absent and empty values
pub fn require_env(name: &str) -> Result<String, AppError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(AppError::Config(format!("{} is empty", name))),
        Err(_) => Err(AppError::Config(format!("{} not set", name))),
    }
}

// ============================================================================
// Tests
// ============================================================================
