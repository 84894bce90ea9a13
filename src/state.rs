//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The service is stateless between requests; what the handlers share is
//! configuration — in particular the cookie policy, carried explicitly here
//! instead of being re-derived from the environment inside each handler.

use std::env;

/// Cookie policy applied to every cookie the service writes.
#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    /// Whether to set the `Secure` attribute. Driven by `COOKIE_SECURE`;
    /// defaults to false for plain-HTTP local serving.
    pub secure: bool,
}

impl CookieConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self { secure: env_bool("COOKIE_SECURE").unwrap_or(false) }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub cookies: CookieConfig,
}

impl AppState {
    #[must_use]
    pub fn new(cookies: CookieConfig) -> Self {
        Self { cookies }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CookieConfig::from_env())
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
