//! Theme preference — the one toggle capability.
//!
//! DESIGN
//! ======
//! The theme is a two-value enum persisted only as a client-readable cookie.
//! Every boundary that flips it (form action, API route, client-side JS)
//! converges on the same read → toggle → persist sequence, so the whole
//! capability lives here: parse with a light default, an involutive toggle,
//! and cookie construction with the fixed attribute set.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;

/// Cookie under which the preference is stored.
pub const COOKIE_NAME: &str = "theme";

/// Cookie lifetime: one year.
const COOKIE_MAX_AGE: Duration = Duration::days(365);

/// Binary UI appearance mode. Cookie values go through [`Theme::parse`],
/// not serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse a raw cookie value. Unrecognized values return `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Current theme from the request's cookie jar. Absent or corrupted
    /// cookie values read as `Light`.
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(COOKIE_NAME)
            .and_then(|c| Theme::parse(c.value()))
            .unwrap_or(Theme::Light)
    }

    /// The other theme. Involutive: `t.toggled().toggled() == t`.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Wire/cookie value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Portuguese label used on the rendered pages.
    #[must_use]
    pub fn label_pt(self) -> &'static str {
        match self {
            Theme::Light => "claro",
            Theme::Dark => "escuro",
        }
    }

    /// Build the persistence cookie. Deliberately not `HttpOnly`: the
    /// client-side variant reads and rewrites it from JavaScript.
    #[must_use]
    pub fn into_cookie(self, secure: bool) -> Cookie<'static> {
        Cookie::build((COOKIE_NAME, self.as_str()))
            .path("/")
            .http_only(false)
            .same_site(SameSite::Lax)
            .secure(secure)
            .max_age(COOKIE_MAX_AGE)
            .build()
    }
}

/// Flip the theme stored in `jar` and persist the new value.
/// Returns the updated jar plus the old and new themes for logging.
#[must_use]
pub fn toggle(jar: CookieJar, secure: bool) -> (CookieJar, Theme, Theme) {
    let current = Theme::from_jar(&jar);
    let next = current.toggled();
    let jar = jar.add(next.into_cookie(secure));
    (jar, current, next)
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
