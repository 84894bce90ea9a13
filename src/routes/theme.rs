//! Theme toggle handlers.
//!
//! Two server boundaries, one capability: both flip the cookie through
//! `theme::toggle` and answer 303 back to `/form`. The third boundary (the
//! client-side page) rewrites `document.cookie` directly without a round
//! trip.

use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;
use crate::theme;

/// `POST /theme/toggle` — form-action variant.
pub async fn toggle_theme(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    flip(state, jar)
}

/// `POST /api/toggle-theme` — API-route variant. Same semantics, separate
/// endpoint; the demo keeps both boundaries addressable.
pub async fn toggle_theme_api(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    flip(state, jar)
}

fn flip(state: AppState, jar: CookieJar) -> (CookieJar, Redirect) {
    let (jar, from, to) = theme::toggle(jar, state.cookies.secure);
    tracing::info!(from = from.as_str(), to = to.as_str(), "toggling theme");
    (jar, Redirect::to("/form"))
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
