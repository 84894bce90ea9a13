//! Server-rendered pages: form and success.

use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;

use crate::render;
use crate::theme::Theme;

/// `GET /form` — server-side form page, themed from the request cookie.
pub async fn form_page(jar: CookieJar) -> Html<String> {
    let theme = Theme::from_jar(&jar);
    Html(render::form_page(theme))
}

/// `GET /success` — submission confirmation page.
pub async fn success_page(jar: CookieJar) -> Html<String> {
    let theme = Theme::from_jar(&jar);
    Html(render::success_page(theme))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
