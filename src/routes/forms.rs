//! Form submission handlers.
//!
//! Two server-side variants share one validation function:
//! `POST /form` answers with redirects only (failures are logged and
//! user-silent, as in a plain HTML form flow), while `POST /api/form`
//! answers with a structured `{status, message, data?}` payload for
//! callers that render feedback inline.

use std::time::Duration;

use axum::Form;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::render;
use crate::theme::Theme;
use crate::validation::{self, Rules, Submission};

/// Simulated processing latency, as in the original demo.
const PROCESSING_DELAY: Duration = Duration::from_millis(500);

/// Structured submission outcome for the inline-feedback variant.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPayload {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Submission>,
}

impl StatusPayload {
    fn success(data: Submission) -> Self {
        Self {
            status: "success",
            message: "Formulário enviado com sucesso!".to_owned(),
            data: Some(data),
        }
    }

    fn error(message: String) -> Self {
        Self { status: "error", message, data: None }
    }
}

/// `POST /form` — redirect variant. Valid submissions land on `/success`;
/// invalid ones are logged and sent back to the form with no feedback.
pub async fn submit_form(Form(submission): Form<Submission>) -> Redirect {
    if let Err(errors) = validation::validate(&submission, Rules::Submit) {
        tracing::warn!(errors = ?errors.field_messages(), "form validation failed");
        return Redirect::to("/form");
    }

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        "form submitted",
    );

    tokio::time::sleep(PROCESSING_DELAY).await;
    Redirect::to("/success")
}

/// `POST /api/form` — structured-status variant.
pub async fn submit_form_api(Form(submission): Form<Submission>) -> Json<StatusPayload> {
    if let Err(errors) = validation::validate(&submission, Rules::Submit) {
        tracing::warn!(errors = ?errors.field_messages(), "form validation failed");
        return Json(StatusPayload::error(errors.user_message()));
    }

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        "form submitted",
    );

    tokio::time::sleep(PROCESSING_DELAY).await;
    Json(StatusPayload::success(submission))
}

/// `POST /form/result` — server-rendered echo of the submitted record.
/// Validation and failure behavior match the redirect variant; success
/// renders the form-result display page instead of redirecting.
pub async fn submit_form_result(
    jar: CookieJar,
    Form(submission): Form<Submission>,
) -> Response {
    if let Err(errors) = validation::validate(&submission, Rules::Submit) {
        tracing::warn!(errors = ?errors.field_messages(), "form validation failed");
        return Redirect::to("/form").into_response();
    }

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        "form submitted",
    );

    tokio::time::sleep(PROCESSING_DELAY).await;
    let theme = Theme::from_jar(&jar);
    Html(render::result_page(theme, &submission)).into_response()
}

/// `POST /form/clear` — reset by navigation: a fresh `/form` load carries
/// no state to clear server-side.
pub async fn clear_form() -> Redirect {
    Redirect::to("/form")
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
