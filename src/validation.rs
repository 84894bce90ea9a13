//! Form validation — one pure function shared by every entry point.
//!
//! DESIGN
//! ======
//! The original demo duplicated validation per variant, with the client
//! adding length minimums the server never checked. Here a single `validate`
//! covers both behaviors through two rule tiers:
//!
//! - `Rules::Submit` — what the server boundaries enforce: all fields
//!   present after trimming plus a well-formed email.
//! - `Rules::Interactive` — the stricter client tier, adding minimum
//!   lengths for name and message. Mirrored by the static client page's JS.
//!
//! User-facing messages stay in Portuguese, matching the rendered pages.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum trimmed name length under `Rules::Interactive`.
pub const NAME_MIN_LEN: usize = 3;

/// Minimum trimmed message length under `Rules::Interactive`.
pub const MESSAGE_MIN_LEN: usize = 10;

/// Single-`@`-then-`.` email shape, as the original client checked.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// A submitted form record: three free-text fields, validated, logged,
/// and discarded. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Validation strictness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rules {
    /// Server-boundary tier: presence plus email format.
    Submit,
    /// Client-parity tier: adds minimum lengths for name and message.
    Interactive,
}

/// Why the name field failed. Display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Nome é obrigatório")]
    Required,
    #[error("Nome deve ter pelo menos {0} caracteres")]
    TooShort(usize),
}

/// Why the email field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email é obrigatório")]
    Required,
    #[error("Por favor, digite um email válido")]
    Invalid,
}

/// Why the message field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("Mensagem é obrigatória")]
    Required,
    #[error("Mensagem deve ter pelo menos {0} caracteres")]
    TooShort(usize),
}

/// Per-field validation outcome. `None` means the field passed. Each field
/// has its own error enum, so a failure kind that cannot apply to a field
/// is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<NameError>,
    pub email: Option<EmailError>,
    pub message: Option<MessageError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// True when at least one field was missing entirely.
    #[must_use]
    pub fn any_required(&self) -> bool {
        self.name == Some(NameError::Required)
            || self.email == Some(EmailError::Required)
            || self.message == Some(MessageError::Required)
    }

    /// Aggregate user-facing message. Missing fields dominate, matching the
    /// original server action's single "all fields required" response.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.any_required() {
            return "Todos os campos são obrigatórios.".to_owned();
        }
        self.field_messages()
            .into_iter()
            .next()
            .unwrap_or_else(|| "Por favor, corrija os erros no formulário".to_owned())
    }

    /// Per-field Portuguese messages, in field order.
    #[must_use]
    pub fn field_messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(e) = self.name {
            out.push(e.to_string());
        }
        if let Some(e) = self.email {
            out.push(e.to_string());
        }
        if let Some(e) = self.message {
            out.push(e.to_string());
        }
        out
    }
}

/// Validate a submission under the given rule tier.
///
/// # Errors
///
/// Returns the per-field failures when any field does not satisfy the tier.
pub fn validate(submission: &Submission, rules: Rules) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = submission.name.trim();
    if name.is_empty() {
        errors.name = Some(NameError::Required);
    } else if rules == Rules::Interactive && name.chars().count() < NAME_MIN_LEN {
        errors.name = Some(NameError::TooShort(NAME_MIN_LEN));
    }

    let email = submission.email.trim();
    if email.is_empty() {
        errors.email = Some(EmailError::Required);
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some(EmailError::Invalid);
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.message = Some(MessageError::Required);
    } else if rules == Rules::Interactive && message.chars().count() < MESSAGE_MIN_LEN {
        errors.message = Some(MessageError::TooShort(MESSAGE_MIN_LEN));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
