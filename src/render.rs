//! Server-rendered pages.
//!
//! DESIGN
//! ======
//! Plain `format!` templates returned as `Html` at the route layer. Each
//! page takes the current `Theme` and renders against `/static/styles.css`,
//! which defines both palettes; the body class selects one. No template
//! engine — two pages do not justify one.

use std::fmt::Write;

use crate::theme::Theme;
use crate::validation::Submission;

/// Escape text for interpolation into HTML body content or attributes.
#[must_use]
pub fn html_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell: head, stylesheet link, themed body class.
fn page(theme: Theme, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <link rel="stylesheet" href="/static/styles.css" />
  </head>
  <body class="theme-{theme}">
    <main class="card">
{body}
    </main>
  </body>
</html>"#,
        title = html_escape(title),
        theme = theme.as_str(),
    )
}

/// GET `/form` — the server-side form page.
#[must_use]
pub fn form_page(theme: Theme) -> String {
    let next_label = match theme {
        Theme::Light => "Escuro",
        Theme::Dark => "Claro",
    };

    let mut body = String::new();
    let _ = write!(
        body,
        r#"      <h1>Formulário Lado Servidor</h1>
      <p class="subtitle">Demonstração de formulário processado inteiramente no servidor</p>
      <p class="switch"><a href="/form-client">Alternar para Formulário Lado Cliente</a></p>
      <form method="post" action="/form" class="contact-form">
        <label for="name">Nome</label>
        <input id="name" name="name" placeholder="Digite seu nome" />
        <label for="email">Email</label>
        <input id="email" name="email" placeholder="Digite seu email" />
        <label for="message">Mensagem</label>
        <textarea id="message" name="message" placeholder="Digite sua mensagem"></textarea>
        <div class="buttons">
          <button type="submit">Enviar</button>
          <button type="submit" formaction="/form/result" class="soft">Enviar e Ver Dados</button>
          <button type="reset" class="soft">Limpar Campos</button>
        </div>
      </form>
      <section class="actions">
        <h2>Ações Adicionais</h2>
        <form method="post" action="/theme/toggle">
          <button type="submit" class="soft">Alternar para Tema {next_label}</button>
        </form>
        <form method="post" action="/form/clear">
          <button type="submit" class="soft danger">Limpar Formulário</button>
        </form>
        <p class="current-theme">Tema atual: {label}</p>
      </section>"#,
        label = theme.label_pt(),
    );
    page(theme, "Formulário Lado Servidor", &body)
}

/// POST `/form/result` — per-field echo of a submitted record. Labels keep
/// the original demo's English. User input is escaped before interpolation.
#[must_use]
pub fn result_page(theme: Theme, data: &Submission) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"      <h1>Form Submission</h1>
      <dl class="result">
        <dt>Name:</dt>
        <dd>{name}</dd>
        <dt>Email:</dt>
        <dd>{email}</dd>
        <dt>Message:</dt>
        <dd>{message}</dd>
      </dl>
      <p><a href="/form">Voltar ao Formulário</a></p>"#,
        name = html_escape(&data.name),
        email = html_escape(&data.email),
        message = html_escape(&data.message),
    );
    page(theme, "Form Submission", &body)
}

/// GET `/success` — static confirmation page.
#[must_use]
pub fn success_page(theme: Theme) -> String {
    let body = r#"      <h1 class="success">Formulário Enviado com Sucesso!</h1>
      <p>Obrigado pelo seu envio. Entraremos em contato em breve.</p>
      <p><a href="/form">Voltar ao Formulário</a></p>"#;
    page(theme, "Formulário Enviado com Sucesso!", body)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
