//! HTML template rendering for the page layer.
//!
//! # Responsibility
//! - Turn a template name plus a key/value model into an HTML document.
//! - Escape every interpolated value.
//!
//! # Invariants
//! - Handlers depend only on [`TemplateRenderer`], never on markup.

use cards_core::{Card, CardId};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

/// Key/value data handed to a template.
pub type Model = Map<String, Value>;

pub const CARDS_TEMPLATE: &str = "cards";
pub const CARD_VIEW_TEMPLATE: &str = "card-view";
pub const ERROR_TEMPLATE: &str = "error";

#[derive(Debug)]
pub enum RenderError {
    UnknownTemplate(String),
    /// A model entry is missing or has the wrong shape.
    InvalidModel {
        template: &'static str,
        key: &'static str,
        message: String,
    },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTemplate(name) => write!(f, "unknown template `{name}`"),
            Self::InvalidModel {
                template,
                key,
                message,
            } => write!(f, "template `{template}` model key `{key}`: {message}"),
        }
    }
}

impl Error for RenderError {}

/// Renders named templates into HTML.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str, model: &Model) -> Result<String, RenderError>;
}

/// Renderer for the templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateRenderer for BuiltinTemplates {
    fn render(&self, name: &str, model: &Model) -> Result<String, RenderError> {
        match name {
            CARDS_TEMPLATE => render_cards(model),
            CARD_VIEW_TEMPLATE => render_card_view(model),
            ERROR_TEMPLATE => render_error(model),
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Builds a model from literal entries.
pub fn model<const N: usize>(entries: [(&str, Value); N]) -> Model {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn render_cards(model: &Model) -> Result<String, RenderError> {
    let cards: Vec<Card> = model_entry(model, CARDS_TEMPLATE, "cards")?;
    let form: Card = model_entry(model, CARDS_TEMPLATE, "card")?;
    let errors: BTreeMap<String, String> = match model.get("errors") {
        Some(_) => model_entry(model, CARDS_TEMPLATE, "errors")?,
        None => BTreeMap::new(),
    };

    let mut body = String::from("<h1>Cards</h1>\n<table>\n");
    body.push_str("<thead><tr><th>ID</th><th>Title</th><th>Status</th><th></th></tr></thead>\n<tbody>\n");
    if cards.is_empty() {
        body.push_str("<tr><td colspan=\"4\">No cards yet.</td></tr>\n");
    }
    for card in &cards {
        let id = display_id(card.id);
        let _ = writeln!(
            body,
            "<tr><td>{id}</td><td><a href=\"/ui/cards/{id}\">{title}</a></td><td>{status}</td>\
             <td><form method=\"post\" action=\"/ui/cards/{id}/delete\">\
             <button type=\"submit\">Delete</button></form></td></tr>",
            title = escape_html(&card.title),
            status = escape_html(&card.status),
        );
    }
    body.push_str("</tbody>\n</table>\n<h2>Add card</h2>\n");

    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for (field, message) in &errors {
            let _ = writeln!(
                body,
                "<li>{}: {}</li>",
                escape_html(field),
                escape_html(message)
            );
        }
        body.push_str("</ul>\n");
    }

    let _ = write!(
        body,
        "<form method=\"post\" action=\"/ui/cards\">\n\
         <label>Title <input name=\"title\" value=\"{title}\"></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <label>Status <input name=\"status\" value=\"{status}\"></label>\n\
         <button type=\"submit\">Add</button>\n</form>\n",
        title = escape_html(&form.title),
        description = escape_html(&form.description),
        status = escape_html(&form.status),
    );

    Ok(layout("Cards", &body))
}

fn render_card_view(model: &Model) -> Result<String, RenderError> {
    let card: Card = model_entry(model, CARD_VIEW_TEMPLATE, "card")?;
    let id = display_id(card.id);
    let title = escape_html(&card.title);

    let body = format!(
        "<h1>{title}</h1>\n<dl>\n\
         <dt>ID</dt><dd>{id}</dd>\n\
         <dt>Description</dt><dd>{description}</dd>\n\
         <dt>Status</dt><dd>{status}</dd>\n</dl>\n\
         <form method=\"post\" action=\"/ui/cards/{id}/delete\">\
         <button type=\"submit\">Delete</button></form>\n\
         <p><a href=\"/ui/cards\">Back to cards</a></p>\n",
        description = escape_html(&card.description),
        status = escape_html(&card.status),
    );

    Ok(layout(&format!("Card {id}"), &body))
}

fn render_error(model: &Model) -> Result<String, RenderError> {
    let status: u16 = model_entry(model, ERROR_TEMPLATE, "status")?;
    let message: String = model_entry(model, ERROR_TEMPLATE, "message")?;
    Ok(error_page(status, &message))
}

/// Error document, also used when the renderer itself is unavailable.
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>Error {status}</h1>\n<p>{}</p>\n<p><a href=\"/ui/cards\">Back to cards</a></p>\n",
        escape_html(message)
    );
    layout(&format!("Error {status}"), &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

fn display_id(id: Option<CardId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn model_entry<T: DeserializeOwned>(
    model: &Model,
    template: &'static str,
    key: &'static str,
) -> Result<T, RenderError> {
    let value = model.get(key).ok_or_else(|| RenderError::InvalidModel {
        template,
        key,
        message: "missing".to_string(),
    })?;
    T::deserialize(value).map_err(|err| RenderError::InvalidModel {
        template,
        key,
        message: err.to_string(),
    })
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<b a="1">Tom & 'Jerry'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn cards_template_lists_cards_and_escapes_titles() {
        let cards = vec![Card::new("<script>", "", "OPEN").with_id(1)];
        let html = BuiltinTemplates
            .render(
                CARDS_TEMPLATE,
                &model([("cards", json!(cards)), ("card", json!(Card::default()))]),
            )
            .unwrap();

        assert!(html.contains("href=\"/ui/cards/1\""));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("action=\"/ui/cards/1/delete\""));
    }

    #[test]
    fn cards_template_shows_validation_errors() {
        let html = BuiltinTemplates
            .render(
                CARDS_TEMPLATE,
                &model([
                    ("cards", json!([])),
                    ("card", json!(Card::new("", "kept", "OPEN"))),
                    ("errors", json!({"title": "must not be blank"})),
                ]),
            )
            .unwrap();

        assert!(html.contains("No cards yet."));
        assert!(html.contains("<li>title: must not be blank</li>"));
        assert!(html.contains(">kept</textarea>"));
    }

    #[test]
    fn card_view_template_renders_all_fields() {
        let card = Card::new("Title", "Long description", "DONE").with_id(12);
        let html = BuiltinTemplates
            .render(CARD_VIEW_TEMPLATE, &model([("card", json!(card))]))
            .unwrap();

        assert!(html.contains("<title>Card 12</title>"));
        assert!(html.contains("<dd>Long description</dd>"));
        assert!(html.contains("<dd>DONE</dd>"));
    }

    #[test]
    fn error_template_renders_status_and_escaped_message() {
        let html = BuiltinTemplates
            .render(
                ERROR_TEMPLATE,
                &model([("status", json!(404)), ("message", json!("Card <1> not found"))]),
            )
            .unwrap();

        assert!(html.contains("<h1>Error 404</h1>"));
        assert!(html.contains("Card &lt;1&gt; not found"));
    }

    #[test]
    fn missing_model_key_is_reported() {
        let err = BuiltinTemplates
            .render(CARD_VIEW_TEMPLATE, &Model::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidModel { key: "card", .. }));
    }

    #[test]
    fn unknown_template_is_rejected() {
        let err = BuiltinTemplates.render("nope", &Model::new()).unwrap_err();
        assert_eq!(err.to_string(), "unknown template `nope`");
    }
}
