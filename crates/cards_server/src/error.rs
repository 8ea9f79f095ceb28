//! HTTP error mapping for the JSON and HTML layers.
//!
//! `NotFound` becomes 404 on both layers. Storage failures become a generic
//! 500; their details go to the log only. Extractor rejections on the JSON
//! layer keep axum's status but share the `{"error": ...}` body shape.

use crate::render::{error_page, model, RenderError, TemplateRenderer, ERROR_TEMPLATE};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use cards_core::CardError;
use log::error;
use serde_json::json;

/// Error returned by JSON API handlers.
#[derive(Debug)]
pub enum ApiError {
    Card(CardError),
    /// Request could not be extracted (bad path id, malformed body).
    Rejected { status: StatusCode, message: String },
}

impl From<CardError> for ApiError {
    fn from(value: CardError) -> Self {
        Self::Card(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Rejected {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::Rejected {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Card(err) => classify(&err),
            Self::Rejected { status, message } => (status, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Error returned by HTML page handlers.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    /// Renders this error through the `error` template of `renderer`.
    ///
    /// Falls back to the built-in error document when the renderer fails.
    pub fn into_page(self, renderer: &dyn TemplateRenderer) -> Response {
        let page_model = model([
            ("status", json!(self.status.as_u16())),
            ("message", json!(self.message)),
        ]);
        let body = renderer
            .render(ERROR_TEMPLATE, &page_model)
            .unwrap_or_else(|err| {
                error!("event=render module=http status=error template={ERROR_TEMPLATE} error={err}");
                error_page(self.status.as_u16(), &self.message)
            });
        (self.status, Html(body)).into_response()
    }
}

impl From<CardError> for PageError {
    fn from(value: CardError) -> Self {
        let (status, message) = classify(&value);
        Self { status, message }
    }
}

impl From<RenderError> for PageError {
    fn from(value: RenderError) -> Self {
        error!("event=render module=http status=error error={value}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

fn classify(err: &CardError) -> (StatusCode, String) {
    match err {
        CardError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        CardError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        CardError::Storage(_) | CardError::Interrupted(_) => {
            error!("event=store_call module=http status=error error={err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}
