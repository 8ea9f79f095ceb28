//! Server-rendered page handlers under `/ui`.
//!
//! Failures are rendered through the injected renderer's `error` template.

use crate::error::PageError;
use crate::render::{model, CARDS_TEMPLATE, CARD_VIEW_TEMPLATE};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use cards_core::{Card, CardError, CardId, DEFAULT_STATUS};
use serde_json::{json, Map, Value};

const CARDS_PAGE: &str = "/ui/cards";

/// `GET /ui` and `GET /ui/`
pub async fn root() -> Redirect {
    Redirect::to(CARDS_PAGE)
}

/// `GET /ui/cards`: card table plus an empty add form.
pub async fn list_page(State(state): State<AppState>) -> Response {
    let blank = Card {
        status: DEFAULT_STATUS.to_string(),
        ..Card::default()
    };
    let result = render_list(&state, blank, None).await;
    respond(&state, result)
}

/// `POST /ui/cards`: re-renders the list with errors on invalid input,
/// otherwise stores the card and redirects to the list.
pub async fn create_from_form(State(state): State<AppState>, Form(card): Form<Card>) -> Response {
    let result = create(&state, Card { id: None, ..card }).await;
    respond(&state, result)
}

/// `GET /ui/cards/{id}`: 404 page when the card is absent.
pub async fn view_page(State(state): State<AppState>, Path(id): Path<CardId>) -> Response {
    let result = view(&state, id).await;
    respond(&state, result)
}

/// `POST /ui/cards/{id}/delete`: 404 page when the card is absent.
pub async fn delete_from_form(State(state): State<AppState>, Path(id): Path<CardId>) -> Response {
    let result = state
        .store
        .with_service(move |service| service.delete_existing_card(id))
        .await
        .map(|()| Redirect::to(CARDS_PAGE))
        .map_err(PageError::from);
    respond(&state, result)
}

async fn create(state: &AppState, card: Card) -> Result<Response, PageError> {
    let submitted = card.clone();
    let outcome = state
        .store
        .with_service(move |service| service.create_validated_card(&submitted))
        .await;

    match outcome {
        Ok(_) => Ok(Redirect::to(CARDS_PAGE).into_response()),
        Err(CardError::Validation(invalid)) => {
            let mut errors = Map::new();
            errors.insert(invalid.field.to_string(), Value::from(invalid.message));
            let page = render_list(state, card, Some(Value::Object(errors))).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn view(state: &AppState, id: CardId) -> Result<Html<String>, PageError> {
    let card = state
        .store
        .with_service(move |service| service.get_card(id))
        .await?;
    let html = state
        .renderer
        .render(CARD_VIEW_TEMPLATE, &model([("card", json!(card))]))?;
    Ok(Html(html))
}

async fn render_list(
    state: &AppState,
    form: Card,
    errors: Option<Value>,
) -> Result<Html<String>, PageError> {
    let cards = state
        .store
        .with_service(|service| service.list_cards())
        .await?;
    let mut page_model = model([("cards", json!(cards)), ("card", json!(form))]);
    if let Some(errors) = errors {
        page_model.insert("errors".to_string(), errors);
    }
    let html = state.renderer.render(CARDS_TEMPLATE, &page_model)?;
    Ok(Html(html))
}

fn respond(state: &AppState, result: Result<impl IntoResponse, PageError>) -> Response {
    match result {
        Ok(page) => page.into_response(),
        Err(err) => err.into_page(state.renderer.as_ref()),
    }
}
