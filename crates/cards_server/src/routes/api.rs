//! JSON API handlers under `/cards`.
//!
//! Each handler is a thin pass-through to one store use case. Path and body
//! rejections are taken as `Result` so they reach clients as JSON errors.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cards_core::{Card, CardId};

type CardPath = Result<Path<CardId>, PathRejection>;
type CardBody = Result<Json<Card>, JsonRejection>;

/// `GET /cards`
pub async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<Card>>, ApiError> {
    let cards = state
        .store
        .with_service(|service| service.list_cards())
        .await?;
    Ok(Json(cards))
}

/// `POST /cards`: the body's id, if any, is ignored.
pub async fn create_card(
    State(state): State<AppState>,
    body: CardBody,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let Json(card) = body?;
    let created = state
        .store
        .with_service(move |service| service.create_card(&card))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /cards/{id}`
pub async fn get_card(State(state): State<AppState>, path: CardPath) -> Result<Json<Card>, ApiError> {
    let Path(id) = path?;
    let card = state
        .store
        .with_service(move |service| service.get_card(id))
        .await?;
    Ok(Json(card))
}

/// `PUT /cards/{id}`: upserts under the path id.
pub async fn update_card(
    State(state): State<AppState>,
    path: CardPath,
    body: CardBody,
) -> Result<Json<Card>, ApiError> {
    let Path(id) = path?;
    let Json(card) = body?;
    let saved = state
        .store
        .with_service(move |service| service.replace_card(id, card))
        .await?;
    Ok(Json(saved))
}

/// `DELETE /cards/{id}`: succeeds whether or not the card existed.
pub async fn delete_card(State(state): State<AppState>, path: CardPath) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state
        .store
        .with_service(move |service| service.delete_card(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
