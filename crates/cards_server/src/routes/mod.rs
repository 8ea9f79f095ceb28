//! Route registration.
//!
//! Every route maps one method + path to one handler; the store handle and
//! renderer reach handlers through [`AppState`].

pub mod api;
pub mod ui;

use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::time::Instant;

/// Builds the complete application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/cards", get(api::list_cards).post(api::create_card))
        .route(
            "/cards/:id",
            get(api::get_card)
                .put(api::update_card)
                .delete(api::delete_card),
        )
        .route("/ui", get(ui::root))
        .route("/ui/", get(ui::root))
        .route("/ui/cards", get(ui::list_page).post(ui::create_from_form))
        .route("/ui/cards/:id", get(ui::view_page))
        .route("/ui/cards/:id/delete", post(ui::delete_from_form))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    info!(
        "event=http_request module=http status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}
