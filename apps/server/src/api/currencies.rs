use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use ratehub_core::currencies::{Currency, NewCurrency};

async fn get_currencies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Currency>>> {
    let currencies = state.currency_service.get_currencies()?;
    Ok(Json(currencies))
}

async fn get_currency(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Currency>> {
    let currency = state.currency_service.get_currency(&code)?;
    Ok(Json(currency))
}

async fn create_currency(
    State(state): State<Arc<AppState>>,
    Json(new_currency): Json<NewCurrency>,
) -> ApiResult<(StatusCode, Json<Currency>)> {
    let currency = state.currency_service.create_currency(new_currency).await?;
    Ok((StatusCode::CREATED, Json(currency)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currencies", get(get_currencies).post(create_currency))
        .route("/currency/{code}", get(get_currency))
}
