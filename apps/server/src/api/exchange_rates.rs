use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use ratehub_core::fx::{Conversion, ExchangeRateDetails, NewExchangeRate};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
struct UpdateRateRequest {
    rate: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConvertParams {
    base_code: String,
    target_code: String,
    amount: Decimal,
}

async fn get_exchange_rates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ExchangeRateDetails>>> {
    let rates = state.fx_service.get_exchange_rates()?;
    Ok(Json(rates))
}

async fn get_exchange_rate(
    Path(pair): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExchangeRateDetails>> {
    let rate = state.fx_service.get_exchange_rate(&pair)?;
    Ok(Json(rate))
}

async fn create_exchange_rate(
    State(state): State<Arc<AppState>>,
    Json(new_rate): Json<NewExchangeRate>,
) -> ApiResult<(StatusCode, Json<ExchangeRateDetails>)> {
    let rate = state.fx_service.add_exchange_rate(new_rate).await?;
    Ok((StatusCode::CREATED, Json(rate)))
}

async fn update_exchange_rate(
    Path(pair): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRateRequest>,
) -> ApiResult<Json<ExchangeRateDetails>> {
    let rate = state
        .fx_service
        .update_exchange_rate(&pair, request.rate)
        .await?;
    Ok(Json(rate))
}

async fn delete_exchange_rate(
    Path(pair): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExchangeRateDetails>> {
    // The deleted record's expanded representation is returned with 200 as
    // the caller's confirmation.
    let rate = state.fx_service.delete_exchange_rate(&pair).await?;
    Ok(Json(rate))
}

async fn convert(
    Query(params): Query<ConvertParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Conversion>> {
    let conversion =
        state
            .fx_service
            .convert(&params.base_code, &params.target_code, params.amount)?;
    Ok(Json(conversion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/exchangeRates",
            get(get_exchange_rates).post(create_exchange_rate),
        )
        .route(
            "/exchangeRate/{pair}",
            get(get_exchange_rate)
                .patch(update_exchange_rate)
                .delete(delete_exchange_rate),
        )
        .route("/exchange", get(convert))
}
