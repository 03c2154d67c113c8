use crate::domains::swap::models::{
    QuoteRequest, QuoteResponse, SwapTransactionRequest, SwapTransactionResponse,
};
use crate::shared::errors::SwapError;
use crate::shared::services::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

// 스왑 가격 조회 핸들러
// Handler: queries Jupiter for swap quotes
// 역할: NestJS의 @Get() 핸들러 같은 것
// 비즈니스 로직은 Service에 있음
#[utoipa::path(
    get,
    path = "/api/v1/swap/quote",
    params(QuoteRequest),
    responses(
        (status = 200, description = "Quote retrieved successfully", body = QuoteResponse),
        (status = 400, description = "Bad request"),
        (status = 502, description = "Jupiter API error")
    ),
    tag = "Swap"
)]
pub async fn get_quote(
    State(app_state): State<AppState>,
    Query(params): Query<QuoteRequest>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let quote = app_state
        .swap_state
        .swap_service
        .get_quote(&params.input_mint, &params.output_mint, params.amount)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(quote))
}

// 스왑 트랜잭션 생성 핸들러
// Handler: creates an unsigned swap transaction via Jupiter
#[utoipa::path(
    post,
    path = "/api/v1/swap/transaction",
    request_body = SwapTransactionRequest,
    responses(
        (status = 200, description = "Swap transaction created successfully", body = SwapTransactionResponse),
        (status = 400, description = "Bad request"),
        (status = 502, description = "Jupiter API error")
    ),
    tag = "Swap"
)]
pub async fn create_swap_transaction(
    State(app_state): State<AppState>,
    Json(request): Json<SwapTransactionRequest>,
) -> Result<Json<SwapTransactionResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let swap_response = app_state
        .swap_state
        .swap_service
        .create_swap_transaction(request)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(swap_response))
}
