/// Order API routes
///
/// Listing open orders, placing market/limit orders and cancelling. Each
/// dispatcher makes exactly one trading client call.
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::clob::ClientHandle;
use crate::errors::BridgeError;
use crate::logger::{self, LogTag};
use crate::webserver::{
    models::{
        CancelOrderResponse, LimitOrderResponse, MarketOrderResponse, OrderRequest,
        OrdersResponse,
    },
    state::AppState,
    utils::{rejection_response, respond},
};

// =============================================================================
// DISPATCHERS
// =============================================================================

pub async fn dispatch_orders(handle: &ClientHandle) -> Result<OrdersResponse, BridgeError> {
    let client = handle.get().await?;
    let records = client.get_orders().await?;

    logger::debug(
        LogTag::Orders,
        &format!("Fetched {} open orders", records.len()),
    );

    Ok(OrdersResponse::from_raw(&records))
}

pub async fn dispatch_market_order(
    handle: &ClientHandle,
    request: OrderRequest,
) -> Result<MarketOrderResponse, BridgeError> {
    let client = handle.get().await?;
    let reply = client
        .place_market_order(&request.token_id, &request.side, request.amount)
        .await?;

    logger::info(
        LogTag::Orders,
        &format!(
            "📈 Market order {} {} {} -> {}",
            request.side, request.amount, request.token_id, reply
        ),
    );

    Ok(MarketOrderResponse::from_raw(&reply))
}

pub async fn dispatch_limit_order(
    handle: &ClientHandle,
    request: OrderRequest,
) -> Result<LimitOrderResponse, BridgeError> {
    // Validation comes first so an invalid request never reaches the client
    let price = request.require_limit_price()?;

    let client = handle.get().await?;
    let reply = client
        .place_limit_order(&request.token_id, &request.side, request.amount, price)
        .await?;

    logger::info(
        LogTag::Orders,
        &format!(
            "📈 Limit order {} {} {} @ {} -> {}",
            request.side, request.amount, request.token_id, price, reply
        ),
    );

    Ok(LimitOrderResponse::from_raw(&reply))
}

pub async fn dispatch_cancel_order(
    handle: &ClientHandle,
    order_id: &str,
) -> Result<CancelOrderResponse, BridgeError> {
    let client = handle.get().await?;
    let reply = client.cancel_order(order_id).await?;

    // The reply is logged, never inspected
    logger::info(
        LogTag::Orders,
        &format!("Cancel requested for {} -> {}", order_id, reply),
    );

    Ok(CancelOrderResponse::cancelled(order_id))
}

// =============================================================================
// ROUTE HANDLERS
// =============================================================================

/// GET /orders
async fn get_open_orders(State(state): State<Arc<AppState>>) -> Response {
    respond("get_orders", dispatch_orders(&state.client).await)
}

/// POST /order/market
async fn place_market_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    respond(
        "place_market_order",
        dispatch_market_order(&state.client, request).await,
    )
}

/// POST /order/limit
async fn place_limit_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    respond(
        "place_limit_order",
        dispatch_limit_order(&state.client, request).await,
    )
}

/// DELETE /order/:order_id
async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Response {
    cancel_response(&state, &order_id).await
}

/// DELETE /order/market
///
/// The fixed `/order/market` segment shadows `/order/:order_id`, so an
/// order whose id is literally `market` is cancelled here.
async fn cancel_order_named_market(State(state): State<Arc<AppState>>) -> Response {
    cancel_response(&state, "market").await
}

/// DELETE /order/limit
async fn cancel_order_named_limit(State(state): State<Arc<AppState>>) -> Response {
    cancel_response(&state, "limit").await
}

async fn cancel_response(state: &AppState, order_id: &str) -> Response {
    respond(
        "cancel_order",
        dispatch_cancel_order(&state.client, order_id).await,
    )
}

// =============================================================================
// ROUTER
// =============================================================================

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(get_open_orders))
        .route(
            "/order/market",
            post(place_market_order).delete(cancel_order_named_market),
        )
        .route(
            "/order/limit",
            post(place_limit_order).delete(cancel_order_named_limit),
        )
        .route("/order/:order_id", delete(cancel_order))
}
