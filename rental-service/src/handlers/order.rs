//! HTTP handlers for rental orders
//!
//! Each handler decodes its input, validates path identifiers, calls the
//! order service under a fresh request context, and renders an [`Envelope`].
//! Any failure before the service call returns early without touching
//! storage.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use super::error::ApiError;
use super::query::ListQuery;
use super::response::Envelope;
use super::ApiOperation;
use crate::context::RequestContext;
use crate::ids::{validate_id, OrderId};
use crate::models::{CreateOrder, GetAllOrdersResponse, Order, UpdateOrderBody};
use crate::repository::OrderStorage;
use crate::services::ErrorKind;
use crate::state::AppState;

type ApiResult<T> = Result<Envelope<T>, ApiError>;

/// `POST /order`
pub async fn create_order<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateOrder>, JsonRejection>,
) -> ApiResult<OrderId>
where
    S: OrderStorage + 'static,
{
    let Json(order) = payload.map_err(|r| ApiError::invalid_body(ApiOperation::Create, r))?;

    let ctx = RequestContext::background();
    let id = state
        .orders()
        .create(&ctx, order)
        .await
        .map_err(|e| ApiError::service(ApiOperation::Create, e))?;

    Ok(Envelope::ok(id))
}

/// `PUT /order/{id}`
pub async fn update_order<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateOrderBody>, JsonRejection>,
) -> ApiResult<OrderId>
where
    S: OrderStorage + 'static,
{
    let id = path_id(ApiOperation::Update, path)?;
    let Json(body) = payload.map_err(|r| ApiError::invalid_body(ApiOperation::Update, r))?;

    let ctx = RequestContext::background();
    let id = state
        .orders()
        .update(&ctx, body.with_id(id))
        .await
        .map_err(|e| ApiError::service(ApiOperation::Update, e))?;

    Ok(Envelope::ok(id))
}

/// `GET /orders?page=&limit=&search=`
pub async fn list_orders<S>(
    State(state): State<AppState<S>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<GetAllOrdersResponse>
where
    S: OrderStorage + 'static,
{
    let Query(query) = query.map_err(|r| {
        ApiError::new(
            ApiOperation::List,
            ErrorKind::MalformedInput,
            "error while reading query",
            r.body_text(),
        )
    })?;
    let request = query
        .into_request(&state.config().pagination)
        .map_err(ApiError::invalid_pagination)?;

    let ctx = RequestContext::background();
    let orders = state
        .orders()
        .get_all(&ctx, request)
        .await
        .map_err(|e| ApiError::service(ApiOperation::List, e))?;

    Ok(Envelope::ok(orders))
}

/// `GET /order/{id}`
pub async fn get_order<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Order>
where
    S: OrderStorage + 'static,
{
    let id = path_id(ApiOperation::Get, path)?;

    let ctx = RequestContext::background();
    let order = state
        .orders()
        .get_by_id(&ctx, &id)
        .await
        .map_err(|e| ApiError::service(ApiOperation::Get, e))?;

    Ok(Envelope::ok(order))
}

/// `DELETE /order/{id}`
pub async fn delete_order<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<OrderId>
where
    S: OrderStorage + 'static,
{
    let id = path_id(ApiOperation::Delete, path)?;

    let ctx = RequestContext::background();
    state
        .orders()
        .delete(&ctx, &id)
        .await
        .map_err(|e| ApiError::service(ApiOperation::Delete, e))?;

    Ok(Envelope::ok(id))
}

/// Extract and validate the `{id}` path segment.
fn path_id(
    operation: ApiOperation,
    path: Result<Path<String>, PathRejection>,
) -> Result<OrderId, ApiError> {
    let Path(raw) = path.map_err(|r| {
        ApiError::new(
            operation,
            ErrorKind::MalformedInput,
            "error while validating id",
            r.body_text(),
        )
    })?;

    validate_id(&raw).map_err(|e| ApiError::invalid_id(operation, e))
}
