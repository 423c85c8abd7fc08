//! Storage trait for rental orders
//!
//! The order service is generic over [`OrderStorage`], so each service owns
//! exactly one typed storage handle. Methods return `impl Future + Send` so
//! implementations can be plain `async fn` without boxing.

use std::future::Future;

use super::error::RepositoryError;
use crate::context::RequestContext;
use crate::ids::OrderId;
use crate::models::{CreateOrder, GetAllOrdersRequest, GetAllOrdersResponse, Order, UpdateOrder};

/// Result type for storage operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence for rental orders.
///
/// Every method receives the deadline-bearing context of the calling
/// operation. Implementations should stop work once [`RequestContext::is_done`]
/// reports true and must be safe for concurrent use.
pub trait OrderStorage: Send + Sync {
    /// Insert a new order and return its assigned identifier.
    fn create(
        &self,
        ctx: &RequestContext,
        order: CreateOrder,
    ) -> impl Future<Output = RepositoryResult<OrderId>> + Send;

    /// Replace the mutable fields of an existing order.
    ///
    /// Fails with a `NotFound` kind when no order has `order.id`.
    fn update(
        &self,
        ctx: &RequestContext,
        order: UpdateOrder,
    ) -> impl Future<Output = RepositoryResult<OrderId>> + Send;

    /// Filter by `request.search`, then return the `(page-1)*limit` window and
    /// the size of the whole filtered set.
    fn get_all(
        &self,
        ctx: &RequestContext,
        request: &GetAllOrdersRequest,
    ) -> impl Future<Output = RepositoryResult<GetAllOrdersResponse>> + Send;

    /// Fails with a `NotFound` kind when no order has `id`.
    fn get_by_id(
        &self,
        ctx: &RequestContext,
        id: &OrderId,
    ) -> impl Future<Output = RepositoryResult<Order>> + Send;

    /// Fails with a `NotFound` kind when no order has `id`.
    fn delete(
        &self,
        ctx: &RequestContext,
        id: &OrderId,
    ) -> impl Future<Output = RepositoryResult<()>> + Send;
}
