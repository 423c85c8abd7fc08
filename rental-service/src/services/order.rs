//! Order service
//!
//! [`OrderService`] sits between the HTTP handlers and [`OrderStorage`]. Each
//! operation derives a child [`RequestContext`] bounded by the configured
//! timeout, runs the storage call under that deadline, and classifies the
//! outcome. The child context is dropped, and therefore cancelled, when the
//! operation returns on any path.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::error::ServiceError;
use crate::config::OrdersConfig;
use crate::context::RequestContext;
use crate::ids::OrderId;
use crate::models::{CreateOrder, GetAllOrdersRequest, GetAllOrdersResponse, Order, UpdateOrder};
use crate::repository::{OrderStorage, RepositoryOperation, RepositoryResult};

/// Stateless delegator over a typed order storage handle.
#[derive(Debug)]
pub struct OrderService<S> {
    storage: Arc<S>,
    timeout: Duration,
}

impl<S> Clone for OrderService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            timeout: self.timeout,
        }
    }
}

impl<S: OrderStorage> OrderService<S> {
    pub fn new(storage: Arc<S>, timeout: Duration) -> Self {
        Self { storage, timeout }
    }

    pub fn from_config(storage: Arc<S>, config: &OrdersConfig) -> Self {
        Self::new(storage, config.request_timeout())
    }

    /// Per-operation deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn create(
        &self,
        parent: &RequestContext,
        order: CreateOrder,
    ) -> Result<OrderId, ServiceError> {
        let ctx = parent.with_timeout(self.timeout);
        let id = self
            .bounded(&ctx, RepositoryOperation::Create, self.storage.create(&ctx, order))
            .await?;

        tracing::info!(order_id = %id, "order created");
        Ok(id)
    }

    pub async fn update(
        &self,
        parent: &RequestContext,
        order: UpdateOrder,
    ) -> Result<OrderId, ServiceError> {
        let ctx = parent.with_timeout(self.timeout);
        let id = self
            .bounded(&ctx, RepositoryOperation::Update, self.storage.update(&ctx, order))
            .await?;

        tracing::info!(order_id = %id, "order updated");
        Ok(id)
    }

    pub async fn get_all(
        &self,
        parent: &RequestContext,
        request: GetAllOrdersRequest,
    ) -> Result<GetAllOrdersResponse, ServiceError> {
        let ctx = parent.with_timeout(self.timeout);
        let response = self
            .bounded(
                &ctx,
                RepositoryOperation::GetAll,
                self.storage.get_all(&ctx, &request),
            )
            .await?;

        tracing::debug!(
            page = request.page,
            limit = request.limit,
            search = %request.search,
            returned = response.orders.len(),
            count = response.count,
            "orders listed"
        );
        Ok(response)
    }

    pub async fn get_by_id(
        &self,
        parent: &RequestContext,
        id: &OrderId,
    ) -> Result<Order, ServiceError> {
        let ctx = parent.with_timeout(self.timeout);
        self.bounded(&ctx, RepositoryOperation::GetById, self.storage.get_by_id(&ctx, id))
            .await
    }

    pub async fn delete(&self, parent: &RequestContext, id: &OrderId) -> Result<(), ServiceError> {
        let ctx = parent.with_timeout(self.timeout);
        self.bounded(&ctx, RepositoryOperation::Delete, self.storage.delete(&ctx, id))
            .await?;

        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }

    /// Await `call` until the context deadline elapses.
    async fn bounded<T>(
        &self,
        ctx: &RequestContext,
        operation: RepositoryOperation,
        call: impl Future<Output = RepositoryResult<T>>,
    ) -> Result<T, ServiceError> {
        let outcome = match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, call).await,
            None => Ok(call.await),
        };

        match outcome {
            Ok(result) => result.map_err(|err| {
                tracing::debug!(%operation, error = %err, "storage call failed");
                ServiceError::from(err)
            }),
            Err(_elapsed) => {
                tracing::warn!(
                    %operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "storage call exceeded deadline"
                );
                Err(ServiceError::DeadlineExceeded {
                    operation,
                    timeout: self.timeout,
                })
            }
        }
    }
}
