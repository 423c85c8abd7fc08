//! In-process order storage backed by a concurrent map

use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{OrderStorage, RepositoryResult};
use crate::context::RequestContext;
use crate::ids::OrderId;
use crate::models::{CreateOrder, GetAllOrdersRequest, GetAllOrdersResponse, Order, UpdateOrder};

const ENTITY: &str = "Order";

#[derive(Debug, Clone)]
struct StoredOrder {
    /// Insertion sequence; listing order.
    seq: u64,
    order: Order,
}

/// [`OrderStorage`] kept in memory.
///
/// Listing is ordered by insertion. Search is a case-insensitive substring
/// match over the order id, car id, customer id and status.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: DashMap<OrderId, StoredOrder>,
    sequence: AtomicU64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn ensure_live(ctx: &RequestContext, operation: RepositoryOperation) -> RepositoryResult<()> {
        if ctx.is_done() {
            return Err(RepositoryError::timeout(
                operation,
                "execution context expired before storage access",
            ));
        }
        Ok(())
    }

    fn matches(order: &Order, needle: &str) -> bool {
        [
            order.id.to_string(),
            order.car_id.to_string(),
            order.customer_id.to_string(),
            order.status.as_str().to_string(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

impl OrderStorage for InMemoryOrderStore {
    async fn create(&self, ctx: &RequestContext, order: CreateOrder) -> RepositoryResult<OrderId> {
        Self::ensure_live(ctx, RepositoryOperation::Create)?;

        let id = OrderId::new();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let record = Order {
            id,
            car_id: order.car_id,
            customer_id: order.customer_id,
            from_date: order.from_date,
            to_date: order.to_date,
            status: order.status,
            payment_status: order.payment_status,
            amount: order.amount,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.orders.insert(id, StoredOrder { seq, order: record });
        tracing::debug!(order_id = %id, "order stored");

        Ok(id)
    }

    async fn update(&self, ctx: &RequestContext, order: UpdateOrder) -> RepositoryResult<OrderId> {
        Self::ensure_live(ctx, RepositoryOperation::Update)?;

        let mut entry = self.orders.get_mut(&order.id).ok_or_else(|| {
            RepositoryError::not_found(RepositoryOperation::Update, ENTITY, order.id.to_string())
        })?;

        let stored = &mut entry.order;
        stored.car_id = order.car_id;
        stored.customer_id = order.customer_id;
        stored.from_date = order.from_date;
        stored.to_date = order.to_date;
        stored.status = order.status;
        stored.payment_status = order.payment_status;
        stored.amount = order.amount;
        stored.updated_at = Some(Utc::now());

        Ok(order.id)
    }

    async fn get_all(
        &self,
        ctx: &RequestContext,
        request: &GetAllOrdersRequest,
    ) -> RepositoryResult<GetAllOrdersResponse> {
        Self::ensure_live(ctx, RepositoryOperation::GetAll)?;

        let needle = request.search.trim().to_lowercase();
        let mut matched: Vec<StoredOrder> = self
            .orders
            .iter()
            .filter(|entry| needle.is_empty() || Self::matches(&entry.order, &needle))
            .map(|entry| entry.value().clone())
            .collect();
        matched.sort_by_key(|stored| stored.seq);

        let count = matched.len() as u64;
        let orders = matched
            .into_iter()
            .skip(request.offset())
            .take(request.limit as usize)
            .map(|stored| stored.order)
            .collect();

        Ok(GetAllOrdersResponse { orders, count })
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: &OrderId) -> RepositoryResult<Order> {
        Self::ensure_live(ctx, RepositoryOperation::GetById)?;

        self.orders
            .get(id)
            .map(|entry| entry.order.clone())
            .ok_or_else(|| {
                RepositoryError::not_found(RepositoryOperation::GetById, ENTITY, id.to_string())
            })
    }

    async fn delete(&self, ctx: &RequestContext, id: &OrderId) -> RepositoryResult<()> {
        Self::ensure_live(ctx, RepositoryOperation::Delete)?;

        self.orders
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| {
                RepositoryError::not_found(RepositoryOperation::Delete, ENTITY, id.to_string())
            })
    }
}
