//! Order data model and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::ids::OrderId;

/// Lifecycle state of a rental order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rental order linking a customer and a car over a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment_status: bool,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: bool,
    #[serde(default)]
    pub amount: f64,
}

/// Body of `PUT /order/{id}`. The identifier comes from the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderBody {
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: bool,
    #[serde(default)]
    pub amount: f64,
}

impl UpdateOrderBody {
    /// Attach a validated identifier.
    pub fn with_id(self, id: OrderId) -> UpdateOrder {
        UpdateOrder {
            id,
            car_id: self.car_id,
            customer_id: self.customer_id,
            from_date: self.from_date,
            to_date: self.to_date,
            status: self.status,
            payment_status: self.payment_status,
            amount: self.amount,
        }
    }
}

/// Full replacement of an existing order's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrder {
    pub id: OrderId,
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment_status: bool,
    pub amount: f64,
}

/// List query after pagination parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllOrdersRequest {
    /// Free-text filter. Empty means no filter.
    pub search: String,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl GetAllOrdersRequest {
    pub fn new(search: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            search: search.into(),
            page,
            limit,
        }
    }

    /// Records to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1).saturating_mul(self.limit as usize)
    }

    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

/// One page of orders plus the size of the full filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAllOrdersResponse {
    pub orders: Vec<Order>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(GetAllOrdersRequest::new("", 1, 10).offset(), 0);
        assert_eq!(GetAllOrdersRequest::new("", 2, 10).offset(), 10);
        assert_eq!(GetAllOrdersRequest::new("", 100, 10).offset(), 990);
        assert_eq!(GetAllOrdersRequest::new("", 0, 10).offset(), 0);
    }

    #[test]
    fn test_has_search() {
        assert!(!GetAllOrdersRequest::new("", 1, 10).has_search());
        assert!(!GetAllOrdersRequest::new("   ", 1, 10).has_search());
        assert!(GetAllOrdersRequest::new("active", 1, 10).has_search());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).unwrap(), "\"cancelled\"");
        assert_eq!(OrderStatus::Active.to_string(), "active");
    }

    #[test]
    fn test_create_order_defaults() {
        let json = serde_json::json!({
            "car_id": "936a2b39-54b2-4d27-9d52-ae1c4ae4b1a3",
            "customer_id": "1b9e0c7e-4f83-4a36-9a7f-1c2f2d8f4e11",
            "from_date": "2026-01-01T10:00:00Z",
            "to_date": "2026-01-05T10:00:00Z"
        });
        let order: CreateOrder = serde_json::from_value(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.payment_status);
        assert_eq!(order.amount, 0.0);
    }

    #[test]
    fn test_update_body_with_id() {
        let id = OrderId::new();
        let body = UpdateOrderBody {
            car_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            from_date: Utc::now(),
            to_date: Utc::now(),
            status: OrderStatus::Active,
            payment_status: true,
            amount: 120.5,
        };
        let update = body.clone().with_id(id);
        assert_eq!(update.id, id);
        assert_eq!(update.car_id, body.car_id);
        assert_eq!(update.status, OrderStatus::Active);
    }
}
