//! # rental-service
//!
//! Order management for a car-rental booking platform.
//!
//! The crate is the boundary between HTTP and order storage:
//!
//! - [`ids`] validates caller-supplied order identifiers
//! - [`handlers`] decodes requests, parses pagination and renders the
//!   `{description, statusCode, data}` envelope
//! - [`services`] runs every storage call under a configured deadline
//! - [`repository`] defines the [`OrderStorage`](repository::OrderStorage)
//!   trait and an in-memory implementation
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rental_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let storage = Arc::new(InMemoryOrderStore::new());
//!     let state = AppState::with_storage(config.clone(), storage);
//!
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod server;
pub mod services;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, OrdersConfig, PaginationConfig};
    pub use crate::context::RequestContext;
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{router, ApiError, Envelope, ListQuery};
    pub use crate::health::health;
    pub use crate::ids::{validate_id, InvalidId, OrderId};
    pub use crate::models::{
        CreateOrder, GetAllOrdersRequest, GetAllOrdersResponse, Order, OrderStatus, UpdateOrder,
        UpdateOrderBody,
    };
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        InMemoryOrderStore, OrderStorage, RepositoryError, RepositoryErrorKind,
        RepositoryOperation, RepositoryResult,
    };
    pub use crate::server::Server;
    pub use crate::services::{ErrorKind, OrderService, ServiceError};
    pub use crate::state::AppState;
}
