//! HTTP boundary for rental orders
//!
//! | Method | Path          | Success data                   |
//! |--------|---------------|--------------------------------|
//! | POST   | `/order`      | new order id                   |
//! | PUT    | `/order/{id}` | order id                       |
//! | GET    | `/orders`     | `{orders, count}`              |
//! | GET    | `/order/{id}` | order                          |
//! | DELETE | `/order/{id}` | order id                       |
//!
//! Every response from these routes is an [`Envelope`]. Malformed input is
//! answered with 400, unknown ids with 404, and storage failures or expired
//! deadlines with 500.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rental_service::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let config = Config::load()?;
//! let state = AppState::with_storage(config.clone(), Arc::new(InMemoryOrderStore::new()));
//! Server::new(config).serve(router(state)).await
//! # }
//! ```

mod error;
mod order;
mod query;
mod response;

use axum::{
    routing::{get, post},
    Router,
};

use crate::health::health;
use crate::repository::OrderStorage;
use crate::state::AppState;

pub use error::{status_for, ApiError, ApiOperation};
pub use order::{create_order, delete_order, get_order, list_orders, update_order};
pub use query::{parse_limit, parse_page, ListQuery, PaginationError};
pub use response::{Envelope, OK_DESCRIPTION};

/// Mount the order routes and the health probe.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: OrderStorage + 'static,
{
    Router::new()
        .route("/health", get(health::<S>))
        .route("/order", post(create_order::<S>))
        .route(
            "/order/{id}",
            get(get_order::<S>)
                .put(update_order::<S>)
                .delete(delete_order::<S>),
        )
        .route("/orders", get(list_orders::<S>))
        .with_state(state)
}
