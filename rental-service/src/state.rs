//! Shared handler state

use std::sync::Arc;

use crate::config::Config;
use crate::repository::OrderStorage;
use crate::services::OrderService;

/// State passed to every handler.
///
/// Holds the configuration and the order service. Nothing else is reachable
/// from handlers, and nothing in here is mutable.
pub struct AppState<S> {
    config: Arc<Config>,
    orders: OrderService<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            orders: self.orders.clone(),
        }
    }
}

impl<S: OrderStorage> AppState<S> {
    pub fn new(config: Config, orders: OrderService<S>) -> Self {
        Self {
            config: Arc::new(config),
            orders,
        }
    }

    /// Build the order service from `config` over `storage`.
    pub fn with_storage(config: Config, storage: Arc<S>) -> Self {
        let orders = OrderService::from_config(storage, &config.orders);
        Self::new(config, orders)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn orders(&self) -> &OrderService<S> {
        &self.orders
    }
}
