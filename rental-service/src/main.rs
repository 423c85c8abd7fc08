use std::sync::Arc;

use rental_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let storage = Arc::new(InMemoryOrderStore::new());
    let state = AppState::with_storage(config.clone(), storage);

    tracing::info!(
        timeout_ms = config.orders.request_timeout_ms,
        default_limit = config.pagination.default_limit,
        max_limit = config.pagination.max_limit,
        "Order service ready"
    );

    Server::new(config).serve(router(state)).await
}
