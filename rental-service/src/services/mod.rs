//! Service units
//!
//! Each service is constructed once at startup and owns its typed storage
//! handle. Consumers receive only the services they use.

mod error;
mod order;

pub use error::{ErrorKind, ServiceError};
pub use order::OrderService;
