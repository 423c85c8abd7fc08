//! Order persistence
//!
//! [`OrderStorage`] is the seam between the order service and whatever holds
//! durable state. [`InMemoryOrderStore`] is the bundled implementation.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryOrderStore;
pub use traits::{OrderStorage, RepositoryResult};
