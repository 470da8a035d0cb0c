pub mod pagination;
pub mod pool;
pub mod stock;
pub mod users;

pub use pagination::PageParams;
pub use pool::{create_pool, run_migrations};
