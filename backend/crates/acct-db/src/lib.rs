pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite_pool::{connect, connect_in_memory, drop_all, migrate};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
