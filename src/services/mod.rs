// Service exports
pub mod auth;
pub mod store;

pub use auth::{bearer_token, hash_password, verify_password, AuthError, TokenService};
pub use store::{SqliteStore, Store, StoreError};
