//! Domain layer
//!
//! Plain data types shared by the infrastructure adapters: the loaded
//! config tree and the runtime settings.

pub mod error;
pub mod models;

pub use error::ConfigError;
