pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod session;

pub use error::CoreError;
