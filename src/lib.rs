//! JDOM Catalog Core
//!
//! Data and session core of the JDOM open-data catalog admin application:
//! entity stores with CRUD and filtering, a pluggable durable key-value
//! persistence layer with seed fallback, and a mock session/auth layer.
//!
//! The core is single-threaded and synchronous. Stores mirror every
//! mutation into durable storage as a full-collection rewrite; concurrent
//! writers on the same storage key are last-write-wins.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;

pub use auth::AuthStore;
pub use config::Config;
pub use errors::AppError;
pub use stats::Stats;
pub use storage::{FileStorage, MemoryStorage, SharedStorage, Storage};
pub use store::AppStore;

#[cfg(test)]
mod tests;
