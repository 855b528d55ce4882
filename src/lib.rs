//! textdrop
//!
//! A single-endpoint HTTP service: `POST /api/save` accepts a JSON text
//! payload and persists it as one row in a MySQL table.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod storage;

pub use config::AppConfig;
pub use error::{ApiError, InitError};
pub use routes::AppState;
pub use storage::{MySqlStore, TextStore};
