//! extracto-server: HTTP upload surface over the statement parser.

pub mod config;
pub mod error;
pub mod handlers;
pub mod startup;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::AppError;
pub use startup::{AppState, Application};
