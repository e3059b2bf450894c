#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use config::EngineConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::game_flow::{FlowOptions, GameFlow, PlayerAction, SeatConfig};
pub use services::table::{TableHandle, TableOptions};
pub use services::table_registry::TableRegistry;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
