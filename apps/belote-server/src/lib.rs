#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod session;
pub mod telemetry;
pub mod transport;

// Re-exports for public API
pub use config::{LogFormat, ServerConfig};
pub use error::AppError;
pub use errors::DomainError;
pub use protocol::ServerMsg;
pub use services::GameFlow;
pub use session::{Lobby, SessionError, Table};
pub use transport::{serve, MatchSettings};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    belote_test_support::logging::init();
}
