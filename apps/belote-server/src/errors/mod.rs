//! Error handling for the Belote server.

pub mod domain;

pub use domain::DomainError;
