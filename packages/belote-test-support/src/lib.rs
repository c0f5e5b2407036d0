//! Shared test support for the Belote workspace.
//!
//! Unit tests and integration tests both initialize logging through
//! [`logging::init`] so the filter knobs behave the same everywhere.

pub mod logging;
