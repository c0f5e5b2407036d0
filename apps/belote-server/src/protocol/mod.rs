//! Messages the table sends to its players.

pub mod server_msg;

pub use server_msg::ServerMsg;
