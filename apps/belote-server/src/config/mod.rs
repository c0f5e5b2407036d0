pub mod server;

pub use server::{LogFormat, ServerConfig};
