use clap::{Parser, ValueEnum};

use crate::domain::rules::PLAYERS;
use crate::domain::Seat;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server settings. Every flag falls back to a `BELOTE_*` environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "belote-server")]
#[command(about = "Four-player Belote table over TCP")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BELOTE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "BELOTE_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Table seed for replayable shuffles and cuts (random when unset)
    #[arg(long, env = "BELOTE_SEED")]
    pub seed: Option<u64>,

    /// Number of deals in the match
    #[arg(long, env = "BELOTE_DEALS", default_value_t = 1)]
    pub deals: u32,

    /// Seat of the first dealer, 1 to 4 (random when unset)
    #[arg(long, env = "BELOTE_FIRST_DEALER")]
    pub first_dealer: Option<u8>,

    #[arg(long, env = "BELOTE_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.deals == 0 {
            return Err(AppError::config("deal count must be at least 1"));
        }
        if let Some(dealer) = self.first_dealer {
            if dealer == 0 || dealer as usize > PLAYERS {
                return Err(AppError::config(format!(
                    "first dealer must be a seat from 1 to {PLAYERS}, got {dealer}"
                )));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured seed, or a fresh one from the thread RNG.
    pub fn table_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Zero-based first dealer, or a random seat.
    pub fn first_dealer_seat(&self) -> Seat {
        match self.first_dealer {
            Some(dealer) => dealer - 1,
            None => rand::random_range(0..PLAYERS as Seat),
        }
    }
}
