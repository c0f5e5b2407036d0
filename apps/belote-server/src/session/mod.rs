//! Session layer: one inbound queue and one outbound sink per seat.
//!
//! The transport feeds decoded lines into [`channel::ClientHandle`]s; the game
//! flow only ever sees the [`Table`] built once four players are seated.

pub mod channel;
pub mod lobby;
pub mod table;

use thiserror::Error;

use crate::domain::Seat;

pub use channel::{channel_pair, ClientHandle, Inbound, PlayerChannel};
pub use lobby::Lobby;
pub use table::Table;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("player at seat {seat} disconnected")]
    PlayerDisconnected { seat: Seat },

    #[error("the table is full")]
    TableFull,

    #[error("table needs four players, {seated} seated")]
    TableIncomplete { seated: usize },
}
