use tracing::info;

use super::channel::PlayerChannel;
use super::table::Table;
use super::SessionError;
use crate::domain::rules::PLAYERS;
use crate::domain::Seat;
use crate::protocol::ServerMsg;

/// Seats connections in arrival order until the table has four players.
#[derive(Debug, Default)]
pub struct Lobby {
    seated: Vec<PlayerChannel>,
}

impl Lobby {
    pub fn new() -> Self {
        Self {
            seated: Vec::with_capacity(PLAYERS),
        }
    }

    /// Seat a new connection and tell it its number. A full lobby answers
    /// with [`ServerMsg::TableFull`] and drops the channel.
    pub fn admit(&mut self, channel: PlayerChannel) -> Result<Seat, SessionError> {
        if self.is_full() {
            let _ = channel.outbound.send(ServerMsg::TableFull);
            return Err(SessionError::TableFull);
        }
        let seat = self.seated.len() as Seat;
        let _ = channel.outbound.send(ServerMsg::Seated { seat });
        self.seated.push(channel);
        info!(seat, seated = self.seated.len(), "Player seated");
        Ok(seat)
    }

    pub fn is_full(&self) -> bool {
        self.seated.len() == PLAYERS
    }

    pub fn into_table(self) -> Result<Table, SessionError> {
        let seated = self.seated.len();
        let seats: [PlayerChannel; PLAYERS] = self
            .seated
            .try_into()
            .map_err(|_| SessionError::TableIncomplete { seated })?;
        Ok(Table::new(seats))
    }
}
