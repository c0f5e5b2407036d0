use tracing::{debug, warn};

use super::channel::{Inbound, PlayerChannel};
use super::SessionError;
use crate::domain::rules::PLAYERS;
use crate::domain::Seat;
use crate::protocol::ServerMsg;

/// Four seated players. Owned by the game flow task, so no locking is needed.
#[derive(Debug)]
pub struct Table {
    seats: [PlayerChannel; PLAYERS],
}

impl Table {
    pub fn new(seats: [PlayerChannel; PLAYERS]) -> Self {
        Self { seats }
    }

    /// Fire-and-forget. A closed sink is logged and ignored.
    pub fn send(&self, seat: Seat, msg: ServerMsg) {
        if self.seats[seat as usize].outbound.send(msg).is_err() {
            warn!(seat, "Dropped message for closed connection");
        }
    }

    pub fn broadcast(&self, msg: ServerMsg) {
        for seat in 0..PLAYERS as Seat {
            self.send(seat, msg.clone());
        }
    }

    /// Wait for the next line from `seat` only. Other seats keep queueing.
    pub async fn recv(&mut self, seat: Seat) -> Result<String, SessionError> {
        match self.seats[seat as usize].inbound.recv().await {
            Some(Inbound::Line(line)) => {
                debug!(seat, line = %line, "Received answer");
                Ok(line)
            }
            Some(Inbound::Disconnected) | None => Err(SessionError::PlayerDisconnected { seat }),
        }
    }
}
