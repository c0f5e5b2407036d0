//! Game flow orchestration: drives deals over a seated [`Table`].
//!
//! The flow is the only owner of game state. It suspends on exactly one seat
//! at a time, whenever that seat owes a take answer, a suit or a card.

mod player_actions;
mod round_lifecycle;

use tracing::{error, info};

use crate::domain::rules::TEAMS;
use crate::domain::scoring::fold_into;
use crate::domain::seating::{next_seat, seat_number};
use crate::domain::{Seat, Team};
use crate::error::AppError;
use crate::protocol::ServerMsg;
use crate::session::Table;

pub struct GameFlow {
    table: Table,
    teams: [Team; TEAMS],
    table_seed: u64,
    dealer: Seat,
    deal_no: u32,
}

impl GameFlow {
    pub fn new(table: Table, table_seed: u64, first_dealer: Seat) -> Self {
        Self {
            table,
            teams: [Team::default(); TEAMS],
            table_seed,
            dealer: first_dealer,
            deal_no: 0,
        }
    }

    pub fn teams(&self) -> &[Team; TEAMS] {
        &self.teams
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    fn scores(&self) -> [u32; TEAMS] {
        [self.teams[0].score, self.teams[1].score]
    }

    /// Play `deals` deals, rotating the dealer after each one, and return the
    /// final team totals.
    ///
    /// A disconnect or any non-recoverable error aborts the match. Players
    /// still connected are told who left.
    pub async fn run_match(&mut self, deals: u32) -> Result<[u32; TEAMS], AppError> {
        info!(deals, table_seed = self.table_seed, "Match starting");

        for _ in 0..deals {
            self.deal_no += 1;
            let outcome = match self.play_deal().await {
                Ok(outcome) => outcome,
                Err(err) => {
                    if let Some(seat) = err.disconnected_seat() {
                        self.table.broadcast(ServerMsg::Aborted { seat });
                    }
                    error!(deal_no = self.deal_no, code = err.code(), error = %err, "Deal aborted");
                    return Err(err);
                }
            };

            fold_into(&mut self.teams, &outcome);
            let scores = self.scores();
            info!(deal_no = self.deal_no, team_0 = scores[0], team_1 = scores[1], "Match score");
            self.table.broadcast(ServerMsg::MatchScore { scores });

            self.dealer = next_seat(self.dealer);
        }

        info!(next_dealer = seat_number(self.dealer), "Match finished");
        Ok(self.scores())
    }
}
