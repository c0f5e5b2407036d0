use tracing::{debug, warn};

use super::GameFlow;
use crate::domain::bidding::{parse_suit_answer, parse_take};
use crate::domain::tricks::PlayCardResult;
use crate::domain::{legal_moves, play_card, Auction, BiddingState, Card, DealState, Seat};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::protocol::ServerMsg;

impl GameFlow {
    /// Offer the proposed card to `seat`. Only `yes` takes it.
    pub(super) async fn ask_take(&mut self, seat: Seat) -> Result<bool, AppError> {
        debug!(seat, "Prompting to take");
        self.table.send(seat, ServerMsg::TakePrompt);
        let answer = self.table.recv(seat).await?;
        Ok(parse_take(&answer))
    }

    /// Ask `seat` for a trump suit until the answer is a pass or an offered suit.
    pub(super) async fn ask_suit(
        &mut self,
        auction: &mut Auction,
        seat: Seat,
    ) -> Result<BiddingState, AppError> {
        let prompt = ServerMsg::SuitPrompt {
            choices: auction.offered_suits(),
        };
        debug!(seat, "Prompting for a suit");
        self.table.send(seat, prompt.clone());

        loop {
            let answer = self.table.recv(seat).await?;
            match parse_suit_answer(&answer).and_then(|choice| auction.choose_suit(seat, choice)) {
                Ok(state) => return Ok(state),
                Err(err) if err.is_recoverable() => self.reject(seat, &err, prompt.clone()),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Ask `seat` for a card until a legal one is played, then announce it.
    pub(super) async fn ask_card(
        &mut self,
        state: &mut DealState,
        seat: Seat,
    ) -> Result<PlayCardResult, AppError> {
        let trump = state
            .trump
            .ok_or(DomainError::PhaseMismatch("play before trump"))?;
        let prompt = ServerMsg::PlayPrompt {
            legal: legal_moves(state.hand(seat), &state.trick, seat, trump),
        };
        debug!(seat, "Prompting for a card");
        self.table.send(seat, prompt.clone());

        loop {
            let answer = self.table.recv(seat).await?;
            let attempt = answer
                .parse::<Card>()
                .and_then(|card| play_card(state, seat, card).map(|result| (card, result)));
            match attempt {
                Ok((card, result)) => {
                    debug!(seat, card = %card, "Card played");
                    self.table.broadcast(ServerMsg::Played { seat, card });
                    return Ok(result);
                }
                Err(err) if err.is_recoverable() => self.reject(seat, &err, prompt.clone()),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Tell `seat` why its answer was refused and restate the prompt.
    fn reject(&self, seat: Seat, err: &DomainError, prompt: ServerMsg) {
        warn!(seat, error = %err, "Rejected input");
        self.table.send(
            seat,
            ServerMsg::Rejected {
                reason: err.to_string(),
            },
        );
        self.table.send(seat, prompt);
    }
}
