use tracing::info;

use super::GameFlow;
use crate::domain::dealing::{deal_first_pass, deal_second_pass};
use crate::domain::deck::random_cut_index;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::score_deal;
use crate::domain::seating::seat_number;
use crate::domain::seed_derivation::{derive_cut_seed, derive_dealing_seed, rng_from_seed};
use crate::domain::state::mark_contract;
use crate::domain::{
    Auction, BiddingState, DealOutcome, DealState, Deck, Phase, Seat, Suit,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::protocol::ServerMsg;

impl GameFlow {
    /// Play one full deal: deal, bid (redealing until someone takes), eight
    /// tricks, then score.
    ///
    /// Shuffle and cut randomness derive from the table seed and the deal
    /// number, so a deal replays identically given the same answers.
    pub(super) async fn play_deal(&mut self) -> Result<DealOutcome, AppError> {
        let deal_no = self.deal_no;
        let mut shuffle_rng = rng_from_seed(derive_dealing_seed(self.table_seed, deal_no));
        let mut cut_rng = rng_from_seed(derive_cut_seed(self.table_seed, deal_no));

        info!(deal_no, dealer = seat_number(self.dealer), "Starting deal");
        self.table.broadcast(ServerMsg::Dealer {
            dealer: self.dealer,
        });

        let mut state = DealState::new(self.dealer, Deck::shuffled(&mut shuffle_rng));
        let (trump, bidder) = loop {
            deal_first_pass(&mut state)?;
            if let Some(contract) = self.run_auction(&state).await? {
                break contract;
            }

            state.abandon()?;
            let cut_at = random_cut_index(state.deck.len(), &mut cut_rng)?;
            state.deck.cut(cut_at)?;
            info!(deal_no, cut_at, "Nobody took, redealing");
            self.table.broadcast(ServerMsg::Redeal { cut_at });
            state = state.into_redeal()?;
        };

        mark_contract(&mut self.teams, bidder);
        deal_second_pass(&mut state, bidder)?;
        state.set_contract(trump, bidder)?;
        info!(deal_no, bidder = seat_number(bidder), trump = %trump, "Contract set");
        self.send_hands(&state);

        while state.phase != Phase::Complete {
            let seat = state
                .trick
                .next_to_play()
                .ok_or(DomainError::PhaseMismatch("no seat to act"))?;
            let result = self.ask_card(&mut state, seat).await?;
            if let Some(winner) = result.trick_winner {
                info!(
                    deal_no,
                    winner = seat_number(winner),
                    points = result.points_awarded,
                    "Trick won"
                );
                self.table.broadcast(ServerMsg::TrickWon {
                    winner,
                    points: result.points_awarded,
                });
            }
        }

        let outcome = score_deal(&state)?;
        info!(
            deal_no,
            contracting = outcome.contracting_points(),
            defending = outcome.defending_points(),
            made = outcome.contract_made,
            "Deal scored"
        );
        self.table.broadcast(ServerMsg::DealResult {
            contracting_team: outcome.contracting_team,
            points: outcome.points,
            contract_made: outcome.contract_made,
        });
        Ok(outcome)
    }

    /// Offer the top card, then free suit choice. `None` means nobody took.
    async fn run_auction(&mut self, state: &DealState) -> Result<Option<(Suit, Seat)>, AppError> {
        let card = state
            .deck
            .peek_top()
            .ok_or(DomainError::InsufficientCards {
                wanted: 1,
                remaining: 0,
            })?;
        self.table.broadcast(ServerMsg::ProposedCard { card });
        self.send_hands(state);

        let mut auction = Auction::new(state.dealer, card);
        while let Some(seat) = auction.to_act() {
            let resolved = match auction.state() {
                BiddingState::AwaitingTake { .. } => {
                    let take = self.ask_take(seat).await?;
                    auction.answer_take(seat, take)?
                }
                BiddingState::AwaitingSuitChoice { .. } => self.ask_suit(&mut auction, seat).await?,
                BiddingState::Resolved { .. } | BiddingState::NoBid => break,
            };

            if let BiddingState::Resolved { trump, bidder } = resolved {
                let msg = if trump == card.suit {
                    ServerMsg::Took { bidder }
                } else {
                    ServerMsg::ChoseTrump { bidder, trump }
                };
                self.table.broadcast(msg);
            }
        }
        Ok(auction.contract())
    }

    fn send_hands(&self, state: &DealState) {
        for seat in 0..PLAYERS as Seat {
            self.table.send(
                seat,
                ServerMsg::Hand {
                    cards: state.sorted_hand(seat),
                },
            );
        }
    }
}
