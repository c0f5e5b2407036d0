//! Dealing passes, always in Turn-Ring order from the seat after the dealer.

use super::rules::{BIDDER_SECOND_PASS, FIRST_PASS, SECOND_PASS};
use super::seating::{iter_from_next, Seat};
use super::state::{DealState, Phase};
use crate::errors::domain::DomainError;

/// Deal five cards to every seat, two at a time then three at a time.
pub fn deal_first_pass(state: &mut DealState) -> Result<(), DomainError> {
    if state.phase != Phase::Bidding || state.hands.iter().any(|h| !h.is_empty()) {
        return Err(DomainError::PhaseMismatch("first pass needs empty hands"));
    }
    for batch in FIRST_PASS {
        for seat in iter_from_next(state.dealer) {
            let cards = state.deck.deal_top(batch)?;
            state.hands[seat as usize].extend(cards);
        }
    }
    Ok(())
}

/// Complete every hand to eight cards once trump is known.
///
/// The bidder first receives the proposed top card, then two more; everyone
/// else receives three.
pub fn deal_second_pass(state: &mut DealState, bidder: Seat) -> Result<(), DomainError> {
    let top = state.deck.deal_top(1)?;
    state.hands[bidder as usize].extend(top);
    for seat in iter_from_next(state.dealer) {
        let n = if seat == bidder {
            BIDDER_SECOND_PASS
        } else {
            SECOND_PASS
        };
        let cards = state.deck.deal_top(n)?;
        state.hands[seat as usize].extend(cards);
    }
    Ok(())
}
