//! Trump selection: two rounds of asking, starting after the dealer.
//!
//! Round one offers the top card of the deck; the first seat to take it
//! makes its suit trump. Round two offers the three other suits. If both
//! rounds go all the way around, the auction ends in [`BiddingState::NoBid`].

use super::rules::PLAYERS;
use super::seating::{nth_from, Seat};
use super::{Card, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BiddingState {
    /// Seats are asked whether they take the proposed card.
    AwaitingTake { card: Card },
    /// Everyone passed on the card; seats may name one of the other suits.
    AwaitingSuitChoice { declined: Suit },
    Resolved { trump: Suit, bidder: Seat },
    /// Nobody took; the deal is abandoned.
    NoBid,
}

impl BiddingState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BiddingState::Resolved { .. } | BiddingState::NoBid)
    }
}

#[derive(Debug, Clone)]
pub struct Auction {
    dealer: Seat,
    card: Card,
    state: BiddingState,
    /// Seats already asked in the current round.
    asked: u8,
}

impl Auction {
    pub fn new(dealer: Seat, card: Card) -> Self {
        Self {
            dealer,
            card,
            state: BiddingState::AwaitingTake { card },
            asked: 0,
        }
    }

    pub fn state(&self) -> BiddingState {
        self.state
    }

    /// Seat being asked, or `None` once the auction is over.
    pub fn to_act(&self) -> Option<Seat> {
        if self.state.is_terminal() {
            return None;
        }
        Some(nth_from(self.dealer, self.asked + 1))
    }

    /// Suits that may be named in the second round.
    pub fn offered_suits(&self) -> Vec<Suit> {
        Suit::ALL
            .into_iter()
            .filter(|&s| s != self.card.suit)
            .collect()
    }

    /// The agreed trump and bidder, once resolved.
    pub fn contract(&self) -> Option<(Suit, Seat)> {
        match self.state {
            BiddingState::Resolved { trump, bidder } => Some((trump, bidder)),
            _ => None,
        }
    }

    fn require_turn(&self, who: Seat) -> Result<(), DomainError> {
        match self.to_act() {
            Some(expected) if expected == who => Ok(()),
            Some(expected) => Err(DomainError::OutOfTurn { who, expected }),
            None => Err(DomainError::PhaseMismatch("auction is over")),
        }
    }

    fn advance(&mut self) {
        self.asked += 1;
        if (self.asked as usize) < PLAYERS {
            return;
        }
        self.asked = 0;
        self.state = match self.state {
            BiddingState::AwaitingTake { card } => BiddingState::AwaitingSuitChoice {
                declined: card.suit,
            },
            _ => BiddingState::NoBid,
        };
    }

    /// First-round answer from `who`: take the proposed card or pass.
    pub fn answer_take(&mut self, who: Seat, take: bool) -> Result<BiddingState, DomainError> {
        let BiddingState::AwaitingTake { card } = self.state else {
            return Err(DomainError::PhaseMismatch("not offering the card"));
        };
        self.require_turn(who)?;

        if take {
            self.state = BiddingState::Resolved {
                trump: card.suit,
                bidder: who,
            };
        } else {
            self.advance();
        }
        Ok(self.state)
    }

    /// Second-round answer from `who`: name an offered suit, or pass with `None`.
    ///
    /// Naming the declined suit is rejected and leaves the auction unchanged.
    pub fn choose_suit(
        &mut self,
        who: Seat,
        choice: Option<Suit>,
    ) -> Result<BiddingState, DomainError> {
        let BiddingState::AwaitingSuitChoice { declined } = self.state else {
            return Err(DomainError::PhaseMismatch("not offering suits"));
        };
        self.require_turn(who)?;

        match choice {
            Some(suit) if suit == declined => Err(DomainError::IllegalChoice { suit }),
            Some(suit) => {
                self.state = BiddingState::Resolved {
                    trump: suit,
                    bidder: who,
                };
                Ok(self.state)
            }
            None => {
                self.advance();
                Ok(self.state)
            }
        }
    }
}

/// Only the literal `yes` takes the card; anything else passes.
pub fn parse_take(token: &str) -> bool {
    token.trim() == "yes"
}

/// Parse a second-round answer. `pass`, `no` or an empty line decline.
pub fn parse_suit_answer(token: &str) -> Result<Option<Suit>, DomainError> {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("pass") || token.eq_ignore_ascii_case("no")
    {
        return Ok(None);
    }
    token.parse::<Suit>().map(Some)
}
