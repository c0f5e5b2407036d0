use super::deck::Deck;
use super::rules::{PLAYERS, TEAMS};
use super::seating::{iter_from_next, next_seat, team_of, Seat, TeamId};
use super::tricks::{CompletedTrick, Trick};
use super::{Card, Suit};
use crate::errors::domain::DomainError;

/// Progression of a single deal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Five cards each are out; trump is being chosen.
    Bidding,
    /// Playing tricks; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All eight tricks resolved and the last-trick bonus awarded.
    Complete,
    /// Nobody took a trump; the cards go back for a cut and redeal.
    Abandoned,
}

/// One of the two partnerships. Seats 1 and 3 form team 0, seats 2 and 4 team 1.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Team {
    /// Running total across deals.
    pub score: u32,
    /// Whether this team made the contract in the current deal.
    pub has_contract: bool,
}

/// Working state of one deal: the deck, the four hands and the trick play.
#[derive(Debug, Clone)]
pub struct DealState {
    pub phase: Phase,
    pub dealer: Seat,
    pub deck: Deck,
    /// Cards held per seat. Only dealing and playing mutate a hand.
    pub hands: [Vec<Card>; PLAYERS],
    pub trump: Option<Suit>,
    pub bidder: Option<Seat>,
    /// Trick in progress.
    pub trick: Trick,
    pub completed_tricks: Vec<CompletedTrick>,
    /// Points earned in this deal per team, bonus included.
    pub points: [u16; TEAMS],
}

impl DealState {
    pub fn new(dealer: Seat, deck: Deck) -> Self {
        Self {
            phase: Phase::Bidding,
            dealer,
            deck,
            hands: Default::default(),
            trump: None,
            bidder: None,
            trick: Trick::new(next_seat(dealer)),
            completed_tricks: Vec::with_capacity(8),
            points: [0; TEAMS],
        }
    }

    /// Record the contract and move to trick play. The first trick is led by
    /// the seat after the dealer.
    pub fn set_contract(&mut self, trump: Suit, bidder: Seat) -> Result<(), DomainError> {
        if self.phase != Phase::Bidding {
            return Err(DomainError::PhaseMismatch("contract outside bidding"));
        }
        self.trump = Some(trump);
        self.bidder = Some(bidder);
        self.trick = Trick::new(next_seat(self.dealer));
        self.phase = Phase::Trick { trick_no: 1 };
        Ok(())
    }

    pub fn contracting_team(&self) -> Option<TeamId> {
        self.bidder.map(team_of)
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat as usize]
    }

    /// Hand sorted for display.
    pub fn sorted_hand(&self, seat: Seat) -> Vec<Card> {
        let mut hand = self.hands[seat as usize].clone();
        hand.sort();
        hand
    }

    /// Cards still in play: the deck, every hand and the open trick.
    #[cfg(test)]
    pub(crate) fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(Vec::len).sum::<usize>()
            + self.trick.plays.len()
    }

    /// Return every card to the deck after a failed auction.
    pub fn abandon(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Bidding {
            return Err(DomainError::PhaseMismatch("abandon outside bidding"));
        }
        for seat in iter_from_next(self.dealer) {
            let hand = std::mem::take(&mut self.hands[seat as usize]);
            self.deck.gather(hand);
        }
        self.phase = Phase::Abandoned;
        Ok(())
    }

    /// Fresh deal with the same dealer over the gathered deck.
    pub fn into_redeal(self) -> Result<DealState, DomainError> {
        if self.phase != Phase::Abandoned {
            return Err(DomainError::PhaseMismatch("redeal before abandon"));
        }
        Ok(DealState::new(self.dealer, self.deck))
    }
}

/// Flags the bidder's team as contracting and clears the other flag.
pub fn mark_contract(teams: &mut [Team; TEAMS], bidder: Seat) {
    for (id, team) in teams.iter_mut().enumerate() {
        team.has_contract = id == team_of(bidder) as usize;
    }
}
