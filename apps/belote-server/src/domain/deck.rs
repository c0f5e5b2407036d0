//! The 32-card deck: shuffling, cutting and dealing from the top.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::{DECK_SIZE, MIN_CUT};
use crate::errors::domain::DomainError;

/// Generate the full 32-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Ordered card stack owned by the current deal.
///
/// The top of the deck is the end of the backing vector, so dealing pops from
/// the back and the proposed trump card is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in standard order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// Full deck in a uniformly random order drawn from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Move the first `index` cards to the end.
    ///
    /// Both chunks keep their internal order. Fails unless each side of the
    /// cut holds at least [`MIN_CUT`] cards.
    pub fn cut(&mut self, index: usize) -> Result<(), DomainError> {
        let len = self.cards.len();
        if index < MIN_CUT || index + MIN_CUT > len {
            return Err(DomainError::InvalidCut { index, len });
        }
        self.cards.rotate_left(index);
        Ok(())
    }

    /// Remove and return the top `n` cards, topmost first.
    pub fn deal_top(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DomainError::InsufficientCards {
                wanted: n,
                remaining,
            });
        }
        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    /// The card that will be offered for trump selection.
    pub fn peek_top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Put cards back underneath the deck, keeping their order.
    pub fn gather<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        let mut returned: Vec<Card> = cards.into_iter().collect();
        returned.append(&mut self.cards);
        self.cards = returned;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a legal cut index for a deck of `len` cards.
pub fn random_cut_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<usize, DomainError> {
    if len < 2 * MIN_CUT {
        return Err(DomainError::InvalidCut {
            index: MIN_CUT,
            len,
        });
    }
    Ok(rng.random_range(MIN_CUT..=len - MIN_CUT))
}
