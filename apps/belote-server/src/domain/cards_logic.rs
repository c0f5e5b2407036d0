//! Card game logic: rank and point tables, comparing card strength

use super::cards_types::{Card, Rank, Suit};

/// Ordinal of a rank inside the trump suit: 7 < 8 < Q < K < 10 < A < 9 < J.
fn trump_order(rank: Rank) -> u8 {
    match rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Queen => 2,
        Rank::King => 3,
        Rank::Ten => 4,
        Rank::Ace => 5,
        Rank::Nine => 6,
        Rank::Jack => 7,
    }
}

/// Ordinal of a rank inside a plain suit: 7 < 8 < 9 < J < Q < K < 10 < A.
fn plain_order(rank: Rank) -> u8 {
    match rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Nine => 2,
        Rank::Jack => 3,
        Rank::Queen => 4,
        Rank::King => 5,
        Rank::Ten => 6,
        Rank::Ace => 7,
    }
}

fn trump_value(rank: Rank) -> u16 {
    match rank {
        Rank::Seven | Rank::Eight => 0,
        Rank::Queen => 3,
        Rank::King => 4,
        Rank::Ten => 10,
        Rank::Ace => 11,
        Rank::Nine => 14,
        Rank::Jack => 20,
    }
}

fn plain_value(rank: Rank) -> u16 {
    match rank {
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Jack => 2,
        Rank::Queen => 3,
        Rank::King => 4,
        Rank::Ten => 10,
        Rank::Ace => 11,
    }
}

/// Point value of a card for the given trump.
pub fn card_value(card: Card, trump: Suit) -> u16 {
    if card.suit == trump {
        trump_value(card.rank)
    } else {
        plain_value(card.rank)
    }
}

/// Ordinal rank of a card within its own suit for the given trump.
pub fn card_rank(card: Card, trump: Suit) -> u8 {
    if card.suit == trump {
        trump_order(card.rank)
    } else {
        plain_order(card.rank)
    }
}

/// Strength key used to resolve a trick: `(is_trump, is_led_suit, rank)`.
///
/// Trumps beat the led suit, which beats off-suit discards. Keys are distinct
/// for distinct cards that can win, so the maximum is unique.
pub fn trick_key(card: Card, led: Suit, trump: Suit) -> (bool, bool, u8) {
    (card.suit == trump, card.suit == led, card_rank(card, trump))
}

#[cfg(test)]
pub(crate) fn card_beats(a: Card, b: Card, led: Suit, trump: Suit) -> bool {
    trick_key(a, led, trump) > trick_key(b, led, trump)
}
