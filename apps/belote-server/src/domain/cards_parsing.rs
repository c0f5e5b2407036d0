//! Card and suit parsing from client tokens (e.g., "10♥", "Q ♠", "7C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

fn suit_from_char(ch: char) -> Option<Suit> {
    match ch {
        '♦' | 'D' | 'd' => Some(Suit::Diamonds),
        '♥' | 'H' | 'h' => Some(Suit::Hearts),
        '♠' | 'S' | 's' => Some(Suit::Spades),
        '♣' | 'C' | 'c' => Some(Suit::Clubs),
        _ => None,
    }
}

fn rank_from_str(s: &str) -> Option<Rank> {
    let rank = match s {
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" => Rank::Ten,
        "J" | "j" => Rank::Jack,
        "Q" | "q" => Rank::Queen,
        "K" | "k" => Rank::King,
        "A" | "a" => Rank::Ace,
        _ => return None,
    };
    Some(rank)
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => suit_from_char(ch)
                .ok_or_else(|| DomainError::protocol(format!("{s} is not a valid suit"))),
            _ => Err(DomainError::protocol(format!("{s} is not a valid suit"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    /// Accepts `{rank}{suit}` either run together or split by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::protocol(format!("{s} is not a valid card"));

        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let suit_ch = compact.chars().last().ok_or_else(invalid)?;
        let suit = suit_from_char(suit_ch).ok_or_else(invalid)?;
        let rank_text = &compact[..compact.len() - suit_ch.len_utf8()];
        let rank = rank_from_str(rank_text).ok_or_else(invalid)?;

        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse several card tokens at once.
#[cfg(test)]
pub(crate) fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
