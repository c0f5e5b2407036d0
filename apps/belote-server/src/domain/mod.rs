//! Domain layer: pure Belote rules, no I/O.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod rules;
pub mod scoring;
pub mod seating;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{Auction, BiddingState};
pub use cards_logic::{card_rank, card_value};
pub use cards_types::{format_cards, Card, Rank, Suit};
pub use deck::Deck;
pub use scoring::DealOutcome;
pub use seating::{Seat, TeamId};
pub use state::{DealState, Phase, Team};
pub use tricks::{legal_moves, play_card, Trick};
