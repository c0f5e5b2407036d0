//! Domain-level error type used by the rules engine.
//!
//! This error type is transport-agnostic. The orchestrator decides what to do
//! with each variant using [`DomainError::is_recoverable`]: recoverable errors
//! re-prompt the offending player, everything else aborts the deal.

use thiserror::Error;

use crate::domain::{Card, Seat, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Client sent a token that is not a card or suit at all.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Well-formed card that is not in the current legal set.
    #[error("illegal move: {card} cannot be played now")]
    IllegalMove { card: Card },

    /// Suit that is not among the offered trump choices.
    #[error("illegal choice: {suit} is not one of the offered suits")]
    IllegalChoice { suit: Suit },

    /// An engine was asked to act for a seat that is not the one to act.
    #[error("out of turn: seat {who} acted, expected seat {expected}")]
    OutOfTurn { who: Seat, expected: Seat },

    /// An engine operation was invoked in the wrong phase.
    #[error("phase mismatch: {0}")]
    PhaseMismatch(&'static str),

    #[error("invalid cut at {index} for a deck of {len} cards")]
    InvalidCut { index: usize, len: usize },

    #[error("insufficient cards: wanted {wanted}, deck holds {remaining}")]
    InsufficientCards { wanted: usize, remaining: usize },
}

impl DomainError {
    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol(detail.into())
    }

    /// Client-input errors leave the game state untouched and are answered by
    /// re-prompting the same player.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::Protocol(_)
                | DomainError::IllegalMove { .. }
                | DomainError::IllegalChoice { .. }
        )
    }
}
