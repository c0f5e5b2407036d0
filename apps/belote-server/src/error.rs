use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::session::SessionError;

/// Application-level error: everything that can end the server or a table.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Domain(DomainError::Protocol(_)) => "PROTOCOL_ERROR",
            AppError::Domain(DomainError::IllegalMove { .. }) => "ILLEGAL_MOVE",
            AppError::Domain(DomainError::IllegalChoice { .. }) => "ILLEGAL_CHOICE",
            AppError::Domain(DomainError::OutOfTurn { .. }) => "OUT_OF_TURN",
            AppError::Domain(DomainError::PhaseMismatch(_)) => "PHASE_MISMATCH",
            AppError::Domain(DomainError::InvalidCut { .. }) => "INVALID_CUT",
            AppError::Domain(DomainError::InsufficientCards { .. }) => "INSUFFICIENT_CARDS",
            AppError::Session(SessionError::PlayerDisconnected { .. }) => "PLAYER_DISCONNECTED",
            AppError::Session(SessionError::TableFull) => "TABLE_FULL",
            AppError::Session(SessionError::TableIncomplete { .. }) => "TABLE_INCOMPLETE",
        }
    }

    /// The seat whose connection closed, when that is what ended the table.
    pub fn disconnected_seat(&self) -> Option<crate::domain::Seat> {
        match self {
            AppError::Session(SessionError::PlayerDisconnected { seat }) => Some(*seat),
            _ => None,
        }
    }
}
