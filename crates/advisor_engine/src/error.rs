//! Error types for the move advisor
//!
//! Every failure is request-scoped: a failing request leaves nothing
//! behind that a later request could observe. Retrying without changed
//! input is pointless, so no variant is transient.

use thiserror::Error;

/// Errors that can occur while reconstructing a position or searching it
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Coordinate outside the 8x8 board
    #[error("square {file}_{rank} is outside the board")]
    OutOfRange { file: u32, rank: u32 },

    /// Malformed square or piece identifier
    #[error("invalid identifier: {text:?}")]
    InvalidIdentifier { text: String },

    /// Two live piece records claim the same square
    #[error("two pieces occupy {square}")]
    DuplicateOccupant { square: shakmaty::Square },

    /// The reconstructed placement is not a playable position
    #[error("invalid position: {message}")]
    InvalidPosition { message: String },

    /// The side to move has no legal move; the game is over
    #[error("no legal move available")]
    NoLegalMove,

    /// The rules engine rejected a move it enumerated itself, or an undo
    /// had no matching apply
    #[error("rules engine invariant violated: {message}")]
    RulesEngineInvariant { message: String },
}

/// Result type alias for advisor operations
pub type AdvisorResult<T> = Result<T, AdvisorError>;
