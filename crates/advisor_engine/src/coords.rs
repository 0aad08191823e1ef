//! Board coordinate mapping
//!
//! The client names squares as `"file_rank"` pairs of 1-based integers
//! (`"5_1"` is e1); the rules engine names them algebraically. Both
//! directions are pure functions and round-trip exactly over the 8x8
//! board.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use shakmaty::{File, Rank, Square};

use crate::error::{AdvisorError, AdvisorResult};

/// A square in the client's coordinate scheme: 1-based file and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSquare {
    pub file: u32,
    pub rank: u32,
}

impl BoardSquare {
    pub fn new(file: u32, rank: u32) -> Self {
        Self { file, rank }
    }
}

impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.file, self.rank)
    }
}

impl FromStr for BoardSquare {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AdvisorError::InvalidIdentifier { text: s.to_string() };

        let (file, rank) = s.split_once('_').ok_or_else(invalid)?;
        let file: u32 = file.parse().map_err(|_| invalid())?;
        let rank: u32 = rank.parse().map_err(|_| invalid())?;
        if file == 0 || rank == 0 {
            return Err(invalid());
        }

        Ok(BoardSquare { file, rank })
    }
}

impl Serialize for BoardSquare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BoardSquare {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Convert a client square to the rules engine's square.
///
/// Fails with [`AdvisorError::OutOfRange`] when either coordinate falls
/// outside 1..=8.
pub fn to_engine_square(square: BoardSquare) -> AdvisorResult<Square> {
    if !(1..=8).contains(&square.file) || !(1..=8).contains(&square.rank) {
        return Err(AdvisorError::OutOfRange {
            file: square.file,
            rank: square.rank,
        });
    }

    Ok(Square::from_coords(
        File::new(square.file - 1),
        Rank::new(square.rank - 1),
    ))
}

/// Parse the rules engine's algebraic identifier (`"e4"`) back to a client
/// square.
pub fn from_engine_square(identifier: &str) -> AdvisorResult<BoardSquare> {
    let square: Square = identifier
        .parse()
        .map_err(|_| AdvisorError::InvalidIdentifier {
            text: identifier.to_string(),
        })?;
    Ok(square_to_board(square))
}

/// Infallible direction: every engine square has a client name.
#[inline]
pub fn square_to_board(square: Square) -> BoardSquare {
    BoardSquare {
        file: u32::from(square.file()) + 1,
        rank: u32::from(square.rank()) + 1,
    }
}
