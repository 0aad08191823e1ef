//! Piece inventory wire model
//!
//! The client tracks each piece under a stable identifier (`w_king`,
//! `b_rook1`, ...) and reports its kind, square, captured flag, and
//! whether it has ever moved. This is all the advisor learns about the
//! game: there is no move log, so anything the flags cannot express
//! (en-passant eligibility, a rook captured on its home square) is lost
//! by design.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use shakmaty::{Color, Piece, Role};

use crate::coords::BoardSquare;
use crate::error::AdvisorError;

/// Identifiers the castling-rights derivation looks up by name.
pub const WHITE_KING: &str = "w_king";
pub const WHITE_QUEENSIDE_ROOK: &str = "w_rook1";
pub const WHITE_KINGSIDE_ROOK: &str = "w_rook2";
pub const BLACK_KING: &str = "b_king";
pub const BLACK_QUEENSIDE_ROOK: &str = "b_rook1";
pub const BLACK_KINGSIDE_ROOK: &str = "b_rook2";

/// Colour and kind of a tracked piece, wire-encoded as `"w_king"`,
/// `"b_pawn"`, and so on: one of the 12 colour/kind combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceKind {
    pub color: Color,
    pub role: Role,
}

impl PieceKind {
    pub fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }

    /// The equivalent rules-engine piece.
    pub fn piece(self) -> Piece {
        Piece {
            color: self.color,
            role: self.role,
        }
    }
}

impl FromStr for PieceKind {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AdvisorError::InvalidIdentifier { text: s.to_string() };

        let (color, role) = s.split_once('_').ok_or_else(invalid)?;
        let color = match color {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid()),
        };
        let role = match role {
            "king" => Role::King,
            "queen" => Role::Queen,
            "rook" => Role::Rook,
            "bishop" => Role::Bishop,
            "knight" => Role::Knight,
            "pawn" => Role::Pawn,
            _ => return Err(invalid()),
        };

        Ok(PieceKind { color, role })
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.color {
            Color::White => "w",
            Color::Black => "b",
        };
        let role = match self.role {
            Role::King => "king",
            Role::Queen => "queen",
            Role::Rook => "rook",
            Role::Bishop => "bishop",
            Role::Knight => "knight",
            Role::Pawn => "pawn",
        };
        write!(f, "{color}_{role}")
    }
}

impl Serialize for PieceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// One tracked piece as the client reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    #[serde(rename = "position")]
    pub square: BoardSquare,
    pub captured: bool,
    #[serde(rename = "moved")]
    pub has_moved: bool,
}

/// The full inventory, keyed by stable piece identifier.
///
/// An ordered map: walking the same inventory twice visits records in the
/// same order, so position construction is deterministic.
pub type PieceSet = BTreeMap<String, PieceRecord>;
