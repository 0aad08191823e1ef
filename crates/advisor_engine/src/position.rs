//! Position reconstruction from a piece inventory
//!
//! Turns the client's piece records into a position the rules engine will
//! accept: live pieces placed on their squares, castling rights derived
//! from the per-piece moved flags, and the configured side to move. The
//! moved-flag model is lossy: it cannot express en-passant eligibility,
//! nor distinguish a rook captured on its home square from one still
//! standing there. Those limits are accepted here, not patched over.

use std::num::NonZeroU32;

use shakmaty::{Bitboard, CastlingMode, Chess, Color, FromSetup, Setup, Square};

use crate::coords::to_engine_square;
use crate::error::{AdvisorError, AdvisorResult};
use crate::inventory::{
    PieceSet, BLACK_KING, BLACK_KINGSIDE_ROOK, BLACK_QUEENSIDE_ROOK, WHITE_KING,
    WHITE_KINGSIDE_ROOK, WHITE_QUEENSIDE_ROOK,
};

/// Which rook identifier guards which castling corner.
const CASTLING_CORNERS: [(&str, &str, Square); 4] = [
    (WHITE_KING, WHITE_KINGSIDE_ROOK, Square::H1),
    (WHITE_KING, WHITE_QUEENSIDE_ROOK, Square::A1),
    (BLACK_KING, BLACK_KINGSIDE_ROOK, Square::H8),
    (BLACK_KING, BLACK_QUEENSIDE_ROOK, Square::A8),
];

/// Build a playable position from the client's piece inventory.
///
/// Captured records are skipped; every other record is placed verbatim,
/// and two live records on one square fail with
/// [`AdvisorError::DuplicateOccupant`]. The side to move comes from the
/// caller, since the inventory cannot express it. A placement the rules engine
/// rejects (a missing king, say) fails with
/// [`AdvisorError::InvalidPosition`].
///
/// Identical input always yields an identical position.
pub fn build_position(pieces: &PieceSet, side_to_move: Color) -> AdvisorResult<Chess> {
    let mut setup = Setup::empty();

    for record in pieces.values() {
        if record.captured {
            continue;
        }

        let square = to_engine_square(record.square)?;
        if setup.board.piece_at(square).is_some() {
            return Err(AdvisorError::DuplicateOccupant { square });
        }
        setup.board.set_piece_at(square, record.kind.piece());
    }

    // Rights derived from the moved flags, then masked to corners where a
    // rook actually stands; the flags alone cannot see a rook that was
    // captured without ever moving.
    setup.castling_rights = derive_castling_rights(pieces) & setup.board.rooks();
    setup.turn = side_to_move;
    setup.ep_square = None;
    setup.halfmoves = 0;
    setup.fullmoves = NonZeroU32::MIN;

    Chess::from_setup(setup, CastlingMode::Standard).map_err(|err| {
        AdvisorError::InvalidPosition {
            message: err.to_string(),
        }
    })
}

/// A side keeps a right only while its king and the matching rook both
/// report `moved = false`; a record missing from the inventory counts as
/// moved; absence implies no guarantee.
fn derive_castling_rights(pieces: &PieceSet) -> Bitboard {
    let mut rights = Bitboard::EMPTY;

    for (king_id, rook_id, corner) in CASTLING_CORNERS {
        if stands_unmoved(pieces, king_id) && stands_unmoved(pieces, rook_id) {
            rights |= Bitboard::from(corner);
        }
    }

    rights
}

fn stands_unmoved(pieces: &PieceSet, id: &str) -> bool {
    pieces.get(id).is_some_and(|record| !record.has_moved)
}
