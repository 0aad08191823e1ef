//! Position evaluation
//!
//! Material count plus checkmate detection, the only signals the advisor
//! scores with. No mobility, pawn structure, or king safety terms, and no
//! stalemate special case: a stalemated position scores as bare material.

use shakmaty::{Color, Role, Square};

use crate::rules::RulesEngine;

/// Score of a decided game; far beyond any reachable material sum.
pub const MATE_SCORE: i32 = 9999;

/// Fixed material value of a piece kind.
///
/// The king carries no material weight; losing it ends the game, which
/// the checkmate branch already accounts for.
fn material_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}

/// Score a position from `perspective`'s point of view.
///
/// Positive favours `perspective`, negative favours the opponent. The side
/// to move is the one a checkmate has caught, so mate scores
/// `-MATE_SCORE` when `perspective` is to move and `+MATE_SCORE`
/// otherwise. Everything else is the signed material sum over the board.
///
/// Never mutates the position and never suspends.
pub fn evaluate<R: RulesEngine>(rules: &R, perspective: Color) -> i32 {
    if rules.is_checkmate() {
        return if rules.turn() == perspective {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }

    let mut score = 0;
    for index in 0..64 {
        if let Some(piece) = rules.piece_at(Square::new(index)) {
            let value = material_value(piece.role);
            score += if piece.color == perspective {
                value
            } else {
                -value
            };
        }
    }

    score
}
