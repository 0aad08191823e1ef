//! Rules engine capability
//!
//! The advisor does not implement chess legality. It consumes a rules
//! engine through a small trait (enumerate legal moves, apply, undo,
//! terminal queries, piece lookup), so the search can run against the
//! production `shakmaty` implementation or a scripted double in tests.

use shakmaty::{Chess, Color, Move, Piece, Position, Square};

use crate::error::{AdvisorError, AdvisorResult};

/// The capabilities the advisor consumes from a rules engine.
///
/// `apply` and `undo` must pair exactly: undoing after an apply restores
/// the position the apply saw, including castling rights and side to move.
/// Move enumeration order is implementation-defined but must be stable for
/// identical positions within one implementation.
pub trait RulesEngine {
    /// Legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Move>;

    /// Play `mv` on the current position.
    fn apply(&mut self, mv: &Move) -> AdvisorResult<()>;

    /// Reverse the most recent `apply`.
    fn undo(&mut self) -> AdvisorResult<()>;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Whether the game has ended (checkmate, stalemate, or any other
    /// terminal condition the rules engine recognises).
    fn is_game_over(&self) -> bool;

    /// The piece standing on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Side to move.
    fn turn(&self) -> Color;
}

/// Production rules engine backed by `shakmaty`.
///
/// Keeps an explicit stack of prior positions, so `undo` restores state
/// exactly and an error deep in the search can never leave the position
/// half-mutated.
pub struct ShakmatyRules {
    position: Chess,
    history: Vec<Chess>,
}

impl ShakmatyRules {
    pub fn new(position: Chess) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    /// The current position.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of applied-but-not-undone moves.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl RulesEngine for ShakmatyRules {
    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply(&mut self, mv: &Move) -> AdvisorResult<()> {
        // Moves reach apply straight from legal_moves; a rejection here
        // means the position and the rules engine disagree.
        if !self.position.is_legal(mv) {
            return Err(AdvisorError::RulesEngineInvariant {
                message: format!("rejected enumerated move {mv}"),
            });
        }

        self.history.push(self.position.clone());
        self.position.play_unchecked(mv);
        Ok(())
    }

    fn undo(&mut self) -> AdvisorResult<()> {
        let previous = self
            .history
            .pop()
            .ok_or_else(|| AdvisorError::RulesEngineInvariant {
                message: "undo with no move applied".to_string(),
            })?;
        self.position = previous;
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    fn turn(&self) -> Color {
        self.position.turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Role;

    #[test]
    fn test_apply_then_undo_restores_position() {
        let mut rules = ShakmatyRules::new(Chess::default());
        let board_before = rules.position().board().clone();
        let turn_before = rules.turn();

        let mv = rules.legal_moves().into_iter().next().expect("legal move");
        rules.apply(&mv).expect("apply enumerated move");
        assert_ne!(rules.turn(), turn_before);

        rules.undo().expect("undo applied move");
        assert_eq!(rules.position().board(), &board_before);
        assert_eq!(rules.turn(), turn_before);
        assert_eq!(rules.depth(), 0);
    }

    #[test]
    fn test_apply_rejects_foreign_move() {
        let mut rules = ShakmatyRules::new(Chess::default());
        let mv = Move::Normal {
            role: Role::Queen,
            from: Square::A1,
            capture: None,
            to: Square::H8,
            promotion: None,
        };

        let result = rules.apply(&mv);
        assert!(matches!(
            result,
            Err(AdvisorError::RulesEngineInvariant { .. })
        ));
        assert_eq!(rules.depth(), 0);
    }

    #[test]
    fn test_undo_without_apply_fails() {
        let mut rules = ShakmatyRules::new(Chess::default());
        let result = rules.undo();
        assert!(matches!(
            result,
            Err(AdvisorError::RulesEngineInvariant { .. })
        ));
    }

    #[test]
    fn test_legal_move_count_in_starting_position() {
        let rules = ShakmatyRules::new(Chess::default());
        assert_eq!(rules.legal_moves().len(), 20);
        assert!(!rules.is_game_over());
        assert!(!rules.is_checkmate());
    }
}
