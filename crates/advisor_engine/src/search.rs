//! Fixed-depth minimax search with alpha-beta pruning
//!
//! Depth-first recursive descent over the move tree, sharing one mutable
//! position through the rules engine's apply/undo pair. Every apply is
//! undone before the child's result is inspected, so an error anywhere in
//! the tree unwinds with the position already restored. Pruning skips
//! subtrees the running bounds prove irrelevant; it changes the work done,
//! never the score.

use shakmaty::{Color, Move};
use tracing::debug;

use crate::error::{AdvisorError, AdvisorResult};
use crate::evaluation::evaluate;
use crate::rules::RulesEngine;

/// Outcome of a root search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The chosen move.
    pub best: Move,
    /// Score of the chosen move from the searching side's perspective.
    pub score: i32,
    /// Leaf positions evaluated.
    pub nodes: u64,
}

/// Find the best move for `side` in the rules engine's current position.
///
/// The root loop consumes one ply and scores each root move with a
/// `depth - 1` minimax, fresh bounds per move: the default depth of 3
/// gives three plies of total look-ahead (root move plus a two-ply
/// subtree). Ties keep the first move in the rules engine's enumeration
/// order, so identical input always returns the identical move.
///
/// A position with no legal move reports [`AdvisorError::NoLegalMove`];
/// any rules-engine failure mid-search aborts the whole request rather
/// than falling back to a partial answer.
pub fn search_best_move<R: RulesEngine>(
    rules: &mut R,
    depth: u32,
    side: Color,
) -> AdvisorResult<SearchReport> {
    let moves = rules.legal_moves();
    if moves.is_empty() {
        return Err(AdvisorError::NoLegalMove);
    }

    let mut nodes = 0u64;
    let mut best_move: Option<Move> = None;
    let mut best_score = i32::MIN;

    for mv in moves {
        rules.apply(&mv)?;
        let result = minimax(
            rules,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            false,
            side,
            &mut nodes,
        );
        rules.undo()?;
        let score = result?;

        debug!(%mv, score, "scored root move");

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    let best = best_move.ok_or_else(|| AdvisorError::RulesEngineInvariant {
        message: "root search scored no move".to_string(),
    })?;

    Ok(SearchReport {
        best,
        score: best_score,
        nodes,
    })
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Scores are always from `side`'s perspective; `maximizing` alternates
/// per ply. Terminal on exhausted depth or a position the rules engine
/// reports as over.
fn minimax<R: RulesEngine>(
    rules: &mut R,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    side: Color,
    nodes: &mut u64,
) -> AdvisorResult<i32> {
    if depth == 0 || rules.is_game_over() {
        *nodes += 1;
        return Ok(evaluate(rules, side));
    }

    let moves = rules.legal_moves();
    if moves.is_empty() {
        // a consistent rules engine reports game over before this point
        *nodes += 1;
        return Ok(evaluate(rules, side));
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            rules.apply(&mv)?;
            let result = minimax(rules, depth - 1, alpha, beta, false, side, nodes);
            rules.undo()?;
            let score = result?;

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            rules.apply(&mv)?;
            let result = minimax(rules, depth - 1, alpha, beta, true, side, nodes);
            rules.undo()?;
            let score = result?;

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}
