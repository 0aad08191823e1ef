//! Move advisor core
//!
//! Rebuilds a playable chess position from a client piece inventory and
//! finds the best move for the configured side using fixed-depth minimax
//! with alpha-beta pruning. Chess legality itself is delegated to the
//! `shakmaty` rules engine behind the [`RulesEngine`] trait, so the search
//! can also run against a scripted double in tests.
//!
//! ```rust,ignore
//! let position = build_position(&pieces, Color::Black)?;
//! let mut rules = ShakmatyRules::new(position);
//! let report = search_best_move(&mut rules, 3, Color::Black)?;
//! ```
//!
//! ## Module Organization
//!
//! - `coords` - client square notation to and from engine squares
//! - `inventory` - piece records as the client reports them
//! - `position` - inventory to playable position (castling rights, turn)
//! - `rules` - the rules-engine capability and its shakmaty implementation
//! - `evaluation` - material plus checkmate scoring
//! - `search` - fixed-depth minimax with alpha-beta pruning
//! - `config` - which side is advised and how deep the search goes

pub mod config;
pub mod coords;
pub mod error;
pub mod evaluation;
pub mod inventory;
pub mod position;
pub mod rules;
pub mod search;

pub use config::AdvisorConfig;
pub use coords::{from_engine_square, square_to_board, to_engine_square, BoardSquare};
pub use error::{AdvisorError, AdvisorResult};
pub use evaluation::{evaluate, MATE_SCORE};
pub use inventory::{PieceKind, PieceRecord, PieceSet};
pub use position::build_position;
pub use rules::{RulesEngine, ShakmatyRules};
pub use search::{search_best_move, SearchReport};
