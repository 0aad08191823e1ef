//! HTTP endpoint for move suggestions
//!
//! One POST route: the body carries the piece inventory, the response
//! carries the advised move in client coordinates. Requests are
//! independent: each builds its own position, so concurrent requests
//! share no mutable state.

use advisor_engine::{
    build_position, search_best_move, square_to_board, AdvisorConfig, AdvisorError,
    AdvisorResult, BoardSquare, PieceSet, ShakmatyRules,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use shakmaty::{CastlingSide, Move, Square};
use tracing::{error, info, warn};

/// Shared request-handler state: the advisor's fixed configuration.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: AdvisorConfig,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub pieces: PieceSet,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub from: BoardSquare,
    pub to: BoardSquare,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(config: AdvisorConfig) -> Router {
    let state = AppState { config };

    // The client posts to whatever path it was configured with, so the
    // wildcard route answers everywhere the root route does.
    Router::new()
        .route("/", post(suggest_move))
        .route("/{*path}", post(suggest_move))
        .with_state(state)
}

/// Compute the best move for the configured side from the posted inventory.
async fn suggest_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Response {
    match advise(&request.pieces, state.config) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => error_response(err),
    }
}

fn advise(pieces: &PieceSet, config: AdvisorConfig) -> AdvisorResult<MoveResponse> {
    let position = build_position(pieces, config.side)?;
    let mut rules = ShakmatyRules::new(position);
    let report = search_best_move(&mut rules, config.depth, config.side)?;

    info!(
        best = %report.best,
        score = report.score,
        nodes = report.nodes,
        "advised move"
    );

    move_response(&report.best)
}

/// Map an engine move to client coordinates. Castling is reported as the
/// king's journey, which is how the client animates it.
fn move_response(mv: &Move) -> AdvisorResult<MoveResponse> {
    let from = mv
        .from()
        .ok_or_else(|| AdvisorError::RulesEngineInvariant {
            message: format!("move without a source square: {mv}"),
        })?;

    let to = match *mv {
        Move::Castle { king, rook } => {
            let side = if rook.file() > king.file() {
                CastlingSide::KingSide
            } else {
                CastlingSide::QueenSide
            };
            Square::from_coords(side.king_to_file(), king.rank())
        }
        _ => mv.to(),
    };

    Ok(MoveResponse {
        from: square_to_board(from),
        to: square_to_board(to),
    })
}

/// Error envelope. A position with no legal move is a legitimate game-over
/// outcome, not a failure, so it answers 200 like a normal reply; bad
/// inventories are the caller's fault; a rules-engine mismatch is ours.
fn error_response(err: AdvisorError) -> Response {
    let status = match err {
        AdvisorError::NoLegalMove => StatusCode::OK,
        AdvisorError::OutOfRange { .. }
        | AdvisorError::InvalidIdentifier { .. }
        | AdvisorError::DuplicateOccupant { .. }
        | AdvisorError::InvalidPosition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AdvisorError::RulesEngineInvariant { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("request failed: {err}");
    } else {
        warn!("request rejected: {err}");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
