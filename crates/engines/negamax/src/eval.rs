//! Static position evaluation.
//!
//! Scores a position with no look-ahead from four ingredients: weighted
//! mobility for the side to move minus the opponent's (probed through a
//! null move), material with per-piece placement shaping, a check/terminal
//! term, and a damping term for recently revisited positions. The full sum
//! is multiplied by the white-to-move sign at the end; the search's
//! negation builds on that sign convention.

use chess_rules::{Color, Piece, Position, Score, MATE_SCORE};

use crate::memo::RecentPositions;

const PIECE_KINDS: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

const CHECK_BONUS: Score = 170;
/// Opponent left without moves across the null-move probe.
const REPLY_STALEMATE_BONUS: Score = 1500;
/// Side to move has no moves but is not checkmated.
const MOVER_STALEMATE_BONUS: Score = 2000;

pub(crate) fn evaluate(pos: &mut Position, recent: &RecentPositions) -> Score {
    let legal = pos.legal_moves().len() as Score;
    let captures = pos.capture_moves().len() as Score;
    let mut mobility = 4 * legal + 8 * captures;

    // Probe the opponent's mobility by passing the turn (never possible
    // while in check); their options count against ours, and terminal
    // states on their side fold in as bonuses.
    if pos.try_skip_turn() {
        let reply_legal = pos.legal_moves().len() as Score;
        let reply_captures = pos.capture_moves().len() as Score;
        mobility -= 4 * reply_legal + 8 * reply_captures;
        if pos.is_checkmate() {
            mobility += MATE_SCORE;
        } else if pos.is_check() {
            mobility += CHECK_BONUS;
        } else if reply_legal == 0 {
            mobility += REPLY_STALEMATE_BONUS;
        }
        pos.undo_skip_turn();
    }

    let material = material_and_placement(pos);

    // Checkmate takes precedence over the bare check term; the zero-move
    // case is a bonus for the mover, not a draw score.
    let terminal = if pos.is_checkmate() {
        -MATE_SCORE
    } else if pos.is_check() {
        -CHECK_BONUS
    } else if legal == 0 {
        MOVER_STALEMATE_BONUS
    } else {
        0
    };

    // A recently reached position keeps half its mobility term as an extra
    // damping term.
    let repetition = if recent.contains(pos.fingerprint()) {
        mobility / 2
    } else {
        0
    };

    let total = mobility + material + terminal + repetition;
    match pos.side_to_move() {
        Color::White => total,
        Color::Black => -total,
    }
}

/// Material balance plus placement shaping, white minus black.
fn material_and_placement(pos: &Position) -> Score {
    // The king is worth less once the opening is over, relaxing
    // king-safety pressure toward the endgame.
    let king_weight: Score = if pos.ply() >= 25 { 10_000 } else { 20_000 };
    let weights: [Score; 6] = [100, 320, 330, 500, 900, king_weight];

    let mut score = 0;
    for (piece, weight) in PIECE_KINDS.into_iter().zip(weights) {
        let white = pos.pieces(Color::White, piece);
        let black = pos.pieces(Color::Black, piece);
        score += (Score::from(white.len()) - Score::from(black.len())) * weight;
        for sq in white {
            score += placement_bonus(pos, piece, sq.file() as i64, sq.rank() as i64);
        }
        for sq in black {
            score -= placement_bonus(pos, piece, sq.file() as i64, 7 - sq.rank() as i64);
        }
    }
    score
}

/// Placement shaping for one piece, seen from white (black callers mirror
/// the rank). Magnitudes sit an order below the piece values.
fn placement_bonus(pos: &Position, piece: Piece, file: i64, rank: i64) -> Score {
    // 0 at the board edge, 3 on the four center squares, per axis.
    let center_file = 3 - (2 * file - 7).abs() / 2;
    let center_rank = 3 - (2 * rank - 7).abs() / 2;
    match piece {
        Piece::Knight => 6 * (center_file + center_rank) - 18,
        Piece::Queen => 2 * (center_file + center_rank),
        Piece::Bishop => {
            if file == rank || file + rank == 7 {
                12
            } else {
                -3 * (center_file + center_rank)
            }
        }
        Piece::Rook => {
            let mut bonus = if file_has_pawn(pos, file) { 0 } else { 12 };
            if rank == 6 {
                bonus += 10;
            }
            bonus
        }
        Piece::Pawn => {
            let mut bonus = 3 * (rank - 1);
            if rank >= 5 {
                bonus += 15;
            }
            if rank == 1 && (file == 3 || file == 4) {
                bonus -= 12;
            }
            bonus
        }
        Piece::King => 0,
    }
}

fn file_has_pawn(pos: &Position, file: i64) -> bool {
    for color in [Color::White, Color::Black] {
        for sq in pos.pieces(color, Piece::Pawn) {
            if sq.file() as i64 == file {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
