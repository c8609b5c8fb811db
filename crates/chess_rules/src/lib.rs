//! Rules-engine facade for the negamax decision core.
//!
//! Wraps `cozy-chess` behind the narrow contract the search consumes:
//! legal-move enumeration (all moves or captures only), destructive
//! make/unmake with an undo stack, a null-move turn skip, terminal-state
//! queries, piece placement, and a 64-bit position fingerprint. Chess rules
//! themselves live entirely in `cozy-chess`; nothing here generates moves
//! or decides legality.

pub mod position;
pub mod types;

pub use position::Position;
pub use types::{Move, RulesError, Score, MATE_SCORE};

// Board coordinate and piece vocabulary comes straight from the rules engine.
pub use cozy_chess::{BitBoard, Color, File, Piece, Rank, Square};

use std::time::Duration;

/// Result of a single move decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// The chosen move (None when the position has no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen line
    pub score: Score,
    /// Full-width depth the search was given
    pub depth: u8,
    /// Number of search nodes visited
    pub nodes: u64,
}

/// Trait implemented by move-deciding engines.
///
/// The host hands the engine a mutable position and the remaining clock
/// time, once per decision, and gets one move back; the position is
/// returned to the host unchanged.
pub trait Engine: Send {
    /// Decide on a move for the side to move.
    fn think(&mut self, pos: &mut Position, remaining: Duration) -> Decision;

    /// Engine name for reporting.
    fn name(&self) -> &str;

    /// Reset per-game state. Engines decide what survives; caches keyed by
    /// position fingerprint stay meaningful across games.
    fn new_game(&mut self) {}
}
