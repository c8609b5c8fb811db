//! Negamax decision engine.
//!
//! Fixed-depth negamax with alpha-beta pruning, a capture/promotion
//! quiescence extension, fingerprint-keyed score memoization, and a
//! remaining-time depth policy. The memo tables and the recent-position
//! history are engine state that survives across decisions: position
//! fingerprints mean the same thing on every turn, so scores cached while
//! deciding one move stay usable for the next.

mod eval;
mod memo;
mod search;

use std::time::Duration;

use chess_rules::{Decision, Engine, Move, Position, Score, MATE_SCORE};

use crate::memo::{MemoTable, RecentPositions};
use crate::search::depth_step;

/// How many of the agent's own resulting positions are remembered for the
/// evaluator's repetition damping.
const RECENT_CAPACITY: usize = 50;

/// Move-deciding engine.
///
/// Negamax with alpha-beta pruning over the full move list, a
/// capture/promotion quiescence search at the depth frontier,
/// fingerprint-memoized scores, and depth chosen from the remaining clock.
#[derive(Debug)]
pub struct NegamaxEngine {
    nodes: u64,
    search_memo: MemoTable,
    quiesce_memo: MemoTable,
    recent: RecentPositions,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            search_memo: MemoTable::new(),
            quiesce_memo: MemoTable::new(),
            recent: RecentPositions::new(RECENT_CAPACITY),
        }
    }

    /// Full-width depth for the remaining clock time.
    ///
    /// Deliberate oddity: the 20-40s band searches shallower than a
    /// sub-20s clock. See DESIGN.md before re-tuning the thresholds.
    fn select_depth(remaining: Duration) -> i32 {
        if remaining >= Duration::from_millis(40_000) {
            7
        } else if remaining >= Duration::from_millis(20_000) {
            5
        } else {
            6
        }
    }

    /// Root search. Every legal move is searched once with no cutoff; the
    /// first legal move stands in as best until something beats it.
    fn pick_move(&mut self, pos: &mut Position, depth: i32) -> (Option<Move>, Score) {
        let moves = pos.legal_moves();
        let mut best = moves.first().copied();
        let mut alpha = -MATE_SCORE;
        for mv in moves {
            pos.make_move(mv);
            let value = -self.alpha_beta(pos, -MATE_SCORE, -alpha, depth - depth_step(pos));
            pos.unmake_move();
            if value > alpha {
                alpha = value;
                best = Some(mv);
            }
        }
        (best, alpha)
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn think(&mut self, pos: &mut Position, remaining: Duration) -> Decision {
        self.nodes = 0;
        let depth = Self::select_depth(remaining);
        let (best_move, score) = self.pick_move(pos, depth);
        if let Some(mv) = best_move {
            // Remember the position the chosen move leads to; the
            // evaluator damps re-entering it on later turns.
            pos.make_move(mv);
            self.recent.push(pos.fingerprint());
            pos.unmake_move();
        }
        Decision {
            best_move,
            score,
            depth: depth as u8,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn new_game(&mut self) {
        // Fingerprint-keyed caches stay warm across games on purpose.
        self.nodes = 0;
    }
}
