//! Alpha-beta and quiescence search.
//!
//! Fail-hard negamax: a cutoff returns beta, otherwise the (possibly
//! raised) alpha comes back. Both searchers memoize child scores by
//! position fingerprint with no depth tagging, so a fingerprint reached
//! again under a different remaining depth or bound window reuses the
//! stored score as-is.

use chess_rules::{Position, Score};

use crate::eval::evaluate;
use crate::NegamaxEngine;

/// Plies of quiescence available once the full-width depth runs out.
const QUIESCENCE_DEPTH: i32 = 4;

/// Depth spent by the move just made: a position answering a check is
/// searched a ply deeper than a quiet one, extending forcing lines.
pub(crate) fn depth_step(pos: &Position) -> i32 {
    if pos.is_check() {
        1
    } else {
        2
    }
}

impl NegamaxEngine {
    /// Full-width negamax over every legal move.
    ///
    /// With zero legal moves the loop never runs and the incoming `alpha`
    /// comes back unchanged; terminal scoring happens in the evaluator,
    /// reached through the quiescence path.
    pub(crate) fn alpha_beta(
        &mut self,
        pos: &mut Position,
        mut alpha: Score,
        beta: Score,
        depth: i32,
    ) -> Score {
        if depth <= 0 {
            return self.quiesce(pos, alpha, beta, QUIESCENCE_DEPTH);
        }
        self.nodes += 1;
        for mv in pos.legal_moves() {
            pos.make_move(mv);
            let key = pos.fingerprint();
            let score = match self.search_memo.get(key) {
                Some(score) => score,
                None => {
                    let score = -self.alpha_beta(pos, -beta, -alpha, depth - depth_step(pos));
                    self.search_memo.insert(key, score);
                    score
                }
            };
            pos.unmake_move();
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    /// Capture/promotion-only negamax rooted at the depth frontier.
    pub(crate) fn quiesce(
        &mut self,
        pos: &mut Position,
        mut alpha: Score,
        beta: Score,
        depth: i32,
    ) -> Score {
        self.nodes += 1;
        let stand_pat = evaluate(pos, &self.recent);
        if depth <= 0 {
            return stand_pat;
        }
        // Standing pat: the mover may always decline to keep capturing.
        if stand_pat >= beta || alpha < stand_pat {
            alpha = stand_pat;
        }
        for mv in pos.legal_moves() {
            if !mv.is_capture() && !mv.is_promotion() {
                continue;
            }
            pos.make_move(mv);
            let key = pos.fingerprint();
            let score = match self.quiesce_memo.get(key) {
                Some(score) => score,
                None => {
                    let score = -self.quiesce(pos, -beta, -alpha, depth - depth_step(pos));
                    self.quiesce_memo.insert(key, score);
                    score
                }
            };
            pos.unmake_move();
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
