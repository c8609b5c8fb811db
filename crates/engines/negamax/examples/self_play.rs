//! Self-play driver for the negamax engine.
//!
//! Plays the engine against itself from the start position under a real
//! per-side clock, printing each decision and a JSON game summary at the
//! end.
//!
//! Usage:
//!   cargo run --release --example self_play -p negamax_engine -- [max_moves] [clock_secs]

use std::time::{Duration, Instant};

use chess_rules::{Engine, Position};
use negamax_engine::NegamaxEngine;
use serde::Serialize;

#[derive(Serialize)]
struct GameSummary {
    result: String,
    moves: Vec<String>,
    total_nodes: u64,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let max_moves: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(120);
    let clock_secs: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(60);

    let mut white = NegamaxEngine::new();
    let mut black = NegamaxEngine::new();
    let mut clocks = [Duration::from_secs(clock_secs); 2];

    let mut pos = Position::startpos();
    let mut moves = Vec::new();
    let mut total_nodes = 0;
    let mut result = format!("unfinished after {max_moves} half-moves");

    for half_move in 0..max_moves {
        let white_to_move = half_move % 2 == 0;
        let side = if white_to_move { "white" } else { "black" };
        let (engine, clock) = if white_to_move {
            (&mut white, &mut clocks[0])
        } else {
            (&mut black, &mut clocks[1])
        };

        let started = Instant::now();
        let decision = engine.think(&mut pos, *clock);
        *clock = clock.saturating_sub(started.elapsed());

        let Some(mv) = decision.best_move else {
            result = format!("{side} has no moves");
            break;
        };
        total_nodes += decision.nodes;
        println!(
            "{:>3}. {side} {mv} (depth {}, score {}, {} nodes, {:.1?} left)",
            half_move + 1,
            decision.depth,
            decision.score,
            decision.nodes,
            clock,
        );
        moves.push(mv.to_string());
        pos.make_move(mv);

        if pos.is_checkmate() {
            result = format!("{side} mates");
            break;
        }
        if pos.is_stalemate() {
            result = "stalemate".to_string();
            break;
        }
    }

    let summary = GameSummary {
        result,
        moves,
        total_nodes,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}
