//! Demo binary: run one round on the default board and print a JSON summary
//!
//! Usage: `pegfall [seed]`

use pegfall::{BoardConfig, PhysicsParams, PrizeTable, play_round};
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    selected_index: usize,
    landed_slot: usize,
    frames: usize,
    cumulative_weights: Vec<f64>,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>().unwrap_or_else(|_| {
            eprintln!("seed must be an unsigned integer, got {arg:?}");
            std::process::exit(2);
        }));

    let board = BoardConfig::default();
    let params = PhysicsParams::default();
    let table = match PrizeTable::uniform(board.slot_count) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("prize table rejected: {err}");
            std::process::exit(1);
        }
    };

    match play_round(&board, &params, &table, seed) {
        Ok(round) => {
            let summary = Summary {
                seed: round.selection.seed_used,
                selected_index: round.selection.selected_index,
                landed_slot: round.landed_slot,
                frames: round.trajectory.len(),
                cumulative_weights: round.selection.cumulative_weights,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).expect("summary serializes")
            );
        }
        Err(err) => {
            eprintln!("round failed: {err}");
            std::process::exit(1);
        }
    }
}
