//! Full-tree search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p minimax_engine -- [iterations] [board]
//!
//! Examples:
//!   # Default: 5 searches from the empty board
//!   cargo flamegraph --example search_bench -p minimax_engine
//!
//!   # Custom position
//!   cargo flamegraph --example search_bench -p minimax_engine -- 50 "x../.o./..."

use minimax_engine::analyze;
use std::env;
use std::time::Instant;
use ttt_core::{Mark, Position, SearchLimits};

fn main() {
    let args: Vec<String> = env::args().collect();

    let iterations: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
    let pos: Position = match args.get(2).map(|s| s.parse()) {
        Some(Ok(pos)) => pos,
        Some(Err(e)) => {
            eprintln!("Invalid board: {e}");
            return;
        }
        None => Position::empty(),
    };

    let maximizing = pos.side_to_move() == Mark::X;
    println!("Position: {pos}, {iterations} iterations");

    let start = Instant::now();
    let mut total_nodes = 0u64;
    for _ in 0..iterations {
        match analyze(&pos, maximizing, SearchLimits::unlimited()) {
            Ok(analysis) => total_nodes += analysis.nodes,
            Err(e) => {
                eprintln!("Search failed: {e}");
                return;
            }
        }
    }
    let elapsed = start.elapsed();

    let nps = total_nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!("Nodes: {total_nodes}");
    println!("Time:  {:.3}s", elapsed.as_secs_f64());
    println!("NPS:   {:.0}", nps);
}
