//! Tournament CLI
//!
//! Run matches between engines and inspect minimax root scores.

use anyhow::{bail, Context, Result};
use minimax_engine::{Minimax, MinimaxEngine};
use random_engine::RandomEngine;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_core::{idx_to_coord, Engine, Mark, Position, SearchLimits};
use tournament::{MatchConfig, MatchRunner, TournamentResults};

fn print_usage() {
    println!("Tic-tac-toe Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--config FILE] [--out FILE]");
    println!("  tournament analyze <board> [--depth D]");
    println!();
    println!("Engines:");
    println!("  minimax        - Exhaustive minimax, random tie-breaks");
    println!("  minimax:SEED   - Minimax with a fixed tie-break seed");
    println!("  random         - Uniform random baseline");
    println!("  random:SEED    - Random baseline with a fixed seed");
    println!();
    println!("Boards are 9 cells row by row, e.g. \"xx./oo./...\"");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 20");
    println!("  tournament analyze x...o.... --depth 3");
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let (kind, seed) = match spec.split_once(':') {
        Some((kind, seed)) => {
            let seed: u64 = seed
                .parse()
                .with_context(|| format!("invalid seed in engine spec '{spec}'"))?;
            (kind, Some(seed))
        }
        None => (spec, None),
    };

    let engine: Box<dyn Engine> = match (kind.to_lowercase().as_str(), seed) {
        ("minimax" | "mm", Some(seed)) => Box::new(MinimaxEngine::seeded(seed)),
        ("minimax" | "mm", None) => Box::new(MinimaxEngine::new()),
        ("random" | "rand", Some(seed)) => Box::new(RandomEngine::seeded(seed)),
        ("random" | "rand", None) => Box::new(RandomEngine::new()),
        _ => bail!("unknown engine: {spec}"),
    };
    Ok(engine)
}

/// Flags shared by the subcommands.
#[derive(Default)]
struct Flags {
    games: Option<u32>,
    depth: Option<u8>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_flags(args: &[String]) -> Result<Flags> {
    let mut flags = Flags::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .with_context(|| format!("missing value for {arg}"))
        };
        match arg.as_str() {
            "--games" | "-g" => {
                flags.games = Some(value()?.parse().context("--games expects a number")?)
            }
            "--depth" | "-d" => {
                flags.depth = Some(value()?.parse().context("--depth expects a number")?)
            }
            "--config" | "-c" => flags.config = Some(PathBuf::from(value()?)),
            "--out" | "-o" => flags.out = Some(PathBuf::from(value()?)),
            other => bail!("unexpected argument: {other}"),
        }
    }
    Ok(flags)
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let flags = parse_flags(&args[2..])?;

    // File values first, flags override
    let mut config = match &flags.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = flags.games {
        config.num_games = games;
    }
    if let Some(depth) = flags.depth {
        config.limits = SearchLimits::depth(depth);
    }

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    info!(
        engine1 = %engine1_spec,
        engine2 = %engine2_spec,
        games = config.num_games,
        max_depth = ?config.limits.max_depth,
        "starting match"
    );

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let mut results = TournamentResults::new(
        &format!("{engine1_spec} vs {engine2_spec}"),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result.clone());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!();
    println!("{}", results.generate_report());

    if let Some(path) = &flags.out {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn run_analyze(args: &[String]) -> Result<()> {
    let Some(board) = args.first() else {
        print_usage();
        bail!("analyze requires a board");
    };
    let pos: Position = board
        .parse()
        .with_context(|| format!("invalid board '{board}'"))?;
    let flags = parse_flags(&args[1..])?;
    let limits = flags.depth.map_or(SearchLimits::unlimited(), SearchLimits::depth);

    let side = pos.side_to_move();
    let mut search = Minimax::new(limits);
    let outcome = search.search(&pos, side == Mark::X, |idx| {
        info!(best_move = idx, "move chosen");
    })?;

    println!("Position: {pos} ({side:?} to move)");
    println!("{:<6} {:>6}  moves", "", "score");
    for (score, moves) in outcome.analysis.scores.iter().rev() {
        let coords: Vec<String> = moves.iter().filter_map(|&m| idx_to_coord(m)).collect();
        println!("{:<6} {:>6}  {}", "", score, coords.join(" "));
    }
    println!(
        "Best: {} (index {}), score {}, {} nodes",
        idx_to_coord(outcome.best_move).unwrap_or_default(),
        outcome.best_move,
        outcome.score(),
        outcome.analysis.nodes
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "analyze" | "eval" => run_analyze(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
