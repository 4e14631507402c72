//! Othello self-play
//!
//! Two engines play a full game against each other, printing the board
//! after every ply.
//!
//! Usage: `othello-selfplay [depth_black] [depth_white] [--validation]`
//!
//! Set `RUST_LOG=debug` to see per-search statistics.

use std::process::ExitCode;
use std::time::Instant;

use othello::{AIEngine, EngineConfig, EngineMode, Move, MoveKind, Side};

const TIME_BUDGET_MS: u64 = 10_000;

struct Args {
    black: EngineConfig,
    white: EngineConfig,
}

fn parse_args() -> Result<Args, String> {
    let mut depths = Vec::new();
    let mut mode = EngineMode::Production;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--validation" => mode = EngineMode::Validation,
            "-h" | "--help" => return Err(String::new()),
            _ => {
                let depth = arg
                    .parse::<u8>()
                    .map_err(|_| format!("invalid depth: {}", arg))?;
                depths.push(depth);
            }
        }
    }

    if depths.len() > 2 {
        return Err("at most two depths may be given".to_string());
    }

    let base = mode.config();
    let depth_for = |i: usize| depths.get(i).copied().unwrap_or(base.depth);
    Ok(Args {
        black: EngineConfig::new(depth_for(0), base.eval),
        white: EngineConfig::new(depth_for(1), base.eval),
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("error: {}", msg);
            }
            eprintln!("usage: othello-selfplay [depth_black] [depth_white] [--validation]");
            return ExitCode::from(2);
        }
    };

    println!("===========================================");
    println!("            Othello Self-Play");
    println!("===========================================");
    println!(
        "Black: depth {} {:?}   White: depth {} {:?}\n",
        args.black.depth, args.black.eval, args.white.depth, args.white.eval
    );

    let mut black = AIEngine::with_config(Side::Black, args.black);
    let mut white = AIEngine::with_config(Side::White, args.white);

    let start = Instant::now();
    let mut side = Side::Black;
    let mut last: Option<Move> = None;
    let mut ply = 0;
    let mut total_nodes = 0u64;

    let final_board = loop {
        let engine = match side {
            Side::Black => &mut black,
            Side::White => &mut white,
        };

        engine.apply_opponent_move(last);
        if engine.board().is_terminal() {
            break *engine.board();
        }

        let result = engine.choose_move_with_stats(Some(TIME_BUDGET_MS));
        ply += 1;
        total_nodes += result.nodes;

        match result.kind {
            MoveKind::Pass => println!("--- Ply {}: {} passes ---", ply, side.name()),
            _ => println!(
                "--- Ply {}: {} plays {} ({:?}, score {:.1}, {} nodes, {}ms) ---",
                ply,
                side.name(),
                result.chosen,
                result.kind,
                result.score,
                result.nodes,
                result.time_ms
            ),
        }
        println!("{}\n", engine.board());

        last = Some(result.chosen);
        side = side.opponent();
    };

    println!("===========================================");
    println!(
        "Final: Black {} - White {}",
        final_board.count_black(),
        final_board.count_white()
    );
    match final_board.winner() {
        Some(winner) => println!("Winner: {}", winner.name()),
        None => println!("Draw"),
    }
    println!(
        "{} plies, {} nodes, {:.2}s",
        ply,
        total_nodes,
        start.elapsed().as_secs_f64()
    );

    ExitCode::SUCCESS
}
