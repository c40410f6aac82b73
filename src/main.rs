use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zerosum_engine::{Algorithm, SearchConfig, SearchResult};
use zerosum_tictactoe::{Board, Move, ZeroSumGame};

/// Find the best tic-tac-toe move with a game-tree search.
#[derive(Debug, Parser)]
#[command(name = "zerosum", version)]
struct Cli {
    /// Board as nine cells (`X`, `O`, `.`), optionally split by `/` and
    /// followed by `:x` or `:o` for the side to move.
    #[arg(default_value = ".........")]
    board: String,

    /// Plies to search. Defaults to the end of the game.
    #[arg(short, long)]
    depth: Option<u32>,

    /// Search algorithm: minimax, negamax, or alphabeta.
    #[arg(short, long, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Let the engine play both sides until the game ends.
    #[arg(long)]
    play: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut board: Board = cli
        .board
        .parse()
        .with_context(|| format!("invalid board {:?}", cli.board))?;
    let config = SearchConfig {
        depth: cli.depth,
        algorithm: cli.algorithm,
    };
    info!(board = %board.notation(), algorithm = %config.algorithm, depth = ?config.depth, "zerosum starting");

    if cli.play {
        play_out(&mut board, &config)
    } else {
        analyse(&mut board, &config);
        Ok(())
    }
}

fn analyse(board: &mut Board, config: &SearchConfig) {
    println!("{board}\n");
    let result = board.best_move_with(config);
    report(board, &result);
}

fn play_out(board: &mut Board, config: &SearchConfig) -> Result<()> {
    loop {
        println!("{board}\n");
        if board.check_result().is_over() {
            break;
        }
        let result = board.best_move_with(config);
        report(board, &result);
        let Some(mv) = result.best_move else {
            break;
        };
        board
            .make_move(&mv)
            .with_context(|| format!("engine chose an illegal move {mv}"))?;
    }
    println!("result: {:?}", board.check_result());
    Ok(())
}

fn report(board: &Board, result: &SearchResult<Move>) {
    let mv = result
        .best_move
        .map_or_else(|| "none".to_string(), |mv| mv.to_string());
    println!(
        "{} to move: best {mv}, score {}, depth {}, nodes {}, table {}{}",
        board.side_to_move(),
        result.score,
        result.depth,
        result.nodes,
        result.table_size,
        if result.is_terminal { " (game over)" } else { "" },
    );
}
