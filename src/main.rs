//! Command-line front end for perft, divide and the self-play soak.
//!
//! Usage:
//! `chess_rules perft --depth 5 --parallel`
//! `chess_rules divide --depth 3 --moves "e2e4 e7e5"`
//! `chess_rules selfplay --games 100 --seed 7`
//!
//! Set `RUST_LOG=debug` for per-move divide output, `trace` for every self-play ply.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use log::info;

use chess_rules::errors::GameResult;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::perft::{perft, perft_divide, perft_parallel};
use chess_rules::utils::long_algebraic::find_legal_move;
use chess_rules::utils::render_game_state::render_game_state;
use chess_rules::verification::selfplay::{run_selfplay, SelfPlayConfig};

#[derive(Debug, Parser)]
#[command(name = "chess_rules", version, about = "Bitboard chess rules core: perft and self-play checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count leaf nodes of the legal move tree.
    Perft {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(short, long, default_value_t = 4)]
        depth: u8,
        /// Split root moves across all cores.
        #[arg(long)]
        parallel: bool,
    },
    /// Perft broken down by root move.
    Divide {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(short, long, default_value_t = 3)]
        depth: u8,
    },
    /// Random legal games with invariant checks after every ply.
    Selfplay {
        #[arg(short, long, default_value_t = 20)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Debug, Args)]
struct PositionArgs {
    /// Coordinate moves played from the start position, e.g. "e2e4 e7e5 g1f3".
    #[arg(short, long, default_value = "")]
    moves: String,
}

impl PositionArgs {
    fn build(&self) -> GameResult<GameState> {
        let mut game = GameState::new_game();
        for text in self.moves.split_whitespace() {
            let mv = find_legal_move(&mut game, text)?;
            game.make_move(mv)?;
        }
        Ok(game)
    }
}

fn elapsed_ms(started: DateTime<Utc>) -> i64 {
    (Utc::now() - started).num_milliseconds().max(1)
}

fn run(cli: Cli) -> GameResult<()> {
    let started = Utc::now();
    info!("run started at {}", started.to_rfc3339());

    match cli.command {
        Command::Perft {
            position,
            depth,
            parallel,
        } => {
            let mut game = position.build()?;
            println!("{}\n", render_game_state(&game));
            let nodes = if parallel {
                perft_parallel(&game, depth)?
            } else {
                perft(&mut game, depth)?
            };
            let ms = elapsed_ms(started);
            println!(
                "perft depth={depth} nodes={nodes} elapsed_ms={ms} nps={}",
                nodes as i64 * 1000 / ms
            );
        }
        Command::Divide { position, depth } => {
            let mut game = position.build()?;
            println!("{}\n", render_game_state(&game));
            let report = perft_divide(&mut game, depth)?;
            println!("{report}");
            info!("divide depth {depth} took {} ms", elapsed_ms(started));
        }
        Command::Selfplay {
            games,
            max_plies,
            seed,
        } => {
            let summary = run_selfplay(&SelfPlayConfig {
                games,
                max_plies,
                seed,
            })?;
            println!(
                "selfplay games={} plies={} checkmates={} stalemates={} ply_limit={} elapsed_ms={}",
                summary.games,
                summary.plies,
                summary.checkmates,
                summary.stalemates,
                summary.ply_limit,
                elapsed_ms(started)
            );
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();
    run(Cli::parse()).map_err(|e| e.to_string())
}
