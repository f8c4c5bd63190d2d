//! Random self-play soak test.
//!
//! Plays uniformly random legal games from the start position and checks the
//! board after every ply. At the end the whole game is unwound with
//! `unmake_move` and must land back on the start position.

use log::{info, trace};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{GameError, GameResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 20,
            max_plies: 200,
            seed: 0,
        }
    }
}

/// How one random game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    Checkmate,
    Stalemate,
    PlyLimit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub games: usize,
    pub plies: usize,
    pub checkmates: usize,
    pub stalemates: usize,
    pub ply_limit: usize,
}

impl PlayoutSummary {
    fn record(&mut self, end: PlayoutEnd, plies: usize) {
        self.games += 1;
        self.plies += plies;
        match end {
            PlayoutEnd::Checkmate => self.checkmates += 1,
            PlayoutEnd::Stalemate => self.stalemates += 1,
            PlayoutEnd::PlyLimit => self.ply_limit += 1,
        }
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> GameResult<PlayoutSummary> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut summary = PlayoutSummary::default();
    for game_index in 0..config.games {
        let (end, plies) = play_random_game(&mut rng, config.max_plies)?;
        trace!("game {game_index}: {end:?} after {plies} plies");
        summary.record(end, plies);
    }
    info!(
        "self-play: {} games, {} plies, {} checkmates, {} stalemates, {} hit the ply limit",
        summary.games, summary.plies, summary.checkmates, summary.stalemates, summary.ply_limit
    );
    Ok(summary)
}

/// Plays one random game, returning how it ended and its length in plies.
pub fn play_random_game<R: Rng + ?Sized>(
    rng: &mut R,
    max_plies: usize,
) -> GameResult<(PlayoutEnd, usize)> {
    let mut game = GameState::new_game();
    let mut end = PlayoutEnd::PlyLimit;

    while game.history_len() < max_plies {
        check_position_invariants(&mut game)?;

        let legal = generate_legal_moves(&mut game)?;
        let Some(&mv) = legal.choose(rng) else {
            end = if is_king_in_check(&game, game.side_to_move) {
                PlayoutEnd::Checkmate
            } else {
                PlayoutEnd::Stalemate
            };
            break;
        };
        trace!("ply {}: {}", game.history_len(), move_to_long_algebraic(mv));
        game.make_move(mv)?;
    }
    check_position_invariants(&mut game)?;

    let plies = game.history_len();
    unwind_to_start(&mut game)?;
    Ok((end, plies))
}

/// Occupancy partition, one king per side, and an exact make / unmake round
/// trip for every pseudo-legal move.
pub fn check_position_invariants(game_state: &mut GameState) -> GameResult<()> {
    let overlap = game_state.overlapping_squares();
    if overlap != 0 {
        return Err(GameError::InvariantViolation(format!(
            "squares claimed twice: {overlap:#018x}"
        )));
    }

    for color in Color::ALL {
        let kings = game_state.bitboard(color, PieceKind::King).count_ones();
        if kings != 1 {
            return Err(GameError::InvariantViolation(format!(
                "{color:?} has {kings} kings"
            )));
        }
    }

    let before = game_state.clone();
    for mv in generate_pseudo_legal_moves(game_state) {
        game_state.make_move(mv)?;
        game_state.unmake_move()?;
        if *game_state != before {
            return Err(GameError::InvariantViolation(format!(
                "make/unmake of {} did not restore the position",
                move_to_long_algebraic(mv)
            )));
        }
    }
    Ok(())
}

fn unwind_to_start(game_state: &mut GameState) -> GameResult<()> {
    while game_state.history_len() > 0 {
        game_state.unmake_move()?;
    }
    if *game_state != GameState::new_game() {
        return Err(GameError::InvariantViolation(
            "unwinding the game did not restore the start position".to_owned(),
        ));
    }
    Ok(())
}
