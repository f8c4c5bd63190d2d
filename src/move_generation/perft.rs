//! Perft node counting for move generator verification.
//!
//! `perft` walks the tree in place with make / probe / undo. `perft_parallel`
//! splits the root moves across rayon workers, each on its own cloned state.

use std::fmt;

use log::debug;
use rayon::prelude::*;

use crate::errors::GameResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Leaf count of the legal move tree below `game_state`, `depth` plies deep.
pub fn perft(game_state: &mut GameState, depth: u8) -> GameResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mover = game_state.side_to_move;
    let mut nodes = 0u64;
    for mv in generate_pseudo_legal_moves(game_state) {
        game_state.make_move(mv)?;
        if !mover_king_attacked(game_state, mover) {
            nodes += perft(game_state, depth - 1)?;
        }
        game_state.unmake_move()?;
    }
    Ok(nodes)
}

#[inline]
fn mover_king_attacked(game_state: &GameState, mover: Color) -> bool {
    match game_state.king_square(mover) {
        Some(king_sq) => is_square_attacked(game_state, king_sq, mover.opposite()),
        None => true,
    }
}

/// Per-root-move breakdown of a perft run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivideReport {
    pub entries: Vec<(Move, u64)>,
    pub total: u64,
}

impl fmt::Display for DivideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(mv, nodes) in &self.entries {
            writeln!(f, "{}: {}", move_to_long_algebraic(mv), nodes)?;
        }
        write!(f, "Total: {}", self.total)
    }
}

/// Perft split by legal root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> GameResult<DivideReport> {
    let mut report = DivideReport::default();
    if depth == 0 {
        report.total = 1;
        return Ok(report);
    }

    for mv in generate_legal_moves(game_state)? {
        game_state.make_move(mv)?;
        let nodes = perft(game_state, depth - 1);
        game_state.unmake_move()?;
        let nodes = nodes?;

        debug!("{}: {}", move_to_long_algebraic(mv), nodes);
        report.entries.push((mv, nodes));
        report.total += nodes;
    }
    Ok(report)
}

/// Same count as `perft`, with root moves spread over the rayon pool.
pub fn perft_parallel(game_state: &GameState, depth: u8) -> GameResult<u64> {
    if depth <= 1 {
        return perft(&mut game_state.clone(), depth);
    }

    let root_moves = generate_legal_moves(&mut game_state.clone())?;
    root_moves
        .par_iter()
        .map(|&mv| {
            let mut local = game_state.clone();
            local.make_move(mv)?;
            perft(&mut local, depth - 1)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))
}
