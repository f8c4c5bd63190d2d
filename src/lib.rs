//! Crate root module declarations for the chess rules core.
//!
//! Exposes the board state, move encoding and attack tables, move generation
//! with perft, notation helpers, and the self-play verifier so the binary,
//! benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;

    #[cfg(test)]
    pub mod test_positions;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod step_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod bit_ops;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub mod verification {
    pub mod selfplay;
}
