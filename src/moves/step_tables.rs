//! Compile-time tables for pieces that step a fixed offset (knight, king).

/// Offsets as `(file_delta, rank_delta)`.
pub type StepOffsets = [(i32, i32); 8];

/// For every square, the union of `offsets` that stay on the 8x8 board.
pub const fn build_step_table(offsets: &StepOffsets) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < offsets.len() {
            let (df, dr) = offsets[i];
            attacks |= set_if_valid(file + df, rank + dr);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
