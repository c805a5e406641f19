//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation and tuning the bitboard.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::bitboard::{self, Bitboard};
use crate::Env;

/// Count leaves below the opening using the raw bitboard functions.
/// A pass counts as a ply; two passes in a row end the game.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(bitboard::BLACK_START, bitboard::WHITE_START, depth, false)
}

fn leaves_below(own: Bitboard, opponent: Bitboard, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = bitboard::legal_moves(own, opponent);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(opponent, own, depth - 1, true);
    }

    crate::LocationList::from(all_moves)
        .map(|loc| {
            let (own, opponent) = bitboard::resolve_captures(loc.into(), own, opponent);
            leaves_below(opponent, own, depth - 1, false)
        })
        .sum()
}

/// Count leaves below the opening by driving an [`Env`] with apply and undo.
/// Slower than [`run_perft`], but exercises the whole game layer.
pub fn run_perft_env(depth: u64) -> u64 {
    let mut env = Env::new();
    env.reset();
    env_leaves_below(&mut env, depth)
}

fn env_leaves_below(env: &mut Env, depth: u64) -> u64 {
    if depth == 0 || env.is_done() {
        return 1;
    }

    let mut leaves = 0;
    for action in env.legal_actions() {
        env.apply(action).expect("legal action was rejected");
        leaves += env_leaves_below(env, depth - 1);
        env.undo().expect("history is empty after apply");
    }
    leaves
}
