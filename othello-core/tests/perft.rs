use othello_core::test_utils::{run_perft, run_perft_env};

#[test]
fn perft_1() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_2() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_3() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_4() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_5() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_6() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_7() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_8() {
    assert_eq!(run_perft(8), 390216);
}

#[test]
fn env_perft_matches_bitboard_perft() {
    for depth in 1..=5 {
        assert_eq!(run_perft_env(depth), run_perft(depth), "depth {}", depth);
    }
}
