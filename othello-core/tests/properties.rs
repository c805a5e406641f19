//! Property tests: random positions and random playouts checked against a
//! naive per-cell reference and the game invariants.

use othello_core::bitboard::{self, Bitboard};
use othello_core::{Env, EnvConfig, Location, Move, PassPolicy, Player, EDGE_LENGTH};
use proptest::prelude::*;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

type Cells = [[i8; EDGE_LENGTH]; EDGE_LENGTH];

/// Cell `(x, y)` lives at bit `63 - (8 * y + x)`; `1` is own, `-1` is opponent.
fn to_cells(own: u64, opponent: u64) -> Cells {
    let mut cells = [[0; EDGE_LENGTH]; EDGE_LENGTH];
    for y in 0..EDGE_LENGTH {
        for x in 0..EDGE_LENGTH {
            let bit = 1u64 << (63 - (8 * y + x));
            if own & bit != 0 {
                cells[y][x] = 1;
            } else if opponent & bit != 0 {
                cells[y][x] = -1;
            }
        }
    }
    cells
}

/// Opponent cells captured by `me` placing at `(x, y)`, scanning cell by cell.
fn naive_flips(cells: &Cells, me: i8, x: usize, y: usize) -> Vec<(usize, usize)> {
    let mut flips = Vec::new();
    if cells[y][x] != 0 {
        return flips;
    }

    for (dx, dy) in DIRECTIONS {
        let mut run = Vec::new();
        let (mut cx, mut cy) = (x as i32 + dx, y as i32 + dy);
        while (0..8).contains(&cx) && (0..8).contains(&cy) {
            let cell = cells[cy as usize][cx as usize];
            if cell == -me {
                run.push((cx as usize, cy as usize));
            } else {
                if cell == me {
                    flips.append(&mut run);
                }
                break;
            }
            cx += dx;
            cy += dy;
        }
    }

    flips.sort_unstable();
    flips
}

fn naive_legal(cells: &Cells, me: i8) -> Vec<(usize, usize)> {
    let mut legal = Vec::new();
    for y in 0..EDGE_LENGTH {
        for x in 0..EDGE_LENGTH {
            if !naive_flips(cells, me, x, y).is_empty() {
                legal.push((x, y));
            }
        }
    }
    legal
}

fn coords(bits: Bitboard) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = othello_core::LocationList::from(bits)
        .map(Location::to_coords)
        .collect();
    out.sort_unstable();
    out
}

fn sorted_by_row(mut cells: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    cells.sort_unstable_by_key(|&(x, y)| (y, x));
    cells
}

/// Two disjoint masks covering roughly three quarters of the board.
fn position() -> impl Strategy<Value = (u64, u64)> {
    (any::<u64>(), any::<u64>(), any::<u64>()).prop_map(|(a, b, split)| {
        let occupied = a | b;
        let own = occupied & split;
        (own, occupied & !own)
    })
}

fn check_invariants(env: &Env) {
    let black = env.bitboard(Player::Black);
    let white = env.bitboard(Player::White);
    assert!((black & white).is_empty());

    let empties = env.board().iter().flatten().filter(|&&c| c == 0).count();
    assert_eq!(
        env.count(Player::Black) as usize + env.count(Player::White) as usize + empties,
        64
    );
}

proptest! {
    #[test]
    fn legal_moves_match_naive_scan((own, opponent) in position()) {
        let cells = to_cells(own, opponent);
        let legal = bitboard::legal_moves(own.into(), opponent.into());
        prop_assert_eq!(sorted_by_row(coords(legal)), naive_legal(&cells, 1));

        let legal = bitboard::legal_moves(opponent.into(), own.into());
        prop_assert_eq!(sorted_by_row(coords(legal)), naive_legal(&cells, -1));
    }

    #[test]
    fn captures_match_naive_scan((own, opponent) in position()) {
        let cells = to_cells(own, opponent);
        let legal = bitboard::legal_moves(own.into(), opponent.into());

        for loc in othello_core::LocationList::from(legal) {
            let (x, y) = loc.to_coords();
            let put = Bitboard::from(loc);
            let reversal = bitboard::captures(put, own.into(), opponent.into());
            prop_assert_eq!(coords(reversal), naive_flips(&cells, 1, x, y));

            let (new_own, new_opponent) =
                bitboard::resolve_captures(put, own.into(), opponent.into());
            prop_assert!((new_own & new_opponent).is_empty());
            prop_assert_eq!(
                new_own.count_occupied() + new_opponent.count_occupied(),
                own.count_ones() as u8 + opponent.count_ones() as u8 + 1
            );
        }
    }

    #[test]
    fn can_place_agrees_with_legal_mask((own, opponent) in position()) {
        let cells = to_cells(own, opponent);
        let legal = naive_legal(&cells, 1);

        for y in 0..EDGE_LENGTH {
            for x in 0..EDGE_LENGTH {
                let put = Bitboard::from(Location::from_coords(x, y).unwrap());
                prop_assert_eq!(
                    bitboard::can_place(put, own.into(), opponent.into()),
                    legal.contains(&(x, y)),
                    "cell ({}, {})", x, y
                );
            }
        }
    }

    #[test]
    fn unpack_matches_bit_layout(bits in any::<u64>()) {
        let grid = Bitboard::from(bits).unpack();
        let cells = to_cells(bits, 0);
        for y in 0..EDGE_LENGTH {
            for x in 0..EDGE_LENGTH {
                prop_assert_eq!(grid[y][x] as i8, cells[y][x]);
            }
        }
        prop_assert_eq!(Bitboard::from(bits).count_occupied() as u32, bits.count_ones());
    }

    #[test]
    fn terminal_iff_no_moves_for_either_side((own, opponent) in position()) {
        let cells = to_cells(own, opponent);
        let expected = naive_legal(&cells, 1).is_empty() && naive_legal(&cells, -1).is_empty();
        prop_assert_eq!(bitboard::is_game_over(own.into(), opponent.into()), expected);
    }

    #[test]
    fn symbol_round_trip(x in 0..EDGE_LENGTH, y in 0..EDGE_LENGTH) {
        let loc = Location::from_coords(x, y).unwrap();
        let symbol = loc.to_string();
        prop_assert_eq!(symbol.len(), 2);
        prop_assert_eq!(bitboard::from_symbol(&symbol).unwrap(), Bitboard::from(loc));
        let parsed: Location = symbol.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), symbol);
    }

    #[test]
    fn random_playout_keeps_invariants(choices in prop::collection::vec(any::<usize>(), 0..80)) {
        let mut env = Env::new();
        env.reset();

        for choice in choices {
            check_invariants(&env);

            let actions = env.legal_actions();
            prop_assert_eq!(actions.is_empty(), env.is_done());
            if actions.is_empty() {
                break;
            }

            let player = env.current_player();
            let cells = to_cells(
                env.bitboard(player).into(),
                env.bitboard(-player).into(),
            );
            let placements: Vec<(usize, usize)> = actions
                .iter()
                .filter_map(|a| Some((a.x()?, a.y()?)))
                .collect();
            prop_assert_eq!(placements, naive_legal(&cells, 1));

            let action = actions[choice % actions.len()];
            let before = env.clone();

            env.apply(action).unwrap();
            prop_assert_eq!(env.history_size(), before.history_size() + 1);
            prop_assert_eq!(env.last_action(), Ok(action));

            if let Move::Piece(loc) = action.mv {
                let (x, y) = loc.to_coords();
                prop_assert_eq!(
                    coords(env.flipped().unwrap().into()),
                    naive_flips(&cells, 1, x, y)
                );
            }

            let mut undone = env.clone();
            prop_assert_eq!(undone.undo(), Ok(action));
            prop_assert_eq!(&undone, &before);
        }

        check_invariants(&env);
    }

    #[test]
    fn implicit_playout_never_offers_a_pass(choices in prop::collection::vec(any::<usize>(), 0..80)) {
        let config = EnvConfig::default().with_pass_policy(PassPolicy::Implicit);
        let mut env = Env::with_config(config);
        env.reset();

        for choice in choices {
            let actions = env.legal_actions();
            prop_assert!(actions.iter().all(|a| !a.is_pass()));
            if actions.is_empty() {
                prop_assert!(env.is_done());
                break;
            }

            let before = env.clone();
            env.apply(actions[choice % actions.len()]).unwrap();
            check_invariants(&env);

            let mut undone = env.clone();
            undone.undo().unwrap();
            prop_assert_eq!(&undone, &before);
        }
    }
}
