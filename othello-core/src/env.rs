//! Implements game-level Othello logic on top of [`crate::bitboard`].
//!
//! [`Env`] stores one side-neutral mask per color. The "own/opponent" pair the
//! bitboard functions expect is projected from those masks on every call and
//! never stored.

use crate::action::{Action, Move};
use crate::bitboard::{self, Bitboard};
use crate::config::{EnvConfig, Legality, PassPolicy};
use crate::error::{OthelloError, Rejection};
use crate::location::LocationList;
use crate::player::Player;
use crate::{utils, Grid, EDGE_LENGTH};
use log::{debug, trace};
use std::fmt;

/// The board as it was before `action` was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Snapshot {
    black: Bitboard,
    white: Bitboard,
    action: Action,
}

/// A game of Othello with turn order and an undo history.
///
/// A new environment is empty; call [`Env::reset`] to set up the standard
/// opening before playing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Env {
    player: Player,
    black: Bitboard,
    white: Bitboard,
    history: Vec<Snapshot>,
    config: EnvConfig,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    /// An empty board with the default rules.
    pub fn new() -> Self {
        Self::with_config(EnvConfig::default())
    }

    /// An empty board with the given rules.
    pub fn with_config(config: EnvConfig) -> Self {
        Self {
            player: Player::default(),
            black: bitboard::EMPTY,
            white: bitboard::EMPTY,
            history: Vec::new(),
            config,
        }
    }

    /// Start from an arbitrary position with an empty history.
    /// Returns `None` if the two masks overlap.
    ///
    /// Under [`PassPolicy::Implicit`], a side to move without a placement
    /// hands the turn straight to the other side.
    pub fn from_position(
        black: Bitboard,
        white: Bitboard,
        player: Player,
        config: EnvConfig,
    ) -> Option<Self> {
        if !(black & white).is_empty() {
            return None;
        }

        let mut env = Self {
            player,
            black,
            white,
            history: Vec::new(),
            config,
        };
        env.skip_if_stuck();
        Some(env)
    }

    pub fn config(&self) -> EnvConfig {
        self.config
    }

    /// Set up the standard opening with Black to move and clear the history.
    pub fn reset(&mut self) {
        self.player = Player::Black;
        self.black = bitboard::BLACK_START;
        self.white = bitboard::WHITE_START;
        self.history.clear();
        debug!("reset to the opening position");
    }

    /// The mask of discs belonging to `player`.
    #[inline]
    pub fn bitboard(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The `(own, opponent)` masks as seen by `player`.
    #[inline]
    fn project(&self, player: Player) -> (Bitboard, Bitboard) {
        (self.bitboard(player), self.bitboard(-player))
    }

    fn store(&mut self, player: Player, own: Bitboard, opponent: Bitboard) {
        match player {
            Player::Black => {
                self.black = own;
                self.white = opponent;
            }
            Player::White => {
                self.white = own;
                self.black = opponent;
            }
        }
    }

    /// The board as `grid[y][x]`: `1` for Black, `-1` for White, `0` for empty.
    pub fn board(&self) -> Grid {
        to_grid(self.black, self.white)
    }

    /// The side to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.player
    }

    /// Legal placements for the side to move, in row-major order.
    pub fn legal_moves(&self) -> LocationList {
        let (own, opponent) = self.project(self.player);
        LocationList::from(bitboard::legal_moves(own, opponent))
    }

    /// Legal actions for the side to move, in row-major order.
    ///
    /// With no placement available this is `[Pass]` under
    /// [`PassPolicy::Explicit`], and empty otherwise or once the game is over.
    pub fn legal_actions(&self) -> Vec<Action> {
        let moves = self.legal_moves();
        trace!("{} to move, legal placements {}", self.player, moves);

        if !moves.is_empty() {
            return moves
                .map(|loc| Action::new(self.player, Move::Piece(loc)))
                .collect();
        }

        match self.config.pass_policy {
            PassPolicy::Explicit if !self.is_done() => vec![Action::pass(self.player)],
            _ => Vec::new(),
        }
    }

    /// Check that `action` may be applied now, without changing anything.
    fn validate(&self, action: Action) -> Result<(), OthelloError> {
        let reject = |reason| Err(OthelloError::InvalidMove { action, reason });

        if self.is_done() {
            return reject(Rejection::GameOver);
        }
        if action.player != self.player {
            return reject(Rejection::WrongPlayer);
        }

        let strict = self.config.legality == Legality::Strict;
        match action.mv {
            Move::Pass => match self.config.pass_policy {
                PassPolicy::Implicit => reject(Rejection::PassNotAllowed),
                PassPolicy::Explicit if strict && !self.legal_moves().is_empty() => {
                    reject(Rejection::PassWithMovesAvailable)
                }
                PassPolicy::Explicit => Ok(()),
            },
            Move::Piece(loc) => {
                let (own, opponent) = self.project(action.player);
                if bitboard::can_place(loc.into(), own, opponent) {
                    Ok(())
                } else if !(Bitboard::from(loc) & (self.black | self.white)).is_empty() {
                    reject(Rejection::Occupied)
                } else if strict {
                    reject(Rejection::NoCaptures)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Apply an action for the side to move.
    ///
    /// The board before the action is pushed onto the history, captured discs
    /// are flipped and the turn passes to the other side. On error nothing
    /// changes.
    pub fn apply(&mut self, action: Action) -> Result<(), OthelloError> {
        self.validate(action)?;

        let (own, opponent) = self.project(action.player);
        let (own, opponent) = match action.mv {
            Move::Piece(loc) => bitboard::resolve_captures(loc.into(), own, opponent),
            Move::Pass => (own, opponent),
        };

        self.history.push(Snapshot {
            black: self.black,
            white: self.white,
            action,
        });
        self.store(action.player, own, opponent);
        self.player = -action.player;
        debug!("applied {} (ply {})", action, self.history.len());

        self.skip_if_stuck();
        Ok(())
    }

    /// Apply `mv` as the side to move.
    pub fn play(&mut self, mv: Move) -> Result<(), OthelloError> {
        self.apply(Action::new(self.player, mv))
    }

    /// Under the implicit pass policy, hand the turn back if the side to move is stuck.
    fn skip_if_stuck(&mut self) {
        if self.config.pass_policy == PassPolicy::Implicit {
            let (own, opponent) = self.project(self.player);
            if bitboard::must_pass(own, opponent) {
                debug!("{} has no placement, turn skipped", self.player);
                self.player = -self.player;
            }
        }
    }

    /// Take back the most recent action, returning it.
    pub fn undo(&mut self) -> Result<Action, OthelloError> {
        let snapshot = self.history.pop().ok_or(OthelloError::EmptyHistory)?;

        self.black = snapshot.black;
        self.white = snapshot.white;
        self.player = snapshot.action.player;
        debug!("undid {} (ply {})", snapshot.action, self.history.len());

        Ok(snapshot.action)
    }

    /// True once neither side has a legal placement.
    #[inline]
    pub fn is_done(&self) -> bool {
        bitboard::is_game_over(self.black, self.white)
    }

    /// Number of discs `player` has on the board.
    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        self.bitboard(player).count_occupied()
    }

    /// True if `player` has strictly more discs than the opponent.
    pub fn is_win(&self, player: Player) -> bool {
        self.count(player) > self.count(-player)
    }

    /// True if `player` has strictly fewer discs than the opponent.
    pub fn is_lose(&self, player: Player) -> bool {
        self.count(player) < self.count(-player)
    }

    /// The side with more discs, or `None` on equal counts.
    pub fn winner(&self) -> Option<Player> {
        [Player::Black, Player::White]
            .into_iter()
            .find(|&player| self.is_win(player))
    }

    pub fn history_size(&self) -> usize {
        self.history.len()
    }

    pub fn last_action(&self) -> Result<Action, OthelloError> {
        self.history
            .last()
            .map(|snapshot| snapshot.action)
            .ok_or(OthelloError::EmptyHistory)
    }

    /// The discs flipped by the most recent action (empty after a pass).
    pub fn flipped(&self) -> Result<LocationList, OthelloError> {
        let snapshot = self.history.last().ok_or(OthelloError::EmptyHistory)?;
        let player = snapshot.action.player;
        let before = match player {
            Player::Black => snapshot.black,
            Player::White => snapshot.white,
        };
        let placed = snapshot
            .action
            .mv
            .location()
            .map_or(bitboard::EMPTY, Bitboard::from);

        Ok(LocationList::from(self.bitboard(player) ^ before ^ placed))
    }

    /// Boards before each recorded action, oldest first.
    pub fn history(&self) -> Vec<Grid> {
        self.history
            .iter()
            .map(|snapshot| to_grid(snapshot.black, snapshot.white))
            .collect()
    }
}

fn to_grid(black: Bitboard, white: Bitboard) -> Grid {
    let black = black.unpack();
    let white = white.unpack();
    let mut grid = [[0i8; EDGE_LENGTH]; EDGE_LENGTH];
    for y in 0..EDGE_LENGTH {
        for x in 0..EDGE_LENGTH {
            grid[y][x] = black[y][x] as i8 - white[y][x] as i8;
        }
    }
    grid
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self
            .black
            .into_iter()
            .zip(self.white)
            .map(|cell| match cell {
                (false, false) => '.',
                (true, false) => '#',
                (false, true) => 'O',
                (true, true) => '?',
            });
        utils::format_grid(cells, f)?;

        writeln!(f)?;
        if self.is_done() {
            write!(
                f,
                "Game over: BLACK {} - {} WHITE",
                self.count(Player::Black),
                self.count(Player::White)
            )
        } else {
            write!(f, "{} to move", self.player)
        }
    }
}
