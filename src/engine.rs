//! Engine that plays one side of a game
//!
//! The engine owns the authoritative board. Each turn it is told what the
//! opponent played, then asked for its own move:
//!
//! 1. **Pass**: no legal placement, nothing is searched or changed
//! 2. **Forced**: exactly one legal placement, played without searching
//! 3. **Alpha-Beta**: fixed-depth search with the configured evaluator
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, EngineMode, Move, Side};
//!
//! let mut engine = AIEngine::new(Side::White, EngineMode::Validation);
//!
//! // Black opened at (2, 3)
//! engine.apply_opponent_move(Some(Move::at(2, 3)));
//!
//! let reply = engine.choose_move(None);
//! assert!(!reply.is_pass());
//! assert_eq!(engine.board().total_occupied(), 6);
//! ```

use std::time::Instant;

use crate::board::{Board, Coord, Move, Side};
use crate::eval::EvalMode;
use crate::search::Searcher;

/// Named engine presets, fixed when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Depth 7 with the weighted heuristic
    #[default]
    Production,
    /// Depth 2 with the disk-count evaluator, for checking results by hand
    Validation,
}

impl EngineMode {
    #[must_use]
    pub fn config(self) -> EngineConfig {
        match self {
            EngineMode::Production => EngineConfig::PRODUCTION,
            EngineMode::Validation => EngineConfig::VALIDATION,
        }
    }
}

/// Search depth and evaluator used for every move the engine makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below the current position
    pub depth: u8,
    pub eval: EvalMode,
}

impl EngineConfig {
    pub const PRODUCTION: EngineConfig = EngineConfig {
        depth: 7,
        eval: EvalMode::Heuristic,
    };

    pub const VALIDATION: EngineConfig = EngineConfig {
        depth: 2,
        eval: EvalMode::DiskParity,
    };

    #[must_use]
    pub fn new(depth: u8, eval: EvalMode) -> Self {
        Self { depth, eval }
    }

    /// The preset this configuration corresponds to, if any
    #[must_use]
    pub fn mode(&self) -> Option<EngineMode> {
        if *self == Self::PRODUCTION {
            Some(EngineMode::Production)
        } else if *self == Self::VALIDATION {
            Some(EngineMode::Validation)
        } else {
            None
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::PRODUCTION
    }
}

impl From<EngineMode> for EngineConfig {
    fn from(mode: EngineMode) -> Self {
        mode.config()
    }
}

/// How the engine arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// No legal placement; the engine passed
    Pass,
    /// Only one legal placement; no search was run
    Forced,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move decision with statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Move played (already applied to the engine's board)
    pub chosen: Move,
    /// Engine's evaluation: the search score, or the static evaluation
    /// of the resulting position for passes and forced moves
    pub score: f64,
    pub kind: MoveKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn pass(score: f64, time_ms: u64) -> Self {
        Self {
            chosen: Move::Pass,
            score,
            kind: MoveKind::Pass,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn forced(pos: Coord, score: f64, time_ms: u64) -> Self {
        Self {
            chosen: Move::Place(pos),
            score,
            kind: MoveKind::Forced,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn alpha_beta(pos: Coord, score: f64, time_ms: u64, nodes: u64) -> Self {
        Self {
            chosen: Move::Place(pos),
            score,
            kind: MoveKind::AlphaBeta,
            time_ms,
            nodes,
        }
    }
}

/// Plays one side of an Othello game.
///
/// # Example
///
/// ```
/// use othello::{AIEngine, EngineConfig, EvalMode, Move, Side};
///
/// let mut engine = AIEngine::with_config(Side::Black, EngineConfig::new(3, EvalMode::Heuristic));
/// engine.apply_opponent_move(None);
///
/// match engine.choose_move(Some(1_000)) {
///     Move::Place(pos) => println!("Play at {}", pos),
///     Move::Pass => println!("Pass"),
/// }
/// ```
pub struct AIEngine {
    board: Board,
    side: Side,
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Engine for `side` from the standard starting position.
    #[must_use]
    pub fn new(side: Side, mode: EngineMode) -> Self {
        Self::with_config(side, mode.config())
    }

    /// Engine with an explicit depth and evaluator.
    #[must_use]
    pub fn with_config(side: Side, config: EngineConfig) -> Self {
        Self::with_board(side, config, Board::new())
    }

    /// Engine that starts from an arbitrary position.
    #[must_use]
    pub fn with_board(side: Side, config: EngineConfig, board: Board) -> Self {
        Self {
            board,
            side,
            config,
            searcher: Searcher::new(config.depth, config.eval),
        }
    }

    /// Record the opponent's last move.
    ///
    /// `None` means there was no previous move (this engine opens the game).
    /// Passes change nothing. Illegal moves are ignored.
    pub fn apply_opponent_move(&mut self, mov: Option<Move>) {
        let Some(mov) = mov else {
            return;
        };

        let opponent = self.side.opponent();
        if let Move::Place(pos) = mov {
            if !self.board.apply_move(mov, opponent) {
                log::warn!("ignoring illegal {} move at {}", opponent.name(), pos);
            }
        }
    }

    /// Choose a move, play it on the engine's board and return it.
    ///
    /// The time budget is recorded but the search always runs to its full
    /// configured depth.
    pub fn choose_move(&mut self, time_budget_ms: Option<u64>) -> Move {
        self.choose_move_with_stats(time_budget_ms).chosen
    }

    /// Same as [`choose_move`](Self::choose_move), with search statistics.
    pub fn choose_move_with_stats(&mut self, time_budget_ms: Option<u64>) -> MoveResult {
        let start = Instant::now();
        if let Some(ms) = time_budget_ms {
            log::debug!("{} thinking, budget {} ms (not enforced)", self.side.name(), ms);
        }

        let moves = self.board.legal_moves(self.side);
        let result = match moves.as_slice() {
            [] => {
                let score = self.config.eval.evaluate(&self.board, self.side);
                MoveResult::pass(score, elapsed_ms(start))
            }
            &[only] => {
                self.board.apply_move(Move::Place(only), self.side);
                let score = self.config.eval.evaluate(&self.board, self.side);
                MoveResult::forced(only, score, elapsed_ms(start))
            }
            _ => {
                let search = self.searcher.search(&self.board, self.side);
                match search.best_move {
                    Some(pos) => {
                        self.board.apply_move(Move::Place(pos), self.side);
                        MoveResult::alpha_beta(pos, search.score, elapsed_ms(start), search.nodes)
                    }
                    // Unreachable with moves on the board; stay consistent anyway
                    None => MoveResult::pass(search.score, elapsed_ms(start)),
                }
            }
        };

        match result.kind {
            MoveKind::Pass => log::info!("{} has no legal move, passing", self.side.name()),
            kind => log::info!(
                "{} plays {} ({:?}, score {:.3}, {} nodes, {} ms)",
                self.side.name(),
                result.chosen,
                kind,
                result.score,
                result.nodes,
                result.time_ms
            ),
        }

        result
    }

    /// The engine's current view of the game
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Preset the engine was built with, `None` for a custom configuration
    #[inline]
    pub fn mode(&self) -> Option<EngineMode> {
        self.config.mode()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
