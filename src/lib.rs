//! Othello (Reversi) engine
//!
//! A game-playing engine for standard 8x8 Othello:
//! - Black moves first from the usual four-disk center setup
//! - A placement must flip at least one line of opponent disks
//! - A side with no legal placement passes
//! - The game ends when neither side can move; most disks wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards, move legality and capture
//! - [`eval`]: Position evaluation (weighted heuristic and disk parity)
//! - [`search`]: Fixed-depth alpha-beta search
//! - [`engine`]: Engine that owns the game board and plays one side
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, EngineMode, Move, Side};
//!
//! let mut black = AIEngine::new(Side::Black, EngineMode::Validation);
//! let mut white = AIEngine::new(Side::White, EngineMode::Validation);
//!
//! black.apply_opponent_move(None);
//! let opening = black.choose_move(None);
//! assert_eq!(opening, Move::at(2, 3));
//!
//! white.apply_opponent_move(Some(opening));
//! let reply = white.choose_move(None);
//! black.apply_opponent_move(Some(reply));
//!
//! assert_eq!(black.board(), white.board());
//! assert_ne!(*black.board(), Board::new());
//! ```
//!
//! # Modes
//!
//! - **Production**: depth 7, weighted six-term heuristic
//! - **Validation**: depth 2, plain disk-count difference, so every decision
//!   can be checked by hand

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Coord, Move, Side, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, EngineMode, MoveKind, MoveResult};
pub use eval::EvalMode;
