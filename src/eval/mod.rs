//! Evaluation module for Othello positions
//!
//! Two evaluators are available:
//! - the weighted multi-term heuristic used for real play
//! - a plain disk-count differential used in validation mode
//!
//! [`EvalMode`] picks one of them once, at configuration time.

pub mod heuristic;
pub mod weights;

pub use heuristic::{disk_difference, evaluate, evaluate_terms, EvalTerms};
pub use weights::{percent_lead, Weights, SQUARE_WEIGHTS};

use crate::board::{Board, Side};

/// Which evaluator scores leaf positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalMode {
    /// Weighted six-term heuristic
    #[default]
    Heuristic,
    /// `mine - theirs` disk count, for hand-checkable searches
    DiskParity,
}

impl EvalMode {
    /// Score `board` from the perspective of `side`
    #[inline]
    #[must_use]
    pub fn evaluate(self, board: &Board, side: Side) -> f64 {
        match self {
            EvalMode::Heuristic => evaluate(board, side),
            EvalMode::DiskParity => disk_difference(board, side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_eval_mode_dispatch() {
        let mut board = Board::new();
        board.apply_move(Move::at(2, 3), Side::Black);

        assert_eq!(
            EvalMode::DiskParity.evaluate(&board, Side::Black),
            disk_difference(&board, Side::Black)
        );
        assert_eq!(
            EvalMode::Heuristic.evaluate(&board, Side::Black),
            evaluate(&board, Side::Black)
        );
    }

    #[test]
    fn test_eval_mode_default() {
        assert_eq!(EvalMode::default(), EvalMode::Heuristic);
    }
}
