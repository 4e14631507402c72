//! Depth-bounded minimax search with alpha-beta pruning
//!
//! Every call starts from scratch: no transposition table, no move
//! ordering, no iterative deepening. Children are searched in the order
//! [`Board::legal_moves`] returns them, and each branch works on its own
//! copy of the board, so results are fully deterministic.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Coord, Side};
//! use othello::eval::EvalMode;
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(2, EvalMode::DiskParity);
//! let result = searcher.search(&Board::new(), Side::Black);
//! assert_eq!(result.best_move, Some(Coord::new(2, 3)));
//! ```

use std::time::Instant;

use crate::board::{Board, Coord, Move, Side};
use crate::eval::EvalMode;

/// Bound for the alpha-beta window. Strictly outside the evaluator's
/// win/loss sentinels so a sentinel score is never clipped.
pub const INF: f64 = 1.0e9;

/// Score assigned to a single root move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub coord: Coord,
    pub score: f64,
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes where the remaining siblings were skipped
    pub cutoffs: u64,
    /// Positions handed to the evaluator
    pub leaf_evals: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only when the root side cannot place a disk
    pub best_move: Option<Coord>,
    /// Value of the best move from the root side's perspective
    pub score: f64,
    /// Ply depth searched
    pub depth: u8,
    /// Total nodes visited, root excluded
    pub nodes: u64,
    /// Every root move with its value, in enumeration order
    pub root_moves: Vec<ScoredMove>,
    pub stats: SearchStats,
}

/// Fixed-depth alpha-beta searcher.
///
/// Depth counts plies below the root: at depth 1 each root move is scored
/// by the evaluator directly, at depth 2 the opponent's replies are
/// considered too, and so on.
pub struct Searcher {
    depth: u8,
    eval: EvalMode,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher for the given depth and evaluator.
    ///
    /// A depth of 0 is treated as 1; the root always looks at its own moves.
    #[must_use]
    pub fn new(depth: u8, eval: EvalMode) -> Self {
        Self {
            depth: depth.max(1),
            eval,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn eval_mode(&self) -> EvalMode {
        self.eval
    }

    /// Find the best move for `side` with alpha-beta pruning.
    #[must_use]
    pub fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        self.run(board, side, true)
    }

    /// Same tree as [`search`](Self::search) with pruning turned off.
    ///
    /// Always agrees with `search` on the chosen move and every root score;
    /// only the node count differs.
    #[must_use]
    pub fn search_exhaustive(&mut self, board: &Board, side: Side) -> SearchResult {
        self.run(board, side, false)
    }

    fn run(&mut self, board: &Board, side: Side, prune: bool) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stats = SearchStats::default();

        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.eval.evaluate(board, side),
                depth: self.depth,
                nodes: 0,
                root_moves: Vec::new(),
                stats: self.stats,
            };
        }

        let mut root_moves = Vec::with_capacity(moves.len());
        let mut best: Option<ScoredMove> = None;

        for coord in moves {
            let mut child = *board;
            child.apply_move(Move::Place(coord), side);

            // Full window per root branch, so every recorded score is exact
            let score = if prune {
                self.alpha_beta(&child, side, side.opponent(), 1, -INF, INF)
            } else {
                self.minimax(&child, side, side.opponent(), 1)
            };
            log::trace!("root {} -> {:.3}", coord, score);

            let scored = ScoredMove { coord, score };
            root_moves.push(scored);
            // Strictly greater: the earliest of equal moves is kept
            if best.map_or(true, |b| score > b.score) {
                best = Some(scored);
            }
        }

        let (best_move, score) = match best {
            Some(b) => (Some(b.coord), b.score),
            None => (None, self.eval.evaluate(board, side)),
        };

        log::debug!(
            "{} depth {} ({:?}): best {:?} score {:.3}, {} nodes, {} cutoffs, {} leaves in {:?}",
            side.name(),
            self.depth,
            self.eval,
            best_move,
            score,
            self.nodes,
            self.stats.cutoffs,
            self.stats.leaf_evals,
            start.elapsed()
        );

        SearchResult {
            best_move,
            score,
            depth: self.depth,
            nodes: self.nodes,
            root_moves,
            stats: self.stats,
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board, root: Side) -> f64 {
        self.stats.leaf_evals += 1;
        self.eval.evaluate(board, root)
    }

    /// Fail-hard alpha-beta. `root` is the maximizing side; values are
    /// always from its perspective.
    fn alpha_beta(
        &mut self,
        board: &Board,
        root: Side,
        to_move: Side,
        ply: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if ply >= self.depth {
            return self.leaf(board, root);
        }

        // A side with nothing to play ends the line here; passes are not
        // explored inside the tree.
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return self.leaf(board, root);
        }

        let maximizing = to_move == root;
        for coord in moves {
            let mut child = *board;
            child.apply_move(Move::Place(coord), to_move);

            let value = self.alpha_beta(&child, root, to_move.opponent(), ply + 1, alpha, beta);

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }

    /// Plain minimax over the same tree, no bounds
    fn minimax(&mut self, board: &Board, root: Side, to_move: Side, ply: u8) -> f64 {
        self.nodes += 1;

        if ply >= self.depth {
            return self.leaf(board, root);
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return self.leaf(board, root);
        }

        let maximizing = to_move == root;
        let mut value = if maximizing { -INF } else { INF };
        for coord in moves {
            let mut child = *board;
            child.apply_move(Move::Place(coord), to_move);

            let v = self.minimax(&child, root, to_move.opponent(), ply + 1);
            value = if maximizing { value.max(v) } else { value.min(v) };
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{evaluate, Weights};

    fn board(text: &str) -> Board {
        text.parse().expect("valid board")
    }

    /// A few positions a handful of plies into a game
    fn sample_positions() -> Vec<(Board, Side)> {
        let mut positions = vec![(Board::new(), Side::Black)];

        let mut b = Board::new();
        let line = [
            (Move::at(2, 3), Side::Black),
            (Move::at(2, 2), Side::White),
            (Move::at(2, 1), Side::Black),
            (Move::at(1, 3), Side::White),
        ];
        for (mov, side) in line {
            assert!(b.apply_move(mov, side));
            positions.push((b, side.opponent()));
        }
        positions
    }

    #[test]
    fn test_search_validation_opening() {
        let mut searcher = Searcher::new(2, EvalMode::DiskParity);
        let result = searcher.search(&Board::new(), Side::Black);

        // Every opening reply restores a 3-3 count, so all four tie
        assert_eq!(result.root_moves.len(), 4);
        assert!(result.root_moves.iter().all(|m| m.score == 0.0));
        assert_eq!(result.best_move, Some(Coord::new(2, 3)));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.depth, 2);
    }

    #[test]
    fn test_depth_one_is_greedy() {
        for (b, side) in sample_positions() {
            let mut searcher = Searcher::new(1, EvalMode::Heuristic);
            let result = searcher.search(&b, side);

            let mut expected: Option<(Coord, f64)> = None;
            for coord in b.legal_moves(side) {
                let mut child = b;
                child.apply_move(Move::Place(coord), side);
                let value = evaluate(&child, side);
                if expected.map_or(true, |(_, v)| value > v) {
                    expected = Some((coord, value));
                }
            }

            let (coord, value) = expected.expect("sample positions have moves");
            assert_eq!(result.best_move, Some(coord));
            assert_eq!(result.score, value);
        }
    }

    #[test]
    fn test_pruning_matches_exhaustive() {
        for mode in [EvalMode::Heuristic, EvalMode::DiskParity] {
            for depth in 1..=4 {
                for (b, side) in sample_positions() {
                    let mut searcher = Searcher::new(depth, mode);
                    let pruned = searcher.search(&b, side);
                    let full = searcher.search_exhaustive(&b, side);

                    assert_eq!(pruned.best_move, full.best_move, "{:?} depth {}", mode, depth);
                    assert_eq!(pruned.score, full.score, "{:?} depth {}", mode, depth);
                    assert_eq!(pruned.root_moves, full.root_moves);
                    assert!(pruned.nodes <= full.nodes);
                    assert_eq!(full.stats.cutoffs, 0);
                }
            }
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let mut searcher = Searcher::new(4, EvalMode::Heuristic);
        let pruned = searcher.search(&Board::new(), Side::Black);
        let full = searcher.search_exhaustive(&Board::new(), Side::Black);

        assert!(pruned.stats.cutoffs > 0);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn test_search_deterministic() {
        let (b, side) = sample_positions()[3];
        let first = Searcher::new(4, EvalMode::Heuristic).search(&b, side);
        let second = Searcher::new(4, EvalMode::Heuristic).search(&b, side);

        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.root_moves, second.root_moves);
    }

    #[test]
    fn test_search_no_moves() {
        let b = board(
            "w.......
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        let mut searcher = Searcher::new(3, EvalMode::Heuristic);
        let result = searcher.search(&b, Side::Black);

        assert_eq!(result.best_move, None);
        assert!(result.root_moves.is_empty());
        assert_eq!(result.nodes, 0);
        assert_eq!(result.score, Weights::LOSS);
    }

    #[test]
    fn test_search_wipeout_scores_win() {
        let b = board(
            "bwwwwww.
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        let mut searcher = Searcher::new(7, EvalMode::Heuristic);
        let result = searcher.search(&b, Side::Black);

        // White is left without disks and so without moves: scored at once
        assert_eq!(result.best_move, Some(Coord::new(7, 0)));
        assert_eq!(result.score, Weights::WIN);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_depth_zero_clamped() {
        let searcher = Searcher::new(0, EvalMode::DiskParity);
        assert_eq!(searcher.depth(), 1);
        assert_eq!(searcher.eval_mode(), EvalMode::DiskParity);
    }

    #[test]
    fn test_node_count_depth_one() {
        let mut searcher = Searcher::new(1, EvalMode::DiskParity);
        let result = searcher.search(&Board::new(), Side::Black);
        assert_eq!(result.nodes, 4);
        assert_eq!(result.stats.leaf_evals, 4);
    }
}
