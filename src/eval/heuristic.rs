//! Heuristic evaluation function for Othello positions
//!
//! Six terms, each computed from the perspective of one side and combined
//! with the fixed weights in [`Weights`]:
//! - Disk parity
//! - Static square weights
//! - Corner occupancy
//! - Corner closeness (disks next to an open corner)
//! - Mobility
//! - Frontier disks

use crate::board::{Board, Coord, Side, DIRECTIONS};

use super::weights::{percent_lead, Weights, SQUARE_WEIGHTS};

/// Raw (unweighted) evaluation terms for one side
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalTerms {
    /// Disk parity, in [-100, 100]
    pub parity: f64,
    /// Corner occupancy: 25 per corner of advantage
    pub corners: f64,
    /// Corner closeness: -12.5 per disk of advantage next to an open corner
    pub closeness: f64,
    /// Mobility, in [-100, 100]
    pub mobility: f64,
    /// Frontier disks, in [-100, 100] (fewer is better)
    pub frontier: f64,
    /// Sum of square weights, own minus opponent's
    pub squares: f64,
}

impl EvalTerms {
    /// Weighted sum of all terms
    #[must_use]
    pub fn total(&self) -> f64 {
        Weights::PARITY * self.parity
            + Weights::CORNERS * self.corners
            + Weights::CLOSENESS * self.closeness
            + Weights::MOBILITY * self.mobility
            + Weights::FRONTIER * self.frontier
            + Weights::SQUARES * self.squares
    }
}

/// Evaluate the board from the perspective of `side`.
///
/// Returns [`Weights::LOSS`] when `side` has no disks and [`Weights::WIN`]
/// when the opponent has none. Otherwise the weighted sum of
/// [`evaluate_terms`], which always stays strictly inside the sentinels.
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> f64 {
    if board.count(side) == 0 {
        return Weights::LOSS;
    }
    if board.count(side.opponent()) == 0 {
        return Weights::WIN;
    }

    evaluate_terms(board, side).total()
}

/// Plain disk-count differential (`mine - theirs`), no weighting.
///
/// Used in validation mode so search results can be checked by hand.
#[must_use]
pub fn disk_difference(board: &Board, side: Side) -> f64 {
    f64::from(board.count(side)) - f64::from(board.count(side.opponent()))
}

/// Compute every raw term for `side` without the sentinel checks
#[must_use]
pub fn evaluate_terms(board: &Board, side: Side) -> EvalTerms {
    let opponent = side.opponent();

    let (my_front, opp_front) = frontier_counts(board, side);

    EvalTerms {
        parity: percent_lead(board.count(side), board.count(opponent)),
        corners: corner_occupancy(board, side),
        closeness: corner_closeness(board, side),
        mobility: percent_lead(
            board.num_legal_moves(side) as u32,
            board.num_legal_moves(opponent) as u32,
        ),
        // Sign inverted: more exposed disks is worse
        frontier: -percent_lead(my_front, opp_front),
        squares: square_score(board, side),
    }
}

/// Square table sum: own disks add their weight, opponent disks subtract it
fn square_score(board: &Board, side: Side) -> f64 {
    let mine: i32 = board
        .disks(side)
        .iter_ones()
        .map(|c| SQUARE_WEIGHTS[c.x as usize][c.y as usize])
        .sum();
    let theirs: i32 = board
        .disks(side.opponent())
        .iter_ones()
        .map(|c| SQUARE_WEIGHTS[c.x as usize][c.y as usize])
        .sum();
    f64::from(mine - theirs)
}

/// Frontier disk counts `(mine, theirs)`.
///
/// A disk counts once if any on-board neighbor is empty; the neighbor scan
/// stops at the first empty cell found.
fn frontier_counts(board: &Board, side: Side) -> (u32, u32) {
    let mut mine = 0;
    let mut theirs = 0;

    for pos in board.occupied().iter_ones() {
        let exposed = DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| pos.offset(dx, dy))
            .any(|n| !board.is_occupied(n));

        if exposed {
            if board.owned_by(side, pos) {
                mine += 1;
            } else {
                theirs += 1;
            }
        }
    }

    (mine, theirs)
}

/// Tally `(mine, theirs)` over a set of cells
fn tally(board: &Board, side: Side, cells: impl IntoIterator<Item = Coord>) -> (i32, i32) {
    let mut mine = 0;
    let mut theirs = 0;
    for c in cells {
        if board.owned_by(side, c) {
            mine += 1;
        } else if board.is_occupied(c) {
            theirs += 1;
        }
    }
    (mine, theirs)
}

fn corner_occupancy(board: &Board, side: Side) -> f64 {
    let (mine, theirs) = tally(board, side, Coord::CORNERS);
    Weights::CORNER_UNIT * f64::from(mine - theirs)
}

/// The three cells touching a corner
fn corner_neighbors(corner: Coord) -> [Coord; 3] {
    let sx: i32 = if corner.x == 0 { 1 } else { -1 };
    let sy: i32 = if corner.y == 0 { 1 } else { -1 };
    let at = |dx: i32, dy: i32| {
        Coord::new(
            (i32::from(corner.x) + dx) as u8,
            (i32::from(corner.y) + dy) as u8,
        )
    };
    [at(0, sy), at(sx, sy), at(sx, 0)]
}

fn corner_closeness(board: &Board, side: Side) -> f64 {
    let cells = Coord::CORNERS
        .into_iter()
        .filter(|&corner| !board.is_occupied(corner))
        .flat_map(corner_neighbors);
    let (mine, theirs) = tally(board, side, cells);
    Weights::CLOSENESS_UNIT * f64::from(mine - theirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board")
    }

    #[test]
    fn test_evaluate_initial_board_is_balanced() {
        let b = Board::new();
        assert_eq!(evaluate(&b, Side::Black), 0.0);
        assert_eq!(evaluate(&b, Side::White), 0.0);
    }

    #[test]
    fn test_evaluate_initial_terms() {
        let terms = evaluate_terms(&Board::new(), Side::Black);
        assert_eq!(terms, EvalTerms::default());
    }

    #[test]
    fn test_evaluate_win_sentinel() {
        let b = board(
            "bbb.....
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(evaluate(&b, Side::Black), Weights::WIN);
        assert_eq!(evaluate(&b, Side::White), Weights::LOSS);
    }

    #[test]
    fn test_evaluate_empty_board_is_loss() {
        let b = Board::empty();
        assert_eq!(evaluate(&b, Side::Black), Weights::LOSS);
    }

    #[test]
    fn test_disk_difference() {
        let mut b = Board::new();
        assert_eq!(disk_difference(&b, Side::Black), 0.0);

        b.apply_move(Move::at(2, 3), Side::Black);
        assert_eq!(disk_difference(&b, Side::Black), 3.0);
        assert_eq!(disk_difference(&b, Side::White), -3.0);
    }

    #[test]
    fn test_parity_term() {
        let mut b = Board::new();
        b.apply_move(Move::at(2, 3), Side::Black);
        // 4 black, 1 white
        let terms = evaluate_terms(&b, Side::Black);
        assert_eq!(terms.parity, 80.0);
        assert_eq!(evaluate_terms(&b, Side::White).parity, -80.0);
    }

    #[test]
    fn test_corner_occupancy() {
        let b = board(
            "b......w
             ........
             ........
             ...bw...
             ...wb...
             ........
             ........
             b.......",
        );
        let terms = evaluate_terms(&b, Side::Black);
        assert_eq!(terms.corners, 25.0);
        assert_eq!(evaluate_terms(&b, Side::White).corners, -25.0);
    }

    #[test]
    fn test_corner_closeness_only_open_corners() {
        // Black next to the open top-left corner; white next to the
        // occupied bottom-right corner does not count.
        let b = board(
            ".b......
             bb......
             ........
             ...bw...
             ...wb...
             ........
             ......ww
             ......wb",
        );
        let terms = evaluate_terms(&b, Side::Black);
        assert_eq!(terms.closeness, -37.5);
        assert_eq!(evaluate_terms(&b, Side::White).closeness, 37.5);
    }

    #[test]
    fn test_frontier_term_sign() {
        let b = board(
            "wwwwwwww
             wwwwwwww
             wwwwwwww
             wwwwwwww
             wwwwwwww
             wwwwwwww
             bbbbbbbb
             ........",
        );
        // Only the black row touches empty cells
        let terms = evaluate_terms(&b, Side::Black);
        assert_eq!(terms.frontier, -100.0);
        assert_eq!(evaluate_terms(&b, Side::White).frontier, 100.0);
    }

    #[test]
    fn test_squares_term() {
        let b = board(
            "b......w
             .w......
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        // black corner +20, white corner -20, white (1,1) -(-7)
        let terms = evaluate_terms(&b, Side::Black);
        assert_eq!(terms.squares, 7.0);
    }

    #[test]
    fn test_total_matches_weights() {
        let terms = EvalTerms {
            parity: 1.0,
            corners: 1.0,
            closeness: 1.0,
            mobility: 1.0,
            frontier: 1.0,
            squares: 1.0,
        };
        let expected = 10.0 + 801.724 + 382.026 + 78.922 + 74.396 + 10.0;
        assert!((terms.total() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_perspective_correct() {
        let mut b = Board::new();
        b.apply_move(Move::at(2, 3), Side::Black);
        b.apply_move(Move::at(2, 2), Side::White);
        b.apply_move(Move::at(2, 1), Side::Black);

        let black = evaluate_terms(&b, Side::Black);
        let white = evaluate_terms(&b, Side::White);

        // Every term is antisymmetric between the two perspectives
        assert_eq!(black.parity, -white.parity);
        assert_eq!(black.corners, -white.corners);
        assert_eq!(black.closeness, -white.closeness);
        assert_eq!(black.mobility, -white.mobility);
        assert_eq!(black.frontier, -white.frontier);
        assert_eq!(black.squares, -white.squares);
    }

    #[test]
    fn test_corner_neighbors() {
        assert_eq!(
            corner_neighbors(Coord::new(0, 0)),
            [Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 0)]
        );
        assert_eq!(
            corner_neighbors(Coord::new(7, 7)),
            [Coord::new(7, 6), Coord::new(6, 6), Coord::new(6, 7)]
        );
    }
}
