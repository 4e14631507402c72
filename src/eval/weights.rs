//! Weights for Othello evaluation
//!
//! Term weights, the square table and the win/loss sentinels used by the
//! heuristic evaluator.

/// Evaluation weights and sentinels
pub struct Weights;

impl Weights {
    // Sentinels
    /// Opponent has no disks left
    pub const WIN: f64 = 1.0e7;
    /// We have no disks left
    pub const LOSS: f64 = -1.0e7;

    // Per-term multipliers for the final weighted sum
    pub const PARITY: f64 = 10.0;
    pub const CORNERS: f64 = 801.724;
    pub const CLOSENESS: f64 = 382.026;
    pub const MOBILITY: f64 = 78.922;
    pub const FRONTIER: f64 = 74.396;
    pub const SQUARES: f64 = 10.0;

    /// Raw value of one corner of advantage
    pub const CORNER_UNIT: f64 = 25.0;
    /// Raw value of one disk next to an open corner (negative: it concedes the corner)
    pub const CLOSENESS_UNIT: f64 = -12.5;
}

/// Static square weights, indexed `[x][y]`. Symmetric, so `[y][x]` reads the same.
/// Corners are strongest; the cells diagonal to a corner are the worst.
pub const SQUARE_WEIGHTS: [[i32; 8]; 8] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

/// Signed percentage differential shared by the parity, mobility and
/// frontier terms.
///
/// 0 when tied, `+100 * mine / total` when ahead, `-100 * theirs / total`
/// when behind. Antisymmetric: `percent_lead(a, b) == -percent_lead(b, a)`.
pub fn percent_lead(mine: u32, theirs: u32) -> f64 {
    let total = f64::from(mine + theirs);
    if mine > theirs {
        100.0 * f64::from(mine) / total
    } else if mine < theirs {
        -100.0 * f64::from(theirs) / total
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_table_symmetric() {
        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(SQUARE_WEIGHTS[x][y], SQUARE_WEIGHTS[y][x]);
                assert_eq!(SQUARE_WEIGHTS[x][y], SQUARE_WEIGHTS[7 - x][y]);
                assert_eq!(SQUARE_WEIGHTS[x][y], SQUARE_WEIGHTS[x][7 - y]);
            }
        }
    }

    #[test]
    fn test_corners_strongest() {
        let max = SQUARE_WEIGHTS.iter().flatten().max().copied();
        let min = SQUARE_WEIGHTS.iter().flatten().min().copied();
        assert_eq!(max, Some(SQUARE_WEIGHTS[0][0]));
        assert_eq!(min, Some(SQUARE_WEIGHTS[1][1]));
    }

    #[test]
    fn test_percent_lead_zero() {
        assert_eq!(percent_lead(0, 0), 0.0);
        assert_eq!(percent_lead(7, 7), 0.0);
    }

    #[test]
    fn test_percent_lead_shape() {
        assert_eq!(percent_lead(3, 1), 75.0);
        assert_eq!(percent_lead(1, 3), -75.0);
        assert_eq!(percent_lead(4, 0), 100.0);
    }

    #[test]
    fn test_percent_lead_antisymmetric() {
        for a in 0..=10u32 {
            for b in 0..=10u32 {
                assert_eq!(
                    percent_lead(a, b),
                    -percent_lead(b, a),
                    "percent_lead must be antisymmetric: ({},{})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_sentinels_dominate_weighted_sum() {
        // Largest possible magnitude of every term combined stays below the sentinel
        let squares: i32 = SQUARE_WEIGHTS.iter().flatten().map(|w| w.abs()).sum();
        let bound = Weights::PARITY * 100.0
            + Weights::CORNERS * Weights::CORNER_UNIT * 4.0
            + Weights::CLOSENESS * Weights::CLOSENESS_UNIT.abs() * 12.0
            + Weights::MOBILITY * 100.0
            + Weights::FRONTIER * 100.0
            + Weights::SQUARES * f64::from(squares);
        assert!(bound < Weights::WIN);
        assert_eq!(Weights::LOSS, -Weights::WIN);
    }
}
