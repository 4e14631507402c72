//! Board representation for Othello

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, ParseBoardError};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Compass directions as (dx, dy), scanned in this order everywhere a
/// per-direction walk is needed.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // S
    (1, 1),   // SE
    (1, 0),   // E
    (1, -1),  // NE
    (0, -1),  // N
    (-1, -1), // NW
];

/// The two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

/// Contents of a single cell, used when loading or dumping whole boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl Cell {
    /// Side owning this cell, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }
}

/// Coordinate on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Build a coordinate from signed components, `None` when off the board
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize + BOARD_SIZE * self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// True when both components are inside the board. Public fields can be
    /// set to anything, so board queries check this before touching bits.
    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// Neighbor one step away in direction (dx, dy), if on the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coord> {
        Coord::try_new(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// The four corners, in the order the evaluator visits them
    pub const CORNERS: [Coord; 4] = [
        Coord { x: 0, y: 0 },
        Coord { x: 0, y: 7 },
        Coord { x: 7, y: 0 },
        Coord { x: 7, y: 7 },
    ];
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A move: place a disk, or pass when no placement is legal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Coord),
    Pass,
}

impl Move {
    /// Shorthand for `Move::Place(Coord::new(x, y))`
    #[inline]
    pub fn at(x: u8, y: u8) -> Self {
        Move::Place(Coord::new(x, y))
    }

    #[inline]
    pub fn coord(self) -> Option<Coord> {
        match self {
            Move::Place(c) => Some(c),
            Move::Pass => None,
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Coord> for Move {
    fn from(c: Coord) -> Self {
        Move::Place(c)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(c) => write!(f, "{}", c),
            Move::Pass => write!(f, "pass"),
        }
    }
}
