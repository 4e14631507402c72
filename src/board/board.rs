//! Board state and move rules

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Cell, Coord, Move, Side, BOARD_SIZE, DIRECTIONS, TOTAL_CELLS};

/// Error returned when parsing a board from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// A character that is neither a disk, an empty marker nor whitespace
    #[error("invalid board character {ch:?} at cell {index}")]
    InvalidChar { ch: char, index: usize },
    /// Not exactly 64 significant characters
    #[error("expected 64 cells, found {0}")]
    WrongLength(usize),
}

/// Othello board stored as two parallel bit flags.
///
/// `taken` marks occupied cells and `black` gives the color of each
/// occupied cell. `black` is always a subset of `taken`, so a cell is
/// either empty or owned by exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    taken: Bitboard,
    black: Bitboard,
}

impl Board {
    /// Standard starting position: White on (3,3) and (4,4), Black on
    /// (4,3) and (3,4).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Side::White, Coord::new(3, 3));
        board.set(Side::Black, Coord::new(4, 3));
        board.set(Side::Black, Coord::new(3, 4));
        board.set(Side::White, Coord::new(4, 4));
        board
    }

    /// Board with no disks at all
    pub const fn empty() -> Self {
        Self {
            taken: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Check if a cell holds a disk. Off-board coordinates are never occupied.
    #[inline]
    pub fn is_occupied(&self, pos: Coord) -> bool {
        pos.is_on_board() && self.taken.get(pos)
    }

    /// Check if a cell holds a disk of `side`
    #[inline]
    pub fn owned_by(&self, side: Side, pos: Coord) -> bool {
        self.is_occupied(pos) && (self.black.get(pos) == (side == Side::Black))
    }

    /// Get cell contents at position
    #[inline]
    pub fn cell(&self, pos: Coord) -> Cell {
        if !self.is_occupied(pos) {
            Cell::Empty
        } else if self.black.get(pos) {
            Cell::Black
        } else {
            Cell::White
        }
    }

    /// Write a disk without flipping anything
    #[inline]
    fn set(&mut self, side: Side, pos: Coord) {
        self.taken.set(pos);
        self.black.assign(pos, side == Side::Black);
    }

    /// Bitboard of the disks owned by `side`
    #[inline]
    pub fn disks(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.taken.without(self.black),
        }
    }

    /// Bitboard of every occupied cell
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.taken
    }

    /// Disks that placing at `pos` would flip for `side`.
    ///
    /// Every direction is resolved against the current state, so the
    /// result does not depend on the order directions are visited. Empty
    /// when the move is illegal.
    pub fn flips(&self, pos: Coord, side: Side) -> Bitboard {
        let mut flips = Bitboard::new();
        if !pos.is_on_board() || self.is_occupied(pos) {
            return flips;
        }

        let other = side.opponent();
        for &(dx, dy) in &DIRECTIONS {
            let mut run = Bitboard::new();
            let mut cur = pos.offset(dx, dy);

            while let Some(c) = cur {
                if !self.owned_by(other, c) {
                    break;
                }
                run.set(c);
                cur = c.offset(dx, dy);
            }

            // Bracketed only if the run is non-empty and capped by our own disk
            if let Some(end) = cur {
                if !run.is_empty() && self.owned_by(side, end) {
                    flips = flips.union(run);
                }
            }
        }

        flips
    }

    /// Check whether `mov` is legal for `side`.
    ///
    /// Passing is only legal when no placement is.
    pub fn is_legal_move(&self, mov: Move, side: Side) -> bool {
        match mov {
            Move::Pass => !self.has_any_move(side),
            Move::Place(pos) => !self.flips(pos, side).is_empty(),
        }
    }

    /// Play `mov` for `side`. Illegal moves leave the board untouched.
    ///
    /// Returns whether the move was legal. A legal pass changes nothing.
    pub fn apply_move(&mut self, mov: Move, side: Side) -> bool {
        let pos = match mov {
            Move::Pass => return self.is_legal_move(mov, side),
            Move::Place(pos) => pos,
        };

        let flips = self.flips(pos, side);
        if flips.is_empty() {
            return false;
        }

        // Flipped cells are already taken; only their color changes
        match side {
            Side::Black => self.black = self.black.union(flips),
            Side::White => self.black = self.black.without(flips),
        }
        self.set(side, pos);
        true
    }

    /// All legal placements for `side`, x outer and y inner.
    ///
    /// The order is relied on by the search for tie-breaking.
    pub fn legal_moves(&self, side: Side) -> Vec<Coord> {
        let mut moves = Vec::with_capacity(16);
        for x in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                let pos = Coord::new(x, y);
                if !self.flips(pos, side).is_empty() {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// Number of legal placements for `side`
    pub fn num_legal_moves(&self, side: Side) -> usize {
        (0..TOTAL_CELLS)
            .map(Coord::from_index)
            .filter(|&pos| !self.flips(pos, side).is_empty())
            .count()
    }

    /// Check if `side` has at least one legal placement
    pub fn has_any_move(&self, side: Side) -> bool {
        (0..TOTAL_CELLS)
            .map(Coord::from_index)
            .any(|pos| !self.flips(pos, side).is_empty())
    }

    /// The game is over when neither side can place a disk
    pub fn is_terminal(&self) -> bool {
        !(self.has_any_move(Side::Black) || self.has_any_move(Side::White))
    }

    /// Current count of the given side's disks
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.count_black(),
            Side::White => self.count_white(),
        }
    }

    #[inline]
    pub fn count_black(&self) -> u32 {
        self.black.count()
    }

    #[inline]
    pub fn count_white(&self) -> u32 {
        self.taken.count() - self.black.count()
    }

    /// Total disks on board
    #[inline]
    pub fn total_occupied(&self) -> u32 {
        self.taken.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.taken.count()
    }

    /// Side with more disks, `None` on a draw
    pub fn winner(&self) -> Option<Side> {
        let black = self.count_black();
        let white = self.count_white();
        if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        }
    }

    /// Load an arbitrary configuration, bypassing move rules.
    /// `cells` is indexed by `Coord::to_index`.
    pub fn from_cells(cells: &[Cell; TOTAL_CELLS]) -> Self {
        let mut board = Self::empty();
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(side) = cell.side() {
                board.set(side, Coord::from_index(idx));
            }
        }
        board
    }

    /// Dump every cell, indexed by `Coord::to_index`
    pub fn cells(&self) -> [Cell; TOTAL_CELLS] {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = self.cell(Coord::from_index(idx));
        }
        cells
    }

    /// Compact text form accepted by `FromStr`: one line per row,
    /// `b` for Black, `w` for White, `.` for empty.
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(TOTAL_CELLS + BOARD_SIZE);
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                out.push(match self.cell(Coord::new(x, y)) {
                    Cell::Black => 'b',
                    Cell::White => 'w',
                    Cell::Empty => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse 64 cells in row order (y outer, x inner). Whitespace is
    /// ignored; `b`/`X` is Black, `w`/`O` is White, `.`/`-`/`_` is empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        let mut index = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'b' | 'B' | 'X' | 'x' => Cell::Black,
                'w' | 'W' | 'O' | 'o' => Cell::White,
                '.' | '-' | '_' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidChar { ch, index }),
            };
            if index < TOTAL_CELLS {
                cells[index] = cell;
            }
            index += 1;
        }

        if index != TOTAL_CELLS {
            return Err(ParseBoardError::WrongLength(index));
        }
        Ok(Board::from_cells(&cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;

        for y in 0..BOARD_SIZE as u8 {
            write!(f, "{}|", y)?;
            for x in 0..BOARD_SIZE as u8 {
                match self.cell(Coord::new(x, y)) {
                    Cell::Black => write!(f, "X|")?,
                    Cell::White => write!(f, "O|")?,
                    Cell::Empty => write!(f, " |")?,
                }
            }
            writeln!(f)?;
        }

        write!(
            f,
            "Black(X): {} White(O): {}",
            self.count_black(),
            self.count_white()
        )
    }
}
