//! Single-word bitboard over the 64 cells

use super::{Coord, TOTAL_CELLS};

/// One bit per cell, indexed by `Coord::to_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Coord) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Coord) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Set or clear depending on `value`
    #[inline]
    pub fn assign(&mut self, pos: Coord, value: bool) {
        if value {
            self.set(pos);
        } else {
            self.clear(pos);
        }
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Coord) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    #[inline]
    pub fn without(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & !other.bits)
    }

    /// Iterate over set bit positions, lowest index first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Coord::from_index(idx))
    }
}
