use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::square::Square;

impl Iterator for Bitboard {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_sq()
    }
}

/// One bit per on-board square, bit `i` being `Square::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FULL: Self = Self(u64::MAX);
    pub const EMPTY: Self = Self(0);

    pub fn sq_count(&self) -> u32 {
        self.0.count_ones()
    }
    pub fn next_sq(&mut self) -> Option<Square> {
        if !self.is_empty() {
            let idx = self.0.trailing_zeros() as usize;
            self.0 ^= 1 << idx;
            Some(Square::ALL[idx])
        } else {
            None
        }
    }
    pub const fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY.0
    }
    /// Always false for off-board squares.
    pub fn has_sq(&self, sq: Square) -> bool {
        !(*self & sq.bitboard()).is_empty()
    }
    /// Returns false if the square was already present. Off-board squares are ignored.
    pub fn insert(&mut self, sq: Square) -> bool {
        let before = self.0;
        *self |= sq.bitboard();
        self.0 != before
    }
}

macro_rules! impl_bitwise {
    ($t:ident, $f:ident) => {
        impl $t for Bitboard {
            type Output = Self;
            fn $f(self, rhs: Self) -> Self::Output {
                Self($t::$f(self.0, rhs.0))
            }
        }
    };
}

impl_bitwise! {BitAnd, bitand}
impl_bitwise! {BitOr, bitor}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |acc, sq| acc | sq.bitboard())
    }
}
