//! A set of digits 1-9, stored as a 9-bit mask.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign},
};

use crate::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// Bits 0-8 of the backing `u16` represent digits 1-9 respectively. The
/// solver uses this both for per-cell exclusion sets and for their
/// complements (the allowed-candidate sets), so the full set algebra is
/// available: union, intersection, difference, and complement within the
/// 1-9 universe.
///
/// # Examples
///
/// ```
/// use tierdoku_core::{Digit, DigitSet};
///
/// let mut excluded = DigitSet::EMPTY;
/// excluded.insert(Digit::D4);
/// excluded.insert(Digit::D9);
///
/// let allowed = !excluded;
/// assert_eq!(allowed.len(), 7);
/// assert!(!allowed.contains(Digit::D4));
///
/// // Iteration is in ascending digit order.
/// let digits: Vec<_> = DigitSet::from_iter([Digit::D5, Digit::D2]).into_iter().collect();
/// assert_eq!(digits, vec![Digit::D2, Digit::D5]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[inline]
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit as u8 - 1),
        }
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit as u8 - 1)
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    #[inline]
    pub fn insert(&mut self, digit: Digit) -> bool {
        let old = self.bits;
        self.bits |= Self::bit(digit);
        self.bits != old
    }

    /// Removes a digit. Returns `true` if the digit was present.
    #[inline]
    pub fn remove(&mut self, digit: Digit) -> bool {
        let old = self.bits;
        self.bits &= !Self::bit(digit);
        self.bits != old
    }

    /// Returns `true` if the set contains the digit.
    #[inline]
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole digit if the set has exactly one member.
    #[inline]
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(Digit::from_value(self.bits.trailing_zeros() as u8 + 1))
        } else {
            None
        }
    }

    /// Returns the union of two sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` but not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the complement within the 1-9 universe.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self {
            bits: !self.bits & MASK,
        }
    }

    /// Returns `true` if `other` contains every digit of `self`.
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the digits in ascending order.
    #[inline]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Sub for DigitSet {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for DigitSet {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl Not for DigitSet {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    #[inline]
    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        Some(Digit::from_value(index as u8 + 1))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    #[inline]
    fn into_iter(self) -> Iter {
        self.iter()
    }
}
