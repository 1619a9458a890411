use serde::{Deserialize, Serialize};

/// A set of candidate digits 1-9, backed by a u16 bitmask.
///
/// Bit `n - 1` is set when digit `n` is a member. The raw mask is exposed
/// via [`BitSet::as_raw`] so callers can persist candidate state compactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitSet(u16);

/// Mask with all nine digit bits set.
const ALL_DIGITS: u16 = 0x1FF;

impl BitSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing every digit 1-9.
    pub const fn full() -> Self {
        Self(ALL_DIGITS)
    }

    /// A set containing a single digit.
    pub fn single(value: u8) -> Self {
        debug_assert!((1..=9).contains(&value));
        Self(1 << (value - 1))
    }

    /// Reconstruct from a raw mask. Bits above digit 9 are discarded.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw & ALL_DIGITS)
    }

    /// The raw u16 mask.
    pub const fn as_raw(&self) -> u16 {
        self.0
    }

    pub fn contains(&self, value: u8) -> bool {
        (1..=9).contains(&value) && self.0 & (1 << (value - 1)) != 0
    }

    pub fn insert(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0 |= 1 << (value - 1);
    }

    pub fn remove(&mut self, value: u8) {
        if (1..=9).contains(&value) {
            self.0 &= !(1 << (value - 1));
        }
    }

    /// Number of digits in the set.
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// If exactly one digit remains, return it.
    pub fn single_value(&self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterate the digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let mask = self.0;
        (1..=9u8).filter(move |v| mask & (1 << (v - 1)) != 0)
    }
}

impl std::ops::BitAnd for BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: BitSet) -> BitSet {
        BitSet(self.0 & rhs.0)
    }
}

impl FromIterator<u8> for BitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = BitSet::empty();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert!(BitSet::empty().is_empty());
        assert_eq!(BitSet::empty().count(), 0);
        assert_eq!(BitSet::full().count(), 9);
        for v in 1..=9 {
            assert!(BitSet::full().contains(v));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut set = BitSet::empty();
        set.insert(5);
        set.insert(1);
        assert!(set.contains(5));
        assert!(set.contains(1));
        assert!(!set.contains(2));
        set.remove(5);
        assert!(!set.contains(5));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(BitSet::single(7).single_value(), Some(7));
        assert_eq!(BitSet::empty().single_value(), None);
        assert_eq!(BitSet::full().single_value(), None);
    }

    #[test]
    fn test_iter_ascending() {
        let set: BitSet = [9, 2, 5].into_iter().collect();
        let digits: Vec<u8> = set.iter().collect();
        assert_eq!(digits, vec![2, 5, 9]);
    }

    #[test]
    fn test_intersection() {
        let a: BitSet = [1, 2, 3, 4].into_iter().collect();
        let b: BitSet = [3, 4, 5, 6].into_iter().collect();
        let both: Vec<u8> = (a & b).iter().collect();
        assert_eq!(both, vec![3, 4]);
    }

    #[test]
    fn test_raw_roundtrip() {
        let set: BitSet = [1, 9].into_iter().collect();
        assert_eq!(BitSet::from_raw(set.as_raw()), set);
        // Stray high bits are masked off
        assert_eq!(BitSet::from_raw(0xFFFF), BitSet::full());
    }

    #[test]
    fn test_serde_as_raw_u16() {
        let set: BitSet = [2, 4, 8].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, set.as_raw().to_string());
        let back: BitSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
