//! Compact set of bhava numbers 1-12.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Set of houses stored as a 12-bit mask. Iterates in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<u8>")]
pub struct HouseSet(u16);

impl HouseSet {
    /// No houses.
    pub const EMPTY: HouseSet = HouseSet(0);

    /// Set from a house list; numbers outside 1..=12 are ignored.
    pub const fn of(houses: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < houses.len() {
            let h = houses[i];
            if h >= 1 && h <= 12 {
                bits |= 1 << (h - 1);
            }
            i += 1;
        }
        HouseSet(bits)
    }

    /// Add a house; values outside 1-12 are ignored.
    pub fn insert(&mut self, house: u8) {
        if (1..=12).contains(&house) {
            self.0 |= 1 << (house - 1);
        }
    }

    /// Whether `house` is in the set.
    pub const fn contains(self, house: u8) -> bool {
        house >= 1 && house <= 12 && self.0 & (1 << (house - 1)) != 0
    }

    /// Houses in either set.
    pub const fn union(self, other: HouseSet) -> HouseSet {
        HouseSet(self.0 | other.0)
    }

    /// Houses in both sets.
    pub const fn intersection(self, other: HouseSet) -> HouseSet {
        HouseSet(self.0 & other.0)
    }

    /// Houses in `self` that are not in `other`.
    pub const fn difference(self, other: HouseSet) -> HouseSet {
        HouseSet(self.0 & !other.0)
    }

    /// True when no house is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of houses in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Lowest house in the set.
    pub fn first(self) -> Option<u8> {
        self.iter().next()
    }

    /// Houses in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=12u8).filter(move |&h| self.contains(h))
    }

    /// Houses in ascending order, collected.
    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl FromIterator<u8> for HouseSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = HouseSet::EMPTY;
        for h in iter {
            set.insert(h);
        }
        set
    }
}

impl From<Vec<u8>> for HouseSet {
    fn from(houses: Vec<u8>) -> Self {
        houses.into_iter().collect()
    }
}

impl From<HouseSet> for Vec<u8> {
    fn from(set: HouseSet) -> Self {
        set.to_vec()
    }
}

impl Debug for HouseSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma-separated ascending list, or `none` when empty.
impl Display for HouseSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, h) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{h}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_ignores_out_of_range() {
        let s = HouseSet::of(&[0, 1, 12, 13, 7]);
        assert_eq!(s.to_vec(), vec![1, 7, 12]);
    }

    #[test]
    fn set_algebra() {
        let a = HouseSet::of(&[2, 7, 11]);
        let b = HouseSet::of(&[1, 7, 12]);
        assert_eq!(a.union(b).len(), 5);
        assert_eq!(a.intersection(b).to_vec(), vec![7]);
        assert_eq!(a.difference(b).to_vec(), vec![2, 11]);
        assert_eq!(a.first(), Some(2));
        assert!(HouseSet::EMPTY.first().is_none());
    }

    #[test]
    fn display() {
        assert_eq!(HouseSet::of(&[11, 2]).to_string(), "2, 11");
        assert_eq!(HouseSet::EMPTY.to_string(), "none");
    }
}
