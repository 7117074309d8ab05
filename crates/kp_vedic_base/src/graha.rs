//! The nine grahas.
//!
//! Signs, nakshatras and every proportional sub-division are ruled by one
//! of these, so each KP lookup ends in a `Graha`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A KP graha; the nodes Rahu and Ketu are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Weekday order, nodes last. This is also the `Ord` order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Name used in reports and explanations.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Position in [`ALL_GRAHAS`]; used to index per-graha arrays.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All nine grahas.
    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Name matching no graha.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown graha: {0}")]
pub struct ParseGrahaError(pub String);

impl FromStr for Graha {
    type Err = ParseGrahaError;

    /// Sanskrit or English name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.name().eq_ignore_ascii_case(needle)
                    || g.english_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseGrahaError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_table_position() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(usize::from(g.index()), i);
        }
    }

    #[test]
    fn sorting_uses_weekday_order() {
        let mut grahas = [Graha::Ketu, Graha::Shani, Graha::Surya, Graha::Guru];
        grahas.sort();
        assert_eq!(grahas, [Graha::Surya, Graha::Guru, Graha::Shani, Graha::Ketu]);
    }

    #[test]
    fn display_is_english() {
        assert_eq!(Graha::Buddh.to_string(), "Mercury");
        assert_eq!(Graha::Rahu.to_string(), "Rahu");
    }

    #[test]
    fn parses_either_name() {
        assert_eq!("shukra".parse::<Graha>(), Ok(Graha::Shukra));
        assert_eq!("Venus".parse::<Graha>(), Ok(Graha::Shukra));
        assert_eq!("  SUN".parse::<Graha>(), Ok(Graha::Surya));
        assert_eq!(
            "Uranus".parse::<Graha>(),
            Err(ParseGrahaError("Uranus".to_string()))
        );
    }
}
