//! Vaar (weekday) and its lord.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graha::Graha;

/// The 7 weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars in order (0 = Ravivaar/Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index (Sunday = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Civil weekday containing the given Julian Date.
    ///
    /// JD days begin at noon, so the civil day number is `floor(jd + 0.5)`;
    /// the extra 1.0 aligns index 0 with Sunday.
    pub fn from_jd(jd: f64) -> Self {
        let day = (jd + 1.5).floor() as i64;
        ALL_VAARS[day.rem_euclid(7) as usize]
    }
}

impl Display for Vaar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Unrecognized weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weekday: {0}")]
pub struct ParseVaarError(pub String);

impl FromStr for Vaar {
    type Err = ParseVaarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_VAARS
            .iter()
            .copied()
            .find(|v| {
                v.name().eq_ignore_ascii_case(needle)
                    || v.english_name().eq_ignore_ascii_case(needle)
                    || v.english_name()[..3].eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseVaarError(s.to_string()))
    }
}

/// Weekday lord: maps Vaar to Graha.
pub const fn vaar_lord(vaar: Vaar) -> Graha {
    match vaar {
        Vaar::Ravivaar => Graha::Surya,
        Vaar::Somvaar => Graha::Chandra,
        Vaar::Mangalvaar => Graha::Mangal,
        Vaar::Budhvaar => Graha::Buddh,
        Vaar::Guruvaar => Graha::Guru,
        Vaar::Shukravaar => Graha::Shukra,
        Vaar::Shanivaar => Graha::Shani,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vaar_lord_ravivaar_is_surya() {
        assert_eq!(vaar_lord(Vaar::Ravivaar), Graha::Surya);
    }

    #[test]
    fn vaar_lords_are_distinct_sapta_grahas() {
        let mut lords: Vec<Graha> = ALL_VAARS.iter().map(|&v| vaar_lord(v)).collect();
        lords.sort();
        lords.dedup();
        assert_eq!(lords.len(), 7);
        assert!(!lords.contains(&Graha::Rahu));
        assert!(!lords.contains(&Graha::Ketu));
    }

    #[test]
    fn j2000_noon_is_saturday() {
        // 2000-01-01 12:00 TT
        assert_eq!(Vaar::from_jd(2_451_545.0), Vaar::Shanivaar);
    }

    #[test]
    fn day_changes_at_midnight_not_noon() {
        // 2000-01-01 23:59 and 2000-01-02 00:01
        assert_eq!(Vaar::from_jd(2_451_545.499), Vaar::Shanivaar);
        assert_eq!(Vaar::from_jd(2_451_545.501), Vaar::Ravivaar);
    }

    #[test]
    fn parse_names() {
        assert_eq!("thursday".parse::<Vaar>(), Ok(Vaar::Guruvaar));
        assert_eq!("Somvaar".parse::<Vaar>(), Ok(Vaar::Somvaar));
        assert_eq!("fri".parse::<Vaar>(), Ok(Vaar::Shukravaar));
        assert!("someday".parse::<Vaar>().is_err());
    }
}
