//! The 27 equal nakshatras and their padas.
//!
//! Each star is 13°20' wide with four 3°20' padas. Star lords follow the
//! Vimshottari order from Ketu at Ashwini, three full rounds.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;
use crate::vimshottari::VIMSHOTTARI_SEQUENCE;

/// 13°20'.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// 3°20'.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras of 13°20' each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// Ashwini through Revati.
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Display name; compound stars are spaced ("Purva Phalguni").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0 for Ashwini to 26 for Revati.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sidereal longitude where the star begins.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * NAKSHATRA_SPAN_27
    }

    /// Star lord.
    pub const fn lord(self) -> Graha {
        nakshatra_lord(self)
    }

    /// All 27 stars.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Star lord: Vimshottari position `index % 9`.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra.index() % 9) as usize]
}

/// Star and pada occupied by a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    pub degrees_in_nakshatra: f64,
    pub degrees_in_pada: f64,
}

/// Star and pada of any real longitude. Boundaries belong to the later star.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nakshatra = ALL_NAKSHATRAS_27[((lon / NAKSHATRA_SPAN_27) as usize).min(26)];
    let degrees_in_nakshatra = lon - nakshatra.start_deg();
    let quarter = ((degrees_in_nakshatra / PADA_SPAN) as u8).min(3);
    NakshatraInfo {
        nakshatra,
        nakshatra_index: nakshatra.index(),
        pada: quarter + 1,
        degrees_in_nakshatra,
        degrees_in_pada: degrees_in_nakshatra - f64::from(quarter) * PADA_SPAN,
    }
}
