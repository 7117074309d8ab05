//! The twelve sidereal signs.
//!
//! Signs are fixed 30° arcs from 0° Mesha. Input longitudes are assumed
//! sidereal already.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Width of one sign in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// A sidereal sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Signs in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western sign name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Short label used on report lines: Ari, Tau, Gem, ...
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Mesha => "Ari",
            Self::Vrishabha => "Tau",
            Self::Mithuna => "Gem",
            Self::Karka => "Can",
            Self::Simha => "Leo",
            Self::Kanya => "Vir",
            Self::Tula => "Lib",
            Self::Vrischika => "Sco",
            Self::Dhanu => "Sag",
            Self::Makara => "Cap",
            Self::Kumbha => "Aqu",
            Self::Meena => "Pis",
        }
    }

    /// Position in [`ALL_RASHIS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sidereal longitude where the sign begins.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * RASHI_SPAN
    }

    /// Exclusive end of the arc.
    pub fn end_deg(self) -> f64 {
        self.start_deg() + RASHI_SPAN
    }

    /// Sign lord. The nodes own no sign.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// All twelve signs.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// An arc split into whole degrees, whole minutes and fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Dms {
    /// Split an arc. The sign of negative input is dropped.
    pub fn from_degrees(deg: f64) -> Self {
        let abs = deg.abs();
        let degrees = abs.trunc();
        let arc_min = (abs - degrees) * 60.0;
        let minutes = arc_min.trunc();
        Self {
            degrees: degrees as u16,
            minutes: minutes as u8,
            seconds: (arc_min - minutes) * 60.0,
        }
    }

    /// Back to decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0
    }
}

/// Sign occupied by a longitude and the offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Offset from the sign start, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Sign of any real longitude; arcs are half-open, so 30° is Vrishabha.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi = ALL_RASHIS[((lon / RASHI_SPAN) as usize).min(11)];
    let degrees_in_rashi = lon - rashi.start_deg();
    RashiInfo {
        rashi,
        degrees_in_rashi,
        dms: Dms::from_degrees(degrees_in_rashi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_position() {
        assert!(ALL_RASHIS.iter().enumerate().all(|(i, r)| r.index() as usize == i));
    }

    #[test]
    fn arcs_tile_the_circle() {
        assert_eq!(Rashi::Mesha.start_deg(), 0.0);
        assert_eq!(Rashi::Meena.end_deg(), 360.0);
        for pair in ALL_RASHIS.windows(2) {
            assert_eq!(pair[0].end_deg(), pair[1].start_deg());
        }
    }

    #[test]
    fn abbreviations_are_three_letters() {
        assert!(ALL_RASHIS.iter().all(|r| r.abbreviation().len() == 3));
        assert_eq!(Rashi::Karka.abbreviation(), "Can");
    }

    #[test]
    fn each_lord_owns_at_most_two_signs() {
        for g in crate::graha::ALL_GRAHAS {
            let owned = ALL_RASHIS.iter().filter(|r| r.lord() == g).count();
            match g {
                Graha::Surya | Graha::Chandra => assert_eq!(owned, 1),
                Graha::Rahu | Graha::Ketu => assert_eq!(owned, 0),
                _ => assert_eq!(owned, 2),
            }
        }
    }

    #[test]
    fn dms_split() {
        // 7°12'36"
        let d = Dms::from_degrees(7.21);
        assert_eq!((d.degrees, d.minutes), (7, 12));
        assert!((d.seconds - 36.0).abs() < 1e-6);
        assert!((d.to_degrees() - 7.21).abs() < 1e-12);
        assert_eq!(Dms::from_degrees(-7.21).degrees, 7);
    }

    #[test]
    fn sign_offsets() {
        let info = rashi_from_longitude(212.25);
        assert_eq!(info.rashi, Rashi::Vrischika);
        assert!((info.degrees_in_rashi - 2.25).abs() < 1e-10);
        assert_eq!(info.dms.minutes, 15);

        let wrapped = rashi_from_longitude(-45.0);
        assert_eq!(wrapped.rashi, Rashi::Kumbha);
        assert!((wrapped.degrees_in_rashi - 15.0).abs() < 1e-10);
    }

    #[test]
    fn sign_starts_belong_to_the_new_sign() {
        for r in ALL_RASHIS {
            assert_eq!(rashi_from_longitude(r.start_deg()).rashi, r);
        }
    }
}
