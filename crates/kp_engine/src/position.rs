//! Longitude → full KP position (sign, star, sub, sub-sub).

use std::fmt::{Display, Formatter};

use kp_vedic_base::{
    Dms, Graha, Nakshatra, Rashi, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use serde::Serialize;

use crate::sub_table::sub_at_degree;
use crate::subdivision::locate;

/// Resolved KP position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpPosition {
    /// Normalized longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    pub rashi_lord: Graha,
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// 1-4.
    pub pada: u8,
    pub star_lord: Graha,
    pub sub_lord: Graha,
    pub sub_sub_lord: Graha,
    /// 1-based index of the containing sub (1..=243).
    pub sub_index: u16,
}

impl KpPosition {
    /// Resolve any real longitude. Total and periodic in 360°.
    pub fn resolve(longitude: f64) -> Self {
        let lon = normalize_360(longitude);
        let rashi = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        let sub = sub_at_degree(lon);
        // Same division again inside the sub, starting from the sub lord.
        let sub_sub = locate(sub.start_deg, sub.span(), sub.sub_lord, lon);

        Self {
            longitude: lon,
            rashi: rashi.rashi,
            rashi_lord: rashi.rashi.lord(),
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            star_lord: nak.nakshatra.lord(),
            sub_lord: sub.sub_lord,
            sub_sub_lord: sub_sub.lord,
            sub_index: sub.index,
        }
    }

    /// Distinct lords from coarse to fine: sign, star, sub, sub-sub.
    pub fn significator_chain(&self) -> Vec<Graha> {
        let mut chain = Vec::with_capacity(4);
        for g in [self.rashi_lord, self.star_lord, self.sub_lord, self.sub_sub_lord] {
            if !chain.contains(&g) {
                chain.push(g);
            }
        }
        chain
    }
}

impl Display for KpPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dms = Dms::from_degrees(self.degrees_in_rashi);
        write!(
            f,
            "{} {:02}°{:02}'{:02}\" | {}-{} | Star: {} | Sub: {} | SS: {}",
            self.rashi.abbreviation(),
            dms.degrees,
            dms.minutes,
            dms.seconds.floor() as u8,
            self.nakshatra.name(),
            self.pada,
            self.star_lord,
            self.sub_lord,
            self.sub_sub_lord
        )
    }
}

/// Sub lord of a longitude.
pub fn sub_lord(longitude: f64) -> Graha {
    sub_at_degree(longitude).sub_lord
}

/// Star (nakshatra) lord of a longitude.
pub fn star_lord(longitude: f64) -> Graha {
    nakshatra_from_longitude(longitude).nakshatra.lord()
}
