//! Zodiac model shared by the KP crates: grahas, signs, nakshatras,
//! weekdays and the Vimshottari cycle.
//!
//! All lookups here are pure and infallible.

pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod vaar;
pub mod vimshottari;

pub use graha::{ALL_GRAHAS, Graha, ParseGrahaError};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_lord,
};
pub use rashi::{ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, ParseVaarError, Vaar, vaar_lord};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, cycle_position, dasha_years,
    proportional_span, sequence_from,
};
