//! The Vimshottari rulership cycle: 9 grahas with fixed year weights
//! summing to 120.
//!
//! KP uses the cycle purely as a set of proportions. Any span (a nakshatra,
//! a sub, a sub-sub) is divided into 9 parts whose widths are
//! `years / 120 × span`, starting from a chosen lord and wrapping around.

use crate::graha::Graha;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in whole years, in sequence order.
pub const VIMSHOTTARI_YEARS: [u32; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

/// Sum of all periods.
pub const VIMSHOTTARI_TOTAL_YEARS: u32 = 120;

/// Dasha years of a graha.
pub const fn dasha_years(graha: Graha) -> u32 {
    VIMSHOTTARI_YEARS[cycle_position(graha)]
}

/// Position of a graha in the Vimshottari sequence (Ketu = 0).
pub const fn cycle_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// The cycle rotated so that it starts at `start`.
pub fn sequence_from(start: Graha) -> [Graha; 9] {
    let offset = cycle_position(start);
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(offset + i) % 9])
}

/// Width of `graha`'s share of `parent_span`: `years / 120 × parent_span`.
pub fn proportional_span(graha: Graha, parent_span: f64) -> f64 {
    dasha_years(graha) as f64 / VIMSHOTTARI_TOTAL_YEARS as f64 * parent_span
}
