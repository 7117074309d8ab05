//! The fixed KP division tables: 243 subs and 249 horary numbers.
//!
//! Both tables are built once on first access and are read-only afterwards.
//! Construction asserts the span invariants; a failure there is a bug in the
//! constant data, not a runtime condition.

use std::sync::LazyLock;

use kp_vedic_base::{
    ALL_NAKSHATRAS_27, Graha, NAKSHATRA_SPAN_27, Nakshatra, Rashi, nakshatra_from_longitude,
    normalize_360, rashi_from_longitude,
};
use serde::Serialize;

use crate::subdivision::{Segment, subdivide};

/// Number of subs: 27 nakshatras × 9 lords.
pub const SUB_COUNT: usize = 243;

/// Number of horary numbers.
pub const KP_NUMBER_COUNT: usize = 249;

/// Width of one horary number segment.
pub const KP_NUMBER_SPAN: f64 = 360.0 / KP_NUMBER_COUNT as f64;

const TOLERANCE: f64 = 1e-6;

/// One of the 243 proportional subs of the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpSub {
    /// 1-based index across the whole zodiac (1..=243).
    pub index: u16,
    pub nakshatra: Nakshatra,
    /// Lord of the nakshatra (star lord).
    pub star_lord: Graha,
    /// Lord of this sub.
    pub sub_lord: Graha,
    /// 1-based position within the nakshatra (1..=9).
    pub order: u8,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl KpSub {
    /// Width in degrees.
    pub fn span(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Whether `deg` lies in `[start_deg, end_deg)`.
    pub fn contains(&self, deg: f64) -> bool {
        deg >= self.start_deg && deg < self.end_deg
    }
}

/// One of the 249 equal horary segments, resolved at its midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpNumber {
    /// 1..=249.
    pub number: u16,
    pub start_deg: f64,
    pub mid_deg: f64,
    pub end_deg: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub star_lord: Graha,
    pub sub_lord: Graha,
}

struct KpTables {
    subs: Vec<KpSub>,
    numbers: Vec<KpNumber>,
}

static TABLES: LazyLock<KpTables> = LazyLock::new(|| {
    let subs = build_sub_table();
    let numbers = build_number_table(&subs);
    tracing::debug!(
        subs = subs.len(),
        numbers = numbers.len(),
        "built KP division tables"
    );
    KpTables { subs, numbers }
});

fn build_sub_table() -> Vec<KpSub> {
    let mut subs = Vec::with_capacity(SUB_COUNT);
    for nakshatra in ALL_NAKSHATRAS_27 {
        let star_lord = nakshatra.lord();
        let parts = subdivide(nakshatra.start_deg(), NAKSHATRA_SPAN_27, star_lord);
        for Segment {
            lord,
            order,
            start_deg,
            end_deg,
        } in parts
        {
            subs.push(KpSub {
                index: subs.len() as u16 + 1,
                nakshatra,
                star_lord,
                sub_lord: lord,
                order,
                start_deg,
                end_deg,
            });
        }
    }
    assert_sub_invariants(&subs);
    subs
}

fn assert_sub_invariants(subs: &[KpSub]) {
    assert_eq!(subs.len(), SUB_COUNT, "sub table must have 243 entries");
    for (i, chunk) in subs.chunks(9).enumerate() {
        let nakshatra = ALL_NAKSHATRAS_27[i];
        let total: f64 = chunk.iter().map(KpSub::span).sum();
        assert!(
            (total - NAKSHATRA_SPAN_27).abs() < TOLERANCE,
            "subs of {} span {total}, expected {NAKSHATRA_SPAN_27}",
            nakshatra.name()
        );
        assert_eq!(
            chunk[0].sub_lord,
            nakshatra.lord(),
            "first sub of {} must be ruled by the nakshatra lord",
            nakshatra.name()
        );
    }
    let total: f64 = subs.iter().map(KpSub::span).sum();
    assert!(
        (total - 360.0).abs() < TOLERANCE,
        "subs span {total}, expected 360"
    );
    for w in subs.windows(2) {
        assert!(
            (w[0].end_deg - w[1].start_deg).abs() < TOLERANCE,
            "gap between sub {} and {}",
            w[0].index,
            w[1].index
        );
    }
}

/// Index into `subs` of the sub containing `lon` (already normalized).
///
/// The search is confined to the nakshatra found by the fixed 13°20'
/// boundaries so the sub always agrees with the star lord.
fn sub_index_in(subs: &[KpSub], lon: f64) -> usize {
    let nak = nakshatra_from_longitude(lon).nakshatra_index as usize;
    let base = nak * 9;
    let slice = &subs[base..base + 9];
    let offset = slice.partition_point(|s| s.end_deg <= lon).min(8);
    base + offset
}

fn build_number_table(subs: &[KpSub]) -> Vec<KpNumber> {
    let mut numbers = Vec::with_capacity(KP_NUMBER_COUNT);
    for i in 0..KP_NUMBER_COUNT {
        let start_deg = i as f64 * KP_NUMBER_SPAN;
        let end_deg = if i + 1 == KP_NUMBER_COUNT {
            360.0
        } else {
            (i + 1) as f64 * KP_NUMBER_SPAN
        };
        let mid_deg = start_deg + KP_NUMBER_SPAN / 2.0;
        let rashi = rashi_from_longitude(mid_deg);
        let nak = nakshatra_from_longitude(mid_deg);
        let sub = &subs[sub_index_in(subs, mid_deg)];
        numbers.push(KpNumber {
            number: i as u16 + 1,
            start_deg,
            mid_deg,
            end_deg,
            rashi: rashi.rashi,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            star_lord: nak.nakshatra.lord(),
            sub_lord: sub.sub_lord,
        });
    }

    assert!(numbers[0].start_deg == 0.0 && numbers[KP_NUMBER_COUNT - 1].end_deg == 360.0);
    for w in numbers.windows(2) {
        assert!(
            w[0].start_deg < w[1].start_deg && (w[0].end_deg - w[1].start_deg).abs() < TOLERANCE,
            "horary numbers {} and {} are not contiguous",
            w[0].number,
            w[1].number
        );
    }
    numbers
}

/// All 243 subs in zodiacal order.
pub fn subs() -> &'static [KpSub] {
    &TABLES.subs
}

/// All 249 horary numbers in order.
pub fn kp_numbers() -> &'static [KpNumber] {
    &TABLES.numbers
}

/// Sub containing a longitude (any real value, normalized first).
pub fn sub_at_degree(lon: f64) -> &'static KpSub {
    let subs = subs();
    &subs[sub_index_in(subs, normalize_360(lon))]
}

/// The 9 subs of a nakshatra.
pub fn subs_for_nakshatra(nakshatra: Nakshatra) -> &'static [KpSub] {
    let base = nakshatra.index() as usize * 9;
    &subs()[base..base + 9]
}

/// Every sub overlapping a rashi, including subs straddling its edges.
pub fn subs_for_rashi(rashi: Rashi) -> Vec<&'static KpSub> {
    let start = rashi.start_deg();
    let end = rashi.end_deg();
    subs()
        .iter()
        .filter(|s| s.start_deg < end && s.end_deg > start)
        .collect()
}

/// First sub starting strictly after `deg`, wrapping past 360 to the first sub.
pub fn next_sub_change(deg: f64) -> &'static KpSub {
    let deg = normalize_360(deg);
    let subs = subs();
    subs.iter().find(|s| s.start_deg > deg).unwrap_or(&subs[0])
}

/// Start degrees of subs ruled by `target` inside the forward window
/// `[current, current + search_within]`, wrapped to [0, 360).
pub fn next_sub_lord_occurrences(current: f64, target: Graha, search_within: f64) -> Vec<f64> {
    let current = normalize_360(current);
    let end = current + search_within;
    let mut hits: Vec<f64> = subs()
        .iter()
        .filter(|s| s.sub_lord == target)
        .map(|s| s.start_deg)
        .filter(|&deg| {
            let adjusted = if deg < current { deg + 360.0 } else { deg };
            adjusted <= end
        })
        .collect();
    // order by distance ahead of `current`
    hits.sort_by(|a, b| {
        let da = normalize_360(a - current);
        let db = normalize_360(b - current);
        da.total_cmp(&db)
    });
    hits
}

/// Horary number by value, `None` outside 1..=249.
pub fn kp_number(number: u16) -> Option<&'static KpNumber> {
    if !(1..=KP_NUMBER_COUNT as u16).contains(&number) {
        return None;
    }
    kp_numbers().get(number as usize - 1)
}

/// Horary number whose segment contains a longitude.
pub fn kp_number_from_longitude(lon: f64) -> &'static KpNumber {
    let lon = normalize_360(lon);
    let idx = ((lon / KP_NUMBER_SPAN).floor() as usize).min(KP_NUMBER_COUNT - 1);
    &kp_numbers()[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(subs().len(), SUB_COUNT);
        assert_eq!(kp_numbers().len(), KP_NUMBER_COUNT);
    }

    #[test]
    fn first_sub_is_ketu_in_ashwini() {
        let s = &subs()[0];
        assert_eq!(s.index, 1);
        assert_eq!(s.nakshatra, Nakshatra::Ashwini);
        assert_eq!(s.sub_lord, Graha::Ketu);
        assert!((s.end_deg - 7.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn sub_at_degree_wraps() {
        assert_eq!(sub_at_degree(361.0).index, sub_at_degree(1.0).index);
        assert_eq!(sub_at_degree(-0.5).index, SUB_COUNT as u16);
    }

    #[test]
    fn sub_at_exact_boundary_takes_next() {
        let second = &subs()[1];
        assert_eq!(sub_at_degree(second.start_deg).index, 2);
    }

    #[test]
    fn nakshatra_subs_start_at_lord() {
        let rohini = subs_for_nakshatra(Nakshatra::Rohini);
        assert_eq!(rohini.len(), 9);
        assert_eq!(rohini[0].sub_lord, Graha::Chandra);
        assert!(rohini.iter().all(|s| s.star_lord == Graha::Chandra));
    }

    #[test]
    fn rashi_subs_include_straddlers() {
        // Krittika spans 26°40' Mesha to 10° Vrishabha
        let mesha = subs_for_rashi(Rashi::Mesha);
        let last = mesha.last().unwrap();
        assert_eq!(last.nakshatra, Nakshatra::Krittika);
        assert!(last.end_deg > 30.0);
        assert!(mesha.iter().all(|s| s.start_deg < 30.0));
    }

    #[test]
    fn next_change_wraps_at_end() {
        assert_eq!(next_sub_change(359.9).index, 1);
        assert_eq!(next_sub_change(0.0).index, 2);
    }

    #[test]
    fn occurrences_within_window() {
        // Ashwini starts with Ketu at 0°, Magha at 120°, Mula at 240°
        let hits = next_sub_lord_occurrences(350.0, Graha::Ketu, 30.0);
        assert_eq!(hits.first().copied(), Some(0.0));
        assert!(hits.iter().all(|&d| d < 20.0 || d >= 350.0));
        let all = next_sub_lord_occurrences(0.0, Graha::Ketu, 360.0);
        assert_eq!(all.len(), 27);
    }

    #[test]
    fn kp_number_bounds() {
        assert!(kp_number(0).is_none());
        assert!(kp_number(250).is_none());
        assert_eq!(kp_number(1).unwrap().number, 1);
        assert_eq!(kp_number(249).unwrap().end_deg, 360.0);
    }

    #[test]
    fn kp_number_from_longitude_matches_segment() {
        let n = kp_number_from_longitude(100.0);
        assert!(n.start_deg <= 100.0 && 100.0 < n.end_deg);
        assert_eq!(kp_number_from_longitude(359.999).number, 249);
    }
}
