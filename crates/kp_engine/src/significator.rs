//! Four-tier KP significators per graha and the house → grahas table.
//!
//! For a graha B:
//! - tier 1: houses occupied by grahas in B's nakshatras
//! - tier 2: houses owned by those grahas
//! - tier 3: the house B occupies
//! - tier 4: the houses B owns
//!
//! A house is kept only at the highest tier it reaches. The set of grahas
//! "in B's nakshatras" includes B itself when B sits in its own star.

use std::collections::BTreeMap;

use kp_vedic_base::{ALL_GRAHAS, Graha, rashi_from_longitude};
use serde::Serialize;

use crate::chart::Chart;
use crate::house_group::HouseGroup;
use crate::house_set::HouseSet;

/// How strongly a graha signifies a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SignificationStrength {
    None,
    Weak,
    Moderate,
    Strong,
    Strongest,
}

impl SignificationStrength {
    /// Score weight, 1.0 for tier 1 down to 0.0 for none.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Strongest => 1.0,
            Self::Strong => 0.75,
            Self::Moderate => 0.5,
            Self::Weak => 0.25,
            Self::None => 0.0,
        }
    }

    const fn from_tier(tier: u8) -> Self {
        match tier {
            1 => Self::Strongest,
            2 => Self::Strong,
            3 => Self::Moderate,
            4 => Self::Weak,
            _ => Self::None,
        }
    }
}

/// Disjoint tiered significations of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Significators {
    pub graha: Graha,
    /// Whether the graha is placed in the chart. Unplaced grahas signify nothing.
    pub placed: bool,
    pub tier1: HouseSet,
    pub tier2: HouseSet,
    pub tier3: HouseSet,
    pub tier4: HouseSet,
}

impl Significators {
    fn empty(graha: Graha) -> Self {
        Self {
            graha,
            placed: false,
            tier1: HouseSet::EMPTY,
            tier2: HouseSet::EMPTY,
            tier3: HouseSet::EMPTY,
            tier4: HouseSet::EMPTY,
        }
    }

    /// Union of all four tiers.
    pub fn all(&self) -> HouseSet {
        self.tier1.union(self.tier2).union(self.tier3).union(self.tier4)
    }

    /// Tiers 1 and 2.
    pub fn strongest(&self) -> HouseSet {
        self.tier1.union(self.tier2)
    }

    /// Whether any tier holds `house`.
    pub fn signifies(&self, house: u8) -> bool {
        self.all().contains(house)
    }

    /// Tier (1-4) at which the house is signified.
    pub fn tier_of(&self, house: u8) -> Option<u8> {
        [self.tier1, self.tier2, self.tier3, self.tier4]
            .iter()
            .position(|t| t.contains(house))
            .map(|i| i as u8 + 1)
    }

    /// Strongest tier holding `house`.
    pub fn strength(&self, house: u8) -> SignificationStrength {
        self.tier_of(house)
            .map_or(SignificationStrength::None, SignificationStrength::from_tier)
    }
}

/// Significators for every graha of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSignificators {
    owned: [HouseSet; 9],
    star_lords: [Option<Graha>; 9],
    in_star_of: [Vec<Graha>; 9],
    significators: [Significators; 9],
    house_table: [Vec<Graha>; 12],
}

/// Houses owned by each graha, by cusp sign lordship.
fn owned_houses(chart: &Chart) -> [HouseSet; 9] {
    let mut owned = [HouseSet::EMPTY; 9];
    for house in 1..=12u8 {
        let lord = rashi_from_longitude(chart.cusp(house)).rashi.lord();
        owned[lord.index() as usize].insert(house);
    }
    owned
}

impl ChartSignificators {
    /// Significators of every graha and the house table of a chart.
    pub fn compute(chart: &Chart) -> Self {
        let owned = owned_houses(chart);

        let mut star_lords = [None; 9];
        let mut in_star_of: [Vec<Graha>; 9] = std::array::from_fn(|_| Vec::new());
        for p in chart.placements() {
            let lord = p.star_lord();
            star_lords[p.graha.index() as usize] = Some(lord);
            in_star_of[lord.index() as usize].push(p.graha);
        }
        for dwellers in &mut in_star_of {
            dwellers.sort();
        }

        let significators: [Significators; 9] = std::array::from_fn(|i| {
            let graha = ALL_GRAHAS[i];
            let Some(own) = chart.placement(graha) else {
                return Significators::empty(graha);
            };

            let mut occupied_by_dwellers = HouseSet::EMPTY;
            let mut owned_by_dwellers = HouseSet::EMPTY;
            for &d in &in_star_of[i] {
                if let Some(p) = chart.placement(d) {
                    occupied_by_dwellers.insert(p.house);
                }
                owned_by_dwellers = owned_by_dwellers.union(owned[d.index() as usize]);
            }

            let tier1 = occupied_by_dwellers;
            let tier2 = owned_by_dwellers.difference(tier1);
            let tier3 = HouseSet::of(&[own.house]).difference(tier1.union(tier2));
            let tier4 = owned[i].difference(tier1.union(tier2).union(tier3));
            Significators {
                graha,
                placed: true,
                tier1,
                tier2,
                tier3,
                tier4,
            }
        });

        let house_table = build_house_table(&significators);

        tracing::debug!(
            placed = chart.placements().len(),
            "computed significators"
        );

        Self {
            owned,
            star_lords,
            in_star_of,
            significators,
            house_table,
        }
    }

    /// Significators of one graha; empty when it is unplaced.
    pub fn of(&self, graha: Graha) -> &Significators {
        &self.significators[graha.index() as usize]
    }

    /// Significators of all 9 grahas in graha order.
    pub fn all(&self) -> &[Significators; 9] {
        &self.significators
    }

    /// Houses owned by a graha (independent of whether it is placed).
    pub fn owned_houses(&self, graha: Graha) -> HouseSet {
        self.owned[graha.index() as usize]
    }

    /// Nakshatra lord of a placed graha.
    pub fn star_lord_of(&self, graha: Graha) -> Option<Graha> {
        self.star_lords[graha.index() as usize]
    }

    /// Placed grahas whose nakshatra lord is `graha`.
    pub fn grahas_in_star_of(&self, graha: Graha) -> &[Graha] {
        &self.in_star_of[graha.index() as usize]
    }

    /// Grahas signifying a house, strongest tier first. Empty outside 1..=12.
    pub fn house_significators(&self, house: u8) -> &[Graha] {
        match house {
            1..=12 => &self.house_table[house as usize - 1],
            _ => &[],
        }
    }

    /// Grahas signifying each house, index 0 for house 1.
    pub fn house_table(&self) -> &[Vec<Graha>; 12] {
        &self.house_table
    }

    /// Weighted favorable/unfavorable scores for a house group.
    pub fn for_house_group(&self, group: HouseGroup) -> SignificatorAnalysis {
        let mut favorable = BTreeMap::new();
        let mut unfavorable = BTreeMap::new();
        for sig in self.significators.iter().filter(|s| s.placed) {
            let score = |houses: &[u8]| -> f64 {
                houses.iter().map(|&h| sig.strength(h).weight()).sum()
            };
            let fav = score(group.favorable_houses());
            let unf = score(group.unfavorable_houses());
            if fav > 0.0 {
                favorable.insert(sig.graha, fav);
            }
            if unf > 0.0 {
                unfavorable.insert(sig.graha, unf);
            }
        }

        let best = favorable
            .keys()
            .filter(|g| !unfavorable.contains_key(*g))
            .copied()
            .collect();
        let worst = unfavorable
            .keys()
            .filter(|g| !favorable.contains_key(*g))
            .copied()
            .collect();

        SignificatorAnalysis {
            house_group: group,
            favorable,
            unfavorable,
            best,
            worst,
        }
    }
}

fn build_house_table(significators: &[Significators; 9]) -> [Vec<Graha>; 12] {
    let mut table: [Vec<(u8, Graha)>; 12] = std::array::from_fn(|_| Vec::new());
    for sig in significators {
        for house in sig.all().iter() {
            if let Some(tier) = sig.tier_of(house) {
                table[house as usize - 1].push((tier, sig.graha));
            }
        }
    }
    table.map(|mut entries| {
        // stable: grahas of equal tier keep graha order
        entries.sort_by_key(|&(tier, _)| tier);
        entries.into_iter().map(|(_, g)| g).collect()
    })
}

/// Significator scores of a chart for one house group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignificatorAnalysis {
    pub house_group: HouseGroup,
    /// Sum of strength weights over favorable houses (only non-zero entries).
    pub favorable: BTreeMap<Graha, f64>,
    pub unfavorable: BTreeMap<Graha, f64>,
    /// Favorable and never unfavorable.
    pub best: Vec<Graha>,
    /// Unfavorable and never favorable.
    pub worst: Vec<Graha>,
}

impl SignificatorAnalysis {
    /// Favorable minus unfavorable score.
    pub fn net_score(&self, graha: Graha) -> f64 {
        self.favorable.get(&graha).copied().unwrap_or(0.0)
            - self.unfavorable.get(&graha).copied().unwrap_or(0.0)
    }

    /// Every scored graha by net score, best first.
    pub fn ranking(&self) -> Vec<(Graha, f64)> {
        let mut grahas: Vec<Graha> = self
            .favorable
            .keys()
            .chain(self.unfavorable.keys())
            .copied()
            .collect();
        grahas.sort();
        grahas.dedup();
        let mut ranked: Vec<(Graha, f64)> =
            grahas.into_iter().map(|g| (g, self.net_score(g))).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Placement;

    /// Equal 30° houses from 0° Mesha, so house N is rashi N.
    fn mesha_cusps() -> [f64; 12] {
        std::array::from_fn(|i| 30.0 * i as f64 + 1.0)
    }

    #[test]
    fn ownership_follows_cusp_signs() {
        let chart = Chart::new(mesha_cusps(), Vec::new()).unwrap();
        let sig = ChartSignificators::compute(&chart);
        assert_eq!(sig.owned_houses(Graha::Mangal).to_vec(), vec![1, 8]);
        assert_eq!(sig.owned_houses(Graha::Surya).to_vec(), vec![5]);
        assert!(sig.owned_houses(Graha::Rahu).is_empty());
    }

    #[test]
    fn tiers_are_disjoint_with_highest_kept() {
        // Surya at 45° (Rohini, Chandra's star) in house 2.
        // Chandra at 100° (Pushya, Shani's star) in house 4.
        let chart = Chart::new(
            mesha_cusps(),
            vec![
                Placement::new(Graha::Surya, 45.0, 2),
                Placement::new(Graha::Chandra, 100.0, 4),
            ],
        )
        .unwrap();
        let sig = ChartSignificators::compute(&chart);

        let moon = sig.of(Graha::Chandra);
        assert_eq!(moon.tier1.to_vec(), vec![2]);
        assert_eq!(moon.tier2.to_vec(), vec![5]);
        assert_eq!(moon.tier3.to_vec(), vec![4]);
        // Chandra owns 4 (Karka) but it is already tier 3
        assert!(moon.tier4.is_empty());
        assert_eq!(moon.strength(2), SignificationStrength::Strongest);
        assert_eq!(moon.strength(4), SignificationStrength::Moderate);

        let sun = sig.of(Graha::Surya);
        assert!(sun.tier1.is_empty());
        assert_eq!(sun.tier3.to_vec(), vec![2]);
        assert_eq!(sun.tier4.to_vec(), vec![5]);

        assert_eq!(sig.grahas_in_star_of(Graha::Chandra), &[Graha::Surya]);
        assert_eq!(sig.star_lord_of(Graha::Chandra), Some(Graha::Shani));
    }

    #[test]
    fn unplaced_graha_is_empty_even_if_star_lord() {
        // Chandra in Pushya, but Shani is absent
        let chart =
            Chart::new(mesha_cusps(), vec![Placement::new(Graha::Chandra, 100.0, 4)]).unwrap();
        let sig = ChartSignificators::compute(&chart);
        let shani = sig.of(Graha::Shani);
        assert!(!shani.placed);
        assert!(shani.all().is_empty());
        assert_eq!(shani.strength(4), SignificationStrength::None);
    }

    #[test]
    fn house_table_sorted_by_tier() {
        let chart = Chart::new(
            mesha_cusps(),
            vec![
                Placement::new(Graha::Surya, 45.0, 2),
                Placement::new(Graha::Chandra, 100.0, 4),
            ],
        )
        .unwrap();
        let sig = ChartSignificators::compute(&chart);
        // House 2: Chandra tier 1, Surya tier 3
        assert_eq!(sig.house_significators(2), &[Graha::Chandra, Graha::Surya]);
        // House 5: Chandra tier 2, Surya tier 4
        assert_eq!(sig.house_significators(5), &[Graha::Chandra, Graha::Surya]);
        assert!(sig.house_significators(9).is_empty());
        assert!(sig.house_significators(13).is_empty());
    }

    #[test]
    fn house_group_scores() {
        let chart = Chart::new(
            mesha_cusps(),
            vec![
                Placement::new(Graha::Surya, 45.0, 2),
                Placement::new(Graha::Chandra, 100.0, 4),
            ],
        )
        .unwrap();
        let analysis = ChartSignificators::compute(&chart).for_house_group(HouseGroup::Marriage);
        // Chandra: house 2 at tier 1 → 1.0; no unfavorable (1,6,10,12)
        assert_eq!(analysis.favorable.get(&Graha::Chandra), Some(&1.0));
        // Surya: house 2 at tier 3 → 0.5
        assert_eq!(analysis.favorable.get(&Graha::Surya), Some(&0.5));
        assert!(analysis.unfavorable.is_empty());
        assert_eq!(analysis.best, vec![Graha::Surya, Graha::Chandra]);
        assert!(analysis.worst.is_empty());
        let ranking = analysis.ranking();
        assert_eq!(ranking[0], (Graha::Chandra, 1.0));
    }
}
