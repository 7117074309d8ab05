//! Full-chart KP analysis and event verification entry points.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use kp_vedic_base::Graha;
use serde::Serialize;

use crate::chart::Chart;
use crate::four_step::{self, FourStepResult, PeriodLords, Transits};
use crate::house_group::{HouseGroup, cusp_favorable, cusp_unfavorable, house_name};
use crate::house_set::HouseSet;
use crate::position::{KpPosition, sub_lord};
use crate::ruling::{RulingPlanets, ruling_planets_for_chart};
use crate::significator::{ChartSignificators, SignificatorAnalysis, Significators};
use crate::sub_table::{self, KpSub};

/// One house cusp with its sub lord's significations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuspAnalysis {
    pub house: u8,
    pub position: KpPosition,
    /// All houses signified by the cusp sub lord.
    pub sub_lord_significations: HouseSet,
    pub interpretation: String,
}

/// One placed graha with its KP details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetAnalysis {
    pub graha: Graha,
    pub position: KpPosition,
    pub house: u8,
    pub owned_houses: HouseSet,
    /// Placed grahas whose nakshatra lord is this graha.
    pub in_its_stars: Vec<Graha>,
    pub significators: Significators,
}

/// Current sub of each graha and cusp, for timing work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubLordNavigator {
    planet_subs: BTreeMap<Graha, KpSub>,
    cusp_subs: [KpSub; 12],
}

impl SubLordNavigator {
    /// Subs of every placed graha and every cusp.
    pub fn new(chart: &Chart) -> Self {
        let planet_subs = chart
            .placements()
            .iter()
            .map(|p| (p.graha, *sub_table::sub_at_degree(p.longitude)))
            .collect();
        let cusps = *chart.cusps();
        let cusp_subs = cusps.map(|c| *sub_table::sub_at_degree(c));
        Self {
            planet_subs,
            cusp_subs,
        }
    }

    /// Sub holding a graha, if it is placed.
    pub fn planet_sub(&self, graha: Graha) -> Option<&KpSub> {
        self.planet_subs.get(&graha)
    }

    /// Sub of a cusp, house 1-12.
    pub fn cusp_sub(&self, house: u8) -> Option<&KpSub> {
        match house {
            1..=12 => Some(&self.cusp_subs[house as usize - 1]),
            _ => None,
        }
    }

    /// Sub containing any longitude.
    pub fn sub_at_degree(&self, deg: f64) -> &'static KpSub {
        sub_table::sub_at_degree(deg)
    }

    /// First sub starting after `deg`, wrapping past 360°.
    pub fn next_sub_change(&self, deg: f64) -> &'static KpSub {
        sub_table::next_sub_change(deg)
    }
}

/// Everything KP derives from a chart, short of event verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpAnalysis {
    pub cusps: Vec<CuspAnalysis>,
    pub planets: Vec<PlanetAnalysis>,
    pub significators: ChartSignificators,
    pub ruling_planets: RulingPlanets,
    pub navigator: SubLordNavigator,
}

impl KpAnalysis {
    /// Grahas signifying a house, strongest first.
    pub fn house_significators(&self, house: u8) -> &[Graha] {
        self.significators.house_significators(house)
    }

    /// Cusp of house 1-12.
    pub fn cusp(&self, house: u8) -> Option<&CuspAnalysis> {
        self.cusps.iter().find(|c| c.house == house)
    }

    /// Analysis of a placed graha.
    pub fn planet(&self, graha: Graha) -> Option<&PlanetAnalysis> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Significators of the group's favorable houses that signify none of
    /// its unfavorable houses, in first-seen order.
    pub fn find_best_significators(&self, group: HouseGroup) -> Vec<Graha> {
        let unfavorable = group.unfavorable();
        let mut best = Vec::new();
        for &house in group.favorable_houses() {
            for &g in self.house_significators(house) {
                let clean = self.significators.of(g).all().intersection(unfavorable).is_empty();
                if clean && !best.contains(&g) {
                    best.push(g);
                }
            }
        }
        best
    }

    /// Weighted significator scores for a house group.
    pub fn significator_analysis(&self, group: HouseGroup) -> SignificatorAnalysis {
        self.significators.for_house_group(group)
    }
}

fn interpret_cusp(house: u8, position: &KpPosition, significations: HouseSet) -> String {
    let name = house_name(house);
    let favorable = significations.intersection(cusp_favorable(house));
    let unfavorable = significations.intersection(cusp_unfavorable(house));

    let mut sentences = vec![format!(
        "House {house} ({name}) Sub-Lord: {}. Star-Lord: {}.",
        position.sub_lord, position.star_lord
    )];
    if !favorable.is_empty() {
        sentences.push(format!("Favorable connections to houses {favorable}."));
    }
    if !unfavorable.is_empty() {
        sentences.push(format!("Challenges from houses {unfavorable}."));
    }
    sentences.push(match favorable.len().cmp(&unfavorable.len()) {
        Ordering::Greater => format!("Overall favorable for {name} matters."),
        Ordering::Less => format!("Challenges indicated for {name} matters."),
        Ordering::Equal => format!("Mixed results for {name} matters."),
    });
    sentences.join(" ")
}

/// Full KP analysis of a chart.
pub fn analyze(chart: &Chart) -> KpAnalysis {
    let significators = ChartSignificators::compute(chart);

    let cusps = (1..=12u8)
        .map(|house| {
            let position = KpPosition::resolve(chart.cusp(house));
            let sub_lord_significations = significators.of(position.sub_lord).all();
            CuspAnalysis {
                house,
                interpretation: interpret_cusp(house, &position, sub_lord_significations),
                position,
                sub_lord_significations,
            }
        })
        .collect();

    let planets = chart
        .placements()
        .iter()
        .map(|p| PlanetAnalysis {
            graha: p.graha,
            position: KpPosition::resolve(p.longitude),
            house: p.house,
            owned_houses: significators.owned_houses(p.graha),
            in_its_stars: significators.grahas_in_star_of(p.graha).to_vec(),
            significators: *significators.of(p.graha),
        })
        .collect();

    let ruling_planets = ruling_planets_for_chart(chart);
    let navigator = SubLordNavigator::new(chart);

    tracing::debug!(
        placed = chart.placements().len(),
        ruling = ruling_planets.all.len(),
        "analyzed chart"
    );

    KpAnalysis {
        cusps,
        planets,
        significators,
        ruling_planets,
        navigator,
    }
}

/// Four-step verification of one house group.
pub fn verify_event(
    chart: &Chart,
    group: HouseGroup,
    periods: &PeriodLords,
    transits: Option<&Transits>,
) -> FourStepResult {
    let sigs = ChartSignificators::compute(chart);
    four_step::evaluate(chart, &sigs, group, periods, transits)
}

/// Four-step verification of several groups under the same periods, without transits.
pub fn analyze_multiple_events(
    chart: &Chart,
    groups: &[HouseGroup],
    periods: &PeriodLords,
) -> Vec<FourStepResult> {
    let sigs = ChartSignificators::compute(chart);
    groups
        .iter()
        .map(|&g| four_step::evaluate(chart, &sigs, g, periods, None))
        .collect()
}

/// Step 1 only: whether the chart promises the event.
pub fn is_event_promised(chart: &Chart, group: HouseGroup) -> bool {
    let sigs = ChartSignificators::compute(chart);
    four_step::is_promised(chart, &sigs, group)
}

/// Sub lord of a house cusp.
pub fn cusp_sub_lord(chart: &Chart, house: u8) -> Graha {
    sub_lord(chart.cusp(house))
}
