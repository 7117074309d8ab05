//! Four-step verification of an event category.
//!
//! 1. Sub lord of the primary cusp must signify more favorable than
//!    unfavorable houses.
//! 2. Star lord of the primary cusp must signify at least as many favorable
//!    as unfavorable houses.
//! 3. A strict majority of the running period lords must each signify some
//!    favorable house.
//! 4. Relevant transits must support at least as often as they oppose.
//!
//! The steps are independent; the verdict counts how many pass and the
//! confidence weights them 0.40 / 0.20 / 0.30 / 0.10.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use kp_vedic_base::Graha;
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::house_group::HouseGroup;
use crate::house_set::HouseSet;
use crate::position::KpPosition;
use crate::significator::{ChartSignificators, Significators};

/// Step weights in percent; they sum to 100.
pub const STEP_WEIGHT_PERCENT: [u32; 4] = [40, 20, 30, 10];

/// Transiting longitudes keyed by graha.
pub type Transits = BTreeMap<Graha, f64>;

/// Five-point verdict scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    StronglyFavorable,
    Favorable,
    Neutral,
    Unfavorable,
    StronglyUnfavorable,
}

impl Verdict {
    /// Label used in explanations.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StronglyFavorable => "Strongly Favorable",
            Self::Favorable => "Favorable",
            Self::Neutral => "Neutral/Mixed",
            Self::Unfavorable => "Unfavorable",
            Self::StronglyUnfavorable => "Strongly Unfavorable",
        }
    }

    /// Verdict for a count of passing steps (0-4).
    pub const fn from_passed(passed: usize) -> Self {
        match passed {
            4 => Self::StronglyFavorable,
            3 => Self::Favorable,
            2 => Self::Neutral,
            1 => Self::Unfavorable,
            0 => Self::StronglyUnfavorable,
            _ => Self::Neutral,
        }
    }

    fn narrative(self) -> [&'static str; 2] {
        match self {
            Self::StronglyFavorable => [
                "All 4 steps support the event. The event is strongly indicated",
                "and will likely manifest during favorable dasha periods.",
            ],
            Self::Favorable => [
                "3 of 4 steps support the event. The event is likely to happen",
                "with some minor challenges or delays.",
            ],
            Self::Neutral => [
                "Mixed indications. The event may or may not happen depending",
                "on additional factors and efforts.",
            ],
            Self::Unfavorable => [
                "Only 1 step supports the event. Significant challenges exist.",
                "The event is unlikely without major changes in circumstances.",
            ],
            Self::StronglyUnfavorable => [
                "No steps support the event. The event is strongly denied",
                "in the current configuration.",
            ],
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Running Vimshottari period lords: dasha, bhukti and optionally antara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLords {
    pub dasha: Graha,
    pub bhukti: Graha,
    #[serde(default)]
    pub antara: Option<Graha>,
}

impl PeriodLords {
    /// Dasha and bhukti with no antara.
    pub fn new(dasha: Graha, bhukti: Graha) -> Self {
        Self {
            dasha,
            bhukti,
            antara: None,
        }
    }

    /// Add the antara lord.
    pub fn with_antara(mut self, antara: Graha) -> Self {
        self.antara = Some(antara);
        self
    }

    /// Lords with their level labels, outermost first.
    pub fn levels(&self) -> Vec<(&'static str, Graha)> {
        let mut levels = vec![("Dasha", self.dasha), ("Bhukti", self.bhukti)];
        if let Some(a) = self.antara {
            levels.push(("Antara", a));
        }
        levels
    }
}

impl Display for PeriodLords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.dasha, self.bhukti)?;
        if let Some(a) = self.antara {
            write!(f, "-{a}")?;
        }
        Ok(())
    }
}

/// Step 1 or step 2: one lord judged against the house group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LordStep {
    pub lord: Graha,
    pub significators: Significators,
    /// Favorable houses of the group the lord signifies.
    pub favorable: HouseSet,
    /// Unfavorable houses of the group the lord signifies.
    pub unfavorable: HouseSet,
    pub passed: bool,
    pub explanation: String,
}

/// One period lord's contribution to step 3.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSignification {
    pub level: &'static str,
    pub lord: Graha,
    pub significators: Significators,
    pub favorable: HouseSet,
}

/// Step 3: the running period lords.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStep {
    pub periods: PeriodLords,
    pub lords: Vec<PeriodSignification>,
    pub supporting: usize,
    pub total: usize,
    pub passed: bool,
    pub explanation: String,
}

/// A transit touching the house group. Favorable houses count through the
/// graha's own significations or its transit sub lord's; unfavorable houses
/// through the sub lord's alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevantTransit {
    pub graha: Graha,
    pub position: KpPosition,
    pub signifies_favorable: bool,
    pub signifies_unfavorable: bool,
}

impl RelevantTransit {
    /// Favorable with no unfavorable touch.
    pub fn supports(&self) -> bool {
        self.signifies_favorable && !self.signifies_unfavorable
    }

    /// Unfavorable with no favorable touch.
    pub fn opposes(&self) -> bool {
        self.signifies_unfavorable && !self.signifies_favorable
    }
}

/// Step 4: transits over the natal significators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitStep {
    pub data_provided: bool,
    pub transits: Vec<RelevantTransit>,
    pub supporting: usize,
    pub opposing: usize,
    pub passed: bool,
    pub explanation: String,
}

/// Complete four-step result for one house group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourStepResult {
    pub query: String,
    pub house_group: HouseGroup,
    pub relevant_houses: HouseSet,
    pub primary_cusp: u8,
    pub cusp_position: KpPosition,
    pub step1: LordStep,
    pub step2: LordStep,
    pub step3: PeriodStep,
    pub step4: TransitStep,
    pub passed_steps: usize,
    pub verdict: Verdict,
    pub confidence: f64,
    pub explanation: String,
}

fn pass_fail(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

fn judge_lord(
    sig: &Significators,
    group: HouseGroup,
    heading: &str,
    step: u8,
    role: &str,
    strict: bool,
) -> LordStep {
    let all = sig.all();
    let favorable = all.intersection(group.favorable());
    let unfavorable = all.intersection(group.unfavorable());
    let passed = if strict {
        favorable.len() > unfavorable.len()
    } else {
        favorable.len() >= unfavorable.len()
    };

    let mut sentences = vec![format!("{heading} is {}.", sig.graha)];
    if !sig.placed {
        sentences.push(format!("{} is not placed in the chart.", sig.graha));
    }
    if !favorable.is_empty() {
        sentences.push(format!("Signifies favorable houses: {favorable}."));
    }
    if !unfavorable.is_empty() {
        sentences.push(format!("Also signifies unfavorable houses: {unfavorable}."));
    }
    sentences.push(if passed {
        format!("Step {step} PASSED - {role} supports the event.")
    } else {
        format!("Step {step} FAILED - {role} does not support the event.")
    });
    let explanation = sentences.join(" ");

    LordStep {
        lord: sig.graha,
        significators: *sig,
        favorable,
        unfavorable,
        passed,
        explanation,
    }
}

fn compact(set: HouseSet) -> String {
    set.iter().map(|h| h.to_string()).collect::<Vec<_>>().join(",")
}

fn judge_periods(
    sigs: &ChartSignificators,
    group: HouseGroup,
    periods: &PeriodLords,
) -> PeriodStep {
    let lords: Vec<PeriodSignification> = periods
        .levels()
        .into_iter()
        .map(|(level, lord)| {
            let significators = *sigs.of(lord);
            PeriodSignification {
                level,
                lord,
                significators,
                favorable: significators.all().intersection(group.favorable()),
            }
        })
        .collect();

    let total = lords.len();
    let supporting = lords.iter().filter(|l| !l.favorable.is_empty()).count();
    let passed = supporting >= total / 2 + 1;

    let mut sentences = vec![format!("Current Period: {periods}.")];
    sentences.extend(
        lords
            .iter()
            .filter(|l| !l.favorable.is_empty())
            .map(|l| format!("{} {} signifies {}.", l.level, l.lord, compact(l.favorable))),
    );
    sentences.push(format!("{supporting} of {total} periods support the event."));
    sentences.push(
        if passed {
            "Step 3 PASSED - Dasha supports the event."
        } else {
            "Step 3 FAILED - Dasha does not support the event."
        }
        .to_string(),
    );
    let explanation = sentences.join(" ");

    PeriodStep {
        periods: *periods,
        lords,
        supporting,
        total,
        passed,
        explanation,
    }
}

fn judge_transits(
    sigs: &ChartSignificators,
    group: HouseGroup,
    transits: Option<&Transits>,
) -> TransitStep {
    let Some(transits) = transits.filter(|t| !t.is_empty()) else {
        return TransitStep {
            data_provided: false,
            transits: Vec::new(),
            supporting: 0,
            opposing: 0,
            passed: true,
            explanation: "Transit data not provided. Step 4 considered neutral.".to_string(),
        };
    };

    let mut relevant = Vec::new();
    for (&graha, &lon) in transits {
        let own = sigs.of(graha);
        if !own.placed {
            continue;
        }
        let position = KpPosition::resolve(lon);
        let sub_lord = sigs.of(position.sub_lord).all();
        // Favorable through the graha or its transit sub lord, unfavorable
        // through the sub lord only.
        let signifies_favorable =
            !own.all().union(sub_lord).intersection(group.favorable()).is_empty();
        let signifies_unfavorable = !sub_lord.intersection(group.unfavorable()).is_empty();
        if signifies_favorable || signifies_unfavorable {
            relevant.push(RelevantTransit {
                graha,
                position,
                signifies_favorable,
                signifies_unfavorable,
            });
        }
    }

    let supporting = relevant.iter().filter(|t| t.supports()).count();
    let opposing = relevant.iter().filter(|t| t.opposes()).count();
    let passed = supporting >= opposing;

    let mut sentences = vec!["Transit Analysis:".to_string()];
    if relevant.is_empty() {
        sentences.push("No significant transits found.".to_string());
    } else {
        sentences.push(format!("{supporting} supporting, {opposing} opposing transits."));
        sentences.extend(
            relevant
                .iter()
                .take(3)
                .map(|t| format!("{} in {} sub.", t.graha, t.position.sub_lord)),
        );
    }
    sentences.push(
        if passed {
            "Step 4 PASSED - Transits support the event."
        } else {
            "Step 4 FAILED - Transits do not support the event."
        }
        .to_string(),
    );
    let explanation = sentences.join(" ");

    TransitStep {
        data_provided: true,
        transits: relevant,
        supporting,
        opposing,
        passed,
        explanation,
    }
}

/// Run all four steps against precomputed significators.
pub fn evaluate(
    chart: &Chart,
    sigs: &ChartSignificators,
    group: HouseGroup,
    periods: &PeriodLords,
    transits: Option<&Transits>,
) -> FourStepResult {
    let primary_cusp = group.primary_cusp();
    let cusp_position = KpPosition::resolve(chart.cusp(primary_cusp));

    let step1 = judge_lord(
        sigs.of(cusp_position.sub_lord),
        group,
        &format!("House {primary_cusp} Sub-Lord"),
        1,
        "Sub-lord",
        true,
    );
    let step2 = judge_lord(
        sigs.of(cusp_position.star_lord),
        group,
        "Star-Lord of cusp",
        2,
        "Star-lord",
        false,
    );
    let step3 = judge_periods(sigs, group, periods);
    let step4 = judge_transits(sigs, group, transits);

    let passes = [step1.passed, step2.passed, step3.passed, step4.passed];
    let passed_steps = passes.iter().filter(|&&p| p).count();
    let verdict = Verdict::from_passed(passed_steps);
    let confidence = f64::from(
        STEP_WEIGHT_PERCENT
            .iter()
            .zip(passes)
            .filter(|(_, p)| *p)
            .map(|(w, _)| w)
            .sum::<u32>(),
    ) / 100.0;

    tracing::debug!(
        house_group = group.key(),
        passed = passed_steps,
        confidence,
        "four-step verification"
    );

    let explanation = FourStepExplanation {
        group,
        step1: &step1,
        step2: &step2,
        step3: &step3,
        step4: &step4,
        verdict,
    }
    .to_string();

    FourStepResult {
        query: format!("Will {} matters be successful?", group.name()),
        house_group: group,
        relevant_houses: group.favorable(),
        primary_cusp,
        cusp_position,
        step1,
        step2,
        step3,
        step4,
        passed_steps,
        verdict,
        confidence,
        explanation,
    }
}

struct FourStepExplanation<'a> {
    group: HouseGroup,
    step1: &'a LordStep,
    step2: &'a LordStep,
    step3: &'a PeriodStep,
    step4: &'a TransitStep,
    verdict: Verdict,
}

impl Display for FourStepExplanation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "KP 4-STEP THEORY ANALYSIS FOR {}", self.group.name().to_uppercase())?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "Favorable Houses: {}", self.group.favorable())?;
        writeln!(f, "Unfavorable Houses: {}", self.group.unfavorable())?;
        let sections = [
            ("STEP 1 - CUSP SUB-LORD", self.step1.passed, &self.step1.explanation),
            ("STEP 2 - STAR-LORD", self.step2.passed, &self.step2.explanation),
            ("STEP 3 - DASHA", self.step3.passed, &self.step3.explanation),
            ("STEP 4 - TRANSIT", self.step4.passed, &self.step4.explanation),
        ];
        for (title, passed, text) in sections {
            writeln!(f)?;
            writeln!(f, "{title}: {}", pass_fail(passed))?;
            writeln!(f, "{text}")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "VERDICT: {}", self.verdict.name())?;
        writeln!(f)?;
        for line in self.verdict.narrative() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Step 1 alone: whether the chart promises the event at all.
pub fn is_promised(chart: &Chart, sigs: &ChartSignificators, group: HouseGroup) -> bool {
    let cusp = KpPosition::resolve(chart.cusp(group.primary_cusp()));
    let all = sigs.of(cusp.sub_lord).all();
    all.intersection(group.favorable()).len() > all.intersection(group.unfavorable()).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Placement;

    fn chart(placements: Vec<Placement>) -> Chart {
        let cusps = std::array::from_fn(|i| 30.0 * i as f64 + 1.0);
        Chart::new(cusps, placements).unwrap()
    }

    #[test]
    fn verdict_scale() {
        assert_eq!(Verdict::from_passed(4), Verdict::StronglyFavorable);
        assert_eq!(Verdict::from_passed(2), Verdict::Neutral);
        assert_eq!(Verdict::from_passed(0), Verdict::StronglyUnfavorable);
        assert_eq!(Verdict::Neutral.name(), "Neutral/Mixed");
    }

    #[test]
    fn full_pass_is_exactly_one() {
        assert_eq!(STEP_WEIGHT_PERCENT.iter().sum::<u32>(), 100);
        let all = f64::from(STEP_WEIGHT_PERCENT.iter().sum::<u32>()) / 100.0;
        assert_eq!(all, 1.0);
    }

    #[test]
    fn empty_chart_fails_lord_steps_but_transit_is_neutral() {
        let c = chart(Vec::new());
        let sigs = ChartSignificators::compute(&c);
        let r = evaluate(
            &c,
            &sigs,
            HouseGroup::Marriage,
            &PeriodLords::new(Graha::Guru, Graha::Shani),
            None,
        );
        assert!(!r.step1.passed);
        // 0 >= 0
        assert!(r.step2.passed);
        assert!(!r.step3.passed);
        assert!(r.step4.passed);
        assert!(!r.step4.data_provided);
        assert_eq!(r.passed_steps, 2);
        assert_eq!(r.verdict, Verdict::Neutral);
        assert!((r.confidence - 0.30).abs() < 1e-12);
        assert!(r.step1.explanation.contains("not placed"));
    }

    #[test]
    fn step3_majority() {
        // Guru at 10° (Ashwini) in house 11: signifies 11, Marriage favorable.
        let c = chart(vec![Placement::new(Graha::Guru, 10.0, 11)]);
        let sigs = ChartSignificators::compute(&c);
        let two = judge_periods(
            &sigs,
            HouseGroup::Marriage,
            &PeriodLords::new(Graha::Guru, Graha::Shani),
        );
        assert_eq!(two.supporting, 1);
        assert!(!two.passed);
        let three = judge_periods(
            &sigs,
            HouseGroup::Marriage,
            &PeriodLords::new(Graha::Guru, Graha::Guru).with_antara(Graha::Shani),
        );
        assert_eq!((three.supporting, three.total), (2, 3));
        assert!(three.passed);
        assert!(three.explanation.starts_with("Current Period: Jupiter-Jupiter-Saturn. "));
    }

    #[test]
    fn transits_of_unplaced_grahas_are_skipped() {
        let c = chart(vec![Placement::new(Graha::Guru, 10.0, 11)]);
        let sigs = ChartSignificators::compute(&c);
        let mut transits = Transits::new();
        transits.insert(Graha::Shani, 100.0);
        let step = judge_transits(&sigs, HouseGroup::Marriage, Some(&transits));
        assert!(step.data_provided);
        assert!(step.transits.is_empty());
        assert!(step.passed);
        assert!(step.explanation.contains("No significant transits"));
    }

    #[test]
    fn supporting_transit_counts() {
        let c = chart(vec![Placement::new(Graha::Guru, 10.0, 11)]);
        let sigs = ChartSignificators::compute(&c);
        let mut transits = Transits::new();
        transits.insert(Graha::Guru, 205.0);
        // Guru signifies 9, 11, 12: favorable 9 and 12 for travel, none of 4 or 8
        let step = judge_transits(&sigs, HouseGroup::ForeignTravel, Some(&transits));
        assert_eq!(step.transits.len(), 1);
        assert_eq!((step.supporting, step.opposing), (1, 0));
        assert!(step.passed);
        assert!(step.explanation.contains("Jupiter in "));

        // Marriage: Guru's own 12 is unfavorable, but only the sub lord
        // (Buddh, unplaced) can oppose.
        let marriage = judge_transits(&sigs, HouseGroup::Marriage, Some(&transits));
        assert_eq!(marriage.transits.len(), 1);
        assert!(!marriage.transits[0].signifies_unfavorable);
        assert_eq!((marriage.supporting, marriage.opposing), (1, 0));
    }

    #[test]
    fn explanation_sections() {
        let c = chart(Vec::new());
        let sigs = ChartSignificators::compute(&c);
        let r = evaluate(
            &c,
            &sigs,
            HouseGroup::Health,
            &PeriodLords::new(Graha::Surya, Graha::Chandra),
            None,
        );
        assert!(r.explanation.starts_with("KP 4-STEP THEORY ANALYSIS FOR HEALTH/RECOVERY\n"));
        assert!(r.explanation.contains("STEP 4 - TRANSIT: PASS"));
        assert!(r.explanation.contains("VERDICT: Neutral/Mixed"));
        assert_eq!(r.query, "Will Health/Recovery matters be successful?");
    }
}
