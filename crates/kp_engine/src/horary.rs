//! KP horary by number (1-249).
//!
//! The chosen number's segment midpoint stands in for the ascendant. Without
//! a chart, the ascendant sub lord is judged against a fixed table of
//! natural significations.

use std::fmt::{self, Display, Formatter};

use kp_vedic_base::Graha;
use serde::Serialize;

use crate::four_step::Verdict;
use crate::house_group::HouseGroup;
use crate::house_set::HouseSet;
use crate::position::KpPosition;
use crate::ruling::{Moment, RulingPlanets, ruling_planets_at};
use crate::sub_table::{KP_NUMBER_COUNT, KpNumber, kp_number};

/// Explanation given for numbers outside 1-249.
pub const INVALID_NUMBER_MESSAGE: &str =
    "Invalid number. Please provide a number between 1 and 249.";

/// Houses each graha signifies by nature.
pub const fn natural_significations(graha: Graha) -> HouseSet {
    match graha {
        Graha::Surya => HouseSet::of(&[1, 5, 9, 10]),
        Graha::Chandra => HouseSet::of(&[4, 2, 11]),
        Graha::Mangal => HouseSet::of(&[3, 6, 10]),
        Graha::Buddh => HouseSet::of(&[3, 6, 10, 11]),
        Graha::Guru => HouseSet::of(&[2, 5, 9, 11]),
        Graha::Shukra => HouseSet::of(&[2, 4, 7, 12]),
        Graha::Shani => HouseSet::of(&[6, 8, 10, 12]),
        Graha::Rahu => HouseSet::of(&[6, 8, 11, 12]),
        Graha::Ketu => HouseSet::of(&[5, 9, 12]),
    }
}

/// Judgment for one horary number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoraryResult {
    pub number: i64,
    pub query: String,
    pub house_group: HouseGroup,
    pub valid: bool,
    pub kp_number: Option<KpNumber>,
    /// Resolved synthetic ascendant.
    pub position: Option<KpPosition>,
    /// Favorable, Unfavorable or Neutral.
    pub verdict: Verdict,
    pub explanation: String,
    pub ruling_planets: Option<RulingPlanets>,
}

/// Horary judgment with the default query and no asking moment.
pub fn horary(number: i64, group: HouseGroup) -> HoraryResult {
    let query = format!("Will {} matters be successful?", group.name());
    horary_at(number, group, &query, None)
}

/// Horary judgment; ruling planets are computed when the asking moment is known.
pub fn horary_at(
    number: i64,
    group: HouseGroup,
    query: &str,
    moment: Option<&Moment>,
) -> HoraryResult {
    let ruling_planets = moment.map(ruling_planets_at);
    let entry = u16::try_from(number).ok().and_then(kp_number);
    let Some(entry) = entry else {
        tracing::debug!(number, max = KP_NUMBER_COUNT, "horary number out of range");
        return HoraryResult {
            number,
            query: query.to_string(),
            house_group: group,
            valid: false,
            kp_number: None,
            position: None,
            verdict: Verdict::Neutral,
            explanation: INVALID_NUMBER_MESSAGE.to_string(),
            ruling_planets,
        };
    };

    let position = KpPosition::resolve(entry.mid_deg);
    let natural = natural_significations(position.sub_lord);
    let favorable = !natural.intersection(group.favorable()).is_empty();
    let unfavorable = !natural.intersection(group.unfavorable()).is_empty();
    let verdict = match (favorable, unfavorable) {
        (true, false) => Verdict::Favorable,
        (false, true) => Verdict::Unfavorable,
        _ => Verdict::Neutral,
    };

    let explanation = HoraryExplanation {
        number,
        query,
        group,
        entry,
        position: &position,
        verdict,
    }
    .to_string();

    HoraryResult {
        number,
        query: query.to_string(),
        house_group: group,
        valid: true,
        kp_number: Some(*entry),
        position: Some(position),
        verdict,
        explanation,
        ruling_planets,
    }
}

struct HoraryExplanation<'a> {
    number: i64,
    query: &'a str,
    group: HouseGroup,
    entry: &'a KpNumber,
    position: &'a KpPosition,
    verdict: Verdict,
}

impl Display for HoraryExplanation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sub_lord = self.position.sub_lord;
        writeln!(f, "KP HORARY ANALYSIS")?;
        writeln!(f, "{}", "═".repeat(40))?;
        writeln!(f, "Number: {}", self.number)?;
        writeln!(f, "Query: {}", self.query)?;
        writeln!(f)?;
        writeln!(f, "ASCENDANT DETAILS:")?;
        writeln!(f, "Sign: {} ({})", self.entry.rashi.name(), self.entry.rashi.western_name())?;
        writeln!(f, "Nakshatra: {}-{}", self.entry.nakshatra.name(), self.entry.pada)?;
        writeln!(f, "Sub-Lord: {sub_lord}")?;
        writeln!(f)?;
        writeln!(f, "ANALYSIS FOR {}:", self.group.name().to_uppercase())?;
        writeln!(f, "Favorable Houses: {}", self.group.favorable())?;
        writeln!(f, "Sub-Lord {sub_lord} analysis:")?;
        let [reading, result] = match self.verdict {
            Verdict::Favorable | Verdict::StronglyFavorable => [
                "The sub-lord signifies favorable houses for this query.",
                "RESULT: POSITIVE - The matter will likely succeed.",
            ],
            Verdict::Unfavorable | Verdict::StronglyUnfavorable => [
                "The sub-lord signifies unfavorable houses for this query.",
                "RESULT: NEGATIVE - The matter faces obstacles.",
            ],
            Verdict::Neutral => [
                "Mixed indications from the sub-lord.",
                "RESULT: UNCERTAIN - Outcome depends on additional factors.",
            ],
        };
        writeln!(f, "{reading}")?;
        writeln!(f, "{result}")
    }
}
