//! Ruling planets of a moment.

use kp_vedic_base::{Graha, Vaar, nakshatra_from_longitude, rashi_from_longitude, vaar_lord};
use serde::{Deserialize, Serialize};

use crate::chart::Chart;

/// The five ruling-planet slots and their distinct union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulingPlanets {
    pub ascendant_sign_lord: Graha,
    pub ascendant_star_lord: Graha,
    pub moon_sign_lord: Graha,
    pub moon_star_lord: Graha,
    pub day_lord: Graha,
    /// Distinct lords in slot order.
    pub all: Vec<Graha>,
}

impl RulingPlanets {
    fn slots(&self) -> [Graha; 5] {
        [
            self.ascendant_sign_lord,
            self.ascendant_star_lord,
            self.moon_sign_lord,
            self.moon_star_lord,
            self.day_lord,
        ]
    }

    /// Whether `graha` fills any of the five slots.
    pub fn is_ruling(&self, graha: Graha) -> bool {
        self.all.contains(&graha)
    }

    /// Number of slots the graha fills, 0-5.
    pub fn strength(&self, graha: Graha) -> usize {
        self.slots().iter().filter(|&&g| g == graha).count()
    }
}

/// Ascendant, Moon and weekday of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub ascendant: f64,
    pub moon: f64,
    pub vaar: Vaar,
}

/// Ruling planets from an ascendant longitude, a Moon longitude and a weekday.
pub fn ruling_planets(ascendant: f64, moon: f64, vaar: Vaar) -> RulingPlanets {
    rulers(ascendant, moon, vaar_lord(vaar))
}

/// Ruling planets of a [`Moment`].
pub fn ruling_planets_at(moment: &Moment) -> RulingPlanets {
    ruling_planets(moment.ascendant, moment.moon, moment.vaar)
}

/// Ruling planets of a chart's own moment.
///
/// The day lord comes from the chart's weekday and is Surya when the chart
/// carries none; a chart without Chandra uses 0° for the Moon.
pub fn ruling_planets_for_chart(chart: &Chart) -> RulingPlanets {
    let moon = chart.placement(Graha::Chandra).map_or(0.0, |p| p.longitude);
    let day_lord = chart.vaar().map_or(Graha::Surya, vaar_lord);
    rulers(chart.ascendant(), moon, day_lord)
}

fn rulers(ascendant: f64, moon: f64, day_lord: Graha) -> RulingPlanets {
    let slots = [
        rashi_from_longitude(ascendant).rashi.lord(),
        nakshatra_from_longitude(ascendant).nakshatra.lord(),
        rashi_from_longitude(moon).rashi.lord(),
        nakshatra_from_longitude(moon).nakshatra.lord(),
        day_lord,
    ];
    let mut all = Vec::with_capacity(5);
    for g in slots {
        if !all.contains(&g) {
            all.push(g);
        }
    }
    RulingPlanets {
        ascendant_sign_lord: slots[0],
        ascendant_star_lord: slots[1],
        moon_sign_lord: slots[2],
        moon_star_lord: slots[3],
        day_lord,
        all,
    }
}
