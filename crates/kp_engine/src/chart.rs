//! Finished-chart input consumed by the KP engine.
//!
//! The engine does not compute planetary positions or house cusps. A chart
//! is supplied with 12 sidereal cusp longitudes (KP uses Placidus cusps) and
//! the sidereal longitude and occupied house of each tracked graha.

use kp_vedic_base::{Graha, Nakshatra, Vaar, nakshatra_from_longitude, normalize_360};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One graha's place in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub graha: Graha,
    /// Sidereal longitude in degrees, [0, 360) after construction.
    pub longitude: f64,
    /// Occupied bhava, 1-12.
    pub house: u8,
}

impl Placement {
    /// Placement of `graha` at a sidereal longitude in a house.
    pub fn new(graha: Graha, longitude: f64, house: u8) -> Self {
        Self {
            graha,
            longitude,
            house,
        }
    }

    /// Nakshatra the graha occupies.
    pub fn nakshatra(&self) -> Nakshatra {
        nakshatra_from_longitude(self.longitude).nakshatra
    }

    /// Lord of the occupied nakshatra.
    pub fn star_lord(&self) -> Graha {
        self.nakshatra().lord()
    }
}

/// Unvalidated chart as it arrives from outside.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartInput {
    pub cusps: [f64; 12],
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub vaar: Option<Vaar>,
}

/// A validated chart: 12 cusps plus any subset of the 9 grahas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartInput")]
pub struct Chart {
    cusps: [f64; 12],
    placements: Vec<Placement>,
    vaar: Option<Vaar>,
}

impl Chart {
    /// Validate and normalize a chart.
    ///
    /// Cusp and body longitudes are normalized to [0, 360). Grahas missing
    /// from `placements` are allowed; they simply signify nothing.
    pub fn new(cusps: [f64; 12], placements: Vec<Placement>) -> Result<Self, ChartError> {
        let mut normalized_cusps = [0.0; 12];
        for (i, &c) in cusps.iter().enumerate() {
            if !c.is_finite() {
                return Err(ChartError::NonFiniteCusp {
                    house: i as u8 + 1,
                });
            }
            normalized_cusps[i] = normalize_360(c);
        }

        let mut seen = [false; 9];
        let mut normalized = Vec::with_capacity(placements.len());
        for p in placements {
            if !p.longitude.is_finite() {
                return Err(ChartError::NonFiniteLongitude(p.graha));
            }
            if !(1..=12).contains(&p.house) {
                return Err(ChartError::HouseOutOfRange {
                    graha: p.graha,
                    house: p.house,
                });
            }
            let slot = &mut seen[p.graha.index() as usize];
            if *slot {
                return Err(ChartError::DuplicatePlacement(p.graha));
            }
            *slot = true;
            normalized.push(Placement {
                longitude: normalize_360(p.longitude),
                ..p
            });
        }

        Ok(Self {
            cusps: normalized_cusps,
            placements: normalized,
            vaar: None,
        })
    }

    /// Attach the weekday of the chart moment (used for the day lord).
    pub fn with_vaar(mut self, vaar: Vaar) -> Self {
        self.vaar = Some(vaar);
        self
    }

    /// Cusp longitude of a house, 1-12. Out-of-range numbers are clamped.
    pub fn cusp(&self, house: u8) -> f64 {
        let idx = house.clamp(1, 12) as usize - 1;
        self.cusps[idx]
    }

    /// All 12 cusp longitudes (index 0 = house 1).
    pub fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// Ascendant (cusp of house 1).
    pub fn ascendant(&self) -> f64 {
        self.cusps[0]
    }

    /// Placed grahas in input order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of a graha, if it is in the chart.
    pub fn placement(&self, graha: Graha) -> Option<&Placement> {
        self.placements.iter().find(|p| p.graha == graha)
    }

    /// Weekday of the chart moment, when known.
    pub fn vaar(&self) -> Option<Vaar> {
        self.vaar
    }
}

impl TryFrom<ChartInput> for Chart {
    type Error = ChartError;

    fn try_from(input: ChartInput) -> Result<Self, Self::Error> {
        let chart = Chart::new(input.cusps, input.placements)?;
        Ok(match input.vaar {
            Some(v) => chart.with_vaar(v),
            None => chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(asc: f64) -> [f64; 12] {
        std::array::from_fn(|i| asc + 30.0 * i as f64)
    }

    #[test]
    fn cusps_are_normalized() {
        let chart = Chart::new(equal_cusps(350.0), Vec::new()).unwrap();
        assert!((chart.cusp(1) - 350.0).abs() < 1e-12);
        assert!((chart.cusp(2) - 20.0).abs() < 1e-12);
        assert!((chart.cusp(12) - 320.0).abs() < 1e-12);
    }

    #[test]
    fn cusp_clamps_house_number() {
        let chart = Chart::new(equal_cusps(0.0), Vec::new()).unwrap();
        assert_eq!(chart.cusp(0), chart.cusp(1));
        assert_eq!(chart.cusp(13), chart.cusp(12));
    }

    #[test]
    fn rejects_non_finite_cusp() {
        let mut cusps = equal_cusps(0.0);
        cusps[4] = f64::NAN;
        assert_eq!(
            Chart::new(cusps, Vec::new()),
            Err(ChartError::NonFiniteCusp { house: 5 })
        );
    }

    #[test]
    fn rejects_bad_house() {
        let p = vec![Placement::new(Graha::Guru, 10.0, 13)];
        assert_eq!(
            Chart::new(equal_cusps(0.0), p),
            Err(ChartError::HouseOutOfRange {
                graha: Graha::Guru,
                house: 13
            })
        );
    }

    #[test]
    fn rejects_duplicate() {
        let p = vec![
            Placement::new(Graha::Shani, 10.0, 1),
            Placement::new(Graha::Shani, 200.0, 7),
        ];
        assert_eq!(
            Chart::new(equal_cusps(0.0), p),
            Err(ChartError::DuplicatePlacement(Graha::Shani))
        );
    }

    #[test]
    fn rejects_infinite_longitude() {
        let p = vec![Placement::new(Graha::Rahu, f64::INFINITY, 3)];
        assert_eq!(
            Chart::new(equal_cusps(0.0), p),
            Err(ChartError::NonFiniteLongitude(Graha::Rahu))
        );
    }

    #[test]
    fn placement_star_lord() {
        // 45 deg = Rohini → Chandra
        let p = Placement::new(Graha::Surya, 45.0, 2);
        assert_eq!(p.nakshatra(), Nakshatra::Rohini);
        assert_eq!(p.star_lord(), Graha::Chandra);
    }

    #[test]
    fn placement_lookup() {
        let chart = Chart::new(
            equal_cusps(0.0),
            vec![Placement::new(Graha::Chandra, -5.0, 12)],
        )
        .unwrap()
        .with_vaar(Vaar::Somvaar);
        let moon = chart.placement(Graha::Chandra).unwrap();
        assert!((moon.longitude - 355.0).abs() < 1e-12);
        assert!(chart.placement(Graha::Surya).is_none());
        assert_eq!(chart.vaar(), Some(Vaar::Somvaar));
    }
}
