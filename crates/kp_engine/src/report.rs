//! Plain-text KP summary report.

use std::fmt::{self, Display, Formatter};

use kp_vedic_base::Graha;
use serde::{Deserialize, Serialize};

use crate::analysis::KpAnalysis;

/// Which report sections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub cuspal_sub_lords: bool,
    pub planet_positions: bool,
    pub significator_table: bool,
    pub ruling_planets: bool,
    /// Append the sub-sub lord to each cusp line.
    pub show_sub_sub: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cuspal_sub_lords: true,
            planet_positions: true,
            significator_table: true,
            ruling_planets: true,
            show_sub_sub: true,
        }
    }
}

impl ReportConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.cuspal_sub_lords
            || self.planet_positions
            || self.significator_table
            || self.ruling_planets)
        {
            return Err("at least one report section must be enabled");
        }
        Ok(())
    }
}

fn join(grahas: &[Graha]) -> String {
    grahas
        .iter()
        .map(|g| g.english_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the summary report. Sections appear in a fixed order.
pub fn summary_report(analysis: &KpAnalysis, config: &ReportConfig) -> String {
    SummaryReport { analysis, config }.to_string()
}

struct SummaryReport<'a> {
    analysis: &'a KpAnalysis,
    config: &'a ReportConfig,
}

impl SummaryReport<'_> {
    fn heading(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "─".repeat(60))
    }

    fn cusps(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::heading(f, "CUSPAL SUB-LORDS")?;
        for cusp in &self.analysis.cusps {
            let p = &cusp.position;
            write!(
                f,
                "House {:>2}: {} Star: {:<8} Sub: {}",
                cusp.house,
                p.rashi.abbreviation(),
                p.star_lord.english_name(),
                p.sub_lord
            )?;
            if self.config.show_sub_sub {
                write!(f, " SS: {}", p.sub_sub_lord)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn planets(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::heading(f, "PLANET POSITIONS WITH KP DETAILS")?;
        for planet in &self.analysis.planets {
            writeln!(f, "{:<10}: {}", planet.graha.english_name(), planet.position)?;
        }
        Ok(())
    }

    fn significators(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::heading(f, "SIGNIFICATOR TABLE")?;
        for house in 1..=12u8 {
            writeln!(
                f,
                "House {house:>2}: {}",
                join(self.analysis.house_significators(house))
            )?;
        }
        Ok(())
    }

    fn ruling(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rp = &self.analysis.ruling_planets;
        Self::heading(f, "RULING PLANETS")?;
        writeln!(f, "Ascendant Sign Lord: {}", rp.ascendant_sign_lord)?;
        writeln!(f, "Ascendant Star Lord: {}", rp.ascendant_star_lord)?;
        writeln!(f, "Moon Sign Lord: {}", rp.moon_sign_lord)?;
        writeln!(f, "Moon Star Lord: {}", rp.moon_star_lord)?;
        writeln!(f, "Day Lord: {}", rp.day_lord)?;
        writeln!(f, "All Ruling: {}", join(&rp.all))
    }
}

impl Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "KP SYSTEM ANALYSIS REPORT")?;
        writeln!(f, "{}", "═".repeat(60))?;
        if self.config.cuspal_sub_lords {
            self.cusps(f)?;
        }
        if self.config.planet_positions {
            self.planets(f)?;
        }
        if self.config.significator_table {
            self.significators(f)?;
        }
        if self.config.ruling_planets {
            self.ruling(f)?;
        }
        Ok(())
    }
}
