use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use kp_engine::{
    Chart, HouseGroup, KpPosition, Moment, PeriodLords, ReportConfig, Transits, analyze, horary_at,
    kp_number, ruling_planets, subs, subs_for_nakshatra, subs_for_rashi, summary_report,
    verify_event,
};
use kp_vedic_base::{ALL_NAKSHATRAS_27, ALL_RASHIS, Graha, Nakshatra, Rashi, Vaar};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kp", about = "Krishnamurti Paddhati analysis CLI")]
struct Cli {
    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign, star, sub and sub-sub lords of a sidereal longitude
    Position {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// List the 243 subs, optionally restricted to one nakshatra or rashi
    Subs {
        /// Nakshatra name (e.g. Rohini)
        #[arg(long, value_parser = parse_nakshatra, conflicts_with = "rashi")]
        nakshatra: Option<Nakshatra>,
        /// Rashi name (Sanskrit, western or abbreviation)
        #[arg(long, value_parser = parse_rashi)]
        rashi: Option<Rashi>,
    },
    /// Details of a KP horary number (1-249)
    Number {
        /// Horary number
        n: u16,
    },
    /// Full KP analysis of a chart
    Analyze {
        /// Chart JSON file
        #[arg(long, env = "KP_CHART")]
        chart: PathBuf,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
        /// Omit the cuspal sub-lord section
        #[arg(long)]
        no_cusps: bool,
        /// Omit the planet position section
        #[arg(long)]
        no_planets: bool,
        /// Omit the significator table
        #[arg(long)]
        no_significators: bool,
        /// Omit the ruling planets section
        #[arg(long)]
        no_ruling: bool,
        /// Hide sub-sub lords on cusp lines
        #[arg(long)]
        no_sub_sub: bool,
    },
    /// Four-step verification of an event category
    Verify {
        /// Chart JSON file
        #[arg(long, env = "KP_CHART")]
        chart: PathBuf,
        /// House group (marriage, career, business, education, health,
        /// foreign-travel, property, children, wealth, litigation, spiritual)
        #[arg(long)]
        group: HouseGroup,
        /// Running dasha lord
        #[arg(long)]
        dasha: Graha,
        /// Running bhukti lord
        #[arg(long)]
        bhukti: Graha,
        /// Running antara lord
        #[arg(long)]
        antara: Option<Graha>,
        /// Transit JSON file: object of graha name to sidereal longitude
        #[arg(long)]
        transits: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Horary judgment from a number 1-249
    Horary {
        /// Horary number
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// House group of the question
        #[arg(long)]
        group: HouseGroup,
        /// Question text
        #[arg(long)]
        query: Option<String>,
        /// Ascendant at the asking moment, for ruling planets
        #[arg(long, requires_all = ["moon", "vaar"])]
        asc: Option<f64>,
        /// Moon at the asking moment
        #[arg(long)]
        moon: Option<f64>,
        /// Weekday at the asking moment
        #[arg(long)]
        vaar: Option<Vaar>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ruling planets of a moment
    Ruling {
        /// Sidereal ascendant longitude
        #[arg(long)]
        asc: f64,
        /// Sidereal Moon longitude
        #[arg(long)]
        moon: f64,
        /// Julian Date of the moment (gives the weekday)
        #[arg(long, conflicts_with = "vaar")]
        jd: Option<f64>,
        /// Weekday, when no Julian Date is given (default Ravivaar)
        #[arg(long)]
        vaar: Option<Vaar>,
    },
}

fn parse_nakshatra(s: &str) -> Result<Nakshatra, String> {
    ALL_NAKSHATRAS_27
        .iter()
        .copied()
        .find(|n| n.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown nakshatra: {s}"))
}

fn parse_rashi(s: &str) -> Result<Rashi, String> {
    let needle = s.trim();
    ALL_RASHIS
        .iter()
        .copied()
        .find(|r| {
            r.name().eq_ignore_ascii_case(needle)
                || r.western_name().eq_ignore_ascii_case(needle)
                || r.abbreviation().eq_ignore_ascii_case(needle)
        })
        .ok_or_else(|| format!("unknown rashi: {s}"))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_chart(path: &Path) -> Result<Chart> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading chart file {}", path.display()))?;
    let chart: Chart = serde_json::from_str(&text)
        .with_context(|| format!("parsing chart file {}", path.display()))?;
    tracing::debug!(path = %path.display(), placed = chart.placements().len(), "loaded chart");
    Ok(chart)
}

fn load_transits(path: &Path) -> Result<Transits> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading transit file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing transit file {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Position { lon } => {
            let p = KpPosition::resolve(lon);
            println!("{p}");
            println!(
                "Sign lord {} | Sub #{} | Chain: {}",
                p.rashi_lord,
                p.sub_index,
                p.significator_chain()
                    .iter()
                    .map(|g| g.english_name())
                    .collect::<Vec<_>>()
                    .join(" > ")
            );
        }

        Commands::Subs { nakshatra, rashi } => {
            let list: Vec<_> = match (nakshatra, rashi) {
                (Some(n), _) => subs_for_nakshatra(n).iter().collect(),
                (None, Some(r)) => subs_for_rashi(r),
                (None, None) => subs().iter().collect(),
            };
            for s in list {
                println!(
                    "{:>3}  {:<18} {:<8} {:<8} {:>10.6} - {:>10.6}",
                    s.index,
                    s.nakshatra.name(),
                    s.star_lord.english_name(),
                    s.sub_lord.english_name(),
                    s.start_deg,
                    s.end_deg
                );
            }
        }

        Commands::Number { n } => {
            let entry =
                kp_number(n).ok_or_else(|| anyhow!("horary number must be 1-249, got {n}"))?;
            println!(
                "{} | {:.6} - {:.6} (mid {:.6}) | {} {:.4}° | {}-{} | Star: {} | Sub: {}",
                entry.number,
                entry.start_deg,
                entry.end_deg,
                entry.mid_deg,
                entry.rashi.name(),
                entry.degrees_in_rashi,
                entry.nakshatra.name(),
                entry.pada,
                entry.star_lord,
                entry.sub_lord
            );
        }

        Commands::Analyze {
            chart,
            json,
            no_cusps,
            no_planets,
            no_significators,
            no_ruling,
            no_sub_sub,
        } => {
            let chart = load_chart(&chart)?;
            let analysis = analyze(&chart);
            if json {
                print_json(&analysis)?;
            } else {
                let config = ReportConfig {
                    cuspal_sub_lords: !no_cusps,
                    planet_positions: !no_planets,
                    significator_table: !no_significators,
                    ruling_planets: !no_ruling,
                    show_sub_sub: !no_sub_sub,
                };
                config.validate().map_err(|e| anyhow!(e))?;
                print!("{}", summary_report(&analysis, &config));
            }
        }

        Commands::Verify {
            chart,
            group,
            dasha,
            bhukti,
            antara,
            transits,
            json,
        } => {
            let chart = load_chart(&chart)?;
            let transits = transits.as_deref().map(load_transits).transpose()?;
            let mut periods = PeriodLords::new(dasha, bhukti);
            if let Some(a) = antara {
                periods = periods.with_antara(a);
            }
            let result = verify_event(&chart, group, &periods, transits.as_ref());
            if json {
                print_json(&result)?;
            } else {
                print!("{}", result.explanation);
                println!("Confidence: {:.0}%", result.confidence * 100.0);
            }
        }

        Commands::Horary {
            n,
            group,
            query,
            asc,
            moon,
            vaar,
            json,
        } => {
            let query =
                query.unwrap_or_else(|| format!("Will {} matters be successful?", group.name()));
            let moment = match (asc, moon, vaar) {
                (Some(ascendant), Some(moon), Some(vaar)) => Some(Moment {
                    ascendant,
                    moon,
                    vaar,
                }),
                _ => None,
            };
            let result = horary_at(n, group, &query, moment.as_ref());
            if json {
                print_json(&result)?;
            } else {
                print!("{}", result.explanation);
                if !result.valid {
                    println!();
                }
                if let Some(rp) = &result.ruling_planets {
                    println!(
                        "Ruling planets: {}",
                        rp.all.iter().map(|g| g.english_name()).collect::<Vec<_>>().join(", ")
                    );
                }
            }
        }

        Commands::Ruling {
            asc,
            moon,
            jd,
            vaar,
        } => {
            let vaar = jd.map(Vaar::from_jd).or(vaar).unwrap_or(Vaar::Ravivaar);
            let rp = ruling_planets(asc, moon, vaar);
            println!("Ascendant Sign Lord: {}", rp.ascendant_sign_lord);
            println!("Ascendant Star Lord: {}", rp.ascendant_star_lord);
            println!("Moon Sign Lord: {}", rp.moon_sign_lord);
            println!("Moon Star Lord: {}", rp.moon_star_lord);
            println!("Day Lord: {} ({})", rp.day_lord, vaar.name());
            println!(
                "All Ruling: {}",
                rp.all.iter().map(|g| g.english_name()).collect::<Vec<_>>().join(", ")
            );
        }
    }

    Ok(())
}
