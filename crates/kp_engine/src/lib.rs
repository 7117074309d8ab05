//! Krishnamurti Paddhati (KP) analysis over a finished chart.
//!
//! This crate provides:
//! - The 243-sub and 249-number division tables
//! - Longitude → sign / star / sub / sub-sub resolution
//! - Four-tier significators and the house → grahas table
//! - Four-step event verification, ruling planets and number horary
//! - A full-chart facade and a plain-text summary report
//!
//! Planet longitudes and house cusps are inputs; nothing here computes
//! ephemerides. Analysis is infallible once a [`Chart`] is built.

pub mod analysis;
pub mod chart;
pub mod error;
pub mod four_step;
pub mod horary;
pub mod house_group;
pub mod house_set;
pub mod position;
pub mod report;
pub mod ruling;
pub mod significator;
pub mod sub_table;
pub mod subdivision;

pub use analysis::{
    CuspAnalysis, KpAnalysis, PlanetAnalysis, SubLordNavigator, analyze, analyze_multiple_events,
    cusp_sub_lord, is_event_promised, verify_event,
};
pub use chart::{Chart, ChartInput, Placement};
pub use error::ChartError;
pub use four_step::{
    FourStepResult, LordStep, PeriodLords, PeriodSignification, PeriodStep, RelevantTransit,
    STEP_WEIGHT_PERCENT, TransitStep, Transits, Verdict,
};
pub use horary::{
    HoraryResult, INVALID_NUMBER_MESSAGE, horary, horary_at, natural_significations,
};
pub use house_group::{
    ALL_HOUSE_GROUPS, HouseGroup, ParseHouseGroupError, cusp_favorable, cusp_unfavorable,
    house_name,
};
pub use house_set::HouseSet;
pub use position::{KpPosition, star_lord, sub_lord};
pub use report::{ReportConfig, summary_report};
pub use ruling::{
    Moment, RulingPlanets, ruling_planets, ruling_planets_at, ruling_planets_for_chart,
};
pub use significator::{
    ChartSignificators, SignificationStrength, SignificatorAnalysis, Significators,
};
pub use sub_table::{
    KP_NUMBER_COUNT, KP_NUMBER_SPAN, KpNumber, KpSub, SUB_COUNT, kp_number,
    kp_number_from_longitude, kp_numbers, next_sub_change, next_sub_lord_occurrences,
    sub_at_degree, subs, subs_for_nakshatra, subs_for_rashi,
};
