//! Error types for chart input validation.
//!
//! Analysis itself never fails; only building a [`Chart`](crate::Chart)
//! from external data can.

use kp_vedic_base::Graha;
use thiserror::Error;

/// Errors from constructing a chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A house cusp longitude is NaN or infinite.
    #[error("cusp of house {house} is not a finite longitude")]
    NonFiniteCusp { house: u8 },
    /// A body longitude is NaN or infinite.
    #[error("longitude of {0} is not finite")]
    NonFiniteLongitude(Graha),
    /// A body was placed in a house outside 1..=12.
    #[error("{graha} placed in house {house}, expected 1..=12")]
    HouseOutOfRange { graha: Graha, house: u8 },
    /// The same body appears twice in the placement list.
    #[error("{0} placed more than once")]
    DuplicatePlacement(Graha),
}
