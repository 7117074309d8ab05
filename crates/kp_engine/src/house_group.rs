//! Event categories (house groups) and per-house reference data.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::house_set::HouseSet;

/// A class of life event judged by a fixed set of houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseGroup {
    Marriage,
    CareerJob,
    Business,
    Education,
    Health,
    ForeignTravel,
    Property,
    Children,
    Wealth,
    Litigation,
    Spiritual,
}

/// Every event category, in declaration order.
pub const ALL_HOUSE_GROUPS: [HouseGroup; 11] = [
    HouseGroup::Marriage,
    HouseGroup::CareerJob,
    HouseGroup::Business,
    HouseGroup::Education,
    HouseGroup::Health,
    HouseGroup::ForeignTravel,
    HouseGroup::Property,
    HouseGroup::Children,
    HouseGroup::Wealth,
    HouseGroup::Litigation,
    HouseGroup::Spiritual,
];

impl HouseGroup {
    /// Display name, e.g. "Marriage/Partnership".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "Marriage/Partnership",
            Self::CareerJob => "Career/Job",
            Self::Business => "Business/Self-Employment",
            Self::Education => "Education/Learning",
            Self::Health => "Health/Recovery",
            Self::ForeignTravel => "Foreign Travel/Settlement",
            Self::Property => "Property/Land/Vehicle",
            Self::Children => "Children/Progeny",
            Self::Wealth => "Wealth/Finance",
            Self::Litigation => "Litigation/Legal Matters",
            Self::Spiritual => "Spirituality/Moksha",
        }
    }

    /// Short identifier used on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::CareerJob => "career",
            Self::Business => "business",
            Self::Education => "education",
            Self::Health => "health",
            Self::ForeignTravel => "foreign-travel",
            Self::Property => "property",
            Self::Children => "children",
            Self::Wealth => "wealth",
            Self::Litigation => "litigation",
            Self::Spiritual => "spiritual",
        }
    }

    /// Favorable houses in listed order; the first is the primary cusp.
    pub const fn favorable_houses(self) -> &'static [u8] {
        match self {
            Self::Marriage => &[2, 7, 11],
            Self::CareerJob => &[2, 6, 10, 11],
            Self::Business => &[2, 7, 10, 11],
            Self::Education => &[4, 9, 11],
            Self::Health => &[1, 5, 11],
            Self::ForeignTravel => &[3, 9, 12],
            Self::Property => &[4, 11, 12],
            Self::Children => &[2, 5, 11],
            Self::Wealth => &[2, 6, 10, 11],
            Self::Litigation => &[6, 11],
            Self::Spiritual => &[5, 9, 12],
        }
    }

    /// Houses that deny the event.
    pub const fn unfavorable_houses(self) -> &'static [u8] {
        match self {
            Self::Marriage => &[1, 6, 10, 12],
            Self::CareerJob => &[1, 5, 9, 12],
            Self::Business => &[6, 8, 12],
            Self::Education => &[6, 8, 12],
            Self::Health => &[6, 8, 12],
            Self::ForeignTravel => &[4, 8],
            Self::Property => &[3, 6, 8],
            Self::Children => &[1, 4, 10, 12],
            Self::Wealth => &[5, 8, 12],
            Self::Litigation => &[7, 12],
            Self::Spiritual => &[2, 6, 10, 11],
        }
    }

    /// Houses with no bearing on the event.
    pub const fn neutral_houses(self) -> &'static [u8] {
        match self {
            Self::Marriage => &[3, 4, 5, 8, 9],
            Self::CareerJob => &[3, 4, 7, 8],
            Self::Business => &[1, 3, 4, 5, 9],
            Self::Education => &[1, 2, 3, 5, 7, 10],
            Self::Health => &[2, 3, 4, 7, 9, 10],
            Self::ForeignTravel => &[1, 2, 5, 6, 7, 10, 11],
            Self::Property => &[1, 2, 5, 7, 9, 10],
            Self::Children => &[3, 6, 7, 8, 9],
            Self::Wealth => &[1, 3, 4, 7, 9],
            Self::Litigation => &[1, 2, 3, 4, 5, 8, 9, 10],
            Self::Spiritual => &[1, 3, 4, 7, 8],
        }
    }

    /// [`Self::favorable_houses`] as a set.
    pub const fn favorable(self) -> HouseSet {
        HouseSet::of(self.favorable_houses())
    }

    /// [`Self::unfavorable_houses`] as a set.
    pub const fn unfavorable(self) -> HouseSet {
        HouseSet::of(self.unfavorable_houses())
    }

    /// [`Self::neutral_houses`] as a set.
    pub const fn neutral(self) -> HouseSet {
        HouseSet::of(self.neutral_houses())
    }

    /// Cusp examined first: the first favorable house.
    pub const fn primary_cusp(self) -> u8 {
        self.favorable_houses()[0]
    }

    /// All house groups.
    pub const fn all() -> &'static [HouseGroup; 11] {
        &ALL_HOUSE_GROUPS
    }
}

impl Display for HouseGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized house group name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown house group: {0}")]
pub struct ParseHouseGroupError(pub String);

impl FromStr for HouseGroup {
    type Err = ParseHouseGroupError;

    /// Accepts the short key, the variant name or the display name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_HOUSE_GROUPS
            .iter()
            .copied()
            .find(|g| {
                g.key().eq_ignore_ascii_case(needle)
                    || format!("{g:?}").eq_ignore_ascii_case(needle)
                    || g.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseHouseGroupError(s.to_string()))
    }
}

/// House name, e.g. `Self/Body` for house 1.
pub const fn house_name(house: u8) -> &'static str {
    match house {
        1 => "Self/Body",
        2 => "Wealth/Family",
        3 => "Siblings/Courage",
        4 => "Mother/Property",
        5 => "Children/Intelligence",
        6 => "Enemies/Disease",
        7 => "Spouse/Partnership",
        8 => "Longevity/Obstacles",
        9 => "Fortune/Father",
        10 => "Career/Status",
        11 => "Gains/Income",
        12 => "Losses/Moksha",
        _ => "Unknown",
    }
}

/// Houses whose signification supports the matters of a given cusp.
pub const fn cusp_favorable(house: u8) -> HouseSet {
    match house {
        1 => HouseSet::of(&[1, 5, 9, 10, 11]),
        2 => HouseSet::of(&[2, 6, 10, 11]),
        3 => HouseSet::of(&[3, 6, 10, 11]),
        4 => HouseSet::of(&[4, 9, 11, 12]),
        5 => HouseSet::of(&[2, 5, 11]),
        6 => HouseSet::of(&[6, 10, 11]),
        7 => HouseSet::of(&[2, 7, 11]),
        8 => HouseSet::of(&[3, 8, 12]),
        9 => HouseSet::of(&[5, 9, 10, 11]),
        10 => HouseSet::of(&[2, 6, 10, 11]),
        11 => HouseSet::of(&[2, 6, 10, 11]),
        12 => HouseSet::of(&[5, 9, 12]),
        _ => HouseSet::EMPTY,
    }
}

/// Houses whose signification obstructs the matters of a given cusp.
pub const fn cusp_unfavorable(house: u8) -> HouseSet {
    match house {
        1 => HouseSet::of(&[6, 8, 12]),
        2 => HouseSet::of(&[5, 8, 12]),
        3 => HouseSet::of(&[8, 12]),
        4 => HouseSet::of(&[3, 6, 8]),
        5 => HouseSet::of(&[1, 4, 10]),
        6 => HouseSet::of(&[1, 5, 11]),
        7 => HouseSet::of(&[1, 6, 10, 12]),
        8 => HouseSet::of(&[1, 6]),
        9 => HouseSet::of(&[6, 8, 12]),
        10 => HouseSet::of(&[5, 8, 12]),
        11 => HouseSet::of(&[5, 8, 12]),
        12 => HouseSet::of(&[2, 6, 10, 11]),
        _ => HouseSet::EMPTY,
    }
}
