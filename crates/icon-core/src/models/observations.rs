use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{InvalidInputError, ParseSelectionError};

/// Lowest and highest grade on the 10-grade Dental Aesthetic Component scale.
pub const DAC_GRADE_MIN: u8 = 1;
pub const DAC_GRADE_MAX: u8 = 10;

/// Crossbite measured as the RCP-ICP discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CrossbiteSeverity {
    None,
    /// RCP-ICP discrepancy of 1mm or less.
    Minor,
    /// RCP-ICP discrepancy greater than 1mm.
    Major,
}

impl CrossbiteSeverity {
    pub const ALL: [Self; 3] = [Self::None, Self::Minor, Self::Major];

    pub fn points(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Minor => 5,
            Self::Major => 10,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    /// The wording shown on the assessment form.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No crossbite",
            Self::Minor => "Crossbite ≤1mm RCP-ICP",
            Self::Major => "Crossbite >1mm RCP-ICP",
        }
    }
}

/// Crowding or spacing in the worst segment of the upper arch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UpperArchDiscrepancy {
    None,
    /// 3mm or less.
    Minor,
    /// More than 3mm.
    Major,
}

impl UpperArchDiscrepancy {
    pub const ALL: [Self; 3] = [Self::None, Self::Minor, Self::Major];

    pub fn points(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Minor => 5,
            Self::Major => 10,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No discrepancy",
            Self::Minor => "≤3mm discrepancy",
            Self::Major => ">3mm discrepancy",
        }
    }
}

/// Anteroposterior relationship of the worst buccal segment.
/// One unit is a full cusp width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BuccalOcclusion {
    Normal,
    /// Up to half a unit.
    Minor,
    /// More than half a unit.
    Major,
}

impl BuccalOcclusion {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Minor, Self::Major];

    pub fn points(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Minor => 5,
            Self::Major => 10,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Minor => "≤1/2 unit discrepancy",
            Self::Major => ">1/2 unit discrepancy",
        }
    }
}

/// Anterior vertical relationship (openbite or deep overbite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VerticalRelationship {
    /// Overbite between 0 and 3.5mm.
    Normal,
    /// Openbite 1-2mm, or deep bite of 3.5mm or more without trauma.
    Minor,
    /// Openbite over 2mm, or deep bite with trauma.
    Major,
}

impl VerticalRelationship {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Minor, Self::Major];

    pub fn points(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Minor => 5,
            Self::Major => 10,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Minor => "Openbite 1-2mm or deep bite ≥3.5mm",
            Self::Major => "Openbite >2mm or deep bite with trauma",
        }
    }
}

/// Match a selection against each value's key (case-insensitive) or its
/// exact form label.
fn parse_selection<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    key: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
) -> Result<T, ParseSelectionError> {
    let trimmed = value.trim();
    all.iter()
        .copied()
        .find(|v| key(*v).eq_ignore_ascii_case(trimmed) || label(*v) == trimmed)
        .ok_or_else(|| ParseSelectionError {
            field,
            value: value.to_string(),
        })
}

impl FromStr for CrossbiteSeverity {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selection("crossbite", s, &Self::ALL, Self::key, Self::label)
    }
}

impl FromStr for UpperArchDiscrepancy {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selection("upper arch", s, &Self::ALL, Self::key, Self::label)
    }
}

impl FromStr for BuccalOcclusion {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selection("buccal occlusion", s, &Self::ALL, Self::key, Self::label)
    }
}

impl FromStr for VerticalRelationship {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selection("vertical relationship", s, &Self::ALL, Self::key, Self::label)
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(
    CrossbiteSeverity,
    UpperArchDiscrepancy,
    BuccalOcclusion,
    VerticalRelationship
);

/// A complete snapshot of one assessment. Built once, scored, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalObservations {
    /// Dental Aesthetic Component grade, 1-10.
    pub dac_grade: u8,
    pub crossbite: CrossbiteSeverity,
    /// Posterior lingual crossbite with no functional contact.
    pub lingual_crossbite_no_contact: bool,
    pub upper_arch: UpperArchDiscrepancy,
    /// Impacted teeth, excluding third molars.
    pub impacted_teeth: bool,
    pub supernumerary_teeth: bool,
    pub submerged_deciduous: bool,
    /// More than one missing tooth per quadrant.
    pub extensive_hypodontia: bool,
    pub buccal_occlusion: BuccalOcclusion,
    pub vertical_relationship: VerticalRelationship,
    /// Lateral openbite greater than 4mm.
    pub extreme_lateral_openbite: bool,
}

impl ClinicalObservations {
    /// The case the assessment form is pre-filled with.
    pub fn demonstration() -> Self {
        Self {
            dac_grade: 4,
            crossbite: CrossbiteSeverity::None,
            lingual_crossbite_no_contact: false,
            upper_arch: UpperArchDiscrepancy::Major,
            impacted_teeth: false,
            supernumerary_teeth: false,
            submerged_deciduous: false,
            extensive_hypodontia: false,
            buccal_occlusion: BuccalOcclusion::Major,
            vertical_relationship: VerticalRelationship::Normal,
            extreme_lateral_openbite: false,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_dac_grade(self.dac_grade)
    }
}

pub fn validate_dac_grade(grade: u8) -> Result<(), InvalidInputError> {
    if (DAC_GRADE_MIN..=DAC_GRADE_MAX).contains(&grade) {
        Ok(())
    } else {
        Err(InvalidInputError::DacGradeOutOfRange { grade })
    }
}
