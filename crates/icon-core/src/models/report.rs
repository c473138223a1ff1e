use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A line item that can appear in a score report.
///
/// Crossbite and its lingual override are mutually exclusive, as are the
/// vertical relationship and the extreme lateral openbite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Component {
    DentalAesthetics,
    Crossbite,
    PosteriorLingualCrossbite,
    UpperArch,
    ImpactedTeeth,
    SupernumeraryTeeth,
    SubmergedDeciduousTeeth,
    ExtensiveHypodontia,
    BuccalOcclusion,
    VerticalRelationship,
    ExtremeLateralOpenbite,
}

impl Component {
    pub fn label(self) -> &'static str {
        match self {
            Self::DentalAesthetics => "Dental Aesthetics",
            Self::Crossbite => "Crossbite",
            Self::PosteriorLingualCrossbite => "Posterior Lingual Crossbite",
            Self::UpperArch => "Upper Arch",
            Self::ImpactedTeeth => "Impacted Teeth",
            Self::SupernumeraryTeeth => "Supernumerary Teeth",
            Self::SubmergedDeciduousTeeth => "Submerged Deciduous Teeth",
            Self::ExtensiveHypodontia => "Extensive Hypodontia",
            Self::BuccalOcclusion => "Buccal Occlusion",
            Self::VerticalRelationship => "Vertical Relationship",
            Self::ExtremeLateralOpenbite => "Extreme Lateral Openbite",
        }
    }

    pub fn is_anomaly(self) -> bool {
        matches!(
            self,
            Self::ImpactedTeeth
                | Self::SupernumeraryTeeth
                | Self::SubmergedDeciduousTeeth
                | Self::ExtensiveHypodontia
        )
    }
}

/// One report line, e.g. "Upper Arch: 10 points".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScore {
    pub component: Component,
    pub label: String,
    pub points: u32,
}

impl fmt::Display for ComponentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} points", self.label, self.points)
    }
}

/// Treatment-need classification of a total ICON score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentNeed {
    /// Grade 1-2.
    NoneOrMinor,
    /// Grade 3.
    Borderline,
    /// Grade 4-5.
    Definite,
}

impl TreatmentNeed {
    pub fn label(self) -> &'static str {
        match self {
            Self::NoneOrMinor => "Little or No Need (Grade 1-2)",
            Self::Borderline => "Borderline Need (Grade 3)",
            Self::Definite => "Definite Need for Treatment (Grade 4-5)",
        }
    }
}

impl fmt::Display for TreatmentNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything derived from one set of observations.
///
/// `component_scores` lists one line per reported component. When several
/// anomaly flags are raised each gets its own line, but the anomaly
/// contribution to `total_score` is counted once, so the lines can sum to
/// more than the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub component_scores: Vec<ComponentScore>,
    pub total_score: u32,
    pub treatment_need: TreatmentNeed,
    pub interpretation_text: String,
}

impl ScoreReport {
    /// Points on the line for `component`, if the report has one.
    pub fn points_for(&self, component: Component) -> Option<u32> {
        self.component_scores
            .iter()
            .find(|c| c.component == component)
            .map(|c| c.points)
    }

    pub fn has_line(&self, component: Component) -> bool {
        self.points_for(component).is_some()
    }
}
