use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::observations::{
    BuccalOcclusion, ClinicalObservations, CrossbiteSeverity, UpperArchDiscrepancy,
    VerticalRelationship, validate_dac_grade,
};
use crate::error::InvalidInputError;

/// Raw form state as submitted by a presentation layer. Categorical fields
/// may still be unset; yes/no flags count as "no" until answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ObservationSelections {
    pub dac_grade: Option<u8>,
    pub crossbite: Option<CrossbiteSeverity>,
    pub lingual_crossbite_no_contact: bool,
    pub upper_arch: Option<UpperArchDiscrepancy>,
    pub impacted_teeth: bool,
    pub supernumerary_teeth: bool,
    pub submerged_deciduous: bool,
    pub extensive_hypodontia: bool,
    pub buccal_occlusion: Option<BuccalOcclusion>,
    pub vertical_relationship: Option<VerticalRelationship>,
    pub extreme_lateral_openbite: bool,
}

impl ObservationSelections {
    /// Layer `overrides` on top of `self`. Set values in `overrides` win;
    /// a flag raised on either side stays raised.
    pub fn merge(self, overrides: ObservationSelections) -> Self {
        Self {
            dac_grade: overrides.dac_grade.or(self.dac_grade),
            crossbite: overrides.crossbite.or(self.crossbite),
            lingual_crossbite_no_contact: overrides.lingual_crossbite_no_contact
                || self.lingual_crossbite_no_contact,
            upper_arch: overrides.upper_arch.or(self.upper_arch),
            impacted_teeth: overrides.impacted_teeth || self.impacted_teeth,
            supernumerary_teeth: overrides.supernumerary_teeth || self.supernumerary_teeth,
            submerged_deciduous: overrides.submerged_deciduous || self.submerged_deciduous,
            extensive_hypodontia: overrides.extensive_hypodontia || self.extensive_hypodontia,
            buccal_occlusion: overrides.buccal_occlusion.or(self.buccal_occlusion),
            vertical_relationship: overrides.vertical_relationship.or(self.vertical_relationship),
            extreme_lateral_openbite: overrides.extreme_lateral_openbite
                || self.extreme_lateral_openbite,
        }
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, InvalidInputError> {
    value.ok_or_else(|| InvalidInputError::MissingField {
        field: field.to_string(),
    })
}

impl TryFrom<ObservationSelections> for ClinicalObservations {
    type Error = InvalidInputError;

    /// Fields are checked in form order; the first problem is reported.
    fn try_from(s: ObservationSelections) -> Result<Self, Self::Error> {
        let dac_grade = required(s.dac_grade, "dac_grade")?;
        validate_dac_grade(dac_grade)?;

        Ok(Self {
            dac_grade,
            crossbite: required(s.crossbite, "crossbite")?,
            lingual_crossbite_no_contact: s.lingual_crossbite_no_contact,
            upper_arch: required(s.upper_arch, "upper_arch")?,
            impacted_teeth: s.impacted_teeth,
            supernumerary_teeth: s.supernumerary_teeth,
            submerged_deciduous: s.submerged_deciduous,
            extensive_hypodontia: s.extensive_hypodontia,
            buccal_occlusion: required(s.buccal_occlusion, "buccal_occlusion")?,
            vertical_relationship: required(s.vertical_relationship, "vertical_relationship")?,
            extreme_lateral_openbite: s.extreme_lateral_openbite,
        })
    }
}

impl From<ClinicalObservations> for ObservationSelections {
    fn from(o: ClinicalObservations) -> Self {
        Self {
            dac_grade: Some(o.dac_grade),
            crossbite: Some(o.crossbite),
            lingual_crossbite_no_contact: o.lingual_crossbite_no_contact,
            upper_arch: Some(o.upper_arch),
            impacted_teeth: o.impacted_teeth,
            supernumerary_teeth: o.supernumerary_teeth,
            submerged_deciduous: o.submerged_deciduous,
            extensive_hypodontia: o.extensive_hypodontia,
            buccal_occlusion: Some(o.buccal_occlusion),
            vertical_relationship: Some(o.vertical_relationship),
            extreme_lateral_openbite: o.extreme_lateral_openbite,
        }
    }
}
