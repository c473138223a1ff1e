//! Static reference texts shown alongside a score report.

use icon_core::models::report::TreatmentNeed;

use crate::catalog;
use crate::scorer::{BORDERLINE_THRESHOLD, DEFINITE_THRESHOLD};

pub const DEFINITE_NEED_INTERPRETATION: &str = "\
The patient has a definite need for orthodontic treatment.
This includes cases with severe malocclusions that are likely to:
- Affect dental health and function
- Impact psychosocial well-being
- Require complex treatment planning";

pub const BORDERLINE_NEED_INTERPRETATION: &str = "\
The patient is in the borderline range for treatment need.
Consider:
- Patient's concerns and expectations
- Potential benefits versus risks
- Alternative treatment options
A detailed case assessment is recommended.";

pub const MINIMAL_NEED_INTERPRETATION: &str = "\
The patient has little or no objective need for orthodontic treatment.
Treatment would be primarily for aesthetic improvement.
Consider whether the benefits justify the costs and risks.";

/// Description of the 10-grade Dental Aesthetic Component photograph scale.
pub const DAC_SCALE: &str = "\
Dental Aesthetic Component (DAC) Scale (1-10):

Grade 1: Extremely minor malocclusions (displacements <1mm)
Grade 2: Minor malocclusions (displacements 1-2mm, overjet 3.5-6mm)
Grade 3: Borderline need (displacements 2-4mm, overjet 5-6mm)
Grade 4: Definite need (displacements >4mm, overjet >6mm)
Grade 5: Severe need (overjet >9mm, reverse overjet >3.5mm)

Grades 6-10 represent increasing severity of:
- Openbites
- Deep bites with trauma
- Crossbites with functional shifts
- Impacted teeth
- Other severe anomalies";

const CLINICAL_NOTES: &str = "\
Clinical Applications:
- Objective treatment need assessment
- Case prioritization
- Treatment complexity evaluation
- Outcome comparison

Limitations:
- Doesn't assess skeletal relationships
- Doesn't evaluate facial aesthetics
- Doesn't consider patient preferences";

/// The narrative block for a treatment-need band.
pub fn interpretation(need: TreatmentNeed) -> &'static str {
    match need {
        TreatmentNeed::Definite => DEFINITE_NEED_INTERPRETATION,
        TreatmentNeed::Borderline => BORDERLINE_NEED_INTERPRETATION,
        TreatmentNeed::NoneOrMinor => MINIMAL_NEED_INTERPRETATION,
    }
}

/// The ICON interpretation guide. Thresholds and component weightings come
/// from the scorer and the component catalog.
pub fn interpretation_guide() -> String {
    let mut guide = String::from("ICON SCORE INTERPRETATION GUIDE:\n\n");

    guide.push_str("Treatment Need Categories:\n");
    guide.push_str(&format!(
        "- <{BORDERLINE_THRESHOLD} points: Little or no need (Grade 1-2)\n"
    ));
    guide.push_str(&format!(
        "- {BORDERLINE_THRESHOLD}-{} points: Borderline need (Grade 3)\n",
        DEFINITE_THRESHOLD - 1
    ));
    guide.push_str(&format!(
        "- ≥{DEFINITE_THRESHOLD} points: Definite need (Grade 4-5)\n\n"
    ));

    guide.push_str("Component Weightings:\n");
    for (i, c) in catalog::components().iter().enumerate() {
        guide.push_str(&format!(
            "{}. {} ({}-{} points): {}\n",
            i + 1,
            c.name,
            c.range.min,
            c.range.max,
            c.description
        ));
    }
    guide.push('\n');

    guide.push_str(CLINICAL_NOTES);
    guide
}
