use icon_core::error::InvalidInputError;
use icon_core::models::observations::{
    ClinicalObservations, CrossbiteSeverity, VerticalRelationship,
};
use icon_core::models::report::{Component, ComponentScore, ScoreReport, TreatmentNeed};
use icon_core::models::selections::ObservationSelections;

use crate::reference;

/// Lowest total classified as borderline need.
pub const BORDERLINE_THRESHOLD: u32 = 31;

/// Lowest total classified as definite need.
pub const DEFINITE_THRESHOLD: u32 = 43;

/// Points for the overriding signal in the crossbite and vertical components.
const OVERRIDE_POINTS: u32 = 10;

/// Points for any additional dental anomaly. Not cumulative.
pub const ANOMALY_POINTS: u32 = 20;

/// Score one assessment.
///
/// Validation runs before anything is computed, so an error never comes
/// with a partial report.
pub fn score(observations: ClinicalObservations) -> Result<ScoreReport, InvalidInputError> {
    observations.validate()?;

    let mut lines = Vec::with_capacity(6);

    let grade = observations.dac_grade;
    lines.push(ComponentScore {
        component: Component::DentalAesthetics,
        label: format!("{} (Grade {grade})", Component::DentalAesthetics.label()),
        points: aesthetics_points(grade),
    });

    lines.push(crossbite_line(
        observations.crossbite,
        observations.lingual_crossbite_no_contact,
    ));

    lines.push(line(Component::UpperArch, observations.upper_arch.points()));

    let (anomalies, anomaly_score) = anomaly_lines(&observations);
    lines.extend(anomalies);

    lines.push(line(
        Component::BuccalOcclusion,
        observations.buccal_occlusion.points(),
    ));

    lines.push(vertical_line(
        observations.vertical_relationship,
        observations.extreme_lateral_openbite,
    ));

    // Anomaly lines are excluded here and added once as `anomaly_score`.
    let total_score = lines
        .iter()
        .filter(|l| !l.component.is_anomaly())
        .map(|l| l.points)
        .sum::<u32>()
        + anomaly_score;

    let treatment_need = classify(total_score);

    tracing::debug!(
        dac_grade = grade,
        total_score,
        treatment_need = ?treatment_need,
        "scored ICON assessment"
    );

    Ok(ScoreReport {
        component_scores: lines,
        total_score,
        treatment_need,
        interpretation_text: reference::interpretation(treatment_need).to_string(),
    })
}

/// Validate raw form selections, then score them.
pub fn score_selections(
    selections: ObservationSelections,
) -> Result<ScoreReport, InvalidInputError> {
    score(ClinicalObservations::try_from(selections)?)
}

/// Map a total ICON score to its treatment-need band.
pub fn classify(total_score: u32) -> TreatmentNeed {
    if total_score >= DEFINITE_THRESHOLD {
        TreatmentNeed::Definite
    } else if total_score >= BORDERLINE_THRESHOLD {
        TreatmentNeed::Borderline
    } else {
        TreatmentNeed::NoneOrMinor
    }
}

fn aesthetics_points(grade: u8) -> u32 {
    (u32::from(grade) - 1) * 10
}

fn line(component: Component, points: u32) -> ComponentScore {
    ComponentScore {
        component,
        label: component.label().to_string(),
        points,
    }
}

fn crossbite_line(severity: CrossbiteSeverity, lingual_no_contact: bool) -> ComponentScore {
    if lingual_no_contact {
        line(
            Component::PosteriorLingualCrossbite,
            severity.points().max(OVERRIDE_POINTS),
        )
    } else {
        line(Component::Crossbite, severity.points())
    }
}

fn vertical_line(
    relationship: VerticalRelationship,
    extreme_lateral_openbite: bool,
) -> ComponentScore {
    if extreme_lateral_openbite {
        line(
            Component::ExtremeLateralOpenbite,
            relationship.points().max(OVERRIDE_POINTS),
        )
    } else {
        line(Component::VerticalRelationship, relationship.points())
    }
}

/// One line per raised flag, plus the capped contribution to the total.
fn anomaly_lines(observations: &ClinicalObservations) -> (Vec<ComponentScore>, u32) {
    let flags = [
        (Component::ImpactedTeeth, observations.impacted_teeth),
        (Component::SupernumeraryTeeth, observations.supernumerary_teeth),
        (Component::SubmergedDeciduousTeeth, observations.submerged_deciduous),
        (Component::ExtensiveHypodontia, observations.extensive_hypodontia),
    ];

    let mut lines = Vec::new();
    let mut anomaly_score = 0;
    for (component, present) in flags {
        if present {
            anomaly_score = anomaly_score.max(ANOMALY_POINTS);
            lines.push(line(component, ANOMALY_POINTS));
        }
    }
    (lines, anomaly_score)
}
