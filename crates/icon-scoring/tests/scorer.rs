use icon_core::error::InvalidInputError;
use icon_core::models::observations::{
    BuccalOcclusion, ClinicalObservations, CrossbiteSeverity, UpperArchDiscrepancy,
    VerticalRelationship,
};
use icon_core::models::report::{Component, TreatmentNeed};
use icon_core::models::selections::ObservationSelections;
use icon_scoring::reference;
use icon_scoring::{classify, score, score_selections};

/// Grade 1 with every other field at its lowest value.
fn baseline() -> ClinicalObservations {
    ClinicalObservations {
        dac_grade: 1,
        crossbite: CrossbiteSeverity::None,
        lingual_crossbite_no_contact: false,
        upper_arch: UpperArchDiscrepancy::None,
        impacted_teeth: false,
        supernumerary_teeth: false,
        submerged_deciduous: false,
        extensive_hypodontia: false,
        buccal_occlusion: BuccalOcclusion::Normal,
        vertical_relationship: VerticalRelationship::Normal,
        extreme_lateral_openbite: false,
    }
}

#[test]
fn aesthetics_points_follow_the_grade() {
    for grade in 1..=10u8 {
        let report = score(ClinicalObservations {
            dac_grade: grade,
            ..baseline()
        })
        .unwrap();
        let expected = u32::from(grade - 1) * 10;
        assert_eq!(report.points_for(Component::DentalAesthetics), Some(expected));
        assert_eq!(report.total_score, expected);
        assert_eq!(
            report.component_scores[0].label,
            format!("Dental Aesthetics (Grade {grade})")
        );
    }
}

#[test]
fn lingual_crossbite_overrides_absent_crossbite() {
    let report = score(ClinicalObservations {
        lingual_crossbite_no_contact: true,
        ..baseline()
    })
    .unwrap();

    assert_eq!(report.points_for(Component::PosteriorLingualCrossbite), Some(10));
    assert!(!report.has_line(Component::Crossbite));
    assert_eq!(report.total_score, 10);
}

#[test]
fn lingual_crossbite_does_not_stack_with_severity() {
    let report = score(ClinicalObservations {
        crossbite: CrossbiteSeverity::Major,
        lingual_crossbite_no_contact: true,
        ..baseline()
    })
    .unwrap();
    assert_eq!(report.total_score, 10);
}

#[test]
fn major_crossbite_without_lingual_keeps_crossbite_label() {
    let report = score(ClinicalObservations {
        crossbite: CrossbiteSeverity::Major,
        ..baseline()
    })
    .unwrap();

    let line = report
        .component_scores
        .iter()
        .find(|l| l.component == Component::Crossbite)
        .unwrap();
    assert_eq!(line.label, "Crossbite");
    assert_eq!(line.points, 10);
    assert!(!report.has_line(Component::PosteriorLingualCrossbite));
}

#[test]
fn single_anomaly_adds_twenty() {
    for observations in [
        ClinicalObservations {
            impacted_teeth: true,
            ..baseline()
        },
        ClinicalObservations {
            supernumerary_teeth: true,
            ..baseline()
        },
        ClinicalObservations {
            submerged_deciduous: true,
            ..baseline()
        },
        ClinicalObservations {
            extensive_hypodontia: true,
            ..baseline()
        },
    ] {
        let report = score(observations).unwrap();
        assert_eq!(report.total_score, 20);
        assert_eq!(report.component_scores.len(), 6);
    }
}

#[test]
fn all_anomalies_still_add_only_twenty() {
    let report = score(ClinicalObservations {
        impacted_teeth: true,
        supernumerary_teeth: true,
        submerged_deciduous: true,
        extensive_hypodontia: true,
        ..baseline()
    })
    .unwrap();

    assert_eq!(report.total_score, 20);

    let anomaly_lines: Vec<_> = report
        .component_scores
        .iter()
        .filter(|l| l.component.is_anomaly())
        .map(|l| l.to_string())
        .collect();
    assert_eq!(
        anomaly_lines,
        vec![
            "Impacted Teeth: 20 points",
            "Supernumerary Teeth: 20 points",
            "Submerged Deciduous Teeth: 20 points",
            "Extensive Hypodontia: 20 points",
        ]
    );
}

#[test]
fn lateral_openbite_overrides_normal_vertical() {
    let report = score(ClinicalObservations {
        extreme_lateral_openbite: true,
        ..baseline()
    })
    .unwrap();

    let last = report.component_scores.last().unwrap();
    assert_eq!(last.label, "Extreme Lateral Openbite");
    assert_eq!(last.points, 10);
    assert!(!report.has_line(Component::VerticalRelationship));
}

#[test]
fn classification_boundaries() {
    assert_eq!(classify(0), TreatmentNeed::NoneOrMinor);
    assert_eq!(classify(30), TreatmentNeed::NoneOrMinor);
    assert_eq!(classify(31), TreatmentNeed::Borderline);
    assert_eq!(classify(42), TreatmentNeed::Borderline);
    assert_eq!(classify(43), TreatmentNeed::Definite);
    assert_eq!(classify(150), TreatmentNeed::Definite);
}

#[test]
fn scenario_a_demonstration_case_is_definite_need() {
    let report = score(ClinicalObservations::demonstration()).unwrap();

    let lines: Vec<String> = report.component_scores.iter().map(|l| l.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Dental Aesthetics (Grade 4): 30 points",
            "Crossbite: 0 points",
            "Upper Arch: 10 points",
            "Buccal Occlusion: 10 points",
            "Vertical Relationship: 0 points",
        ]
    );
    assert_eq!(report.total_score, 50);
    assert_eq!(report.treatment_need, TreatmentNeed::Definite);
    assert_eq!(report.interpretation_text, reference::DEFINITE_NEED_INTERPRETATION);
}

#[test]
fn scenario_b_baseline_has_no_need() {
    let report = score(baseline()).unwrap();
    assert_eq!(report.total_score, 0);
    assert_eq!(report.treatment_need, TreatmentNeed::NoneOrMinor);
    assert_eq!(report.interpretation_text, reference::MINIMAL_NEED_INTERPRETATION);
}

#[test]
fn scenario_c_one_anomaly_moves_into_borderline() {
    let minor = ClinicalObservations {
        crossbite: CrossbiteSeverity::Minor,
        upper_arch: UpperArchDiscrepancy::Minor,
        buccal_occlusion: BuccalOcclusion::Minor,
        vertical_relationship: VerticalRelationship::Minor,
        ..baseline()
    };
    let report = score(minor).unwrap();
    assert_eq!(report.total_score, 20);
    assert_eq!(report.treatment_need, TreatmentNeed::NoneOrMinor);

    let report = score(ClinicalObservations {
        submerged_deciduous: true,
        ..minor
    })
    .unwrap();
    assert_eq!(report.total_score, 40);
    assert_eq!(report.treatment_need, TreatmentNeed::Borderline);
    assert_eq!(report.interpretation_text, reference::BORDERLINE_NEED_INTERPRETATION);
}

#[test]
fn maximum_case_scores_one_hundred_fifty() {
    let report = score(ClinicalObservations {
        dac_grade: 10,
        crossbite: CrossbiteSeverity::Major,
        lingual_crossbite_no_contact: true,
        upper_arch: UpperArchDiscrepancy::Major,
        impacted_teeth: true,
        supernumerary_teeth: true,
        submerged_deciduous: true,
        extensive_hypodontia: true,
        buccal_occlusion: BuccalOcclusion::Major,
        vertical_relationship: VerticalRelationship::Major,
        extreme_lateral_openbite: true,
    })
    .unwrap();
    assert_eq!(report.total_score, 150);
    assert_eq!(report.total_score, icon_scoring::catalog::max_total());
}

#[test]
fn scoring_is_idempotent() {
    let observations = ClinicalObservations {
        crossbite: CrossbiteSeverity::Minor,
        extensive_hypodontia: true,
        ..ClinicalObservations::demonstration()
    };
    assert_eq!(score(observations).unwrap(), score(observations).unwrap());
}

#[test]
fn out_of_range_grades_fail_validation() {
    for grade in [0, 11] {
        let err = score(ClinicalObservations {
            dac_grade: grade,
            ..baseline()
        })
        .unwrap_err();
        assert_eq!(err, InvalidInputError::DacGradeOutOfRange { grade });
    }
}

#[test]
fn incomplete_selections_fail_validation() {
    let err = score_selections(ObservationSelections {
        dac_grade: Some(5),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::MissingField {
            field: "crossbite".to_string()
        }
    );
}
