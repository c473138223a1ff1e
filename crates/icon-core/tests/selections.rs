use icon_core::error::InvalidInputError;
use icon_core::models::observations::{
    BuccalOcclusion, ClinicalObservations, CrossbiteSeverity, UpperArchDiscrepancy,
    VerticalRelationship,
};
use icon_core::models::selections::ObservationSelections;

fn complete() -> ObservationSelections {
    ObservationSelections::from(ClinicalObservations::demonstration())
}

#[test]
fn complete_selections_convert() {
    let observations = ClinicalObservations::try_from(complete()).unwrap();
    assert_eq!(observations, ClinicalObservations::demonstration());
}

#[test]
fn missing_dac_grade_is_reported_first() {
    let selections = ObservationSelections::default();
    let err = ClinicalObservations::try_from(selections).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::MissingField {
            field: "dac_grade".to_string()
        }
    );
}

#[test]
fn missing_categorical_field_is_rejected() {
    let selections = ObservationSelections {
        vertical_relationship: None,
        ..complete()
    };
    let err = ClinicalObservations::try_from(selections).unwrap_err();
    assert_eq!(err.to_string(), "missing required field: vertical_relationship");
}

#[test]
fn out_of_range_grades_are_rejected() {
    for grade in [0, 11, 255] {
        let selections = ObservationSelections {
            dac_grade: Some(grade),
            ..complete()
        };
        assert_eq!(
            ClinicalObservations::try_from(selections).unwrap_err(),
            InvalidInputError::DacGradeOutOfRange { grade }
        );
    }
}

#[test]
fn unanswered_flags_default_to_no() {
    let json = r#"{
        "dac_grade": 2,
        "crossbite": "minor",
        "upper_arch": "none",
        "buccal_occlusion": "normal",
        "vertical_relationship": "major"
    }"#;
    let selections: ObservationSelections = serde_json::from_str(json).unwrap();
    let observations = ClinicalObservations::try_from(selections).unwrap();

    assert_eq!(observations.crossbite, CrossbiteSeverity::Minor);
    assert_eq!(observations.vertical_relationship, VerticalRelationship::Major);
    assert!(!observations.lingual_crossbite_no_contact);
    assert!(!observations.impacted_teeth);
    assert!(!observations.extreme_lateral_openbite);
}

#[test]
fn merge_prefers_overrides_and_keeps_raised_flags() {
    let base = ObservationSelections {
        dac_grade: Some(3),
        upper_arch: Some(UpperArchDiscrepancy::Minor),
        impacted_teeth: true,
        ..Default::default()
    };
    let overrides = ObservationSelections {
        dac_grade: Some(7),
        buccal_occlusion: Some(BuccalOcclusion::Minor),
        ..Default::default()
    };

    let merged = base.merge(overrides);
    assert_eq!(merged.dac_grade, Some(7));
    assert_eq!(merged.upper_arch, Some(UpperArchDiscrepancy::Minor));
    assert_eq!(merged.buccal_occlusion, Some(BuccalOcclusion::Minor));
    assert!(merged.impacted_teeth);
}

#[test]
fn selections_parse_from_keys_and_form_labels() {
    assert_eq!("major".parse::<CrossbiteSeverity>(), Ok(CrossbiteSeverity::Major));
    assert_eq!("Crossbite ≤1mm RCP-ICP".parse::<CrossbiteSeverity>(), Ok(CrossbiteSeverity::Minor));
    assert_eq!(">3mm discrepancy".parse::<UpperArchDiscrepancy>(), Ok(UpperArchDiscrepancy::Major));
    assert_eq!("NORMAL".parse::<BuccalOcclusion>(), Ok(BuccalOcclusion::Normal));
    assert_eq!(
        "Openbite 1-2mm or deep bite ≥3.5mm".parse::<VerticalRelationship>(),
        Ok(VerticalRelationship::Minor)
    );

    let err = "severe".parse::<VerticalRelationship>().unwrap_err();
    assert_eq!(err.to_string(), "unknown vertical relationship selection: 'severe'");
}

#[test]
fn validate_checks_directly_built_observations() {
    let observations = ClinicalObservations {
        dac_grade: 0,
        ..ClinicalObservations::demonstration()
    };
    assert_eq!(
        observations.validate(),
        Err(InvalidInputError::DacGradeOutOfRange { grade: 0 })
    );
    assert!(ClinicalObservations::demonstration().validate().is_ok());
}
