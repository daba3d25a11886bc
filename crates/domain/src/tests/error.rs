// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{CPID, OCID};
use crate::{
    Cpid, DataError, DomainRuleError, Ocid, QualificationId, RequirementDataType,
    RequirementResponseId, ValidationError,
};

const QUALIFICATION_ID: &str = "8f1b8bba-6a2e-4c8f-bd0c-6a4b8e5f2f10";

fn cpid() -> Cpid {
    Cpid::parse(CPID).unwrap()
}

fn ocid() -> Ocid {
    Ocid::parse(OCID).unwrap()
}

fn qualification_id() -> QualificationId {
    QualificationId::parse(QUALIFICATION_ID).unwrap()
}

#[test]
fn test_data_error_codes() {
    let cases: Vec<(DataError, &str)> = vec![
        (
            DataError::MissingRequiredAttribute {
                name: String::from("cpid"),
            },
            "DR-1",
        ),
        (
            DataError::UnknownValue {
                name: String::from("pmd"),
                expected_values: vec![String::from("CF")],
                actual_value: String::from("XX"),
            },
            "DR-3",
        ),
        (
            DataError::DataMismatchToPattern {
                name: String::from("cpid"),
                pattern: String::from("^x$"),
                actual_value: String::from("y"),
            },
            "DR-5",
        ),
        (
            DataError::EmptyString {
                name: String::from("requirement.id"),
            },
            "DR-10",
        ),
    ];

    for (error, code) in cases {
        assert_eq!(error.code(), code);
    }
}

#[test]
fn test_unknown_value_lists_expected_values() {
    let error: DataError = DataError::UnknownValue {
        name: String::from("operationType"),
        expected_values: vec![String::from("qualification"), String::from("qualificationConsideration")],
        actual_value: String::from("qualificationProtocol"),
    };

    assert_eq!(error.name(), "operationType");
    assert_eq!(
        error.description(),
        "Attribute value mismatch of 'operationType' with one of enum expected values. Expected values: 'qualification, qualificationConsideration', actual value: 'qualificationProtocol'."
    );
}

#[test]
fn test_rank_not_found_description() {
    let error: ValidationError = ValidationError::QualificationsNotFoundOnRankQualifications {
        cpid: cpid(),
        ocid: ocid(),
    };

    assert_eq!(error.code(), "VR.COM-7.13.1");
    assert_eq!(
        error.description(),
        format!("Qualifications not found by cpid={CPID} and ocid={OCID}.")
    );
    assert_eq!(error.entity_id(), None);
}

#[test]
fn test_protocol_template_keeps_trailing_quotes() {
    let error: ValidationError =
        ValidationError::UnsuitableQualificationFoundOnCheckQualificationsForProtocol {
            cpid: cpid(),
            ocid: ocid(),
            qualification_id: qualification_id(),
        };

    assert_eq!(error.code(), "VR.COM-7.24.2");
    assert_eq!(
        error.description(),
        format!(
            "Unsuitable qualification found by cpid '{CPID}', ocid '{OCID}', id '{QUALIFICATION_ID}''."
        )
    );
    assert_eq!(error.entity_id(), Some(String::from(QUALIFICATION_ID)));
}

#[test]
fn test_value_type_mismatch_names_both_types() {
    let error: ValidationError = ValidationError::ValueDataTypeMismatchOnCheckDeclaration {
        expected: RequirementDataType::Boolean,
        actual: RequirementDataType::String,
    };

    assert_eq!(error.code(), "VR.COM-7.16.3");
    assert_eq!(
        error.description(),
        "Requirement datatype mismatch, expected='boolean' , actual='string'."
    );
}

#[test]
fn test_invalid_response_id_description() {
    let actual: RequirementResponseId =
        RequirementResponseId::parse("11111111-1111-4111-8111-111111111111").unwrap();
    let expected: RequirementResponseId =
        RequirementResponseId::parse("22222222-2222-4222-8222-222222222222").unwrap();
    let error: ValidationError =
        ValidationError::InvalidRequirementResponseIdOnCheckDeclaration { actual, expected };

    assert_eq!(error.code(), "VR.COM-7.16.4");
    assert_eq!(
        error.description(),
        "Invalid Requirement Response Id, actual='11111111-1111-4111-8111-111111111111', expected='22222222-2222-4222-8222-222222222222'."
    );
}

#[test]
fn test_not_found_variants_share_template_but_not_code() {
    let on_declaration: ValidationError = ValidationError::QualificationNotFoundOnDoDeclaration {
        cpid: cpid(),
        ocid: ocid(),
        qualification_id: qualification_id(),
    };
    let on_access: ValidationError =
        ValidationError::QualificationNotFoundByCheckAccessToQualification {
            cpid: cpid(),
            ocid: ocid(),
            qualification_id: qualification_id(),
        };

    assert_eq!(on_declaration.description(), on_access.description());
    assert_eq!(on_declaration.code(), "VR.COM-7.19.1");
    assert_eq!(on_access.code(), "VR.COM-7.14.3");
}

#[test]
fn test_domain_rule_error_codes() {
    let scale: DomainRuleError = DomainRuleError::InvalidScale {
        class_name: String::from("Scoring"),
        current_scale: 4,
        available_scale: 3,
    };

    assert_eq!(scale.code(), "DM-1");
    assert_eq!(
        scale.description(),
        "Invalid scale (4) for attribute 'Scoring'. Available scale: 3."
    );
}
