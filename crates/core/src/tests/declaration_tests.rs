// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    CPID, OCID, cpid, create_test_qualification, create_test_response, ocid, qualification_id,
    uuid,
};
use crate::{
    CheckDeclarationParams, Criterion, DeclaredQualification, DeclaredResponse,
    DoDeclarationParams, FindRequirementResponseByIdsParams, Requirement, RequirementGroup,
    check_declaration, do_declaration, find_requirement_responses,
};
use qualification_domain::{
    Qualification, RequirementDataType, RequirementResponse, RequirementResponseId,
    RequirementResponseValue, ValidationError,
};

fn response_id(seed: u32) -> RequirementResponseId {
    RequirementResponseId::parse(&uuid(seed)).unwrap()
}

/// A declaration of `value` for `requirement` checked against a tender whose
/// requirements are `REQ-1` (boolean) and `REQ-2` (number).
fn check_params(
    response_seed: u32,
    requirement: &str,
    value: RequirementResponseValue,
) -> CheckDeclarationParams {
    CheckDeclarationParams::try_create(
        CPID,
        OCID,
        &uuid(1),
        || {
            DeclaredResponse::try_create(
                &uuid(response_seed),
                value,
                "MD-IDNO-1",
                "MD-PERSON-1",
                "Jon Doe",
                requirement,
            )
        },
        [Criterion::try_create(
            "CR-1",
            [RequirementGroup::try_create(
                "RG-1",
                [
                    Requirement::try_create("REQ-1", "boolean"),
                    Requirement::try_create("REQ-2", "number"),
                ],
            )],
        )],
    )
    .unwrap()
}

fn declaration_params(
    qualification_seed: u32,
    response_seed: u32,
    value: bool,
) -> DoDeclarationParams {
    DoDeclarationParams::try_create(
        CPID,
        OCID,
        [DeclaredQualification::try_create(
            &uuid(qualification_seed),
            [DeclaredQualification::try_create_response(
                &uuid(response_seed),
                RequirementResponseValue::Boolean(value),
                "MD-IDNO-1",
                "REQ-1",
                "MD-PERSON-1",
                "Jon Doe",
            )],
        )],
    )
    .unwrap()
}

#[test]
fn test_check_declaration_accepts_matching_type() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];
    let params: CheckDeclarationParams =
        check_params(50, "REQ-1", RequirementResponseValue::Boolean(true));

    assert_eq!(check_declaration(&params, &stored), Ok(()));
}

#[test]
fn test_check_declaration_type_mismatch() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];
    let params: CheckDeclarationParams = check_params(
        50,
        "REQ-1",
        RequirementResponseValue::String(String::from("yes")),
    );

    let result = check_declaration(&params, &stored);

    assert_eq!(
        result,
        Err(ValidationError::ValueDataTypeMismatchOnCheckDeclaration {
            expected: RequirementDataType::Boolean,
            actual: RequirementDataType::String,
        })
    );
    let error: ValidationError = result.unwrap_err();
    assert_eq!(error.code(), "VR.COM-7.16.3");
    assert_eq!(
        error.to_string(),
        "Requirement datatype mismatch, expected='boolean' , actual='string'."
    );
}

#[test]
fn test_check_declaration_unknown_qualification() {
    let stored: Vec<Qualification> = vec![create_test_qualification(2)];
    let params: CheckDeclarationParams =
        check_params(50, "REQ-1", RequirementResponseValue::Boolean(true));

    assert_eq!(
        check_declaration(&params, &stored),
        Err(ValidationError::QualificationNotFoundOnCheckDeclaration {
            cpid: cpid(),
            ocid: ocid(),
            qualification_id: qualification_id(1),
        })
    );
}

#[test]
fn test_check_declaration_unknown_requirement() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];
    let params: CheckDeclarationParams =
        check_params(50, "REQ-9", RequirementResponseValue::Boolean(true));

    assert_eq!(
        check_declaration(&params, &stored),
        Err(ValidationError::RequirementNotFoundOnCheckDeclaration {
            requirement_id: String::from("REQ-9"),
        })
    );
}

#[test]
fn test_check_declaration_rejects_second_id_for_same_answer() {
    let mut qualification: Qualification = create_test_qualification(1);
    qualification.requirement_responses.push(create_test_response(
        40,
        "REQ-1",
        RequirementResponseValue::Boolean(false),
    ));
    let stored: Vec<Qualification> = vec![qualification];

    let params: CheckDeclarationParams =
        check_params(50, "REQ-1", RequirementResponseValue::Boolean(true));
    assert_eq!(
        check_declaration(&params, &stored),
        Err(ValidationError::InvalidRequirementResponseIdOnCheckDeclaration {
            actual: response_id(50),
            expected: response_id(40),
        })
    );

    let same_id: CheckDeclarationParams =
        check_params(40, "REQ-1", RequirementResponseValue::Boolean(true));
    assert_eq!(check_declaration(&same_id, &stored), Ok(()));
}

#[test]
fn test_number_requirement_accepts_decimal() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];
    let params: CheckDeclarationParams = check_params(
        50,
        "REQ-2",
        RequirementResponseValue::Number("1.25".parse().unwrap()),
    );

    assert_eq!(check_declaration(&params, &stored), Ok(()));
}

#[test]
fn test_do_declaration_appends_new_response() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];

    let updated: Vec<Qualification> =
        do_declaration(&declaration_params(1, 50, true), &stored).unwrap();

    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].requirement_responses.len(), 1);
    assert_eq!(updated[0].requirement_responses[0].id, response_id(50));
}

#[test]
fn test_do_declaration_replaces_same_answer() {
    let mut qualification: Qualification = create_test_qualification(1);
    qualification.requirement_responses = vec![
        create_test_response(40, "REQ-1", RequirementResponseValue::Boolean(false)),
        create_test_response(41, "REQ-2", RequirementResponseValue::Integer(3)),
    ];
    let stored: Vec<Qualification> = vec![qualification];

    let updated: Vec<Qualification> =
        do_declaration(&declaration_params(1, 40, true), &stored).unwrap();

    let responses: &[RequirementResponse] = &updated[0].requirement_responses;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].value, RequirementResponseValue::Boolean(true));
    assert_eq!(responses[1].value, RequirementResponseValue::Integer(3));
}

#[test]
fn test_do_declaration_merges_entries_for_same_qualification() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];
    let declared = |response_seed: u32, requirement: &str| {
        DeclaredQualification::try_create(
            &uuid(1),
            [DeclaredQualification::try_create_response(
                &uuid(response_seed),
                RequirementResponseValue::Boolean(true),
                "MD-IDNO-1",
                requirement,
                "MD-PERSON-1",
                "Jon Doe",
            )],
        )
    };
    let params: DoDeclarationParams =
        DoDeclarationParams::try_create(CPID, OCID, [declared(50, "REQ-1"), declared(51, "REQ-2")])
            .unwrap();

    let updated: Vec<Qualification> = do_declaration(&params, &stored).unwrap();

    assert_eq!(updated.len(), 1);
    let ids: Vec<RequirementResponseId> = updated[0]
        .requirement_responses
        .iter()
        .map(|response| response.id.clone())
        .collect();
    assert_eq!(ids, vec![response_id(50), response_id(51)]);
}

#[test]
fn test_do_declaration_unknown_qualification() {
    let stored: Vec<Qualification> = vec![create_test_qualification(1)];

    let result = do_declaration(&declaration_params(7, 50, true), &stored);

    assert_eq!(
        result,
        Err(ValidationError::QualificationNotFoundOnDoDeclaration {
            cpid: cpid(),
            ocid: ocid(),
            qualification_id: qualification_id(7),
        })
    );
}

#[test]
fn test_find_responses_in_request_order_skipping_unknown() {
    let mut qualification: Qualification = create_test_qualification(1);
    qualification.requirement_responses = vec![
        create_test_response(40, "REQ-1", RequirementResponseValue::Boolean(false)),
        create_test_response(41, "REQ-2", RequirementResponseValue::Integer(3)),
    ];
    let stored: Vec<Qualification> = vec![qualification];
    let params: FindRequirementResponseByIdsParams = FindRequirementResponseByIdsParams::try_create(
        CPID,
        OCID,
        &uuid(1),
        &[uuid(41), uuid(99), uuid(40)],
    )
    .unwrap();

    let found: Vec<RequirementResponse> = find_requirement_responses(&params, &stored).unwrap();

    let ids: Vec<RequirementResponseId> = found.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![response_id(41), response_id(40)]);
}

#[test]
fn test_find_responses_unknown_qualification() {
    let params: FindRequirementResponseByIdsParams =
        FindRequirementResponseByIdsParams::try_create(CPID, OCID, &uuid(1), &[uuid(41)]).unwrap();

    let result = find_requirement_responses(&params, &[]);

    assert!(matches!(
        result,
        Err(ValidationError::QualificationNotFoundOnFindRequirementResponseByIds { .. })
    ));
}
