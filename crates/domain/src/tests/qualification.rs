// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Qualification, QualificationState, QualificationStatus, QualificationStatusDetails,
    RequirementDataType, RequirementResponse, RequirementResponseValue, Scoring,
};
use bigdecimal::BigDecimal;
use serde_json::{Value, json};
use std::str::FromStr;

fn stored_qualification() -> Value {
    json!({
        "id": "8f1b8bba-6a2e-4c8f-bd0c-6a4b8e5f2f10",
        "date": "2020-02-10T08:49:55Z",
        "owner": "d0da4c24-1a2a-4b39-a1fd-034cb887c93b",
        "token": "2fd2b2f5-4b3e-4b8a-9d1e-52b0c6e0c3a1",
        "status": "pending",
        "statusDetails": "awaiting",
        "relatedSubmission": "0a5d0e0c-4d69-4d7e-9f61-7bd8d7a3a8c2",
        "scoring": 0.001,
        "requirementResponses": [{
            "id": "11111111-1111-4111-8111-111111111111",
            "value": true,
            "relatedTenderer": "MD-IDNO-1",
            "requirement": "REQ-1",
            "responder": { "id": "MD-PERSON-1", "name": "Jon Doe" }
        }]
    })
}

#[test]
fn test_qualification_deserializes_from_stored_json() {
    let qualification: Qualification = serde_json::from_value(stored_qualification()).unwrap();

    assert_eq!(
        qualification.state(),
        QualificationState::new(
            QualificationStatus::Pending,
            Some(QualificationStatusDetails::Awaiting)
        )
    );
    assert_eq!(
        qualification.scoring.as_ref().map(ToString::to_string),
        Some(String::from("0.001"))
    );
    assert_eq!(qualification.requirement_responses.len(), 1);
    assert_eq!(
        qualification.requirement_responses[0].value.data_type(),
        RequirementDataType::Boolean
    );
}

#[test]
fn test_qualification_serializes_camel_case_without_empty_fields() {
    let mut qualification: Qualification =
        serde_json::from_value(stored_qualification()).unwrap();
    qualification.status_details = None;
    qualification.scoring = None;
    qualification.requirement_responses.clear();

    let value: Value = serde_json::to_value(&qualification).unwrap();
    assert_eq!(value["relatedSubmission"], "0a5d0e0c-4d69-4d7e-9f61-7bd8d7a3a8c2");
    assert_eq!(value["date"], "2020-02-10T08:49:55Z");
    assert!(value.get("statusDetails").is_none());
    assert!(value.get("scoring").is_none());
    assert!(value.get("requirementResponses").is_none());
}

#[test]
fn test_negative_scoring_is_rejected_on_load() {
    let mut stored: Value = stored_qualification();
    stored["scoring"] = json!(-2);

    let result: Result<Qualification, serde_json::Error> = serde_json::from_value(stored);
    assert!(result.is_err());
}

#[test]
fn test_response_values_map_to_data_types() {
    let cases: Vec<(Value, RequirementDataType)> = vec![
        (json!(true), RequirementDataType::Boolean),
        (json!("yes"), RequirementDataType::String),
        (json!(42), RequirementDataType::Integer),
        (json!(4.5), RequirementDataType::Number),
    ];

    for (raw, expected) in cases {
        let value: RequirementResponseValue = serde_json::from_value(raw).unwrap();
        assert_eq!(value.data_type(), expected);
    }
}

#[test]
fn test_number_value_keeps_decimal() {
    let value: RequirementResponseValue = serde_json::from_value(json!(4.25)).unwrap();
    assert_eq!(
        value,
        RequirementResponseValue::Number(BigDecimal::from_str("4.25").unwrap())
    );
}

#[test]
fn test_same_answer_ignores_response_id_and_value() {
    let first: RequirementResponse = serde_json::from_value(json!({
        "id": "11111111-1111-4111-8111-111111111111",
        "value": true,
        "relatedTenderer": "MD-IDNO-1",
        "requirement": "REQ-1",
        "responder": { "id": "MD-PERSON-1", "name": "Jon Doe" }
    }))
    .unwrap();
    let mut second: RequirementResponse = first.clone();
    second.value = RequirementResponseValue::Boolean(false);

    assert!(first.answers_same_as(&second));

    let mut third: RequirementResponse = first.clone();
    third.requirement = crate::RequirementId::parse("REQ-2").unwrap();
    assert!(!first.answers_same_as(&third));
}

#[test]
fn test_scoring_orders_numerically() {
    let low: Scoring = Scoring::try_new(BigDecimal::from_str("0.5").unwrap()).unwrap();
    let high: Scoring = Scoring::try_new(BigDecimal::from_str("10").unwrap()).unwrap();
    assert!(low < high);
}
