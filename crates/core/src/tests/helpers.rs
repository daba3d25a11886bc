// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use qualification_domain::{
    Cpid, Ocid, OrganizationId, Owner, PersonId, Qualification, QualificationId,
    QualificationStatus, QualificationStatusDetails, RequirementId, RequirementResponse,
    RequirementResponseId, RequirementResponseValue, Responder, Scoring, SubmissionId, Token,
    parse_date_time,
};
use std::str::FromStr;
use time::PrimitiveDateTime;

pub const CPID: &str = "ocds-b3wdp1-MD-1580458690892";
pub const OCID: &str = "ocds-b3wdp1-MD-1580458690892-EV-1580458791896";
pub const OWNER: &str = "d0da4c24-1a2a-4b39-a1fd-034cb887c93b";
pub const TOKEN: &str = "2fd2b2f5-4b3e-4b8a-9d1e-52b0c6e0c3a1";
pub const DATE: &str = "2020-02-10T08:49:55Z";

/// A deterministic UUID string distinguished by `seed`.
pub fn uuid(seed: u32) -> String {
    format!("00000000-0000-4000-8000-{seed:012}")
}

pub fn cpid() -> Cpid {
    Cpid::parse(CPID).unwrap()
}

pub fn ocid() -> Ocid {
    Ocid::parse(OCID).unwrap()
}

pub fn date(text: &str) -> PrimitiveDateTime {
    parse_date_time(text).unwrap()
}

pub fn qualification_id(seed: u32) -> QualificationId {
    QualificationId::parse(&uuid(seed)).unwrap()
}

pub fn submission_id(seed: u32) -> SubmissionId {
    SubmissionId::parse(&uuid(seed)).unwrap()
}

pub fn scoring(text: &str) -> Scoring {
    Scoring::try_new(bigdecimal::BigDecimal::from_str(text).unwrap()).unwrap()
}

/// A pending qualification with id `seed` for submission `100 + seed`.
pub fn create_test_qualification(seed: u32) -> Qualification {
    Qualification {
        id: qualification_id(seed),
        date: date(DATE),
        owner: Owner::parse(OWNER).unwrap(),
        token: Token::parse(TOKEN).unwrap(),
        status: QualificationStatus::Pending,
        status_details: None,
        related_submission: submission_id(100 + seed),
        scoring: None,
        internal_id: None,
        requirement_responses: Vec::new(),
    }
}

pub fn with_state(
    mut qualification: Qualification,
    status: QualificationStatus,
    status_details: Option<QualificationStatusDetails>,
) -> Qualification {
    qualification.status = status;
    qualification.status_details = status_details;
    qualification
}

pub fn create_test_response(
    seed: u32,
    requirement: &str,
    value: RequirementResponseValue,
) -> RequirementResponse {
    RequirementResponse {
        id: RequirementResponseId::parse(&uuid(seed)).unwrap(),
        value,
        related_tenderer: OrganizationId::parse("MD-IDNO-1").unwrap(),
        requirement: RequirementId::parse(requirement).unwrap(),
        responder: Responder {
            id: PersonId::parse("MD-PERSON-1").unwrap(),
            name: String::from("Jon Doe"),
        },
    }
}
