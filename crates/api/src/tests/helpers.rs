// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use qualification::{
    InMemoryCommandHistory, InMemoryPeriodRepository, InMemoryQualificationRepository,
    PeriodService, QualificationService, StaticStateRules,
};
use qualification_domain::{
    Cpid, Ocid, Owner, Qualification, QualificationId, QualificationStatus,
    QualificationStatusDetails, SubmissionId, Token, parse_date_time,
};
use serde_json::{Value, json};

use crate::{ApiResponse, CommandDispatcher, ServiceInfo};

pub const CPID: &str = "ocds-b3wdp1-MD-1580458690892";
pub const OCID: &str = "ocds-b3wdp1-MD-1580458690892-EV-1580458791896";
pub const OWNER: &str = "d0da4c24-1a2a-4b39-a1fd-034cb887c93b";
pub const TOKEN: &str = "2fd2b2f5-4b3e-4b8a-9d1e-52b0c6e0c3a1";
pub const COMMAND_ID: &str = "8f3e1c2a-5b4d-4e6f-9a7b-0c1d2e3f4a5b";

pub type TestDispatcher = CommandDispatcher<
    InMemoryQualificationRepository,
    StaticStateRules,
    InMemoryCommandHistory,
    InMemoryPeriodRepository,
>;

/// A deterministic UUID string distinguished by `seed`.
pub fn uuid(seed: u32) -> String {
    format!("00000000-0000-4000-8000-{seed:012}")
}

/// A pending qualification with id `seed` for submission `100 + seed`.
pub fn create_test_qualification(seed: u32) -> Qualification {
    Qualification {
        id: QualificationId::parse(&uuid(seed)).unwrap(),
        date: parse_date_time("2020-02-10T08:49:55Z").unwrap(),
        owner: Owner::parse(OWNER).unwrap(),
        token: Token::parse(TOKEN).unwrap(),
        status: QualificationStatus::Pending,
        status_details: None,
        related_submission: SubmissionId::parse(&uuid(100 + seed)).unwrap(),
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

pub fn create_test_dispatcher(qualifications: Vec<Qualification>) -> TestDispatcher {
    let repository: InMemoryQualificationRepository = InMemoryQualificationRepository::new()
        .with_qualifications(
            &Cpid::parse(CPID).unwrap(),
            &Ocid::parse(OCID).unwrap(),
            qualifications,
        );
    CommandDispatcher::new(
        QualificationService::new(repository, StaticStateRules::default()),
        PeriodService::new(InMemoryPeriodRepository::new()),
        InMemoryCommandHistory::new(),
        ServiceInfo::default(),
    )
}

/// A version 2.0.0 envelope for `action` with the fixed command id.
pub fn command(action: &str, params: Value) -> Value {
    json!({
        "version": "2.0.0",
        "id": COMMAND_ID,
        "action": action,
        "params": params,
    })
}

pub fn to_json(response: &ApiResponse) -> Value {
    serde_json::to_value(response).unwrap()
}
