// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    CPID, DATE, OCID, OWNER, cpid, create_test_qualification, ocid, qualification_id, uuid,
    with_state,
};
use crate::{
    CoreError, CreateQualificationsParams, CreatedQualification, DoConsiderationParams, Incident,
    InMemoryQualificationRepository, NewSubmission, OtherCriteria, QualificationRepository,
    QualificationService, RankQualificationsResult, RankedSubmission,
    SetNextForQualificationParams, StaticStateRules,
};
use qualification_domain::{
    Cpid, DomainRuleError, Ocid, Qualification, QualificationStatus, QualificationStatusDetails,
};

type Service = QualificationService<InMemoryQualificationRepository, StaticStateRules>;

fn create_service(qualifications: Vec<Qualification>) -> Service {
    let repository: InMemoryQualificationRepository = InMemoryQualificationRepository::new()
        .with_qualifications(&cpid(), &ocid(), qualifications);
    QualificationService::new(repository, StaticStateRules::default())
}

fn stored(service: &Service) -> Vec<Qualification> {
    service.repository().find_by(&cpid(), &ocid()).unwrap()
}

/// A repository whose reads and writes always fail.
struct UnavailableRepository;

impl QualificationRepository for UnavailableRepository {
    fn find_by(&self, _cpid: &Cpid, _ocid: &Ocid) -> Result<Vec<Qualification>, Incident> {
        Err(Incident::Database(String::from("connection refused")))
    }

    fn save_all(
        &mut self,
        _cpid: &Cpid,
        _ocid: &Ocid,
        _qualifications: &[Qualification],
    ) -> Result<(), Incident> {
        Err(Incident::Database(String::from("connection refused")))
    }
}

#[test]
fn test_create_qualifications_persists_pending() {
    let mut service: Service = create_service(Vec::new());
    let params: CreateQualificationsParams = CreateQualificationsParams::try_create(
        CPID,
        OCID,
        DATE,
        OWNER,
        [
            NewSubmission::try_create(&uuid(101), Some("12.5")),
            NewSubmission::try_create(&uuid(102), None),
        ],
    )
    .unwrap();

    let created: Vec<CreatedQualification> = service.create_qualifications(&params).unwrap();

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|q| q.status == QualificationStatus::Pending));
    assert_ne!(created[0].id, created[1].id);
    assert_ne!(created[0].token, created[1].token);
    assert_eq!(
        created[0].scoring.as_ref().map(ToString::to_string),
        Some(String::from("12.5"))
    );

    let saved: Vec<Qualification> = stored(&service);
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].owner.to_string(), OWNER);
    assert_eq!(saved[0].id, created[0].id);
}

#[test]
fn test_create_qualifications_rejects_scoring_scale() {
    let mut service: Service = create_service(Vec::new());
    let params: CreateQualificationsParams = CreateQualificationsParams::try_create(
        CPID,
        OCID,
        DATE,
        OWNER,
        [NewSubmission::try_create(&uuid(101), Some("1.2345"))],
    )
    .unwrap();

    let result = service.create_qualifications(&params);

    match result {
        Err(CoreError::DomainRuleViolation(DomainRuleError::InvalidScale {
            current_scale,
            available_scale,
            ..
        })) => {
            assert_eq!(current_scale, 4);
            assert_eq!(available_scale, 3);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(service.repository().is_empty());
}

#[test]
fn test_create_qualifications_rejects_negative_scoring() {
    let mut service: Service = create_service(Vec::new());
    let params: CreateQualificationsParams = CreateQualificationsParams::try_create(
        CPID,
        OCID,
        DATE,
        OWNER,
        [NewSubmission::try_create(&uuid(101), Some("-1"))],
    )
    .unwrap();

    let error: CoreError = service.create_qualifications(&params).unwrap_err();

    assert_eq!(error.code(), "DM-2");
    assert!(service.repository().is_empty());
}

#[test]
fn test_rank_persists_only_next_qualification() {
    let mut service: Service =
        create_service(vec![create_test_qualification(1), create_test_qualification(2)]);
    let params: SetNextForQualificationParams = SetNextForQualificationParams::try_create(
        CPID,
        OCID,
        [
            RankedSubmission::try_create(&uuid(101), "2020-02-11T00:00:00Z"),
            RankedSubmission::try_create(&uuid(102), "2020-02-10T00:00:00Z"),
        ],
        || OtherCriteria::try_create(&[String::from("manual")], "none"),
        None,
    )
    .unwrap();

    let result: RankQualificationsResult = service.rank_qualifications(&params).unwrap();

    assert_eq!(result.qualifications.len(), 1);
    assert_eq!(result.qualifications[0].id, qualification_id(2));

    let saved: Vec<Qualification> = stored(&service);
    assert_eq!(saved[0].status_details, None);
    assert_eq!(
        saved[1].status_details,
        Some(QualificationStatusDetails::Awaiting)
    );
}

#[test]
fn test_failed_rule_leaves_store_untouched() {
    let mut service: Service = create_service(vec![create_test_qualification(1)]);
    let params: DoConsiderationParams =
        DoConsiderationParams::try_create(CPID, OCID, &[uuid(1), uuid(9)]).unwrap();

    let error: CoreError = service.do_consideration(&params).unwrap_err();

    assert_eq!(error.code(), "VR.COM-7.21.1");
    assert_eq!(stored(&service)[0].status_details, None);
}

#[test]
fn test_consideration_is_persisted() {
    let mut service: Service = create_service(vec![with_state(
        create_test_qualification(1),
        QualificationStatus::Pending,
        Some(QualificationStatusDetails::Awaiting),
    )]);
    let params: DoConsiderationParams =
        DoConsiderationParams::try_create(CPID, OCID, &[uuid(1)]).unwrap();

    service.do_consideration(&params).unwrap();

    assert_eq!(
        stored(&service)[0].status_details,
        Some(QualificationStatusDetails::Consideration)
    );
}

#[test]
fn test_repository_failure_is_an_incident() {
    let mut service: QualificationService<UnavailableRepository, StaticStateRules> =
        QualificationService::new(UnavailableRepository, StaticStateRules::default());
    let params: DoConsiderationParams =
        DoConsiderationParams::try_create(CPID, OCID, &[uuid(1)]).unwrap();

    let error: CoreError = service.do_consideration(&params).unwrap_err();

    assert!(error.is_incident());
    assert_eq!(error.code(), "INC-01");
    assert!(matches!(
        error,
        CoreError::Incident(Incident::Database(ref message)) if message == "connection refused"
    ));
}
