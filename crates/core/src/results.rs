// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payloads returned by successful use cases.

use qualification_domain::{
    OrganizationId, PersonId, Qualification, QualificationId, QualificationStatus,
    QualificationStatusDetails, RequirementId, RequirementResponse, RequirementResponseId,
    RequirementResponseValue, Scoring, SubmissionId, Token, serde_date_time,
};
use serde::Serialize;
use time::PrimitiveDateTime;

/// A qualification created for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedQualification {
    pub id: QualificationId,
    #[serde(with = "serde_date_time")]
    pub date: PrimitiveDateTime,
    pub status: QualificationStatus,
    pub related_submission: SubmissionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<Scoring>,
    pub token: Token,
}

impl From<&Qualification> for CreatedQualification {
    fn from(qualification: &Qualification) -> Self {
        Self {
            id: qualification.id.clone(),
            date: qualification.date,
            status: qualification.status,
            related_submission: qualification.related_submission.clone(),
            scoring: qualification.scoring.clone(),
            token: qualification.token.clone(),
        }
    }
}

/// A qualification as shown to other services; owner and token are withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationView {
    pub id: QualificationId,
    #[serde(with = "serde_date_time")]
    pub date: PrimitiveDateTime,
    pub status: QualificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<QualificationStatusDetails>,
    pub related_submission: SubmissionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirement_responses: Vec<RequirementResponseView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<Scoring>,
}

impl From<&Qualification> for QualificationView {
    fn from(qualification: &Qualification) -> Self {
        Self {
            id: qualification.id.clone(),
            date: qualification.date,
            status: qualification.status,
            status_details: qualification.status_details,
            related_submission: qualification.related_submission.clone(),
            internal_id: qualification.internal_id.clone(),
            requirement_responses: qualification
                .requirement_responses
                .iter()
                .map(RequirementResponseView::from)
                .collect(),
            scoring: qualification.scoring.clone(),
        }
    }
}

/// A reference to another object by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdReference<T> {
    pub id: T,
}

/// The person who answered, as shown in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponderView {
    pub id: PersonId,
    pub name: String,
}

/// A requirement response with nested references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResponseView {
    pub id: RequirementResponseId,
    pub value: RequirementResponseValue,
    pub related_tenderer: IdReference<OrganizationId>,
    pub requirement: IdReference<RequirementId>,
    pub responder: ResponderView,
}

impl From<&RequirementResponse> for RequirementResponseView {
    fn from(response: &RequirementResponse) -> Self {
        Self {
            id: response.id.clone(),
            value: response.value.clone(),
            related_tenderer: IdReference {
                id: response.related_tenderer.clone(),
            },
            requirement: IdReference {
                id: response.requirement.clone(),
            },
            responder: ResponderView {
                id: response.responder.id.clone(),
                name: response.responder.name.clone(),
            },
        }
    }
}

/// Result of `rankQualifications`: the qualification that is next in line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankQualificationsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qualifications: Vec<QualificationView>,
}

/// The requirement responses of one qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationResponses {
    pub id: QualificationId,
    pub requirement_responses: Vec<RequirementResponseView>,
}

/// Result of `doDeclaration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoDeclarationResult {
    pub qualifications: Vec<QualificationResponses>,
}

/// Result of `findRequirementResponseByIds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindRequirementResponseByIdsResult {
    pub qualification: QualificationResponses,
}

/// A qualification whose status details changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsideredQualification {
    pub id: QualificationId,
    pub status_details: QualificationStatusDetails,
}

/// Result of `doConsideration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoConsiderationResult {
    pub qualifications: Vec<ConsideredQualification>,
}

/// Result of `analyzeQualificationsForInvitation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeQualificationsForInvitationResult {
    pub qualifications: Vec<QualificationView>,
}

/// The opened period as returned by `startQualificationPeriod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedPeriod {
    #[serde(with = "serde_date_time")]
    pub start_date: PrimitiveDateTime,
}

/// Result of `startQualificationPeriod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQualificationPeriodResult {
    pub qualification_period: StartedPeriod,
}

/// The closed period as returned by `setQualificationPeriodEnd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndedPeriod {
    #[serde(with = "serde_date_time")]
    pub end_date: PrimitiveDateTime,
}

/// The pre-qualification block of `setQualificationPeriodEnd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreQualification {
    pub period: EndedPeriod,
}

/// Result of `setQualificationPeriodEnd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQualificationPeriodEndResult {
    pub pre_qualification: PreQualification,
}
