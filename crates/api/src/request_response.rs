// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request data transfer objects.
//!
//! Requests carry raw strings exactly as received. `convert` turns them into
//! the core parameter objects, reporting the first invalid field.

use qualification::{
    AnalyzeQualificationsForInvitationParams, CheckAccessToQualificationParams,
    CheckDeclarationParams, CheckQualificationStateParams, CheckQualificationsForProtocolParams,
    CreateQualificationsParams, Criterion, DeclaredQualification, DeclaredResponse,
    DoConsiderationParams, DoDeclarationParams, FindQualificationIdsParams,
    FindRequirementResponseByIdsParams, NewSubmission, OtherCriteria, RankedSubmission,
    Requirement, RequirementGroup, SetNextForQualificationParams,
    SetQualificationPeriodEndParams, StartQualificationPeriodParams,
};
use qualification_domain::{DataError, RequirementResponseValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes the `params` object of an envelope into a request.
///
/// # Errors
///
/// Returns `MissingRequiredAttribute` naming the first absent field, or
/// `DataTypeMismatch` on `params` when the object does not have the
/// request's shape.
pub fn decode_params<T: DeserializeOwned>(params: &Value) -> Result<T, DataError> {
    serde_json::from_value(params.clone()).map_err(|err| {
        let message: String = err.to_string();
        match message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
        {
            Some(name) => DataError::MissingRequiredAttribute {
                name: name.to_string(),
            },
            None => DataError::DataTypeMismatch {
                name: String::from("params"),
                expected_type: String::from("object"),
                actual_type: message,
            },
        }
    })
}

/// A reference to another object by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponderRequest {
    pub id: String,
    pub name: String,
}

/// API request of `findQualificationIds`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FindQualificationIdsRequest {
    pub cpid: String,
    pub ocid: String,
    #[serde(default)]
    pub states: Vec<StateRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRequest {
    pub status: String,
    pub status_details: Option<String>,
}

impl FindQualificationIdsRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<FindQualificationIdsParams, DataError> {
        FindQualificationIdsParams::try_create(
            &self.cpid,
            &self.ocid,
            self.states.iter().map(|state| {
                FindQualificationIdsParams::try_create_state(
                    &state.status,
                    state.status_details.as_deref(),
                )
            }),
        )
    }
}

/// API request of `createQualifications`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateQualificationsRequest {
    pub cpid: String,
    pub ocid: String,
    pub date: String,
    pub owner: String,
    pub submissions: Vec<SubmissionRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionRequest {
    pub id: String,
    pub scoring: Option<serde_json::Number>,
}

impl CreateQualificationsRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<CreateQualificationsParams, DataError> {
        CreateQualificationsParams::try_create(
            &self.cpid,
            &self.ocid,
            &self.date,
            &self.owner,
            self.submissions.iter().map(|submission| {
                let scoring: Option<String> = submission.scoring.as_ref().map(ToString::to_string);
                NewSubmission::try_create(&submission.id, scoring.as_deref())
            }),
        )
    }
}

/// API request of `rankQualifications`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankQualificationsRequest {
    pub cpid: String,
    pub ocid: String,
    pub submissions: Vec<RankedSubmissionRequest>,
    pub tender: TenderRequest,
    pub criteria: Option<Vec<IdRequest>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankedSubmissionRequest {
    pub id: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderRequest {
    pub other_criteria: OtherCriteriaRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherCriteriaRequest {
    pub qualification_system_methods: Vec<String>,
    pub reduction_criteria: String,
}

impl RankQualificationsRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<SetNextForQualificationParams, DataError> {
        SetNextForQualificationParams::try_create(
            &self.cpid,
            &self.ocid,
            self.submissions
                .iter()
                .map(|submission| RankedSubmission::try_create(&submission.id, &submission.date)),
            || {
                OtherCriteria::try_create(
                    &self.tender.other_criteria.qualification_system_methods,
                    &self.tender.other_criteria.reduction_criteria,
                )
            },
            self.criteria
                .as_ref()
                .map(|criteria| criteria.iter().map(|c| c.id.clone()).collect()),
        )
    }
}

/// API request of `startQualificationPeriod`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartQualificationPeriodRequest {
    pub cpid: String,
    pub ocid: String,
    pub date: String,
}

impl StartQualificationPeriodRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<StartQualificationPeriodParams, DataError> {
        StartQualificationPeriodParams::try_create(&self.cpid, &self.ocid, &self.date)
    }
}

/// API request of `setQualificationPeriodEnd`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetQualificationPeriodEndRequest {
    pub cpid: String,
    pub ocid: String,
    pub date: String,
}

impl SetQualificationPeriodEndRequest {
    pub fn convert(&self) -> Result<SetQualificationPeriodEndParams, DataError> {
        SetQualificationPeriodEndParams::try_create(&self.cpid, &self.ocid, &self.date)
    }
}

/// API request of `checkAccessToQualification`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAccessToQualificationRequest {
    pub cpid: String,
    pub ocid: String,
    pub token: String,
    pub owner: String,
    pub qualification_id: String,
}

impl CheckAccessToQualificationRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<CheckAccessToQualificationParams, DataError> {
        CheckAccessToQualificationParams::try_create(
            &self.cpid,
            &self.ocid,
            &self.token,
            &self.owner,
            &self.qualification_id,
        )
    }
}

/// API request of `checkQualificationState`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckQualificationStateRequest {
    pub cpid: String,
    pub ocid: String,
    pub country: String,
    pub pmd: String,
    pub operation_type: String,
    pub qualification_id: String,
}

impl CheckQualificationStateRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<CheckQualificationStateParams, DataError> {
        CheckQualificationStateParams::try_create(
            &self.cpid,
            &self.ocid,
            &self.country,
            &self.pmd,
            &self.operation_type,
            &self.qualification_id,
        )
    }
}

/// API request of `doDeclaration`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DoDeclarationRequest {
    pub cpid: String,
    pub ocid: String,
    pub qualifications: Vec<DeclaredQualificationRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredQualificationRequest {
    pub id: String,
    pub requirement_responses: Vec<DeclaredResponseRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredResponseRequest {
    pub id: String,
    pub value: RequirementResponseValue,
    pub related_tenderer: IdRequest,
    pub requirement: IdRequest,
    pub responder: ResponderRequest,
}

impl DoDeclarationRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<DoDeclarationParams, DataError> {
        DoDeclarationParams::try_create(
            &self.cpid,
            &self.ocid,
            self.qualifications.iter().map(|qualification| {
                DeclaredQualification::try_create(
                    &qualification.id,
                    qualification.requirement_responses.iter().map(|response| {
                        DeclaredQualification::try_create_response(
                            &response.id,
                            response.value.clone(),
                            &response.related_tenderer.id,
                            &response.requirement.id,
                            &response.responder.id,
                            &response.responder.name,
                        )
                    }),
                )
            }),
        )
    }
}

/// API request of `checkDeclaration`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDeclarationRequest {
    pub cpid: String,
    pub ocid: String,
    pub qualification_id: String,
    pub requirement_response: CheckedResponseRequest,
    pub criteria: Vec<CriterionRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedResponseRequest {
    pub id: String,
    pub value: RequirementResponseValue,
    pub related_tenderer_id: String,
    pub responder: ResponderRequest,
    pub requirement_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionRequest {
    pub id: String,
    pub requirement_groups: Vec<RequirementGroupRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequirementGroupRequest {
    pub id: String,
    pub requirements: Vec<RequirementRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementRequest {
    pub id: String,
    pub data_type: String,
}

impl CheckDeclarationRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<CheckDeclarationParams, DataError> {
        let response: &CheckedResponseRequest = &self.requirement_response;
        CheckDeclarationParams::try_create(
            &self.cpid,
            &self.ocid,
            &self.qualification_id,
            || {
                DeclaredResponse::try_create(
                    &response.id,
                    response.value.clone(),
                    &response.related_tenderer_id,
                    &response.responder.id,
                    &response.responder.name,
                    &response.requirement_id,
                )
            },
            self.criteria.iter().map(|criterion| {
                Criterion::try_create(
                    &criterion.id,
                    criterion.requirement_groups.iter().map(|group| {
                        RequirementGroup::try_create(
                            &group.id,
                            group.requirements.iter().map(|requirement| {
                                Requirement::try_create(&requirement.id, &requirement.data_type)
                            }),
                        )
                    }),
                )
            }),
        )
    }
}

/// API request of `findRequirementResponseByIds`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRequirementResponseByIdsRequest {
    pub cpid: String,
    pub ocid: String,
    pub qualification_id: String,
    pub requirement_response_ids: Vec<String>,
}

impl FindRequirementResponseByIdsRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<FindRequirementResponseByIdsParams, DataError> {
        FindRequirementResponseByIdsParams::try_create(
            &self.cpid,
            &self.ocid,
            &self.qualification_id,
            &self.requirement_response_ids,
        )
    }
}

/// API request of `doConsideration`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DoConsiderationRequest {
    pub cpid: String,
    pub ocid: String,
    pub qualifications: Vec<IdRequest>,
}

impl DoConsiderationRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<DoConsiderationParams, DataError> {
        let ids: Vec<String> = self.qualifications.iter().map(|q| q.id.clone()).collect();
        DoConsiderationParams::try_create(&self.cpid, &self.ocid, &ids)
    }
}

/// API request of `checkQualificationsForProtocol`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckQualificationsForProtocolRequest {
    pub cpid: String,
    pub ocid: String,
}

impl CheckQualificationsForProtocolRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<CheckQualificationsForProtocolParams, DataError> {
        CheckQualificationsForProtocolParams::try_create(&self.cpid, &self.ocid)
    }
}

/// API request of `analyzeQualificationsForInvitation`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeQualificationsForInvitationRequest {
    pub cpid: String,
    pub ocid: String,
    pub pmd: String,
    pub country: String,
    pub operation_type: String,
}

impl AnalyzeQualificationsForInvitationRequest {
    /// Converts the request into parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn convert(&self) -> Result<AnalyzeQualificationsForInvitationParams, DataError> {
        AnalyzeQualificationsForInvitationParams::try_create(
            &self.cpid,
            &self.ocid,
            &self.pmd,
            &self.country,
            &self.operation_type,
        )
    }
}
