// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orchestration of the qualification use cases.
//!
//! Each operation fetches the stored qualifications of one stage, evaluates
//! the matching rule and persists updated qualifications only after every
//! rule passed.

use crate::error::CoreError;
use crate::params::{
    AnalyzeQualificationsForInvitationParams, CheckAccessToQualificationParams,
    CheckDeclarationParams, CheckQualificationStateParams, CheckQualificationsForProtocolParams,
    CreateQualificationsParams, DoConsiderationParams, DoDeclarationParams,
    FindQualificationIdsParams, FindRequirementResponseByIdsParams,
    SetNextForQualificationParams,
};
use crate::repository::{QualificationRepository, QualificationStateRules};
use crate::results::{
    AnalyzeQualificationsForInvitationResult, ConsideredQualification, CreatedQualification,
    DoConsiderationResult, DoDeclarationResult, FindRequirementResponseByIdsResult,
    QualificationResponses, QualificationView, RankQualificationsResult,
    RequirementResponseView,
};
use crate::rules;
use qualification_domain::{
    Cpid, Ocid, Owner, Qualification, QualificationId, QualificationState, QualificationStatus,
    QualificationStatusDetails, RequirementResponse, Scoring, SubmissionId, Token,
};
use time::PrimitiveDateTime;
use tracing::{debug, info};

/// Executes qualification use cases against a repository and a state rule table.
#[derive(Debug)]
pub struct QualificationService<R, S> {
    repository: R,
    state_rules: S,
}

impl<R: QualificationRepository, S: QualificationStateRules> QualificationService<R, S> {
    /// Creates a service.
    #[must_use]
    pub const fn new(repository: R, state_rules: S) -> Self {
        Self {
            repository,
            state_rules,
        }
    }

    /// The underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    fn fetch(&self, cpid: &Cpid, ocid: &Ocid) -> Result<Vec<Qualification>, CoreError> {
        let stored: Vec<Qualification> = self.repository.find_by(cpid, ocid)?;
        debug!(%cpid, %ocid, count = stored.len(), "Fetched qualifications");
        Ok(stored)
    }

    fn persist(
        &mut self,
        cpid: &Cpid,
        ocid: &Ocid,
        qualifications: &[Qualification],
    ) -> Result<(), CoreError> {
        if qualifications.is_empty() {
            return Ok(());
        }
        self.repository.save_all(cpid, ocid, qualifications)?;
        info!(%cpid, %ocid, count = qualifications.len(), "Saved qualifications");
        Ok(())
    }

    /// Returns the ids of qualifications in the requested states.
    ///
    /// # Errors
    ///
    /// Returns an incident when the repository fails.
    pub fn find_qualification_ids(
        &self,
        params: &FindQualificationIdsParams,
    ) -> Result<Vec<QualificationId>, CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        Ok(rules::find_qualification_ids(params, &stored))
    }

    /// Creates one pending qualification per submission.
    ///
    /// # Errors
    ///
    /// Returns a domain rule violation when a scoring breaks the numeric
    /// policy, or an incident when the repository fails.
    pub fn create_qualifications(
        &mut self,
        params: &CreateQualificationsParams,
    ) -> Result<Vec<CreatedQualification>, CoreError> {
        let created: Vec<Qualification> = params
            .submissions
            .iter()
            .map(|submission| -> Result<Qualification, CoreError> {
                let scoring: Option<Scoring> =
                    submission.scoring.clone().map(Scoring::try_new).transpose()?;
                Ok(new_qualification(
                    params.date,
                    &params.owner,
                    submission.id.clone(),
                    scoring,
                ))
            })
            .collect::<Result<_, _>>()?;

        self.persist(&params.cpid, &params.ocid, &created)?;
        Ok(created.iter().map(CreatedQualification::from).collect())
    }

    /// Ranks the qualifications of the given submissions.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.13.*` when the submissions do not match the stored
    /// qualifications, or an incident when the repository fails.
    pub fn rank_qualifications(
        &mut self,
        params: &SetNextForQualificationParams,
    ) -> Result<RankQualificationsResult, CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        let ranked: Vec<Qualification> = rules::rank_qualifications(params, &stored)?;

        let next: Vec<Qualification> = ranked.into_iter().take(1).collect();
        self.persist(&params.cpid, &params.ocid, &next)?;
        Ok(RankQualificationsResult {
            qualifications: next.iter().map(QualificationView::from).collect(),
        })
    }

    /// Checks the caller's token and owner against a qualification.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.14.*` on a failed check, or an incident when the
    /// repository fails.
    pub fn check_access_to_qualification(
        &self,
        params: &CheckAccessToQualificationParams,
    ) -> Result<(), CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        rules::check_access_to_qualification(params, &stored)?;
        Ok(())
    }

    /// Checks that a qualification may be acted on by the requested operation.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.17.*` or `VR.COM-17` on a failed check, or an
    /// incident when the repository or the state rules fail.
    pub fn check_qualification_state(
        &self,
        params: &CheckQualificationStateParams,
    ) -> Result<(), CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        let allowed: Vec<QualificationState> =
            self.state_rules
                .find_states(&params.country, params.pmd, params.operation_type)?;
        debug!(
            country = %params.country,
            pmd = %params.pmd,
            operation_type = %params.operation_type,
            count = allowed.len(),
            "Loaded allowed qualification states"
        );
        rules::check_qualification_state(params, &stored, &allowed)?;
        Ok(())
    }

    /// Stores declared requirement responses.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.19.1` when a qualification is missing, or an
    /// incident when the repository fails.
    pub fn do_declaration(
        &mut self,
        params: &DoDeclarationParams,
    ) -> Result<DoDeclarationResult, CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        let updated: Vec<Qualification> = rules::do_declaration(params, &stored)?;
        self.persist(&params.cpid, &params.ocid, &updated)?;

        let qualifications: Vec<QualificationResponses> = params
            .qualifications
            .iter()
            .map(|declared| QualificationResponses {
                id: declared.id.clone(),
                requirement_responses: declared
                    .requirement_responses
                    .iter()
                    .map(RequirementResponseView::from)
                    .collect(),
            })
            .collect();
        Ok(DoDeclarationResult { qualifications })
    }

    /// Checks that a requirement response may be declared.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.16.*` on a failed check, or an incident when the
    /// repository fails.
    pub fn check_declaration(&self, params: &CheckDeclarationParams) -> Result<(), CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        rules::check_declaration(params, &stored)?;
        Ok(())
    }

    /// Returns the requested requirement responses of a qualification.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.18.1` when the qualification is missing, or an
    /// incident when the repository fails.
    pub fn find_requirement_response_by_ids(
        &self,
        params: &FindRequirementResponseByIdsParams,
    ) -> Result<FindRequirementResponseByIdsResult, CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        let responses: Vec<RequirementResponse> =
            rules::find_requirement_responses(params, &stored)?;
        Ok(FindRequirementResponseByIdsResult {
            qualification: QualificationResponses {
                id: params.qualification_id.clone(),
                requirement_responses: responses
                    .iter()
                    .map(RequirementResponseView::from)
                    .collect(),
            },
        })
    }

    /// Moves qualifications into consideration.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.21.1` when a qualification is missing, or an
    /// incident when the repository fails.
    pub fn do_consideration(
        &mut self,
        params: &DoConsiderationParams,
    ) -> Result<DoConsiderationResult, CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        let updated: Vec<Qualification> = rules::do_consideration(params, &stored)?;
        self.persist(&params.cpid, &params.ocid, &updated)?;

        Ok(DoConsiderationResult {
            qualifications: updated
                .iter()
                .map(|qualification| ConsideredQualification {
                    id: qualification.id.clone(),
                    status_details: QualificationStatusDetails::Consideration,
                })
                .collect(),
        })
    }

    /// Checks that every qualification of the stage is decided.
    ///
    /// # Errors
    ///
    /// Returns `VR.COM-7.24.*` on a failed check, or an incident when the
    /// repository fails.
    pub fn check_qualifications_for_protocol(
        &self,
        params: &CheckQualificationsForProtocolParams,
    ) -> Result<(), CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        rules::check_qualifications_for_protocol(params, &stored)?;
        Ok(())
    }

    /// Returns the active qualifications whose tenderers may be invited.
    ///
    /// # Errors
    ///
    /// Returns an incident when the repository fails.
    pub fn analyze_qualifications_for_invitation(
        &self,
        params: &AnalyzeQualificationsForInvitationParams,
    ) -> Result<AnalyzeQualificationsForInvitationResult, CoreError> {
        let stored: Vec<Qualification> = self.fetch(&params.cpid, &params.ocid)?;
        let active: Vec<Qualification> = rules::analyze_qualifications_for_invitation(&stored);
        debug!(
            country = %params.country,
            pmd = %params.pmd,
            operation_type = %params.operation_type,
            active = active.len(),
            "Analyzed qualifications for invitation"
        );
        Ok(AnalyzeQualificationsForInvitationResult {
            qualifications: active.iter().map(QualificationView::from).collect(),
        })
    }
}

fn new_qualification(
    date: PrimitiveDateTime,
    owner: &Owner,
    related_submission: SubmissionId,
    scoring: Option<Scoring>,
) -> Qualification {
    Qualification {
        id: QualificationId::generate(),
        date,
        owner: owner.clone(),
        token: Token::generate(),
        status: QualificationStatus::Pending,
        status_details: None,
        related_submission,
        scoring,
        internal_id: None,
        requirement_responses: Vec::new(),
    }
}
