// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One handler per command: convert the request, run the use case and
//! translate failures into API errors.

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    AnalyzeQualificationsForInvitationRequest, CheckAccessToQualificationRequest,
    CheckDeclarationRequest, CheckQualificationStateRequest,
    CheckQualificationsForProtocolRequest, CreateQualificationsRequest, DoConsiderationRequest,
    DoDeclarationRequest, FindQualificationIdsRequest, FindRequirementResponseByIdsRequest,
    RankQualificationsRequest, SetQualificationPeriodEndRequest, StartQualificationPeriodRequest,
};
use qualification::{
    AnalyzeQualificationsForInvitationResult, CreatedQualification, DoConsiderationResult,
    DoDeclarationResult, FindRequirementResponseByIdsResult, PeriodRepository, PeriodService,
    QualificationRepository, QualificationService, QualificationStateRules,
    RankQualificationsResult, SetQualificationPeriodEndResult, StartQualificationPeriodResult,
};
use qualification_domain::QualificationId;

/// Finds the ids of qualifications in the requested states.
///
/// # Errors
///
/// Returns an error if the request is invalid or the repository fails.
pub fn find_qualification_ids<R: QualificationRepository, S: QualificationStateRules>(
    service: &QualificationService<R, S>,
    request: &FindQualificationIdsRequest,
) -> Result<Vec<QualificationId>, ApiError> {
    let params = request.convert()?;
    service
        .find_qualification_ids(&params)
        .map_err(translate_core_error)
}

/// Creates a pending qualification for every submission.
///
/// # Errors
///
/// Returns an error if:
/// - The request is invalid
/// - A scoring has more than three fractional digits or is negative
/// - The repository fails
pub fn create_qualifications<R: QualificationRepository, S: QualificationStateRules>(
    service: &mut QualificationService<R, S>,
    request: &CreateQualificationsRequest,
) -> Result<Vec<CreatedQualification>, ApiError> {
    let params = request.convert()?;
    service
        .create_qualifications(&params)
        .map_err(translate_core_error)
}

/// Ranks qualifications and marks the next one as awaiting.
///
/// # Errors
///
/// Returns an error if:
/// - The request is invalid
/// - No qualification is stored, or a submission has none
/// - The repository fails
pub fn rank_qualifications<R: QualificationRepository, S: QualificationStateRules>(
    service: &mut QualificationService<R, S>,
    request: &RankQualificationsRequest,
) -> Result<RankQualificationsResult, ApiError> {
    let params = request.convert()?;
    service
        .rank_qualifications(&params)
        .map_err(translate_core_error)
}

/// Checks the caller's token and owner.
///
/// # Errors
///
/// Returns an error if the request is invalid, the qualification is
/// missing, the credentials differ or the repository fails.
pub fn check_access_to_qualification<R: QualificationRepository, S: QualificationStateRules>(
    service: &QualificationService<R, S>,
    request: &CheckAccessToQualificationRequest,
) -> Result<(), ApiError> {
    let params = request.convert()?;
    service
        .check_access_to_qualification(&params)
        .map_err(translate_core_error)
}

/// Checks that the qualification's state allows the operation.
///
/// # Errors
///
/// Returns an error if the request is invalid, the qualification is
/// missing, no states are configured, the state is not allowed or the
/// repository fails.
pub fn check_qualification_state<R: QualificationRepository, S: QualificationStateRules>(
    service: &QualificationService<R, S>,
    request: &CheckQualificationStateRequest,
) -> Result<(), ApiError> {
    let params = request.convert()?;
    service
        .check_qualification_state(&params)
        .map_err(translate_core_error)
}

/// Stores declared requirement responses.
///
/// # Errors
///
/// Returns an error if the request is invalid, a qualification is missing
/// or the repository fails.
pub fn do_declaration<R: QualificationRepository, S: QualificationStateRules>(
    service: &mut QualificationService<R, S>,
    request: &DoDeclarationRequest,
) -> Result<DoDeclarationResult, ApiError> {
    let params = request.convert()?;
    service.do_declaration(&params).map_err(translate_core_error)
}

/// Checks a requirement response before it is declared.
///
/// # Errors
///
/// Returns an error if the request is invalid, one of the `VR.COM-7.16.*`
/// rules fails or the repository fails.
pub fn check_declaration<R: QualificationRepository, S: QualificationStateRules>(
    service: &QualificationService<R, S>,
    request: &CheckDeclarationRequest,
) -> Result<(), ApiError> {
    let params = request.convert()?;
    service
        .check_declaration(&params)
        .map_err(translate_core_error)
}

/// Returns requested requirement responses of a qualification.
///
/// # Errors
///
/// Returns an error if the request is invalid, the qualification is
/// missing or the repository fails.
pub fn find_requirement_response_by_ids<R: QualificationRepository, S: QualificationStateRules>(
    service: &QualificationService<R, S>,
    request: &FindRequirementResponseByIdsRequest,
) -> Result<FindRequirementResponseByIdsResult, ApiError> {
    let params = request.convert()?;
    service
        .find_requirement_response_by_ids(&params)
        .map_err(translate_core_error)
}

/// Moves qualifications into consideration.
///
/// # Errors
///
/// Returns an error if the request is invalid, a qualification is missing
/// or the repository fails.
pub fn do_consideration<R: QualificationRepository, S: QualificationStateRules>(
    service: &mut QualificationService<R, S>,
    request: &DoConsiderationRequest,
) -> Result<DoConsiderationResult, ApiError> {
    let params = request.convert()?;
    service
        .do_consideration(&params)
        .map_err(translate_core_error)
}

/// Checks that every qualification is decided.
///
/// # Errors
///
/// Returns an error if the request is invalid, nothing is stored, a
/// qualification is undecided or the repository fails.
pub fn check_qualifications_for_protocol<
    R: QualificationRepository,
    S: QualificationStateRules,
>(
    service: &QualificationService<R, S>,
    request: &CheckQualificationsForProtocolRequest,
) -> Result<(), ApiError> {
    let params = request.convert()?;
    service
        .check_qualifications_for_protocol(&params)
        .map_err(translate_core_error)
}

/// Returns the qualifications whose tenderers may be invited.
///
/// # Errors
///
/// Returns an error if the request is invalid or the repository fails.
pub fn analyze_qualifications_for_invitation<
    R: QualificationRepository,
    S: QualificationStateRules,
>(
    service: &QualificationService<R, S>,
    request: &AnalyzeQualificationsForInvitationRequest,
) -> Result<AnalyzeQualificationsForInvitationResult, ApiError> {
    let params = request.convert()?;
    service
        .analyze_qualifications_for_invitation(&params)
        .map_err(translate_core_error)
}

/// Opens the qualification period.
///
/// # Errors
///
/// Returns an error if the request is invalid or the repository fails.
pub fn start_qualification_period<P: PeriodRepository>(
    periods: &mut PeriodService<P>,
    request: &StartQualificationPeriodRequest,
) -> Result<StartQualificationPeriodResult, ApiError> {
    let params = request.convert()?;
    periods
        .start_qualification_period(&params)
        .map_err(translate_core_error)
}

/// Closes the qualification period.
///
/// # Errors
///
/// Returns an error if the request is invalid or the repository fails.
pub fn set_qualification_period_end<P: PeriodRepository>(
    periods: &mut PeriodService<P>,
    request: &SetQualificationPeriodEndRequest,
) -> Result<SetQualificationPeriodEndResult, ApiError> {
    let params = request.convert()?;
    periods
        .set_qualification_period_end(&params)
        .map_err(translate_core_error)
}
