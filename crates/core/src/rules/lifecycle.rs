// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::find_by_id;
use crate::params::{
    CheckQualificationStateParams, CheckQualificationsForProtocolParams, DoConsiderationParams,
    FindQualificationIdsParams,
};
use qualification_domain::{
    Qualification, QualificationId, QualificationState, QualificationStatus,
    QualificationStatusDetails, ValidationError, ValidationResult,
};

/// Returns the ids of qualifications whose state was requested.
///
/// An empty state list selects every qualification.
#[must_use]
pub fn find_qualification_ids(
    params: &FindQualificationIdsParams,
    stored: &[Qualification],
) -> Vec<QualificationId> {
    stored
        .iter()
        .filter(|qualification| {
            params.states.is_empty() || params.states.contains(&qualification.state())
        })
        .map(|qualification| qualification.id.clone())
        .collect()
}

/// Checks that a qualification is in one of the allowed states.
///
/// # Arguments
///
/// * `params` - The parsed request
/// * `stored` - Qualifications stored for the process
/// * `allowed` - States configured for the request's country, method and operation
///
/// # Errors
///
/// * `VR.COM-7.17.1` when the qualification does not exist
/// * `VR.COM-17` when no states are configured
/// * `VR.COM-7.17.2` when the qualification's state is not allowed
pub fn check_qualification_state(
    params: &CheckQualificationStateParams,
    stored: &[Qualification],
    allowed: &[QualificationState],
) -> ValidationResult<ValidationError> {
    let qualification: &Qualification = find_by_id(stored, &params.qualification_id)
        .ok_or_else(|| ValidationError::QualificationNotFoundByCheckQualificationState {
            cpid: params.cpid.clone(),
            ocid: params.ocid.clone(),
            qualification_id: params.qualification_id.clone(),
        })?;

    if allowed.is_empty() {
        return Err(ValidationError::QualificationStatesNotFound {
            country: params.country.clone(),
            pmd: params.pmd,
            operation_type: params.operation_type,
        });
    }

    if !allowed.contains(&qualification.state()) {
        return Err(
            ValidationError::QualificationStatesIsInvalidOnCheckQualificationState {
                qualification_id: qualification.id.clone(),
            },
        );
    }

    Ok(())
}

/// Moves the requested qualifications into consideration.
///
/// # Returns
///
/// The updated qualifications in request order.
///
/// # Errors
///
/// Returns `VR.COM-7.21.1` for the first requested qualification that is
/// not stored.
pub fn do_consideration(
    params: &DoConsiderationParams,
    stored: &[Qualification],
) -> Result<Vec<Qualification>, ValidationError> {
    params
        .qualification_ids
        .iter()
        .map(|id| {
            let mut qualification: Qualification = find_by_id(stored, id).cloned().ok_or_else(
                || ValidationError::QualificationNotFoundOnDoConsideration {
                    cpid: params.cpid.clone(),
                    ocid: params.ocid.clone(),
                    qualification_id: id.clone(),
                },
            )?;
            qualification.status_details = Some(QualificationStatusDetails::Consideration);
            Ok(qualification)
        })
        .collect()
}

const fn is_ready_for_protocol(qualification: &Qualification) -> bool {
    matches!(
        (qualification.status, qualification.status_details),
        (
            QualificationStatus::Pending,
            Some(QualificationStatusDetails::Active | QualificationStatusDetails::Unsuccessful)
        )
    )
}

/// Checks that every qualification has been decided and can go into a protocol.
///
/// # Errors
///
/// * `VR.COM-7.24.1` when nothing is stored for the process
/// * `VR.COM-7.24.2` for the first qualification that is still undecided
pub fn check_qualifications_for_protocol(
    params: &CheckQualificationsForProtocolParams,
    stored: &[Qualification],
) -> ValidationResult<ValidationError> {
    if stored.is_empty() {
        return Err(
            ValidationError::NoQualificationFoundOnCheckQualificationsForProtocol {
                cpid: params.cpid.clone(),
                ocid: params.ocid.clone(),
            },
        );
    }

    match stored.iter().find(|q| !is_ready_for_protocol(q)) {
        Some(unsuitable) => Err(
            ValidationError::UnsuitableQualificationFoundOnCheckQualificationsForProtocol {
                cpid: params.cpid.clone(),
                ocid: params.ocid.clone(),
                qualification_id: unsuitable.id.clone(),
            },
        ),
        None => Ok(()),
    }
}

/// Selects the qualifications whose tenderers may be invited.
#[must_use]
pub fn analyze_qualifications_for_invitation(stored: &[Qualification]) -> Vec<Qualification> {
    stored
        .iter()
        .filter(|qualification| qualification.status == QualificationStatus::Active)
        .cloned()
        .collect()
}
