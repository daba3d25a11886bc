// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::find_by_id;
use crate::params::{
    CheckDeclarationParams, DeclaredResponse, DoDeclarationParams,
    FindRequirementResponseByIdsParams,
};
use qualification_domain::{
    Qualification, RequirementDataType, RequirementResponse, ValidationError, ValidationResult,
};

/// Applies declared requirement responses to the stored qualifications.
///
/// A declared response replaces the stored response given by the same
/// responder for the same tenderer and requirement, or is appended when
/// there is none. Entries naming the same qualification are applied to one
/// copy of it, in request order.
///
/// # Returns
///
/// One updated qualification per distinct id, in order of first mention.
///
/// # Errors
///
/// Returns `VR.COM-7.19.1` for the first requested qualification that is
/// not stored.
pub fn do_declaration(
    params: &DoDeclarationParams,
    stored: &[Qualification],
) -> Result<Vec<Qualification>, ValidationError> {
    let mut updated: Vec<Qualification> = Vec::new();
    for declared in &params.qualifications {
        let position: usize = match updated.iter().position(|q| q.id == declared.id) {
            Some(position) => position,
            None => {
                let qualification: Qualification = find_by_id(stored, &declared.id)
                    .cloned()
                    .ok_or_else(|| ValidationError::QualificationNotFoundOnDoDeclaration {
                        cpid: params.cpid.clone(),
                        ocid: params.ocid.clone(),
                        qualification_id: declared.id.clone(),
                    })?;
                updated.push(qualification);
                updated.len() - 1
            }
        };

        for response in &declared.requirement_responses {
            upsert_response(&mut updated[position].requirement_responses, response);
        }
    }
    Ok(updated)
}

fn upsert_response(responses: &mut Vec<RequirementResponse>, declared: &RequirementResponse) {
    match responses
        .iter_mut()
        .find(|existing| existing.answers_same_as(declared))
    {
        Some(existing) => *existing = declared.clone(),
        None => responses.push(declared.clone()),
    }
}

/// Checks that a response may be declared for a qualification.
///
/// # Errors
///
/// * `VR.COM-7.16.1` when the qualification does not exist
/// * `VR.COM-7.16.2` when the tender has no such requirement
/// * `VR.COM-7.16.3` when the value does not have the requirement's data type
/// * `VR.COM-7.16.4` when the same answer is already stored under another id
pub fn check_declaration(
    params: &CheckDeclarationParams,
    stored: &[Qualification],
) -> ValidationResult<ValidationError> {
    let declared: &DeclaredResponse = &params.requirement_response;

    let qualification: &Qualification = find_by_id(stored, &params.qualification_id)
        .ok_or_else(|| ValidationError::QualificationNotFoundOnCheckDeclaration {
            cpid: params.cpid.clone(),
            ocid: params.ocid.clone(),
            qualification_id: params.qualification_id.clone(),
        })?;

    let expected: RequirementDataType = params
        .requirements()
        .find(|requirement| requirement.id == declared.requirement_id)
        .map(|requirement| requirement.data_type)
        .ok_or_else(|| ValidationError::RequirementNotFoundOnCheckDeclaration {
            requirement_id: declared.requirement_id.to_string(),
        })?;

    let actual: RequirementDataType = declared.value.data_type();
    if actual != expected {
        return Err(ValidationError::ValueDataTypeMismatchOnCheckDeclaration { expected, actual });
    }

    let conflicting: Option<&RequirementResponse> =
        qualification.requirement_responses.iter().find(|existing| {
            existing.related_tenderer == declared.related_tenderer_id
                && existing.requirement == declared.requirement_id
                && existing.responder.id == declared.responder.id
                && existing.id != declared.id
        });
    if let Some(existing) = conflicting {
        return Err(ValidationError::InvalidRequirementResponseIdOnCheckDeclaration {
            actual: declared.id.clone(),
            expected: existing.id.clone(),
        });
    }

    Ok(())
}

/// Selects the stored responses whose ids were requested.
///
/// Responses come back in request order; unknown ids are skipped.
///
/// # Errors
///
/// Returns `VR.COM-7.18.1` when the qualification does not exist.
pub fn find_requirement_responses(
    params: &FindRequirementResponseByIdsParams,
    stored: &[Qualification],
) -> Result<Vec<RequirementResponse>, ValidationError> {
    let qualification: &Qualification = find_by_id(stored, &params.qualification_id)
        .ok_or_else(|| ValidationError::QualificationNotFoundOnFindRequirementResponseByIds {
            cpid: params.cpid.clone(),
            ocid: params.ocid.clone(),
            qualification_id: params.qualification_id.clone(),
        })?;

    Ok(params
        .requirement_response_ids
        .iter()
        .filter_map(|id| {
            qualification
                .requirement_responses
                .iter()
                .find(|response| &response.id == id)
                .cloned()
        })
        .collect())
}
