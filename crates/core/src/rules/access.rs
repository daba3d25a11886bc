// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::find_by_id;
use crate::params::CheckAccessToQualificationParams;
use qualification_domain::{Qualification, ValidationError, ValidationResult};

/// Checks that the caller's token and owner match the stored qualification.
///
/// # Errors
///
/// * `VR.COM-7.14.3` when the qualification does not exist
/// * `VR.COM-7.14.1` when the token differs
/// * `VR.COM-7.14.2` when the owner differs
pub fn check_access_to_qualification(
    params: &CheckAccessToQualificationParams,
    stored: &[Qualification],
) -> ValidationResult<ValidationError> {
    let qualification: &Qualification = find_by_id(stored, &params.qualification_id).ok_or_else(
        || ValidationError::QualificationNotFoundByCheckAccessToQualification {
            cpid: params.cpid.clone(),
            ocid: params.ocid.clone(),
            qualification_id: params.qualification_id.clone(),
        },
    )?;

    if qualification.token != params.token {
        return Err(ValidationError::InvalidTokenOnCheckAccessToQualification {
            token: params.token.to_string(),
            cpid: params.cpid.clone(),
        });
    }

    if qualification.owner != params.owner {
        return Err(ValidationError::InvalidOwnerOnCheckAccessToQualification {
            owner: params.owner.to_string(),
            cpid: params.cpid.clone(),
        });
    }

    Ok(())
}
