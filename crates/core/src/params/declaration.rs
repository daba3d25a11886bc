// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse::{
    parse_cpid, parse_ocid, parse_organization_id, parse_person_id, parse_qualification_id,
    parse_requirement_id, parse_requirement_response_id,
};
use qualification_domain::{
    Cpid, DataError, Ocid, QualificationId, RequirementResponse, RequirementResponseValue,
    Responder,
};

/// Parameters of `doDeclaration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoDeclarationParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) qualifications: Vec<DeclaredQualification>,
}

/// The responses declared for one qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredQualification {
    pub(crate) id: QualificationId,
    pub(crate) requirement_responses: Vec<RequirementResponse>,
}

impl DoDeclarationParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        qualifications: impl IntoIterator<Item = Result<DeclaredQualification, DataError>>,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let qualifications: Vec<DeclaredQualification> =
            qualifications.into_iter().collect::<Result<_, _>>()?;
        Ok(Self {
            cpid,
            ocid,
            qualifications,
        })
    }
}

impl DeclaredQualification {
    /// Parses one qualification of the declaration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn try_create(
        id: &str,
        requirement_responses: impl IntoIterator<Item = Result<RequirementResponse, DataError>>,
    ) -> Result<Self, DataError> {
        let id: QualificationId = parse_qualification_id(id, "qualifications.id")?;
        let requirement_responses: Vec<RequirementResponse> =
            requirement_responses.into_iter().collect::<Result<_, _>>()?;
        Ok(Self {
            id,
            requirement_responses,
        })
    }

    /// Parses one declared requirement response.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn try_create_response(
        id: &str,
        value: RequirementResponseValue,
        related_tenderer_id: &str,
        requirement_id: &str,
        responder_id: &str,
        responder_name: &str,
    ) -> Result<RequirementResponse, DataError> {
        Ok(RequirementResponse {
            id: parse_requirement_response_id(id, "requirementResponse.id")?,
            value,
            related_tenderer: parse_organization_id(related_tenderer_id, "relatedTenderer.id")?,
            requirement: parse_requirement_id(requirement_id, "requirement.id")?,
            responder: Responder {
                id: parse_person_id(responder_id, "responder.id")?,
                name: responder_name.to_string(),
            },
        })
    }
}
