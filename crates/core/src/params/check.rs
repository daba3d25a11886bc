// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::QUALIFYING_PMD;
use crate::parse::{
    parse_cpid, parse_enum, parse_ocid, parse_organization_id, parse_owner, parse_person_id,
    parse_qualification_id, parse_requirement_id, parse_requirement_response_id, parse_token,
};
use qualification_domain::{
    AllowList, Cpid, DataError, Ocid, OperationType, OrganizationId, Owner,
    ProcurementMethodDetails, QualificationId, RequirementDataType, RequirementId,
    RequirementResponseId, RequirementResponseValue, Responder, Token,
};
use std::sync::LazyLock;

static STATE_OPERATION_TYPES: LazyLock<AllowList<OperationType>> = LazyLock::new(|| {
    AllowList::filtered(|operation| {
        matches!(
            operation,
            OperationType::Qualification
                | OperationType::QualificationConsideration
                | OperationType::QualificationDeclareNonConflictOfInterest
        )
    })
});

static REQUIREMENT_DATA_TYPES: LazyLock<AllowList<RequirementDataType>> =
    LazyLock::new(AllowList::all);

/// Parameters of `checkAccessToQualification`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckAccessToQualificationParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) token: Token,
    pub(crate) owner: Owner,
    pub(crate) qualification_id: QualificationId,
}

impl CheckAccessToQualificationParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        token: &str,
        owner: &str,
        qualification_id: &str,
    ) -> Result<Self, DataError> {
        Ok(Self {
            cpid: parse_cpid(cpid)?,
            ocid: parse_ocid(ocid)?,
            token: parse_token(token)?,
            owner: parse_owner(owner)?,
            qualification_id: parse_qualification_id(qualification_id, "qualificationId")?,
        })
    }
}

/// Parameters of `checkQualificationState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckQualificationStateParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) country: String,
    pub(crate) pmd: ProcurementMethodDetails,
    pub(crate) operation_type: OperationType,
    pub(crate) qualification_id: QualificationId,
}

impl CheckQualificationStateParams {
    /// Parses the request.
    ///
    /// Only qualifying procurement methods and the operations that move a
    /// single qualification forward are accepted.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        country: &str,
        pmd: &str,
        operation_type: &str,
        qualification_id: &str,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let pmd: ProcurementMethodDetails = parse_enum(pmd, &QUALIFYING_PMD, "pmd")?;
        let operation_type: OperationType =
            parse_enum(operation_type, &STATE_OPERATION_TYPES, "operationType")?;
        let qualification_id: QualificationId =
            parse_qualification_id(qualification_id, "qualificationId")?;
        Ok(Self {
            cpid,
            ocid,
            country: country.to_string(),
            pmd,
            operation_type,
            qualification_id,
        })
    }
}

/// Parameters of `checkDeclaration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDeclarationParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) qualification_id: QualificationId,
    pub(crate) requirement_response: DeclaredResponse,
    pub(crate) criteria: Vec<Criterion>,
}

/// The response a tenderer intends to declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredResponse {
    pub(crate) id: RequirementResponseId,
    pub(crate) value: RequirementResponseValue,
    pub(crate) related_tenderer_id: OrganizationId,
    pub(crate) responder: Responder,
    pub(crate) requirement_id: RequirementId,
}

/// A tender criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub(crate) id: String,
    pub(crate) requirement_groups: Vec<RequirementGroup>,
}

/// A group of requirements within a criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementGroup {
    pub(crate) id: String,
    pub(crate) requirements: Vec<Requirement>,
}

/// A requirement and the data type its answers must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub(crate) id: RequirementId,
    pub(crate) data_type: RequirementDataType,
}

impl CheckDeclarationParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        qualification_id: &str,
        requirement_response: impl FnOnce() -> Result<DeclaredResponse, DataError>,
        criteria: impl IntoIterator<Item = Result<Criterion, DataError>>,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let qualification_id: QualificationId =
            parse_qualification_id(qualification_id, "qualificationId")?;
        let requirement_response: DeclaredResponse = requirement_response()?;
        let criteria: Vec<Criterion> = criteria.into_iter().collect::<Result<_, _>>()?;
        Ok(Self {
            cpid,
            ocid,
            qualification_id,
            requirement_response,
            criteria,
        })
    }

    /// Returns every requirement declared by the tender's criteria.
    pub(crate) fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.criteria
            .iter()
            .flat_map(|criterion| &criterion.requirement_groups)
            .flat_map(|group| &group.requirements)
    }
}

impl DeclaredResponse {
    /// Parses the declared response.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn try_create(
        id: &str,
        value: RequirementResponseValue,
        related_tenderer_id: &str,
        responder_id: &str,
        responder_name: &str,
        requirement_id: &str,
    ) -> Result<Self, DataError> {
        let id: RequirementResponseId =
            parse_requirement_response_id(id, "requirementResponse.id")?;
        let related_tenderer_id: OrganizationId =
            parse_organization_id(related_tenderer_id, "relatedTendererId")?;
        let responder: Responder = Responder {
            id: parse_person_id(responder_id, "responder.id")?,
            name: responder_name.to_string(),
        };
        let requirement_id: RequirementId = parse_requirement_id(requirement_id, "requirementId")?;
        Ok(Self {
            id,
            value,
            related_tenderer_id,
            responder,
            requirement_id,
        })
    }
}

impl Criterion {
    /// The criterion id as sent by the tender.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds a criterion from its already-parsed groups.
    ///
    /// # Errors
    ///
    /// Returns the first invalid group.
    pub fn try_create(
        id: &str,
        requirement_groups: impl IntoIterator<Item = Result<RequirementGroup, DataError>>,
    ) -> Result<Self, DataError> {
        Ok(Self {
            id: id.to_string(),
            requirement_groups: requirement_groups.into_iter().collect::<Result<_, _>>()?,
        })
    }
}

impl RequirementGroup {
    /// The group id as sent by the tender.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds a requirement group from its already-parsed requirements.
    ///
    /// # Errors
    ///
    /// Returns the first invalid requirement.
    pub fn try_create(
        id: &str,
        requirements: impl IntoIterator<Item = Result<Requirement, DataError>>,
    ) -> Result<Self, DataError> {
        Ok(Self {
            id: id.to_string(),
            requirements: requirements.into_iter().collect::<Result<_, _>>()?,
        })
    }
}

impl Requirement {
    /// Parses a requirement.
    ///
    /// # Errors
    ///
    /// Returns `EmptyString` for a blank id or `UnknownValue` for an
    /// unknown data type.
    pub fn try_create(id: &str, data_type: &str) -> Result<Self, DataError> {
        Ok(Self {
            id: parse_requirement_id(id, "requirement.id")?,
            data_type: parse_enum(data_type, &REQUIREMENT_DATA_TYPES, "dataType")?,
        })
    }
}
