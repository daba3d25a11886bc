// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error catalogs.
//!
//! Three taxonomies are kept apart: [`DataError`] for malformed input,
//! [`ValidationError`] for business rules over stored entities, and
//! [`DomainRuleError`] for numeric policies on value objects. The `Display`
//! output of each variant is its description and must stay byte-stable.

use crate::enums::{OperationType, ProcurementMethodDetails, RequirementDataType};
use crate::ids::{Cpid, Ocid, QualificationId, RequirementResponseId, SubmissionId};
use bigdecimal::BigDecimal;
use thiserror::Error;

/// Input that could not be turned into a typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Missing required attribute '{name}'.")]
    MissingRequiredAttribute { name: String },

    #[error(
        "Data type mismatch of attribute '{name}'. Expected data type: '{expected_type}', actual data type: '{actual_type}'."
    )]
    DataTypeMismatch {
        name: String,
        expected_type: String,
        actual_type: String,
    },

    #[error(
        "Attribute value mismatch of '{name}' with one of enum expected values. Expected values: '{}', actual value: '{actual_value}'.",
        .expected_values.join(", ")
    )]
    UnknownValue {
        name: String,
        expected_values: Vec<String>,
        actual_value: String,
    },

    #[error(
        "Data format mismatch of attribute '{name}'. Expected data format: '{expected_format}', actual value: '{actual_value}'."
    )]
    DataFormatMismatch {
        name: String,
        expected_format: String,
        actual_value: String,
    },

    #[error(
        "Data mismatch of attribute '{name}' to the pattern: '{pattern}'. Actual value: '{actual_value}'."
    )]
    DataMismatchToPattern {
        name: String,
        pattern: String,
        actual_value: String,
    },

    #[error(
        "Count of elements in array '{name}' is invalid. Expected from {min} to {max} element(s), actual: {actual_length}."
    )]
    InvalidNumberOfElementsInArray {
        name: String,
        min: usize,
        max: usize,
        actual_length: usize,
    },

    #[error("Invalid date-time '{actual_value}' of attribute '{name}'.")]
    InvalidDateTime { name: String, actual_value: String },

    #[error("Incorrect an attribute value. The attribute '{name}' is empty or blank.")]
    EmptyString { name: String },
}

impl DataError {
    const fn number(&self) -> u8 {
        match self {
            Self::MissingRequiredAttribute { .. } => 1,
            Self::DataTypeMismatch { .. } => 2,
            Self::UnknownValue { .. } => 3,
            Self::DataFormatMismatch { .. } => 4,
            Self::DataMismatchToPattern { .. } => 5,
            Self::InvalidNumberOfElementsInArray { .. } => 7,
            Self::InvalidDateTime { .. } => 8,
            Self::EmptyString { .. } => 10,
        }
    }

    /// Returns the stable code, e.g. `DR-5`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("DR-{}", self.number())
    }

    /// Returns the name of the offending attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MissingRequiredAttribute { name }
            | Self::DataTypeMismatch { name, .. }
            | Self::UnknownValue { name, .. }
            | Self::DataFormatMismatch { name, .. }
            | Self::DataMismatchToPattern { name, .. }
            | Self::InvalidNumberOfElementsInArray { name, .. }
            | Self::InvalidDateTime { name, .. }
            | Self::EmptyString { name } => name,
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// A business rule evaluated against stored qualifications failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Qualifications not found by cpid={cpid} and ocid={ocid}.")]
    QualificationsNotFoundOnRankQualifications { cpid: Cpid, ocid: Ocid },

    #[error("Related submission in qualifications not found on submission id='{submission_id}'.")]
    RelatedSubmissionNotEqualOnRankQualifications { submission_id: SubmissionId },

    #[error("Invalid token '{token}' by cpid '{cpid}'.")]
    InvalidTokenOnCheckAccessToQualification { token: String, cpid: Cpid },

    #[error("Invalid owner '{owner}' by cpid '{cpid}'.")]
    InvalidOwnerOnCheckAccessToQualification { owner: String, cpid: Cpid },

    #[error(
        "Qualification not found by cpid='{cpid}' and ocid='{ocid}' and id='{qualification_id}'."
    )]
    QualificationNotFoundByCheckAccessToQualification {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },

    #[error(
        "Qualification not found by cpid='{cpid}' and ocid='{ocid}' and id='{qualification_id}'."
    )]
    QualificationNotFoundByCheckQualificationState {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },

    #[error(
        "Qualification states not found by country='{country}' and pmd='{pmd}' and operationType='{operation_type}'."
    )]
    QualificationStatesNotFound {
        country: String,
        pmd: ProcurementMethodDetails,
        operation_type: OperationType,
    },

    #[error("Qualification with id='{qualification_id}' has invalid states.")]
    QualificationStatesIsInvalidOnCheckQualificationState { qualification_id: QualificationId },

    #[error(
        "Qualification not found by cpid='{cpid}' and ocid='{ocid}' and id='{qualification_id}'."
    )]
    QualificationNotFoundOnDoDeclaration {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },

    #[error(
        "Qualification not found by cpid='{cpid}' and ocid='{ocid}' and id='{qualification_id}'."
    )]
    QualificationNotFoundOnCheckDeclaration {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },

    #[error("Requirement with id='{requirement_id}' not found.")]
    RequirementNotFoundOnCheckDeclaration { requirement_id: String },

    #[error("Requirement datatype mismatch, expected='{expected}' , actual='{actual}'.")]
    ValueDataTypeMismatchOnCheckDeclaration {
        expected: RequirementDataType,
        actual: RequirementDataType,
    },

    #[error("Invalid Requirement Response Id, actual='{actual}', expected='{expected}'.")]
    InvalidRequirementResponseIdOnCheckDeclaration {
        actual: RequirementResponseId,
        expected: RequirementResponseId,
    },

    #[error(
        "Qualification not found by cpid='{cpid}' and ocid='{ocid}' and id='{qualification_id}'."
    )]
    QualificationNotFoundOnFindRequirementResponseByIds {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },

    #[error(
        "Qualification not found by cpid='{cpid}' and ocid='{ocid}' and id='{qualification_id}'."
    )]
    QualificationNotFoundOnDoConsideration {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },

    #[error("No qualification found by cpid='{cpid}' and ocid='{ocid}'.")]
    NoQualificationFoundOnCheckQualificationsForProtocol { cpid: Cpid, ocid: Ocid },

    #[error(
        "Unsuitable qualification found by cpid '{cpid}', ocid '{ocid}', id '{qualification_id}''."
    )]
    UnsuitableQualificationFoundOnCheckQualificationsForProtocol {
        cpid: Cpid,
        ocid: Ocid,
        qualification_id: QualificationId,
    },
}

impl ValidationError {
    /// Returns the stable code, e.g. `VR.COM-7.13.1`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::QualificationsNotFoundOnRankQualifications { .. } => "VR.COM-7.13.1",
            Self::RelatedSubmissionNotEqualOnRankQualifications { .. } => "VR.COM-7.13.2",
            Self::InvalidTokenOnCheckAccessToQualification { .. } => "VR.COM-7.14.1",
            Self::InvalidOwnerOnCheckAccessToQualification { .. } => "VR.COM-7.14.2",
            Self::QualificationNotFoundByCheckAccessToQualification { .. } => "VR.COM-7.14.3",
            Self::QualificationNotFoundByCheckQualificationState { .. } => "VR.COM-7.17.1",
            Self::QualificationStatesNotFound { .. } => "VR.COM-17",
            Self::QualificationStatesIsInvalidOnCheckQualificationState { .. } => "VR.COM-7.17.2",
            Self::QualificationNotFoundOnDoDeclaration { .. } => "VR.COM-7.19.1",
            Self::QualificationNotFoundOnCheckDeclaration { .. } => "VR.COM-7.16.1",
            Self::RequirementNotFoundOnCheckDeclaration { .. } => "VR.COM-7.16.2",
            Self::ValueDataTypeMismatchOnCheckDeclaration { .. } => "VR.COM-7.16.3",
            Self::InvalidRequirementResponseIdOnCheckDeclaration { .. } => "VR.COM-7.16.4",
            Self::QualificationNotFoundOnFindRequirementResponseByIds { .. } => "VR.COM-7.18.1",
            Self::QualificationNotFoundOnDoConsideration { .. } => "VR.COM-7.21.1",
            Self::NoQualificationFoundOnCheckQualificationsForProtocol { .. } => "VR.COM-7.24.1",
            Self::UnsuitableQualificationFoundOnCheckQualificationsForProtocol { .. } => {
                "VR.COM-7.24.2"
            }
        }
    }

    /// Returns the id of the entity the failure is about, when one is reported.
    #[must_use]
    pub fn entity_id(&self) -> Option<String> {
        match self {
            Self::UnsuitableQualificationFoundOnCheckQualificationsForProtocol {
                qualification_id,
                ..
            }
            | Self::QualificationStatesIsInvalidOnCheckQualificationState { qualification_id } => {
                Some(qualification_id.to_string())
            }
            _ => None,
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// A value object violated a numeric policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainRuleError {
    #[error(
        "Invalid scale ({current_scale}) for attribute '{class_name}'. Available scale: {available_scale}."
    )]
    InvalidScale {
        class_name: String,
        current_scale: i64,
        available_scale: i64,
    },

    #[error("Incorrect value '{value}' of attribute '{class_name}'. {reason}")]
    IncorrectValue {
        class_name: String,
        value: BigDecimal,
        reason: String,
    },
}

impl DomainRuleError {
    /// Returns the stable code, e.g. `DM-1`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidScale { .. } => "DM-1",
            Self::IncorrectValue { .. } => "DM-2",
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}
