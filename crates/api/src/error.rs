// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use qualification::CoreError;
use qualification_domain::{DataError, DomainRuleError, ValidationError};

/// API-level errors.
///
/// These carry exactly what the response envelope reports and are distinct
/// from the core error catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request data could not be parsed.
    InvalidData {
        /// The `DR-` code.
        code: String,
        /// A human-readable description.
        description: String,
        /// The rejected attribute.
        name: String,
    },
    /// A business or numeric rule was violated.
    RuleViolation {
        /// The `VR.COM-` or `DM-` code.
        code: String,
        /// A human-readable description.
        description: String,
        /// The offending entity, when the rule names one.
        entity_id: Option<String>,
    },
    /// The infrastructure failed.
    Incident {
        /// The `INC-` code.
        code: String,
        /// A human-readable description.
        description: String,
    },
}

impl ApiError {
    /// The un-suffixed error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidData { code, .. }
            | Self::RuleViolation { code, .. }
            | Self::Incident { code, .. } => code,
        }
    }

    /// The description reported to the caller.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::InvalidData { description, .. }
            | Self::RuleViolation { description, .. }
            | Self::Incident { description, .. } => description,
        }
    }

    /// Returns whether the error is reported as an incident.
    #[must_use]
    pub const fn is_incident(&self) -> bool {
        matches!(self, Self::Incident { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidData {
                code,
                description,
                name,
            } => {
                write!(f, "Invalid data ({code}) in '{name}': {description}")
            }
            Self::RuleViolation {
                code, description, ..
            } => {
                write!(f, "Rule violation ({code}): {description}")
            }
            Self::Incident { code, description } => {
                write!(f, "Incident ({code}): {description}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        Self::InvalidData {
            code: err.code(),
            description: err.description(),
            name: err.name().to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::RuleViolation {
            code: err.code().to_string(),
            description: err.description(),
            entity_id: err.entity_id(),
        }
    }
}

impl From<DomainRuleError> for ApiError {
    fn from(err: DomainRuleError) -> Self {
        Self::RuleViolation {
            code: err.code().to_string(),
            description: err.description(),
            entity_id: None,
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidData(data_err) => ApiError::from(data_err),
        CoreError::ValidationFailed(validation_err) => ApiError::from(validation_err),
        CoreError::DomainRuleViolation(rule_err) => ApiError::from(rule_err),
        CoreError::Incident(incident) => ApiError::Incident {
            code: incident.code().to_string(),
            description: incident.description(),
        },
    }
}
