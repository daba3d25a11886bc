// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use qualification_domain::{DataError, DomainRuleError, ValidationError};
use thiserror::Error;

/// An infrastructure failure that is not the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Incident {
    /// Reading or writing stored records failed.
    #[error("Database incident. {0}")]
    Database(String),
    /// A record could not be converted to or from its JSON form.
    #[error("Data transform incident. {0}")]
    Transform(String),
}

impl Incident {
    /// Returns the stable code, e.g. `INC-01`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "INC-01",
            Self::Transform(_) => "INC-02",
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// Errors that can occur while executing a use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input could not be parsed into typed parameters.
    InvalidData(DataError),
    /// A business rule over stored qualifications failed.
    ValidationFailed(ValidationError),
    /// A value object violated a numeric policy.
    DomainRuleViolation(DomainRuleError),
    /// The infrastructure failed.
    Incident(Incident),
}

impl CoreError {
    /// Returns the stable code of the wrapped error.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::InvalidData(err) => err.code(),
            Self::ValidationFailed(err) => err.code().to_string(),
            Self::DomainRuleViolation(err) => err.code().to_string(),
            Self::Incident(err) => err.code().to_string(),
        }
    }

    /// Returns the description of the wrapped error.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InvalidData(err) => err.description(),
            Self::ValidationFailed(err) => err.description(),
            Self::DomainRuleViolation(err) => err.description(),
            Self::Incident(err) => err.description(),
        }
    }

    /// Returns whether this is an infrastructure failure.
    #[must_use]
    pub const fn is_incident(&self) -> bool {
        matches!(self, Self::Incident(_))
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidData(err) => write!(f, "Invalid data: {err}"),
            Self::ValidationFailed(err) => write!(f, "Validation failed: {err}"),
            Self::DomainRuleViolation(err) => write!(f, "Domain rule violation: {err}"),
            Self::Incident(err) => write!(f, "Incident: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DataError> for CoreError {
    fn from(err: DataError) -> Self {
        Self::InvalidData(err)
    }
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationFailed(err)
    }
}

impl From<DomainRuleError> for CoreError {
    fn from(err: DomainRuleError) -> Self {
        Self::DomainRuleViolation(err)
    }
}

impl From<Incident> for CoreError {
    fn from(err: Incident) -> Self {
        Self::Incident(err)
    }
}
