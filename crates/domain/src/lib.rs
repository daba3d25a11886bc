// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod date;
mod enums;
mod error;
mod ids;
mod period;
mod qualification;
mod validation;

#[cfg(test)]
mod tests;

pub use date::{
    DATE_TIME_LAYOUT, DateTimeError, format_date_time, parse_date_time, serde_date_time,
};
pub use enums::{
    AllowList, EnumElement, OperationType, ProcurementMethodDetails, QualificationStatus,
    QualificationStatusDetails, QualificationSystemMethod, ReductionCriteria, RequirementDataType,
    Stage,
};
pub use error::{DataError, DomainRuleError, ValidationError};
pub use ids::{
    CPID_PATTERN, Cpid, Ocid, OrganizationId, Owner, PersonId, QualificationId, RequirementId,
    RequirementResponseId, SubmissionId, Token, UUID_PATTERN,
};
pub use period::QualificationPeriod;
pub use qualification::{
    MAX_SCORING_SCALE, Qualification, QualificationState, RequirementResponse,
    RequirementResponseValue, Responder, Scoring,
};
pub use validation::{
    ValidationResult, ValidationRule, negative_rule, scale_of, scale_rule, validate_all,
};
