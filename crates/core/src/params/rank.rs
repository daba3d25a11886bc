// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse::{
    element_if_only_one, parse_cpid, parse_date, parse_enum, parse_ocid, parse_submission_id,
};
use qualification_domain::{
    AllowList, Cpid, DataError, Ocid, QualificationSystemMethod, ReductionCriteria, SubmissionId,
};
use std::sync::LazyLock;
use time::PrimitiveDateTime;

static SYSTEM_METHODS: LazyLock<AllowList<QualificationSystemMethod>> = LazyLock::new(|| {
    AllowList::filtered(|method| {
        matches!(
            method,
            QualificationSystemMethod::Automated | QualificationSystemMethod::Manual
        )
    })
});

static REDUCTION_CRITERIA: LazyLock<AllowList<ReductionCriteria>> = LazyLock::new(|| {
    AllowList::filtered(|criteria| {
        matches!(criteria, ReductionCriteria::Scoring | ReductionCriteria::None)
    })
});

/// Parameters of `rankQualifications`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNextForQualificationParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) submissions: Vec<RankedSubmission>,
    pub(crate) other_criteria: OtherCriteria,
    pub(crate) criteria: Vec<String>,
}

/// A submission taking part in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSubmission {
    pub(crate) id: SubmissionId,
    pub(crate) date: PrimitiveDateTime,
}

/// How the tender evaluates and reduces its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtherCriteria {
    pub(crate) qualification_system_method: QualificationSystemMethod,
    pub(crate) reduction_criteria: ReductionCriteria,
}

impl SetNextForQualificationParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        submissions: impl IntoIterator<Item = Result<RankedSubmission, DataError>>,
        other_criteria: impl FnOnce() -> Result<OtherCriteria, DataError>,
        criteria: Option<Vec<String>>,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let submissions: Vec<RankedSubmission> =
            submissions.into_iter().collect::<Result<_, _>>()?;
        let other_criteria: OtherCriteria = other_criteria()?;
        Ok(Self {
            cpid,
            ocid,
            submissions,
            other_criteria,
            criteria: criteria.unwrap_or_default(),
        })
    }
}

impl RankedSubmission {
    /// Parses one submission.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn try_create(id: &str, date: &str) -> Result<Self, DataError> {
        let id: SubmissionId = parse_submission_id(id, "submissionId")?;
        let date: PrimitiveDateTime = parse_date(date, "date")?;
        Ok(Self { id, date })
    }
}

impl OtherCriteria {
    /// Parses the tender's evaluation settings.
    ///
    /// Exactly one qualification system method must be given; the count is
    /// checked before the key is looked up.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumberOfElementsInArray` for a wrong method count,
    /// otherwise the first unknown key.
    pub fn try_create(
        qualification_system_methods: &[String],
        reduction_criteria: &str,
    ) -> Result<Self, DataError> {
        let method: &String =
            element_if_only_one(qualification_system_methods, "qualificationSystemMethods")?;
        let qualification_system_method: QualificationSystemMethod =
            parse_enum(method, &SYSTEM_METHODS, "qualificationSystemMethods")?;
        let reduction_criteria: ReductionCriteria =
            parse_enum(reduction_criteria, &REDUCTION_CRITERIA, "reductionCriteria")?;
        Ok(Self {
            qualification_system_method,
            reduction_criteria,
        })
    }
}
