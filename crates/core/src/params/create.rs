// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse::{
    parse_cpid, parse_date, parse_decimal, parse_ocid, parse_owner, parse_submission_id,
};
use bigdecimal::BigDecimal;
use qualification_domain::{Cpid, DataError, Ocid, Owner, SubmissionId};
use time::PrimitiveDateTime;

/// Parameters of `createQualifications`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQualificationsParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) date: PrimitiveDateTime,
    pub(crate) owner: Owner,
    pub(crate) submissions: Vec<NewSubmission>,
}

/// A submission that receives a fresh qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub(crate) id: SubmissionId,
    pub(crate) scoring: Option<BigDecimal>,
}

impl CreateQualificationsParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        date: &str,
        owner: &str,
        submissions: impl IntoIterator<Item = Result<NewSubmission, DataError>>,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let date: PrimitiveDateTime = parse_date(date, "date")?;
        let owner: Owner = parse_owner(owner)?;
        let submissions: Vec<NewSubmission> = submissions.into_iter().collect::<Result<_, _>>()?;
        Ok(Self {
            cpid,
            ocid,
            date,
            owner,
            submissions,
        })
    }
}

impl NewSubmission {
    /// Parses one submission.
    ///
    /// The scoring is only checked for being a decimal here; its numeric
    /// policy is a domain rule applied when the qualification is built.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn try_create(id: &str, scoring: Option<&str>) -> Result<Self, DataError> {
        let id: SubmissionId = parse_submission_id(id, "submissionId")?;
        let scoring: Option<BigDecimal> = scoring
            .map(|value| parse_decimal(value, "submissions.scoring"))
            .transpose()?;
        Ok(Self { id, scoring })
    }
}
