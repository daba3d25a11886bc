// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse::{
    parse_cpid, parse_enum, parse_ocid, parse_qualification_id, parse_requirement_response_id,
};
use qualification_domain::{
    AllowList, Cpid, DataError, Ocid, QualificationId, QualificationState, QualificationStatus,
    QualificationStatusDetails, RequirementResponseId,
};
use std::sync::LazyLock;

static STATUSES: LazyLock<AllowList<QualificationStatus>> = LazyLock::new(AllowList::all);
static STATUS_DETAILS: LazyLock<AllowList<QualificationStatusDetails>> =
    LazyLock::new(AllowList::all);

/// Parameters of `findQualificationIds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQualificationIdsParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) states: Vec<QualificationState>,
}

impl FindQualificationIdsParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        states: impl IntoIterator<Item = Result<QualificationState, DataError>>,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let states: Vec<QualificationState> = states.into_iter().collect::<Result<_, _>>()?;
        Ok(Self { cpid, ocid, states })
    }

    /// Parses one requested state.
    ///
    /// # Errors
    ///
    /// Returns `UnknownValue` when either key is not a known status.
    pub fn try_create_state(
        status: &str,
        status_details: Option<&str>,
    ) -> Result<QualificationState, DataError> {
        let status: QualificationStatus = parse_enum(status, &STATUSES, "states.status")?;
        let status_details: Option<QualificationStatusDetails> = status_details
            .map(|details| parse_enum(details, &STATUS_DETAILS, "states.statusDetails"))
            .transpose()?;
        Ok(QualificationState::new(status, status_details))
    }
}

/// Parameters of `findRequirementResponseByIds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRequirementResponseByIdsParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) qualification_id: QualificationId,
    pub(crate) requirement_response_ids: Vec<RequirementResponseId>,
}

impl FindRequirementResponseByIdsParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        qualification_id: &str,
        requirement_response_ids: &[String],
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let qualification_id: QualificationId =
            parse_qualification_id(qualification_id, "qualificationId")?;
        let requirement_response_ids: Vec<RequirementResponseId> = requirement_response_ids
            .iter()
            .map(|id| parse_requirement_response_id(id, "requirementResponseIds"))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            cpid,
            ocid,
            qualification_id,
            requirement_response_ids,
        })
    }
}
