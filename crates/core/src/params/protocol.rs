// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::QUALIFYING_PMD;
use crate::parse::{parse_cpid, parse_enum, parse_ocid};
use qualification_domain::{
    AllowList, Cpid, DataError, Ocid, OperationType, ProcurementMethodDetails,
};
use std::sync::LazyLock;

static INVITATION_OPERATION_TYPES: LazyLock<AllowList<OperationType>> = LazyLock::new(|| {
    AllowList::filtered(|operation| matches!(operation, OperationType::QualificationProtocol))
});

/// Parameters of `checkQualificationsForProtocol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckQualificationsForProtocolParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
}

impl CheckQualificationsForProtocolParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(cpid: &str, ocid: &str) -> Result<Self, DataError> {
        Ok(Self {
            cpid: parse_cpid(cpid)?,
            ocid: parse_ocid(ocid)?,
        })
    }
}

/// Parameters of `analyzeQualificationsForInvitation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeQualificationsForInvitationParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) pmd: ProcurementMethodDetails,
    pub(crate) country: String,
    pub(crate) operation_type: OperationType,
}

impl AnalyzeQualificationsForInvitationParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        pmd: &str,
        country: &str,
        operation_type: &str,
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let pmd: ProcurementMethodDetails = parse_enum(pmd, &QUALIFYING_PMD, "pmd")?;
        let operation_type: OperationType =
            parse_enum(operation_type, &INVITATION_OPERATION_TYPES, "operationType")?;
        Ok(Self {
            cpid,
            ocid,
            pmd,
            country: country.to_string(),
            operation_type,
        })
    }
}
