// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse::{parse_cpid, parse_ocid, parse_qualification_id};
use qualification_domain::{Cpid, DataError, Ocid, QualificationId};

/// Parameters of `doConsideration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoConsiderationParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) qualification_ids: Vec<QualificationId>,
}

impl DoConsiderationParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(
        cpid: &str,
        ocid: &str,
        qualification_ids: &[String],
    ) -> Result<Self, DataError> {
        let cpid: Cpid = parse_cpid(cpid)?;
        let ocid: Ocid = parse_ocid(ocid)?;
        let qualification_ids: Vec<QualificationId> = qualification_ids
            .iter()
            .map(|id| parse_qualification_id(id, "qualifications.id"))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            cpid,
            ocid,
            qualification_ids,
        })
    }
}
