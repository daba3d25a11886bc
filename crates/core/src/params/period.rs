// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parse::{parse_cpid, parse_date, parse_ocid};
use qualification_domain::{Cpid, DataError, Ocid};
use time::PrimitiveDateTime;

/// Parameters of `startQualificationPeriod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartQualificationPeriodParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) date: PrimitiveDateTime,
}

impl StartQualificationPeriodParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(cpid: &str, ocid: &str, date: &str) -> Result<Self, DataError> {
        Ok(Self {
            cpid: parse_cpid(cpid)?,
            ocid: parse_ocid(ocid)?,
            date: parse_date(date, "date")?,
        })
    }
}

/// Parameters of `setQualificationPeriodEnd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetQualificationPeriodEndParams {
    pub(crate) cpid: Cpid,
    pub(crate) ocid: Ocid,
    pub(crate) date: PrimitiveDateTime,
}

impl SetQualificationPeriodEndParams {
    /// Parses the request.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field in declaration order.
    pub fn try_create(cpid: &str, ocid: &str, date: &str) -> Result<Self, DataError> {
        Ok(Self {
            cpid: parse_cpid(cpid)?,
            ocid: parse_ocid(ocid)?,
            date: parse_date(date, "date")?,
        })
    }
}
