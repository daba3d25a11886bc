// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening and closing the qualification period of a stage.

use crate::error::CoreError;
use crate::params::{SetQualificationPeriodEndParams, StartQualificationPeriodParams};
use crate::repository::PeriodRepository;
use crate::results::{
    EndedPeriod, PreQualification, SetQualificationPeriodEndResult, StartQualificationPeriodResult,
    StartedPeriod,
};
use qualification_domain::QualificationPeriod;
use tracing::info;

/// Executes the period use cases against a period repository.
#[derive(Debug)]
pub struct PeriodService<P> {
    repository: P,
}

impl<P: PeriodRepository> PeriodService<P> {
    /// Creates a service.
    #[must_use]
    pub const fn new(repository: P) -> Self {
        Self { repository }
    }

    /// The underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &P {
        &self.repository
    }

    /// Opens the qualification period at the given date.
    ///
    /// A period that was already stored is replaced, end date included.
    ///
    /// # Errors
    ///
    /// Returns an incident when the repository fails.
    pub fn start_qualification_period(
        &mut self,
        params: &StartQualificationPeriodParams,
    ) -> Result<StartQualificationPeriodResult, CoreError> {
        let period: QualificationPeriod = QualificationPeriod::starting_at(params.date);
        self.repository.save(&params.cpid, &params.ocid, period)?;
        info!(cpid = %params.cpid, ocid = %params.ocid, "Started qualification period");

        Ok(StartQualificationPeriodResult {
            qualification_period: StartedPeriod {
                start_date: params.date,
            },
        })
    }

    /// Closes the qualification period at the given date.
    ///
    /// A stage without a stored period gets one with only the end date set.
    ///
    /// # Errors
    ///
    /// Returns an incident when the repository fails.
    pub fn set_qualification_period_end(
        &mut self,
        params: &SetQualificationPeriodEndParams,
    ) -> Result<SetQualificationPeriodEndResult, CoreError> {
        let stored: Option<QualificationPeriod> =
            self.repository.find_by(&params.cpid, &params.ocid)?;
        let period: QualificationPeriod = stored.unwrap_or_default().ending_at(params.date);
        self.repository.save(&params.cpid, &params.ocid, period)?;
        info!(cpid = %params.cpid, ocid = %params.ocid, "Set qualification period end");

        Ok(SetQualificationPeriodEndResult {
            pre_qualification: PreQualification {
                period: EndedPeriod {
                    end_date: params.date,
                },
            },
        })
    }
}
