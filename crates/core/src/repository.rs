// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::Incident;
use qualification_domain::{
    Cpid, Ocid, OperationType, ProcurementMethodDetails, Qualification, QualificationPeriod,
    QualificationState,
};
use std::collections::HashMap;

/// Storage of qualifications, keyed by process and stage.
pub trait QualificationRepository {
    /// Returns every qualification stored for the stage, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an incident when the store cannot be read.
    fn find_by(&self, cpid: &Cpid, ocid: &Ocid) -> Result<Vec<Qualification>, Incident>;

    /// Inserts or replaces the given qualifications by id.
    ///
    /// # Errors
    ///
    /// Returns an incident when the store cannot be written.
    fn save_all(
        &mut self,
        cpid: &Cpid,
        ocid: &Ocid,
        qualifications: &[Qualification],
    ) -> Result<(), Incident>;
}

/// Source of the qualification states a request may act on.
pub trait QualificationStateRules {
    /// Returns the allowed states for the combination, empty when none are configured.
    ///
    /// # Errors
    ///
    /// Returns an incident when the rules cannot be read.
    fn find_states(
        &self,
        country: &str,
        pmd: ProcurementMethodDetails,
        operation_type: OperationType,
    ) -> Result<Vec<QualificationState>, Incident>;
}

/// Storage of qualification periods, one per process and stage.
pub trait PeriodRepository {
    /// Returns the period stored for the stage, if any.
    ///
    /// # Errors
    ///
    /// Returns an incident when the store cannot be read.
    fn find_by(&self, cpid: &Cpid, ocid: &Ocid) -> Result<Option<QualificationPeriod>, Incident>;

    /// Inserts or replaces the period of the stage.
    ///
    /// # Errors
    ///
    /// Returns an incident when the store cannot be written.
    fn save(
        &mut self,
        cpid: &Cpid,
        ocid: &Ocid,
        period: QualificationPeriod,
    ) -> Result<(), Incident>;
}

/// A repository held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQualificationRepository {
    stages: HashMap<(Cpid, Ocid), Vec<Qualification>>,
}

impl InMemoryQualificationRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the repository with `qualifications` stored for the stage.
    #[must_use]
    pub fn with_qualifications(
        mut self,
        cpid: &Cpid,
        ocid: &Ocid,
        qualifications: Vec<Qualification>,
    ) -> Self {
        self.stages
            .entry((cpid.clone(), ocid.clone()))
            .or_default()
            .extend(qualifications);
        self
    }

    /// Total number of stored qualifications across all stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }

    /// Returns whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QualificationRepository for InMemoryQualificationRepository {
    fn find_by(&self, cpid: &Cpid, ocid: &Ocid) -> Result<Vec<Qualification>, Incident> {
        Ok(self
            .stages
            .get(&(cpid.clone(), ocid.clone()))
            .cloned()
            .unwrap_or_default())
    }

    fn save_all(
        &mut self,
        cpid: &Cpid,
        ocid: &Ocid,
        qualifications: &[Qualification],
    ) -> Result<(), Incident> {
        let stored: &mut Vec<Qualification> =
            self.stages.entry((cpid.clone(), ocid.clone())).or_default();
        for qualification in qualifications {
            match stored.iter_mut().find(|existing| existing.id == qualification.id) {
                Some(existing) => *existing = qualification.clone(),
                None => stored.push(qualification.clone()),
            }
        }
        Ok(())
    }
}

/// Periods held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPeriodRepository {
    periods: HashMap<(Cpid, Ocid), QualificationPeriod>,
}

impl InMemoryPeriodRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PeriodRepository for InMemoryPeriodRepository {
    fn find_by(&self, cpid: &Cpid, ocid: &Ocid) -> Result<Option<QualificationPeriod>, Incident> {
        Ok(self.periods.get(&(cpid.clone(), ocid.clone())).copied())
    }

    fn save(
        &mut self,
        cpid: &Cpid,
        ocid: &Ocid,
        period: QualificationPeriod,
    ) -> Result<(), Incident> {
        self.periods.insert((cpid.clone(), ocid.clone()), period);
        Ok(())
    }
}
