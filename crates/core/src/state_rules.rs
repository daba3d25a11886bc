// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Allowed qualification states per country, procurement method and operation.

use crate::error::Incident;
use crate::repository::QualificationStateRules;
use qualification_domain::{
    EnumElement, OperationType, ProcurementMethodDetails, QualificationState,
    QualificationStatus, QualificationStatusDetails,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Country the built-in rule table is configured for.
pub const DEFAULT_COUNTRY: &str = "MD";

/// Errors raised while loading a rule table.
#[derive(Debug, Error)]
pub enum StateRulesError {
    #[error("could not read state rules: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse state rules: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRule {
    pub country: String,
    pub pmd: ProcurementMethodDetails,
    pub operation_type: OperationType,
    pub states: Vec<QualificationState>,
}

/// A fixed table of state rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticStateRules {
    rules: Vec<StateRule>,
}

impl StaticStateRules {
    /// Creates a table from explicit rows.
    #[must_use]
    pub const fn new(rules: Vec<StateRule>) -> Self {
        Self { rules }
    }

    /// Parses a table from a JSON array of rows.
    ///
    /// # Errors
    ///
    /// Returns `StateRulesError::Parse` when the text is not a valid table.
    pub fn from_json(text: &str) -> Result<Self, StateRulesError> {
        let rules: Vec<StateRule> = serde_json::from_str(text)?;
        Ok(Self { rules })
    }

    /// Reads and parses a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StateRulesError> {
        let text: String = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The rows of this table.
    #[must_use]
    pub fn rules(&self) -> &[StateRule] {
        &self.rules
    }
}

impl Default for StaticStateRules {
    /// The built-in table for [`DEFAULT_COUNTRY`].
    ///
    /// Every qualifying procurement method gets the same rows:
    /// a qualification decision needs a qualification under consideration,
    /// consideration starts from an awaiting qualification, and a
    /// conflict-of-interest declaration is accepted in either.
    fn default() -> Self {
        let awaiting: QualificationState = QualificationState::new(
            QualificationStatus::Pending,
            Some(QualificationStatusDetails::Awaiting),
        );
        let consideration: QualificationState = QualificationState::new(
            QualificationStatus::Pending,
            Some(QualificationStatusDetails::Consideration),
        );

        let rules: Vec<StateRule> = ProcurementMethodDetails::ALL
            .iter()
            .copied()
            .filter(|pmd| crate::params::QUALIFYING_PMD.contains(*pmd))
            .flat_map(|pmd| {
                [
                    (OperationType::Qualification, vec![consideration]),
                    (OperationType::QualificationConsideration, vec![awaiting]),
                    (
                        OperationType::QualificationDeclareNonConflictOfInterest,
                        vec![awaiting, consideration],
                    ),
                ]
                .into_iter()
                .map(move |(operation_type, states)| StateRule {
                    country: DEFAULT_COUNTRY.to_string(),
                    pmd,
                    operation_type,
                    states,
                })
            })
            .collect();

        Self { rules }
    }
}

impl QualificationStateRules for StaticStateRules {
    fn find_states(
        &self,
        country: &str,
        pmd: ProcurementMethodDetails,
        operation_type: OperationType,
    ) -> Result<Vec<QualificationState>, Incident> {
        Ok(self
            .rules
            .iter()
            .filter(|rule| {
                rule.country == country && rule.pmd == pmd && rule.operation_type == operation_type
            })
            .flat_map(|rule| rule.states.iter().copied())
            .collect())
    }
}
