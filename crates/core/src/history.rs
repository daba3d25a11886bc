// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replay of results for commands that were already executed.

use crate::error::Incident;
use serde_json::Value;
use std::collections::HashMap;

/// Stores the result of each executed command by request id and action.
pub trait CommandHistory {
    /// Returns the stored result of a previous execution, if any.
    ///
    /// # Errors
    ///
    /// Returns an incident when the history cannot be read.
    fn find(&self, command_id: &str, action: &str) -> Result<Option<Value>, Incident>;

    /// Records the result of an execution.
    ///
    /// # Errors
    ///
    /// Returns an incident when the history cannot be written.
    fn save(&mut self, command_id: &str, action: &str, result: &Value) -> Result<(), Incident>;
}

/// Command history held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandHistory {
    entries: HashMap<(String, String), Value>,
}

impl InMemoryCommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandHistory for InMemoryCommandHistory {
    fn find(&self, command_id: &str, action: &str) -> Result<Option<Value>, Incident> {
        Ok(self
            .entries
            .get(&(command_id.to_string(), action.to_string()))
            .cloned())
    }

    fn save(&mut self, command_id: &str, action: &str, result: &Value) -> Result<(), Incident> {
        self.entries
            .entry((command_id.to_string(), action.to_string()))
            .or_insert_with(|| result.clone());
        Ok(())
    }
}
