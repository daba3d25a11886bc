// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// Identity of this service as reported in error codes and incidents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl ServiceInfo {
    /// Creates a service identity.
    #[must_use]
    pub const fn new(id: String, name: String, version: String) -> Self {
        Self { id, name, version }
    }

    /// Suffixes `code` with this service's id, e.g. `DR-5/19`.
    #[must_use]
    pub fn full_code(&self, code: &str) -> String {
        format!("{code}/{}", self.id)
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            id: String::from("19"),
            name: String::from("e-qualification"),
            version: String::from("1.0.0"),
        }
    }
}
