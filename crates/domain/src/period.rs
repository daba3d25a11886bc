// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::PrimitiveDateTime;

/// The qualification period of one stage. Either bound may still be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualificationPeriod {
    pub start_date: Option<PrimitiveDateTime>,
    pub end_date: Option<PrimitiveDateTime>,
}

impl QualificationPeriod {
    /// A period that opens at `start_date` and has no end yet.
    #[must_use]
    pub const fn starting_at(start_date: PrimitiveDateTime) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: None,
        }
    }

    /// This period closed at `end_date`.
    #[must_use]
    pub const fn ending_at(self, end_date: PrimitiveDateTime) -> Self {
        Self {
            start_date: self.start_date,
            end_date: Some(end_date),
        }
    }
}
