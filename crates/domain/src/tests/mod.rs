// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;
mod qualification;
mod validation;

pub const CPID: &str = "ocds-b3wdp1-MD-1580458690892";
pub const OCID: &str = "ocds-b3wdp1-MD-1580458690892-EV-1580458791896";
