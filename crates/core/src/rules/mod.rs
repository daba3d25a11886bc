// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business rules evaluated over parsed parameters and stored qualifications.
//!
//! Nothing here touches storage. Updated qualifications are returned as new
//! values for the caller to persist.

mod access;
mod declaration;
mod lifecycle;
mod ranking;

pub use access::check_access_to_qualification;
pub use declaration::{check_declaration, do_declaration, find_requirement_responses};
pub use lifecycle::{
    analyze_qualifications_for_invitation, check_qualification_state,
    check_qualifications_for_protocol, do_consideration, find_qualification_ids,
};
pub use ranking::rank_qualifications;

use qualification_domain::{Qualification, QualificationId};

fn find_by_id<'a>(
    qualifications: &'a [Qualification],
    id: &QualificationId,
) -> Option<&'a Qualification> {
    qualifications.iter().find(|qualification| &qualification.id == id)
}
