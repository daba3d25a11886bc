// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One parameter object per use case.
//!
//! Parameter objects are only constructible through `try_create`, which
//! parses raw input in field declaration order and stops at the first
//! invalid field. Nested collections are passed as lazy iterators of
//! already-converted elements and nested objects as deferred conversions,
//! so a bad element is only reported after every field declared before it
//! was accepted.

mod check;
mod consideration;
mod create;
mod declaration;
mod find;
mod period;
mod protocol;
mod rank;

pub use check::{
    CheckAccessToQualificationParams, CheckDeclarationParams, CheckQualificationStateParams,
    Criterion, DeclaredResponse, Requirement, RequirementGroup,
};
pub use consideration::DoConsiderationParams;
pub use create::{CreateQualificationsParams, NewSubmission};
pub use declaration::{DeclaredQualification, DoDeclarationParams};
pub use find::{FindQualificationIdsParams, FindRequirementResponseByIdsParams};
pub use period::{SetQualificationPeriodEndParams, StartQualificationPeriodParams};
pub use protocol::{AnalyzeQualificationsForInvitationParams, CheckQualificationsForProtocolParams};
pub use rank::{OtherCriteria, RankedSubmission, SetNextForQualificationParams};

use qualification_domain::{AllowList, ProcurementMethodDetails};
use std::sync::LazyLock;

/// Procurement methods that run a qualification stage.
pub(crate) static QUALIFYING_PMD: LazyLock<AllowList<ProcurementMethodDetails>> =
    LazyLock::new(|| {
        AllowList::filtered(|pmd| {
            matches!(
                pmd,
                ProcurementMethodDetails::Cf
                    | ProcurementMethodDetails::TestCf
                    | ProcurementMethodDetails::Gpa
                    | ProcurementMethodDetails::TestGpa
                    | ProcurementMethodDetails::Of
                    | ProcurementMethodDetails::TestOf
                    | ProcurementMethodDetails::Rt
                    | ProcurementMethodDetails::TestRt
            )
        })
    });
