// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod history;
mod params;
mod parse;
mod period;
mod repository;
mod results;
mod rules;
mod service;
mod state_rules;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Incident};
pub use history::{CommandHistory, InMemoryCommandHistory};
pub use params::{
    AnalyzeQualificationsForInvitationParams, CheckAccessToQualificationParams,
    CheckDeclarationParams, CheckQualificationStateParams, CheckQualificationsForProtocolParams,
    CreateQualificationsParams, Criterion, DeclaredQualification, DeclaredResponse,
    DoConsiderationParams, DoDeclarationParams, FindQualificationIdsParams,
    FindRequirementResponseByIdsParams, NewSubmission, OtherCriteria, RankedSubmission,
    Requirement, RequirementGroup, SetNextForQualificationParams,
    SetQualificationPeriodEndParams, StartQualificationPeriodParams,
};
pub use parse::{
    element_if_only_one, parse_cpid, parse_date, parse_decimal, parse_enum, parse_ocid,
    parse_organization_id, parse_owner, parse_person_id, parse_qualification_id,
    parse_requirement_id, parse_requirement_response_id, parse_submission_id, parse_token,
};
pub use period::PeriodService;
pub use repository::{
    InMemoryPeriodRepository, InMemoryQualificationRepository, PeriodRepository,
    QualificationRepository, QualificationStateRules,
};
pub use results::{
    AnalyzeQualificationsForInvitationResult, ConsideredQualification, CreatedQualification,
    DoConsiderationResult, DoDeclarationResult, EndedPeriod, FindRequirementResponseByIdsResult,
    IdReference, PreQualification, QualificationResponses, QualificationView,
    RankQualificationsResult, RequirementResponseView, ResponderView,
    SetQualificationPeriodEndResult, StartQualificationPeriodResult, StartedPeriod,
};
pub use rules::{
    analyze_qualifications_for_invitation, check_access_to_qualification, check_declaration,
    check_qualification_state, check_qualifications_for_protocol, do_consideration,
    do_declaration, find_qualification_ids, find_requirement_responses, rank_qualifications,
};
pub use service::QualificationService;
pub use state_rules::{DEFAULT_COUNTRY, StateRule, StateRulesError, StaticStateRules};
