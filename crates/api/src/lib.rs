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
    clippy::all
)]

mod config;
mod dispatcher;
mod envelope;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::ServiceInfo;
pub use dispatcher::CommandDispatcher;
pub use envelope::{
    API_VERSION, Action, ApiResponse, CommandEnvelope, ErrorBody, ErrorDetail, IncidentBody,
    IncidentDetail, RejectedEnvelope, parse_envelope,
};
pub use error::{ApiError, translate_core_error};
pub use handlers::{
    analyze_qualifications_for_invitation, check_access_to_qualification, check_declaration,
    check_qualification_state, check_qualifications_for_protocol, create_qualifications,
    do_consideration, do_declaration, find_qualification_ids, find_requirement_response_by_ids,
    rank_qualifications, set_qualification_period_end, start_qualification_period,
};
pub use request_response::{
    AnalyzeQualificationsForInvitationRequest, CheckAccessToQualificationRequest,
    CheckDeclarationRequest, CheckQualificationStateRequest,
    CheckQualificationsForProtocolRequest, CheckedResponseRequest, CreateQualificationsRequest,
    CriterionRequest, DeclaredQualificationRequest, DeclaredResponseRequest,
    DoConsiderationRequest, DoDeclarationRequest, FindQualificationIdsRequest,
    FindRequirementResponseByIdsRequest, IdRequest, OtherCriteriaRequest,
    RankQualificationsRequest, RankedSubmissionRequest, RequirementGroupRequest,
    RequirementRequest, ResponderRequest, SetQualificationPeriodEndRequest,
    StartQualificationPeriodRequest, StateRequest, SubmissionRequest, TenderRequest,
    decode_params,
};
