// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routes command envelopes to handlers and builds the response envelope.

use crate::config::ServiceInfo;
use crate::envelope::{API_VERSION, Action, ApiResponse, CommandEnvelope, parse_envelope};
use crate::error::{ApiError, translate_core_error};
use crate::handlers;
use crate::request_response::decode_params;
use qualification::{
    CommandHistory, CoreError, Incident, PeriodRepository, PeriodService,
    QualificationRepository, QualificationService, QualificationStateRules,
};
use qualification_domain::EnumElement;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Executes command envelopes against one qualification service.
#[derive(Debug)]
pub struct CommandDispatcher<R, S, H, P> {
    service: QualificationService<R, S>,
    periods: PeriodService<P>,
    history: H,
    service_info: ServiceInfo,
}

impl<R, S, H, P> CommandDispatcher<R, S, H, P>
where
    R: QualificationRepository,
    S: QualificationStateRules,
    H: CommandHistory,
    P: PeriodRepository,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(
        service: QualificationService<R, S>,
        periods: PeriodService<P>,
        history: H,
        service_info: ServiceInfo,
    ) -> Self {
        Self {
            service,
            periods,
            history,
            service_info,
        }
    }

    /// The wrapped qualification service.
    #[must_use]
    pub const fn service(&self) -> &QualificationService<R, S> {
        &self.service
    }

    #[must_use]
    pub const fn periods(&self) -> &PeriodService<P> {
        &self.periods
    }

    /// The identity reported in error codes and incidents.
    #[must_use]
    pub const fn service_info(&self) -> &ServiceInfo {
        &self.service_info
    }

    /// Executes one command envelope.
    ///
    /// Never fails: every outcome, including a malformed envelope, is
    /// reported through the returned response.
    pub fn execute(&mut self, body: &Value) -> ApiResponse {
        let envelope: CommandEnvelope = match parse_envelope(body) {
            Ok(envelope) => envelope,
            Err(rejected) => {
                let api_error: ApiError = ApiError::from(rejected.error);
                warn!(id = %rejected.id, error = %api_error, "Rejected command envelope");
                return ApiResponse::failure(
                    API_VERSION,
                    rejected.id,
                    &api_error,
                    &self.service_info,
                );
            }
        };

        info!(id = %envelope.id, action = %envelope.action, "Received command");
        match self.execute_with_history(&envelope) {
            Ok(result) => {
                info!(id = %envelope.id, action = %envelope.action, "Command succeeded");
                ApiResponse::success(&envelope.version, envelope.id, result)
            }
            Err(api_error) => {
                if api_error.is_incident() {
                    error!(
                        id = %envelope.id,
                        action = %envelope.action,
                        error = %api_error,
                        "Command failed"
                    );
                } else {
                    warn!(
                        id = %envelope.id,
                        action = %envelope.action,
                        error = %api_error,
                        "Command rejected"
                    );
                }
                ApiResponse::failure(
                    &envelope.version,
                    envelope.id,
                    &api_error,
                    &self.service_info,
                )
            }
        }
    }

    fn execute_with_history(
        &mut self,
        envelope: &CommandEnvelope,
    ) -> Result<Option<Value>, ApiError> {
        if !envelope.action.is_historical() {
            return self.dispatch(envelope.action, &envelope.params);
        }

        let command_id: String = envelope.id.to_string();
        let action_key: &str = envelope.action.key();
        if let Some(stored) = self
            .history
            .find(&command_id, action_key)
            .map_err(incident)?
        {
            info!(id = %envelope.id, action = %envelope.action, "Replaying recorded result");
            return Ok(Some(stored));
        }

        let result: Option<Value> = self.dispatch(envelope.action, &envelope.params)?;
        if let Some(value) = &result {
            // Already applied: the result is returned even when unrecorded.
            match self.history.save(&command_id, action_key, value) {
                Ok(()) => {
                    debug!(id = %envelope.id, action = %envelope.action, "Recorded result");
                }
                Err(err) => {
                    error!(
                        id = %envelope.id,
                        action = %envelope.action,
                        error = %err,
                        "Failed to record result"
                    );
                }
            }
        }
        Ok(result)
    }

    fn dispatch(&mut self, action: Action, params: &Value) -> Result<Option<Value>, ApiError> {
        match action {
            Action::FindQualificationIds => to_result(&handlers::find_qualification_ids(
                &self.service,
                &decode_params(params)?,
            )?),
            Action::CreateQualifications => to_result(&handlers::create_qualifications(
                &mut self.service,
                &decode_params(params)?,
            )?),
            Action::RankQualifications => to_result(&handlers::rank_qualifications(
                &mut self.service,
                &decode_params(params)?,
            )?),
            Action::StartQualificationPeriod => to_result(&handlers::start_qualification_period(
                &mut self.periods,
                &decode_params(params)?,
            )?),
            Action::CheckAccessToQualification => {
                handlers::check_access_to_qualification(&self.service, &decode_params(params)?)?;
                Ok(None)
            }
            Action::CheckQualificationState => {
                handlers::check_qualification_state(&self.service, &decode_params(params)?)?;
                Ok(None)
            }
            Action::DoDeclaration => to_result(&handlers::do_declaration(
                &mut self.service,
                &decode_params(params)?,
            )?),
            Action::CheckDeclaration => {
                handlers::check_declaration(&self.service, &decode_params(params)?)?;
                Ok(None)
            }
            Action::FindRequirementResponseByIds => {
                to_result(&handlers::find_requirement_response_by_ids(
                    &self.service,
                    &decode_params(params)?,
                )?)
            }
            Action::DoConsideration => to_result(&handlers::do_consideration(
                &mut self.service,
                &decode_params(params)?,
            )?),
            Action::CheckQualificationsForProtocol => {
                handlers::check_qualifications_for_protocol(
                    &self.service,
                    &decode_params(params)?,
                )?;
                Ok(None)
            }
            Action::AnalyzeQualificationsForInvitation => {
                to_result(&handlers::analyze_qualifications_for_invitation(
                    &self.service,
                    &decode_params(params)?,
                )?)
            }
            Action::SetQualificationPeriodEnd => to_result(
                &handlers::set_qualification_period_end(
                    &mut self.periods,
                    &decode_params(params)?,
                )?,
            ),
        }
    }
}

fn incident(err: Incident) -> ApiError {
    translate_core_error(CoreError::from(err))
}

fn to_result<T: Serialize>(value: &T) -> Result<Option<Value>, ApiError> {
    serde_json::to_value(value)
        .map(Some)
        .map_err(|err| incident(Incident::Transform(err.to_string())))
}
