// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The versioned command envelope and the response envelopes.

use crate::config::ServiceInfo;
use crate::error::ApiError;
use qualification_domain::{DataError, EnumElement, serde_date_time};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

/// The only envelope version this service accepts.
pub const API_VERSION: &str = "2.0.0";

/// A command the service can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FindQualificationIds,
    CreateQualifications,
    RankQualifications,
    StartQualificationPeriod,
    CheckAccessToQualification,
    CheckQualificationState,
    DoDeclaration,
    CheckDeclaration,
    FindRequirementResponseByIds,
    DoConsideration,
    CheckQualificationsForProtocol,
    AnalyzeQualificationsForInvitation,
    SetQualificationPeriodEnd,
}

impl EnumElement for Action {
    const ALL: &'static [Self] = &[
        Self::FindQualificationIds,
        Self::CreateQualifications,
        Self::RankQualifications,
        Self::StartQualificationPeriod,
        Self::CheckAccessToQualification,
        Self::CheckQualificationState,
        Self::DoDeclaration,
        Self::CheckDeclaration,
        Self::FindRequirementResponseByIds,
        Self::DoConsideration,
        Self::CheckQualificationsForProtocol,
        Self::AnalyzeQualificationsForInvitation,
        Self::SetQualificationPeriodEnd,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::FindQualificationIds => "findQualificationIds",
            Self::CreateQualifications => "createQualifications",
            Self::RankQualifications => "rankQualifications",
            Self::StartQualificationPeriod => "startQualificationPeriod",
            Self::CheckAccessToQualification => "checkAccessToQualification",
            Self::CheckQualificationState => "checkQualificationState",
            Self::DoDeclaration => "doDeclaration",
            Self::CheckDeclaration => "checkDeclaration",
            Self::FindRequirementResponseByIds => "findRequirementResponseByIds",
            Self::DoConsideration => "doConsideration",
            Self::CheckQualificationsForProtocol => "checkQualificationsForProtocol",
            Self::AnalyzeQualificationsForInvitation => "analyzeQualificationsForInvitation",
            Self::SetQualificationPeriodEnd => "setQualificationPeriodEnd",
        }
    }
}

impl Action {
    /// Returns whether results are recorded so that a repeated command id
    /// replays the first result instead of executing again.
    ///
    /// Ranking is not recorded: a repeated ranking is evaluated again.
    #[must_use]
    pub const fn is_historical(self) -> bool {
        matches!(
            self,
            Self::CreateQualifications
                | Self::StartQualificationPeriod
                | Self::DoDeclaration
                | Self::DoConsideration
                | Self::SetQualificationPeriodEnd
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parsed command envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnvelope {
    pub version: String,
    pub id: Uuid,
    pub action: Action,
    pub params: Value,
}

/// An envelope that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEnvelope {
    /// The command id, or the nil UUID when it could not be read.
    pub id: Uuid,
    pub error: DataError,
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text_attribute<'a>(body: &'a Value, name: &str) -> Result<&'a str, DataError> {
    match body.get(name) {
        None | Some(Value::Null) => Err(DataError::MissingRequiredAttribute {
            name: name.to_string(),
        }),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(DataError::DataTypeMismatch {
            name: name.to_string(),
            expected_type: String::from("string"),
            actual_type: json_type(other).to_string(),
        }),
    }
}

fn parse_version(body: &Value) -> Result<String, DataError> {
    let version: &str = text_attribute(body, "version")?;
    if version != API_VERSION {
        return Err(DataError::UnknownValue {
            name: String::from("version"),
            expected_values: vec![API_VERSION.to_string()],
            actual_value: version.to_string(),
        });
    }
    Ok(version.to_string())
}

fn parse_id(body: &Value) -> Result<Uuid, DataError> {
    let id: &str = text_attribute(body, "id")?;
    Uuid::parse_str(id).map_err(|_| DataError::DataFormatMismatch {
        name: String::from("id"),
        expected_format: String::from("uuid"),
        actual_value: id.to_string(),
    })
}

fn parse_action(body: &Value) -> Result<Action, DataError> {
    let key: &str = text_attribute(body, "action")?;
    Action::from_key(key).ok_or_else(|| DataError::UnknownValue {
        name: String::from("action"),
        expected_values: Action::ALL.iter().map(|a| a.key().to_string()).collect(),
        actual_value: key.to_string(),
    })
}

/// Parses the envelope fields in the order version, id, action, params.
///
/// # Errors
///
/// Returns the first invalid field together with the command id when it
/// could still be read.
pub fn parse_envelope(body: &Value) -> Result<CommandEnvelope, RejectedEnvelope> {
    let version: String = parse_version(body).map_err(|error| RejectedEnvelope {
        id: parse_id(body).unwrap_or_else(|_| Uuid::nil()),
        error,
    })?;
    let id: Uuid = parse_id(body).map_err(|error| RejectedEnvelope {
        id: Uuid::nil(),
        error,
    })?;
    let reject = |error: DataError| RejectedEnvelope { id, error };
    let action: Action = parse_action(body).map_err(reject)?;
    let params: Value = match body.get("params") {
        None | Some(Value::Null) => {
            return Err(reject(DataError::MissingRequiredAttribute {
                name: String::from("params"),
            }));
        }
        Some(params) => params.clone(),
    };

    Ok(CommandEnvelope {
        version,
        id,
        action,
        params,
    })
}

/// One failed check as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// Points at what an error is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDetail {
    /// A rejected request attribute.
    Name(String),
    /// An offending stored entity.
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentDetail {
    pub code: String,
    pub description: String,
}

/// An infrastructure failure as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentBody {
    #[serde(with = "serde_date_time")]
    pub date: PrimitiveDateTime,
    pub id: Uuid,
    pub service: ServiceInfo,
    pub details: Vec<IncidentDetail>,
}

/// The response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Success {
        version: String,
        id: Uuid,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<Value>,
    },
    Error {
        version: String,
        id: Uuid,
        result: Vec<ErrorBody>,
    },
    Incident {
        version: String,
        id: Uuid,
        result: IncidentBody,
    },
}

impl ApiResponse {
    /// A success envelope; validation-only commands carry no result.
    #[must_use]
    pub fn success(version: &str, id: Uuid, result: Option<Value>) -> Self {
        Self::Success {
            version: version.to_string(),
            id,
            result,
        }
    }

    /// The error or incident envelope for `error`.
    #[must_use]
    pub fn failure(version: &str, id: Uuid, error: &ApiError, service: &ServiceInfo) -> Self {
        let code: String = service.full_code(error.code());
        let description: String = error.description().to_string();
        match error {
            ApiError::InvalidData { name, .. } => Self::Error {
                version: version.to_string(),
                id,
                result: vec![ErrorBody {
                    code,
                    description,
                    details: vec![ErrorDetail::Name(name.clone())],
                }],
            },
            ApiError::RuleViolation { entity_id, .. } => Self::Error {
                version: version.to_string(),
                id,
                result: vec![ErrorBody {
                    code,
                    description,
                    details: entity_id.iter().cloned().map(ErrorDetail::Id).collect(),
                }],
            },
            ApiError::Incident { .. } => Self::Incident {
                version: version.to_string(),
                id,
                result: IncidentBody {
                    date: now(),
                    id: Uuid::new_v4(),
                    service: service.clone(),
                    details: vec![IncidentDetail { code, description }],
                },
            },
        }
    }

    /// The command id this response answers.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Success { id, .. } | Self::Error { id, .. } | Self::Incident { id, .. } => *id,
        }
    }

    /// Returns whether this is an incident envelope.
    #[must_use]
    pub const fn is_incident(&self) -> bool {
        matches!(self, Self::Incident { .. })
    }
}

fn now() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}
