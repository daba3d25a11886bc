// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date::serde_date_time;
use crate::enums::{QualificationStatus, QualificationStatusDetails, RequirementDataType};
use crate::error::DomainRuleError;
use crate::ids::{
    OrganizationId, Owner, PersonId, QualificationId, RequirementId, RequirementResponseId,
    SubmissionId, Token,
};
use crate::validation::{ValidationRule, negative_rule, scale_rule, validate_all};
use bigdecimal::{BigDecimal, ToPrimitive};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use time::PrimitiveDateTime;

/// Maximum number of fractional digits a scoring may carry.
pub const MAX_SCORING_SCALE: i64 = 3;

static SCORING_RULES: LazyLock<Vec<ValidationRule<BigDecimal, DomainRuleError>>> =
    LazyLock::new(|| {
        vec![
            scale_rule("Scoring", MAX_SCORING_SCALE),
            negative_rule("Scoring"),
        ]
    });

/// A qualification record of one tenderer's submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    pub id: QualificationId,
    #[serde(with = "serde_date_time")]
    pub date: PrimitiveDateTime,
    pub owner: Owner,
    pub token: Token,
    pub status: QualificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<QualificationStatusDetails>,
    pub related_submission: SubmissionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<Scoring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirement_responses: Vec<RequirementResponse>,
}

impl Qualification {
    /// Returns the current (status, status details) pair.
    #[must_use]
    pub const fn state(&self) -> QualificationState {
        QualificationState {
            status: self.status,
            status_details: self.status_details,
        }
    }
}

/// A (status, status details) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationState {
    pub status: QualificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<QualificationStatusDetails>,
}

impl QualificationState {
    /// Creates a state pair.
    #[must_use]
    pub const fn new(
        status: QualificationStatus,
        status_details: Option<QualificationStatusDetails>,
    ) -> Self {
        Self {
            status,
            status_details,
        }
    }
}

/// An answer given by a tenderer to one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResponse {
    pub id: RequirementResponseId,
    pub value: RequirementResponseValue,
    pub related_tenderer: OrganizationId,
    pub requirement: RequirementId,
    pub responder: Responder,
}

impl RequirementResponse {
    /// Returns whether both responses answer the same requirement for the
    /// same tenderer through the same responder.
    #[must_use]
    pub fn answers_same_as(&self, other: &Self) -> bool {
        self.related_tenderer == other.related_tenderer
            && self.requirement == other.requirement
            && self.responder.id == other.responder.id
    }
}

/// The person answering a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responder {
    pub id: PersonId,
    pub name: String,
}

/// The typed value of a requirement response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementResponseValue {
    Boolean(bool),
    String(String),
    Integer(i64),
    Number(BigDecimal),
}

impl RequirementResponseValue {
    /// The requirement data type this value satisfies.
    #[must_use]
    pub const fn data_type(&self) -> RequirementDataType {
        match self {
            Self::Boolean(_) => RequirementDataType::Boolean,
            Self::String(_) => RequirementDataType::String,
            Self::Integer(_) => RequirementDataType::Integer,
            Self::Number(_) => RequirementDataType::Number,
        }
    }
}

fn serialize_decimal<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_f64() {
        Some(number) => serializer.serialize_f64(number),
        None => serializer.serialize_str(&value.to_string()),
    }
}

fn decimal_from_f64<E: de::Error>(value: f64) -> Result<BigDecimal, E> {
    BigDecimal::from_str(&value.to_string())
        .map_err(|_| E::custom(format!("'{value}' is not a finite decimal")))
}

impl Serialize for RequirementResponseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Number(value) => serialize_decimal(value, serializer),
        }
    }
}

struct ResponseValueVisitor;

impl Visitor<'_> for ResponseValueVisitor {
    type Value = RequirementResponseValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, string, integer or number")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(RequirementResponseValue::Boolean(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(RequirementResponseValue::String(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(RequirementResponseValue::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(RequirementResponseValue::Integer)
            .map_err(|_| E::custom(format!("integer '{value}' is out of range")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        decimal_from_f64(value).map(RequirementResponseValue::Number)
    }
}

impl<'de> Deserialize<'de> for RequirementResponseValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ResponseValueVisitor)
    }
}

/// A non-negative decimal with at most [`MAX_SCORING_SCALE`] fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Scoring {
    value: BigDecimal,
}

impl Scoring {
    /// Validates and wraps a decimal.
    ///
    /// # Errors
    ///
    /// Returns [`DomainRuleError::InvalidScale`] when the value has more than
    /// [`MAX_SCORING_SCALE`] fractional digits, and
    /// [`DomainRuleError::IncorrectValue`] when it is negative.
    pub fn try_new(value: BigDecimal) -> Result<Self, DomainRuleError> {
        validate_all(&value, &SCORING_RULES)?;
        Ok(Self { value })
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn value(&self) -> &BigDecimal {
        &self.value
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Scoring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimal(&self.value, serializer)
    }
}

struct ScoringVisitor;

impl ScoringVisitor {
    fn validated<E: de::Error>(value: BigDecimal) -> Result<Scoring, E> {
        Scoring::try_new(value).map_err(E::custom)
    }
}

impl Visitor<'_> for ScoringVisitor {
    type Value = Scoring;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Self::validated(BigDecimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Self::validated(BigDecimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Self::validated(decimal_from_f64(value)?)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let decimal: BigDecimal = BigDecimal::from_str(value)
            .map_err(|_| E::custom(format!("'{value}' is not a decimal")))?;
        Self::validated(decimal)
    }
}

impl<'de> Deserialize<'de> for Scoring {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoringVisitor)
    }
}
