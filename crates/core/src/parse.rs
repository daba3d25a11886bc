// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fail-fast parsers from raw input strings into typed values.
//!
//! Every parser reports the attribute name it was given so that the caller
//! can tell which field of a request was rejected.

use bigdecimal::BigDecimal;
use qualification_domain::{
    AllowList, Cpid, DATE_TIME_LAYOUT, DataError, DateTimeError, EnumElement, Ocid,
    OrganizationId, Owner, PersonId, QualificationId, RequirementId, RequirementResponseId,
    SubmissionId, Token, parse_date_time,
};
use std::str::FromStr;
use time::PrimitiveDateTime;

fn format_mismatch(name: &str, expected_format: &str, value: &str) -> DataError {
    DataError::DataFormatMismatch {
        name: name.to_string(),
        expected_format: expected_format.to_string(),
        actual_value: value.to_string(),
    }
}

fn empty_string(name: &str) -> DataError {
    DataError::EmptyString {
        name: name.to_string(),
    }
}

/// Parses a process identifier.
///
/// # Errors
///
/// Returns `DataMismatchToPattern` named `cpid` when the value does not match.
pub fn parse_cpid(value: &str) -> Result<Cpid, DataError> {
    Cpid::parse(value).ok_or_else(|| DataError::DataMismatchToPattern {
        name: String::from("cpid"),
        pattern: Cpid::PATTERN.to_string(),
        actual_value: value.to_string(),
    })
}

/// Parses a stage identifier.
///
/// # Errors
///
/// Returns `DataMismatchToPattern` named `ocid` when the value does not match.
pub fn parse_ocid(value: &str) -> Result<Ocid, DataError> {
    Ocid::parse(value).ok_or_else(|| DataError::DataMismatchToPattern {
        name: String::from("ocid"),
        pattern: Ocid::pattern().to_string(),
        actual_value: value.to_string(),
    })
}

/// Parses a qualification id.
///
/// # Errors
///
/// Returns `DataFormatMismatch` when the value is not a UUID.
pub fn parse_qualification_id(
    value: &str,
    attribute_name: &str,
) -> Result<QualificationId, DataError> {
    QualificationId::parse(value)
        .ok_or_else(|| format_mismatch(attribute_name, QualificationId::PATTERN, value))
}

/// Parses a submission id.
///
/// # Errors
///
/// Returns `DataFormatMismatch` when the value is not a UUID.
pub fn parse_submission_id(value: &str, attribute_name: &str) -> Result<SubmissionId, DataError> {
    SubmissionId::parse(value)
        .ok_or_else(|| format_mismatch(attribute_name, SubmissionId::PATTERN, value))
}

/// Parses a requirement response id.
///
/// # Errors
///
/// Returns `DataFormatMismatch` when the value is not a UUID.
pub fn parse_requirement_response_id(
    value: &str,
    attribute_name: &str,
) -> Result<RequirementResponseId, DataError> {
    RequirementResponseId::parse(value)
        .ok_or_else(|| format_mismatch(attribute_name, RequirementResponseId::PATTERN, value))
}

/// Parses the owner of a qualification.
///
/// # Errors
///
/// Returns `DataFormatMismatch` named `owner` when the value is not a UUID.
pub fn parse_owner(value: &str) -> Result<Owner, DataError> {
    Owner::parse(value).ok_or_else(|| format_mismatch("owner", "uuid", value))
}

/// Parses an access token.
///
/// # Errors
///
/// Returns `DataFormatMismatch` named `token` when the value is not a UUID.
pub fn parse_token(value: &str) -> Result<Token, DataError> {
    Token::parse(value).ok_or_else(|| format_mismatch("token", "uuid", value))
}

/// Parses a requirement id.
///
/// # Errors
///
/// Returns `EmptyString` when the value is blank.
pub fn parse_requirement_id(value: &str, attribute_name: &str) -> Result<RequirementId, DataError> {
    RequirementId::parse(value).ok_or_else(|| empty_string(attribute_name))
}

/// Parses an organization id.
///
/// # Errors
///
/// Returns `EmptyString` when the value is blank.
pub fn parse_organization_id(
    value: &str,
    attribute_name: &str,
) -> Result<OrganizationId, DataError> {
    OrganizationId::parse(value).ok_or_else(|| empty_string(attribute_name))
}

/// Parses a person id.
///
/// # Errors
///
/// Returns `EmptyString` when the value is blank.
pub fn parse_person_id(value: &str, attribute_name: &str) -> Result<PersonId, DataError> {
    PersonId::parse(value).ok_or_else(|| empty_string(attribute_name))
}

/// Looks up an enumeration key and checks it against a use-case allow-list.
///
/// # Arguments
///
/// * `value` - The raw key
/// * `allowed` - Variants accepted by the calling use case
/// * `attribute_name` - Name reported on failure
///
/// # Errors
///
/// Returns `UnknownValue` listing the allowed keys when the key is unknown or
/// names a variant outside the allow-list.
pub fn parse_enum<T: EnumElement>(
    value: &str,
    allowed: &AllowList<T>,
    attribute_name: &str,
) -> Result<T, DataError> {
    T::from_key(value)
        .filter(|element| allowed.contains(*element))
        .ok_or_else(|| DataError::UnknownValue {
            name: attribute_name.to_string(),
            expected_values: allowed.keys(),
            actual_value: value.to_string(),
        })
}

/// Parses a date-time in the service layout.
///
/// # Errors
///
/// Returns `InvalidDateTime` for impossible calendar values and
/// `DataFormatMismatch` when the layout does not match.
pub fn parse_date(value: &str, attribute_name: &str) -> Result<PrimitiveDateTime, DataError> {
    parse_date_time(value).map_err(|error| match error {
        DateTimeError::Calendar => DataError::InvalidDateTime {
            name: attribute_name.to_string(),
            actual_value: value.to_string(),
        },
        DateTimeError::Format => format_mismatch(attribute_name, DATE_TIME_LAYOUT, value),
    })
}

/// Parses a decimal amount.
///
/// # Errors
///
/// Returns `DataFormatMismatch` when the value is not a decimal number.
pub fn parse_decimal(value: &str, attribute_name: &str) -> Result<BigDecimal, DataError> {
    BigDecimal::from_str(value).map_err(|_| format_mismatch(attribute_name, "decimal", value))
}

/// Returns the single element of a collection that must hold exactly one.
///
/// # Errors
///
/// Returns `InvalidNumberOfElementsInArray` when the collection is empty or
/// holds more than one element.
pub fn element_if_only_one<'a, T>(
    items: &'a [T],
    attribute_name: &str,
) -> Result<&'a T, DataError> {
    match items {
        [only] => Ok(only),
        _ => Err(DataError::InvalidNumberOfElementsInArray {
            name: attribute_name.to_string(),
            min: 1,
            max: 1,
            actual_length: items.len(),
        }),
    }
}
