// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated identifier value types.
//!
//! Every identifier wraps the exact string it was parsed from. The only
//! construction paths are `parse` (pattern checked) and, for UUID-backed
//! identifiers, `generate`. An identifier that exists is always valid.

use crate::enums::{EnumElement, Stage};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

/// Canonical textual UUID form.
pub const UUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

/// Procurement process identifier: `ocds-<prefix>-<country>-<timestamp>`.
pub const CPID_PATTERN: &str = "^ocds-[a-z0-9]{6}-[A-Z]{2}-[0-9]{13}$";

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    // All patterns in this module are literals or built from enum keys.
    Regex::new(pattern).expect("identifier pattern must compile")
}

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(UUID_PATTERN));
static CPID_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(CPID_PATTERN));

static OCID_PATTERN: LazyLock<String> = LazyLock::new(|| {
    let stages: Vec<&str> = Stage::ALL.iter().map(EnumElement::key).collect();
    format!(
        "^(ocds-[a-z0-9]{{6}}-[A-Z]{{2}}-[0-9]{{13}})-({})-[0-9]{{13}}$",
        stages.join("|")
    )
});
static OCID_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(&OCID_PATTERN));

fn is_uuid(text: &str) -> bool {
    UUID_REGEX.is_match(text)
}

fn is_not_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Implements the string-facing traits shared by every identifier.
macro_rules! string_facade {
    ($name:ident) => {
        impl $name {
            /// Returns the wrapped string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text: String = String::deserialize(deserializer)?;
                Self::parse(&text).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "invalid {} '{text}'",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

/// Declares an identifier whose textual form is a canonical UUID.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// The pattern a valid value must match.
            pub const PATTERN: &'static str = UUID_PATTERN;

            /// Parses a UUID string, returning `None` when it does not match.
            #[must_use]
            pub fn parse(text: &str) -> Option<Self> {
                is_uuid(text).then(|| Self {
                    value: text.to_string(),
                })
            }

            /// Generates a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self {
                    value: Uuid::new_v4().to_string(),
                }
            }
        }

        string_facade!($name);
    };
}

/// Declares an identifier that only has to be a non-blank string.
macro_rules! text_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Parses a non-blank string, returning `None` for blank input.
            #[must_use]
            pub fn parse(text: &str) -> Option<Self> {
                is_not_blank(text).then(|| Self {
                    value: text.to_string(),
                })
            }
        }

        string_facade!($name);
    };
}

uuid_identifier!(
    /// Identifier of a qualification record.
    QualificationId
);
uuid_identifier!(
    /// Identifier of a tenderer's submission.
    SubmissionId
);
uuid_identifier!(
    /// Identifier of a requirement response.
    RequirementResponseId
);
uuid_identifier!(
    /// The platform user that owns a qualification.
    Owner
);
uuid_identifier!(
    /// Access token issued when a qualification is created.
    Token
);

text_identifier!(
    /// Identifier of a tender requirement.
    RequirementId
);
text_identifier!(
    /// Identifier of a tendering organization.
    OrganizationId
);
text_identifier!(
    /// Identifier of the person answering on behalf of an organization.
    PersonId
);

/// Identifier of a procurement process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpid {
    value: String,
}

impl Cpid {
    /// The pattern a valid value must match.
    pub const PATTERN: &'static str = CPID_PATTERN;

    /// Parses a cpid, returning `None` when it does not match the pattern.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        CPID_REGEX.is_match(text).then(|| Self {
            value: text.to_string(),
        })
    }
}

string_facade!(Cpid);

/// Identifier of a contracting stage within a procurement process.
///
/// An ocid embeds the cpid of its process followed by the stage key and a
/// stage timestamp. Both parts are captured at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ocid {
    value: String,
    cpid: Cpid,
    stage: Stage,
}

impl Ocid {
    /// The pattern a valid value must match.
    #[must_use]
    pub fn pattern() -> &'static str {
        &OCID_PATTERN
    }

    /// Parses an ocid, returning `None` when it does not match the pattern.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let captures = OCID_REGEX.captures(text)?;
        let cpid: Cpid = Cpid::parse(captures.get(1)?.as_str())?;
        let stage: Stage = Stage::from_key(captures.get(2)?.as_str())?;
        Some(Self {
            value: text.to_string(),
            cpid,
            stage,
        })
    }

    /// The process identifier this ocid belongs to.
    #[must_use]
    pub const fn cpid(&self) -> &Cpid {
        &self.cpid
    }

    /// The contracting stage encoded in this ocid.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }
}

string_facade!(Ocid);
