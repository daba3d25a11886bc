// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed enumerations with canonical string keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A closed enumeration addressable by a canonical string key.
///
/// Keys are unique within an enumeration and lookup is exact and
/// case-sensitive.
pub trait EnumElement: Copy + Eq + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Returns the canonical key of this variant.
    fn key(&self) -> &'static str;

    /// Finds the variant whose key equals `key`.
    #[must_use]
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|element| element.key() == key)
    }
}

/// The subset of an enumeration accepted by one use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList<T: EnumElement> {
    elements: Vec<T>,
}

impl<T: EnumElement> AllowList<T> {
    /// Builds an allow-list from the variants that satisfy `predicate`.
    ///
    /// Declaration order of the enumeration is preserved.
    #[must_use]
    pub fn filtered(predicate: impl Fn(T) -> bool) -> Self {
        Self {
            elements: T::ALL.iter().copied().filter(|e| predicate(*e)).collect(),
        }
    }

    /// Builds an allow-list containing every variant.
    #[must_use]
    pub fn all() -> Self {
        Self::filtered(|_| true)
    }

    /// Returns whether `element` is allowed.
    #[must_use]
    pub fn contains(&self, element: T) -> bool {
        self.elements.contains(&element)
    }

    /// The keys of the allowed variants, in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.elements.iter().map(|e| e.key().to_string()).collect()
    }

    /// The allowed variants.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }
}

macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl EnumElement for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let key: String = String::deserialize(deserializer)?;
                Self::from_key(&key).ok_or_else(|| {
                    let expected: Vec<&str> = Self::ALL.iter().map(EnumElement::key).collect();
                    serde::de::Error::custom(format!(
                        "unknown {} '{key}', expected one of: {}",
                        stringify!($name),
                        expected.join(", ")
                    ))
                })
            }
        }
    };
}

key_enum!(
    /// Procurement method details of a tender.
    ProcurementMethodDetails {
        Cf => "CF",
        TestCf => "TEST_CF",
        Gpa => "GPA",
        TestGpa => "TEST_GPA",
        Of => "OF",
        TestOf => "TEST_OF",
        Rt => "RT",
        TestRt => "TEST_RT",
        Cd => "CD",
        TestCd => "TEST_CD",
        Da => "DA",
        TestDa => "TEST_DA",
        Dc => "DC",
        TestDc => "TEST_DC",
        Fa => "FA",
        TestFa => "TEST_FA",
        Ip => "IP",
        TestIp => "TEST_IP",
        Mv => "MV",
        TestMv => "TEST_MV",
        Np => "NP",
        TestNp => "TEST_NP",
        Op => "OP",
        TestOp => "TEST_OP",
        Ot => "OT",
        TestOt => "TEST_OT",
        Sv => "SV",
        TestSv => "TEST_SV",
    }
);

key_enum!(
    /// The business operation a request is performed under.
    OperationType {
        Qualification => "qualification",
        QualificationConsideration => "qualificationConsideration",
        QualificationDeclareNonConflictOfInterest => "qualificationDeclareNonConflictOfInterest",
        QualificationProtocol => "qualificationProtocol",
    }
);

key_enum!(
    /// Primary status of a qualification.
    QualificationStatus {
        Pending => "pending",
        Active => "active",
        Unsuccessful => "unsuccessful",
    }
);

key_enum!(
    /// Secondary status of a qualification.
    QualificationStatusDetails {
        Consideration => "consideration",
        Active => "active",
        Unsuccessful => "unsuccessful",
        Awaiting => "awaiting",
    }
);

key_enum!(
    /// How qualifications are evaluated.
    QualificationSystemMethod {
        Automated => "automated",
        Manual => "manual",
    }
);

key_enum!(
    /// How the candidate list is reduced.
    ReductionCriteria {
        Scoring => "scoring",
        None => "none",
    }
);

key_enum!(
    /// Contracting stage encoded in an ocid.
    Stage {
        Ac => "AC",
        Ei => "EI",
        Ev => "EV",
        Fe => "FE",
        Fs => "FS",
        Np => "NP",
        Pn => "PN",
        Tp => "TP",
    }
);

key_enum!(
    /// Declared data type of a requirement.
    RequirementDataType {
        Boolean => "boolean",
        String => "string",
        Number => "number",
        Integer => "integer",
    }
);
