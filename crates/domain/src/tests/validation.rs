// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainRuleError, Scoring, ValidationResult, ValidationRule, negative_rule, scale_of,
    scale_rule, validate_all,
};
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn decimal(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

#[test]
fn test_scale_counts_trailing_zeros() {
    assert_eq!(scale_of(&decimal("0.001")), 3);
    assert_eq!(scale_of(&decimal("0.0010")), 4);
    assert_eq!(scale_of(&decimal("12")), 0);
}

#[test]
fn test_scale_rule_accepts_up_to_available_scale() {
    let rule: ValidationRule<BigDecimal, DomainRuleError> = scale_rule("Scoring", 3);

    assert!(rule.test(&decimal("0.001")).is_ok());
    assert!(rule.test(&decimal("10")).is_ok());
}

#[test]
fn test_scale_rule_rejects_excess_scale() {
    let rule: ValidationRule<BigDecimal, DomainRuleError> = scale_rule("Scoring", 3);

    let result: ValidationResult<DomainRuleError> = rule.test(&decimal("0.0001"));
    assert!(matches!(
        result,
        Err(DomainRuleError::InvalidScale {
            current_scale: 4,
            available_scale: 3,
            ..
        })
    ));
}

#[test]
fn test_negative_rule_rejects_negative_values() {
    let rule: ValidationRule<BigDecimal, DomainRuleError> = negative_rule("Scoring");

    assert!(rule.test(&decimal("0")).is_ok());
    let result: ValidationResult<DomainRuleError> = rule.test(&decimal("-1.5"));
    match result {
        Err(DomainRuleError::IncorrectValue { reason, .. }) => {
            assert_eq!(reason, "The value must not be negative.");
        }
        other => panic!("expected IncorrectValue, got {other:?}"),
    }
}

#[test]
fn test_validate_all_reports_first_failure() {
    let rules: Vec<ValidationRule<BigDecimal, DomainRuleError>> =
        vec![scale_rule("Scoring", 3), negative_rule("Scoring")];

    // Violates both rules; the scale rule comes first.
    let result: ValidationResult<DomainRuleError> = validate_all(&decimal("-0.0001"), &rules);
    assert!(matches!(result, Err(DomainRuleError::InvalidScale { .. })));
}

#[test]
fn test_and_short_circuits() {
    let rule: ValidationRule<i32, String> =
        ValidationRule::new(|value: &i32| {
            if *value > 0 {
                Ok(())
            } else {
                Err(String::from("not positive"))
            }
        })
        .and(ValidationRule::new(|value: &i32| {
            if *value % 2 == 0 {
                Ok(())
            } else {
                Err(String::from("odd"))
            }
        }));

    assert_eq!(rule.test(&4), Ok(()));
    assert_eq!(rule.test(&-4), Err(String::from("not positive")));
    assert_eq!(rule.test(&3), Err(String::from("odd")));
}

#[test]
fn test_scoring_applies_numeric_rules() {
    assert!(Scoring::try_new(decimal("0.001")).is_ok());
    assert!(matches!(
        Scoring::try_new(decimal("0.0001")),
        Err(DomainRuleError::InvalidScale { .. })
    ));
    assert!(matches!(
        Scoring::try_new(decimal("-1")),
        Err(DomainRuleError::IncorrectValue { .. })
    ));
}
