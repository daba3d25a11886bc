// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainRuleError;
use bigdecimal::{BigDecimal, Zero};
use std::fmt;

/// Outcome of a check that produces no value.
pub type ValidationResult<E> = Result<(), E>;

type Check<T, E> = dyn Fn(&T) -> ValidationResult<E> + Send + Sync;

/// A reusable predicate rule over values of type `T`.
pub struct ValidationRule<T: ?Sized, E> {
    check: Box<Check<T, E>>,
}

impl<T: ?Sized, E> ValidationRule<T, E> {
    /// Wraps a check function as a rule.
    #[must_use]
    pub fn new(check: impl Fn(&T) -> ValidationResult<E> + Send + Sync + 'static) -> Self {
        Self {
            check: Box::new(check),
        }
    }

    /// Evaluates the rule against `value`.
    ///
    /// # Errors
    ///
    /// Returns the rule's error when `value` violates it.
    pub fn test(&self, value: &T) -> ValidationResult<E> {
        (self.check)(value)
    }
}

impl<T: ?Sized + 'static, E: 'static> ValidationRule<T, E> {
    /// Combines two rules; `next` is only evaluated when `self` passes.
    #[must_use]
    pub fn and(self, next: Self) -> Self {
        Self::new(move |value: &T| {
            self.test(value)?;
            next.test(value)
        })
    }
}

impl<T: ?Sized, E> fmt::Debug for ValidationRule<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule").finish_non_exhaustive()
    }
}

/// Evaluates rules in order and stops at the first failure.
///
/// # Errors
///
/// Returns the error of the first rule that fails.
pub fn validate_all<T: ?Sized, E>(
    value: &T,
    rules: &[ValidationRule<T, E>],
) -> ValidationResult<E> {
    rules.iter().try_for_each(|rule| rule.test(value))
}

/// Number of fractional digits of a decimal as written, trailing zeros included.
#[must_use]
pub fn scale_of(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_exponent();
    scale
}

/// A rule rejecting decimals with more than `available_scale` fractional digits.
///
/// # Arguments
///
/// * `class_name` - Name of the value object reported in the error
/// * `available_scale` - Maximum permitted scale
#[must_use]
pub fn scale_rule(
    class_name: &'static str,
    available_scale: i64,
) -> ValidationRule<BigDecimal, DomainRuleError> {
    ValidationRule::new(move |value: &BigDecimal| {
        let current_scale: i64 = scale_of(value);
        if current_scale > available_scale {
            return Err(DomainRuleError::InvalidScale {
                class_name: class_name.to_string(),
                current_scale,
                available_scale,
            });
        }
        Ok(())
    })
}

/// A rule rejecting negative decimals.
#[must_use]
pub fn negative_rule(class_name: &'static str) -> ValidationRule<BigDecimal, DomainRuleError> {
    ValidationRule::new(move |value: &BigDecimal| {
        if *value < BigDecimal::zero() {
            return Err(DomainRuleError::IncorrectValue {
                class_name: class_name.to_string(),
                value: value.clone(),
                reason: String::from("The value must not be negative."),
            });
        }
        Ok(())
    })
}
