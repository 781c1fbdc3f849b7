//! Helpers for validating user-supplied values against various
//! conditions.

use crate::errorlist::ErrorList;
use crate::outcome::{InvalidInput, Outcome};
use crate::util::dynamic::Dynamic;
use crate::util::prism::{Prism, DynamicToNumber, DynamicToString};

use std::ops::RangeInclusive;

/// Text reported by [`validate_user_input`] when every check passes.
pub const VALIDATION_SUCCESS: &str = "Validation successful";

const USER_INPUT_NAME_LENGTH: RangeInclusive<usize> = 3..=255;
const USER_INPUT_AGE: RangeInclusive<f64> = 18.0..=100.0;
const USERNAME_LENGTH: RangeInclusive<usize> = 5..=15;

/// Validates a sign-up form. The username must be a string of 3 to
/// 255 characters and the age a number from 18 to 100, inclusive.
///
/// Every failed check contributes its own message to the invalid
/// outcome, so a form with a bad username and a bad age reports
/// both.
pub fn validate_user_input(username: impl Into<Dynamic>, age: impl Into<Dynamic>) -> Outcome<&'static str> {
  let (username, age): (Dynamic, Dynamic) = (username.into(), age.into());
  let mut errors = ErrorList::new();
  let username_ok = DynamicToString.narrow_type(username)
    .is_ok_and(|name| USER_INPUT_NAME_LENGTH.contains(&name.chars().count()));
  errors.check(username_ok, InvalidInput::Username);
  let age_ok = DynamicToNumber.narrow_type(age)
    .is_ok_and(|age| USER_INPUT_AGE.contains(&age));
  errors.check(age_ok, InvalidInput::Age);
  if !errors.is_empty() {
    tracing::debug!(failures = errors.len(), "User input rejected");
  }
  errors.into_outcome(VALIDATION_SUCCESS)
}

/// Returns true iff `min <= price <= max`.
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
  price >= min && price <= max
}

/// A username is valid if it is a string of 5 to 15 characters.
/// Anything that is not a string is invalid.
pub fn is_valid_username(username: impl Into<Dynamic>) -> bool {
  let username: Dynamic = username.into();
  DynamicToString.narrow_type(username)
    .is_ok_and(|name| USERNAME_LENGTH.contains(&name.chars().count()))
}
