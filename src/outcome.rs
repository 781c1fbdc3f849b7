//! Results for functions that report bad input through a descriptive
//! string rather than an error.
//!
//! An [`Outcome`] is either a successful value or an invalid-input
//! message. The message always contains the word "Invalid", so
//! callers can tell the two apart by inspecting the text as well as
//! the tag.

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// The reasons an input can be rejected. The `Display` text of each
/// variant is the sentinel message reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
  #[error("Invalid price")]
  Price,
  #[error("Invalid discount code")]
  DiscountCode,
  #[error("Invalid username")]
  Username,
  #[error("Invalid age")]
  Age,
  #[error("Invalid country code")]
  CountryCode,
}

/// Either a value or a sentinel message describing why the input was
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
  Value(T),
  Invalid(String),
}

impl<T> Outcome<T> {
  pub fn is_invalid(&self) -> bool {
    matches!(self, Outcome::Invalid(_))
  }

  /// The successful value, if there is one.
  pub fn value(&self) -> Option<&T> {
    match self {
      Outcome::Value(value) => Some(value),
      Outcome::Invalid(_) => None,
    }
  }

  pub fn into_value(self) -> Option<T> {
    match self {
      Outcome::Value(value) => Some(value),
      Outcome::Invalid(_) => None,
    }
  }

  /// The sentinel message, if the input was rejected.
  pub fn invalid_message(&self) -> Option<&str> {
    match self {
      Outcome::Value(_) => None,
      Outcome::Invalid(message) => Some(message),
    }
  }

  pub fn map<U, F>(self, f: F) -> Outcome<U>
  where F: FnOnce(T) -> U {
    match self {
      Outcome::Value(value) => Outcome::Value(f(value)),
      Outcome::Invalid(message) => Outcome::Invalid(message),
    }
  }
}

impl<T> From<InvalidInput> for Outcome<T> {
  fn from(reason: InvalidInput) -> Self {
    Outcome::Invalid(reason.to_string())
  }
}

/// Prints the value on success and the sentinel message otherwise.
impl<T: Display> Display for Outcome<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Outcome::Value(value) => write!(f, "{value}"),
      Outcome::Invalid(message) => write!(f, "{message}"),
    }
  }
}
