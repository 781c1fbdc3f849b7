
use crate::outcome::Outcome;

use itertools::Itertools;

use std::fmt::Display;

/// An `ErrorList<E>` can be thought of, roughly, as a `Vec<E>`.
/// Rejection reasons are appended to the list as they are found, and
/// in the end the caller can turn everything that went wrong into a
/// single [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList<E> {
  errors: Vec<E>,
}

impl<E> ErrorList<E> {
  /// A new, empty error list.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, error: E) {
    self.errors.push(error)
  }

  /// Pushes `error` if `condition` is false.
  pub fn check(&mut self, condition: bool, error: E) {
    if !condition {
      self.push(error);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }
}

impl<E: Display> ErrorList<E> {
  /// Produces `Outcome::Value(value)` if no errors were recorded.
  /// Otherwise, the messages of all errors, in the order they were
  /// pushed, are joined by commas into a single invalid outcome.
  pub fn into_outcome<T>(self, value: T) -> Outcome<T> {
    if self.is_empty() {
      Outcome::Value(value)
    } else {
      Outcome::Invalid(self.errors.iter().join(", "))
    }
  }
}

impl<E> Default for ErrorList<E> {
  fn default() -> Self {
    Self { errors: Vec::new() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::outcome::InvalidInput;

  #[test]
  fn test_empty_list_is_success() {
    let errors = ErrorList::<InvalidInput>::new();
    assert!(errors.is_empty());
    assert_eq!(errors.into_outcome("ok"), Outcome::Value("ok"));
  }

  #[test]
  fn test_check() {
    let mut errors = ErrorList::new();
    errors.check(true, InvalidInput::Username);
    errors.check(false, InvalidInput::Age);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.into_outcome(()), Outcome::Invalid(String::from("Invalid age")));
  }

  #[test]
  fn test_messages_are_joined_in_order() {
    let mut errors = ErrorList::new();
    errors.push(InvalidInput::Username);
    errors.push(InvalidInput::Age);
    assert_eq!(
      errors.into_outcome(()),
      Outcome::Invalid(String::from("Invalid username, Invalid age")),
    );
  }
}
