//! Functional-style prisms for checked downcasts of dynamically-typed
//! input.

use super::dynamic::Dynamic;

use serde_json::Value;

/// A prism from `Up` to `Down` is an assertion of a subtype
/// relationship between `Up` and `Down`. Specifically, it asserts
/// that every `Down` can be seen as an `Up` in a well-defined way,
/// and that some `Up`s can be safely downcast to type `Down`.
///
/// Prisms implementing this trait should satisfy the following laws.
///
/// * A widen followed by a narrow should reproduce the original
/// value. That is, for all `d: Down`,
/// `prism.narrow_type(prism.widen_type(d)) === Ok(d)`.
///
/// * A failed narrow shall return the original value. That is, for
/// all `u: Up`, if `prism.narrow_type(u) = Err(u1)`, then `u === u1`.
pub trait Prism<Up, Down> {
  /// Attempts to downcast `input` to the type `Down`. This method
  /// shall either return the result of successfully downcasting (as
  /// an `Ok`) or the original input value (as an `Err`).
  fn narrow_type(&self, input: Up) -> Result<Down, Up>;

  /// Widens a `Down` value to its parent type. This must always
  /// succeed.
  fn widen_type(&self, input: Down) -> Up;
}

/// Prism which accepts numbers, including infinities and NaN, and
/// narrows them to `f64`. Strings which merely look like numbers
/// (such as `"10"`) are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicToNumber;

/// Prism which accepts strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicToString;

impl Prism<Dynamic, f64> for DynamicToNumber {
  fn narrow_type(&self, input: Dynamic) -> Result<f64, Dynamic> {
    match input {
      Dynamic::Float(n) => Ok(n),
      Dynamic::Json(value) => value.as_f64().ok_or(Dynamic::Json(value)),
    }
  }

  fn widen_type(&self, input: f64) -> Dynamic {
    Dynamic::Float(input)
  }
}

impl Prism<Dynamic, String> for DynamicToString {
  fn narrow_type(&self, input: Dynamic) -> Result<String, Dynamic> {
    match input {
      Dynamic::Json(Value::String(s)) => Ok(s),
      input => Err(input),
    }
  }

  fn widen_type(&self, input: String) -> Dynamic {
    Dynamic::Json(Value::String(input))
  }
}
