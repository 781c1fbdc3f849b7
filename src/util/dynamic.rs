//! Arguments whose type is only known at runtime.

use serde_json::Value;

/// A dynamically-typed argument.
///
/// Floating-point inputs are held as-is in [`Dynamic::Float`]. JSON
/// has no representation for infinities or NaN, so routing them
/// through [`Value`] would turn them into `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
  Float(f64),
  Json(Value),
}

impl From<f64> for Dynamic {
  fn from(value: f64) -> Self {
    Dynamic::Float(value)
  }
}

impl From<f32> for Dynamic {
  fn from(value: f32) -> Self {
    Dynamic::Float(f64::from(value))
  }
}

impl From<Value> for Dynamic {
  fn from(value: Value) -> Self {
    Dynamic::Json(value)
  }
}

/// `None` becomes `null`.
impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => value.into(),
      None => Dynamic::Json(Value::Null),
    }
  }
}

macro_rules! dynamic_via_json {
  ($($t:ty),* $(,)?) => {
    $(
      impl From<$t> for Dynamic {
        fn from(value: $t) -> Self {
          Dynamic::Json(Value::from(value))
        }
      }
    )*
  }
}

dynamic_via_json!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, (), String, &str);
