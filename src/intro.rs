//! Warm-up exercises.

/// The greater of `a` and `b`. Returns `a` when they are equal.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
  if b > a { b } else { a }
}

pub fn fizz_buzz(n: i64) -> String {
  match (n % 3 == 0, n % 5 == 0) {
    (true, true) => String::from("FizzBuzz"),
    (true, false) => String::from("Fizz"),
    (false, true) => String::from("Buzz"),
    (false, false) => n.to_string(),
  }
}

/// Arithmetic mean of `values`. The mean of nothing is NaN.
pub fn calculate_average(values: &[f64]) -> f64 {
  if values.is_empty() {
    return f64::NAN;
  }
  values.iter().sum::<f64>() / values.len() as f64
}

/// `n!`, or `None` if `n` is negative or the result does not fit in
/// a `u64`.
pub fn factorial(n: i64) -> Option<u64> {
  let n = u64::try_from(n).ok()?;
  (1..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
