//! Small, independent utilities: a stack, discount and validation
//! helpers, an always-failing fetch, and a handful of warm-up
//! exercises.
//!
//! Functions that reject bad input do so in one of two ways. The
//! validators return an [`Outcome`](outcome::Outcome), whose invalid
//! case carries a message containing "Invalid". The stack and the
//! fetch return a `Result` with a structured error instead.

pub mod coupon;
pub mod driving;
pub mod errorlist;
pub mod fetch;
pub mod intro;
pub mod outcome;
pub mod stack;
pub mod util;
pub mod validation;

pub use coupon::{Coupon, CouponCatalog, calculate_discount, get_coupons};
pub use driving::can_drive;
pub use fetch::{FetchError, fetch_data};
pub use intro::{calculate_average, factorial, fizz_buzz, max};
pub use outcome::{InvalidInput, Outcome};
pub use stack::{Stack, StackError};
pub use util::dynamic::Dynamic;
pub use validation::{is_price_in_range, is_valid_username, validate_user_input};
