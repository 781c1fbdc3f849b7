//! Discount coupons and price calculation.

use crate::outcome::{InvalidInput, Outcome};
use crate::util::dynamic::Dynamic;
use crate::util::prism::{Prism, DynamicToNumber, DynamicToString};

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

/// A discount code together with the fraction of the price it takes
/// off. `discount` is strictly between zero and one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
  pub code: String,
  pub discount: f64,
}

/// An ordered, read-only list of coupons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CouponCatalog {
  coupons: Vec<Coupon>,
}

static DEFAULT_CATALOG: Lazy<CouponCatalog> = Lazy::new(|| {
  CouponCatalog {
    coupons: vec![
      Coupon::new("SAVE20", 0.2),
      Coupon::new("SAVE10", 0.1),
    ],
  }
});

impl Coupon {
  pub fn new(code: impl Into<String>, discount: f64) -> Self {
    Self { code: code.into(), discount }
  }
}

impl CouponCatalog {
  /// Builds a catalog, rejecting an empty list, empty codes, and
  /// discounts outside the open interval `(0, 1)`.
  pub fn new(coupons: Vec<Coupon>) -> anyhow::Result<Self> {
    anyhow::ensure!(!coupons.is_empty(), "Coupon catalog must contain at least one coupon");
    for coupon in &coupons {
      anyhow::ensure!(!coupon.code.is_empty(), "Coupon codes must be non-empty");
      anyhow::ensure!(
        coupon.discount > 0.0 && coupon.discount < 1.0,
        "Discount for {} must be strictly between 0 and 1, got {}",
        coupon.code,
        coupon.discount,
      );
    }
    Ok(Self { coupons })
  }

  /// Parses a catalog from a JSON array of `{"code", "discount"}`
  /// objects.
  pub fn from_json(text: &str) -> anyhow::Result<Self> {
    let coupons: Vec<Coupon> = serde_json::from_str(text)
      .context("Could not parse coupon catalog")?;
    Self::new(coupons)
  }

  /// The built-in catalog.
  pub fn builtin() -> &'static CouponCatalog {
    Lazy::force(&DEFAULT_CATALOG)
  }

  pub fn coupons(&self) -> &[Coupon] {
    &self.coupons
  }

  /// Looks up a coupon by exact code.
  pub fn find(&self, code: &str) -> Option<&Coupon> {
    self.coupons.iter().find(|coupon| coupon.code == code)
  }

  /// Applies the discount for `code` to `price`. Unknown codes leave
  /// the price unchanged.
  ///
  /// The price must be a non-negative number and the code must be a
  /// string; otherwise the result is an invalid outcome. The price is
  /// checked first. An infinite price stays infinite; NaN is not
  /// non-negative and is rejected.
  pub fn calculate_discount(&self, price: impl Into<Dynamic>, code: impl Into<Dynamic>) -> Outcome<f64> {
    let (price, code): (Dynamic, Dynamic) = (price.into(), code.into());
    let price = match DynamicToNumber.narrow_type(price) {
      Ok(price) if price >= 0.0 => price,
      _ => return InvalidInput::Price.into(),
    };
    let Ok(code) = DynamicToString.narrow_type(code) else {
      return InvalidInput::DiscountCode.into();
    };
    let discount = match self.find(&code) {
      Some(coupon) => coupon.discount,
      None => {
        tracing::debug!(code = %code, "Discount code not found, charging full price");
        0.0
      }
    };
    Outcome::Value(price * (1.0 - discount))
  }
}

/// The coupons in the built-in catalog.
pub fn get_coupons() -> &'static [Coupon] {
  CouponCatalog::builtin().coupons()
}

/// [`CouponCatalog::calculate_discount`] against the built-in catalog.
pub fn calculate_discount(price: impl Into<Dynamic>, code: impl Into<Dynamic>) -> Outcome<f64> {
  CouponCatalog::builtin().calculate_discount(price, code)
}
