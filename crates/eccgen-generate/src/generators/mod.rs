//! Entity generators.
//!
//! Each generator takes its randomness as `&mut dyn RngCore` and never reads
//! ambient state, so the same seed, options and clock reproduce the same rows.

use chrono::{Duration, NaiveDate};
use rand::{Rng, RngCore};

use crate::model::QuantityRange;

pub mod material;
pub mod purchase_order;
pub mod transaction;
pub mod vendor;

pub use material::{generate_materials, stock_quantity};
pub use purchase_order::{
    IN_TRANSIT_WINDOW_DAYS, RELEASED_WINDOW_DAYS, classify_status, generate_purchase_orders,
};
pub use transaction::generate_transactions;
pub use vendor::generate_vendors;

/// Uniformly pick one element; `None` for an empty slice.
pub fn pick<'a, T>(values: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    values.get(rng.random_range(0..values.len()))
}

/// Uniform date within `start..=end`.
pub fn random_date(start: NaiveDate, end: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + Duration::days(rng.random_range(0..=span))
}

/// Uniform quantity within the inclusive range.
pub fn random_quantity(range: QuantityRange, rng: &mut dyn RngCore) -> u32 {
    rng.random_range(range.min..=range.max)
}
