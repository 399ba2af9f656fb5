use chrono::{Datelike, NaiveDate};
use rand::{Rng, RngCore};

use eccgen_core::{Material, OrderStatus, PurchaseOrder, Vendor, po_number};

use crate::errors::GenerationError;
use crate::generators::{pick, random_date, random_quantity};
use crate::model::GenerateOptions;

/// Orders younger than this many days are still released.
pub const RELEASED_WINDOW_DAYS: i64 = 7;
/// Orders younger than this many days are in transit.
pub const IN_TRANSIT_WINDOW_DAYS: i64 = 30;

const LINE_ITEM: &str = "00010";

/// Classify an order by its age relative to `today`.
///
/// Only aged orders consume randomness: they are cancelled with probability
/// `cancellation_rate` and delivered otherwise.
pub fn classify_status(
    order_date: NaiveDate,
    today: NaiveDate,
    cancellation_rate: f64,
    rng: &mut dyn RngCore,
) -> OrderStatus {
    let days_since_order = (today - order_date).num_days();
    if days_since_order < 0 {
        OrderStatus::Planned
    } else if days_since_order < RELEASED_WINDOW_DAYS {
        OrderStatus::Released
    } else if days_since_order < IN_TRANSIT_WINDOW_DAYS {
        OrderStatus::InTransit
    } else if rng.random::<f64>() < 1.0 - cancellation_rate {
        OrderStatus::Delivered
    } else {
        OrderStatus::Cancelled
    }
}

/// Sample `order_count` orders against the given materials and vendors.
///
/// Every order references a material and a vendor from the inputs and copies
/// the material price as its net price. The result is sorted by order date,
/// newest first.
pub fn generate_purchase_orders(
    materials: &[Material],
    vendors: &[Vendor],
    options: &GenerateOptions,
    today: NaiveDate,
    rng: &mut dyn RngCore,
) -> Result<Vec<PurchaseOrder>, GenerationError> {
    options.validate()?;
    if materials.is_empty() {
        return Err(GenerationError::InvalidInput(
            "purchase orders need at least one material".to_string(),
        ));
    }
    if vendors.is_empty() {
        return Err(GenerationError::InvalidInput(
            "purchase orders need at least one vendor".to_string(),
        ));
    }

    let mut orders = Vec::with_capacity(options.order_count as usize);
    for index in 1..=options.order_count {
        let material = pick(materials, rng)
            .ok_or_else(|| GenerationError::InvalidInput("no material to pick".to_string()))?;
        let vendor = pick(vendors, rng)
            .ok_or_else(|| GenerationError::InvalidInput("no vendor to pick".to_string()))?;
        let order_date = random_date(options.order_window.start, options.order_window.end, rng);
        let quantity = random_quantity(options.quantity_range(order_date.month()), rng);
        let status = classify_status(order_date, today, options.cancellation_rate, rng);

        orders.push(PurchaseOrder {
            po_number: po_number(index)?,
            vendor_number: vendor.vendor_number.clone(),
            order_date,
            line_item: LINE_ITEM.to_string(),
            material_number: material.material_number.clone(),
            quantity,
            net_price: material.price,
            status,
        });
    }

    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    Ok(orders)
}
