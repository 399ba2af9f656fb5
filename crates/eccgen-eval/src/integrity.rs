//! Invariant checks over one generated universe.

use std::collections::HashSet;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use eccgen_core::Dataset;
use eccgen_core::catalog::plant;
use eccgen_generate::GenerateOptions;

/// Structured integrity violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    pub code: String,
    pub path: String,
    pub message: String,
}

impl IntegrityIssue {
    fn new(code: &str, path: String, message: String) -> Self {
        Self {
            code: code.to_string(),
            path,
            message,
        }
    }
}

/// Aggregated integrity report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub checked_orders: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, issue: IntegrityIssue) {
        self.issues.push(issue);
    }
}

/// Check references, ordering, uniqueness and value ranges of a dataset.
pub fn check_integrity(dataset: &Dataset, options: &GenerateOptions) -> IntegrityReport {
    let mut report = IntegrityReport {
        checked_orders: dataset.purchase_orders.len(),
        issues: Vec::new(),
    };

    let mut material_numbers = HashSet::new();
    for (idx, material) in dataset.materials.iter().enumerate() {
        let path = format!("materials[{idx}]");
        if !material_numbers.insert(material.material_number.as_str()) {
            report.push(IntegrityIssue::new(
                "material.duplicate_number",
                path.clone(),
                format!("duplicate material number {}", material.material_number),
            ));
        }
        if plant(&material.plant_code).is_err() {
            report.push(IntegrityIssue::new(
                "material.unknown_plant",
                path.clone(),
                format!("plant {} is not in the catalog", material.plant_code),
            ));
        }
        if !(material.price > 0.0) {
            report.push(IntegrityIssue::new(
                "material.non_positive_price",
                path,
                format!("price {} is not positive", material.price),
            ));
        }
    }

    let mut vendor_numbers = HashSet::new();
    for (idx, vendor) in dataset.vendors.iter().enumerate() {
        if !vendor_numbers.insert(vendor.vendor_number.as_str()) {
            report.push(IntegrityIssue::new(
                "vendor.duplicate_number",
                format!("vendors[{idx}]"),
                format!("duplicate vendor number {}", vendor.vendor_number),
            ));
        }
    }

    let mut po_numbers = HashSet::new();
    for (idx, order) in dataset.purchase_orders.iter().enumerate() {
        let path = format!("purchase_orders[{idx}]");
        if !po_numbers.insert(order.po_number.as_str()) {
            report.push(IntegrityIssue::new(
                "order.duplicate_number",
                path.clone(),
                format!("duplicate purchase order number {}", order.po_number),
            ));
        }
        if !material_numbers.contains(order.material_number.as_str()) {
            report.push(IntegrityIssue::new(
                "order.unknown_material",
                path.clone(),
                format!("material {} is not in the dataset", order.material_number),
            ));
        }
        if !vendor_numbers.contains(order.vendor_number.as_str()) {
            report.push(IntegrityIssue::new(
                "order.unknown_vendor",
                path.clone(),
                format!("vendor {} is not in the dataset", order.vendor_number),
            ));
        }
        let range = options.quantity_range(order.order_date.month());
        if !range.contains(order.quantity) {
            report.push(IntegrityIssue::new(
                "order.quantity_out_of_range",
                path.clone(),
                format!(
                    "quantity {} outside {}..={} for {}",
                    order.quantity, range.min, range.max, order.order_date
                ),
            ));
        }
        if idx > 0 && dataset.purchase_orders[idx - 1].order_date < order.order_date {
            report.push(IntegrityIssue::new(
                "order.unsorted",
                path,
                "orders are not sorted by order date descending".to_string(),
            ));
        }
    }

    report
}
