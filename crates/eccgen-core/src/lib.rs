//! Core contracts for the ERP reference data generator.
//!
//! This crate defines the master data records (materials, vendors, purchase
//! orders), the static reference catalog they are stamped from, and the
//! identifier formats shared by the generator, evaluator and CLI.

pub mod catalog;
pub mod error;
pub mod ids;
pub mod model;

pub use catalog::{
    MaterialCategory, MaterialTemplate, PLANTS, VENDOR_CATALOG, VendorRating, VendorTemplate,
};
pub use error::{Error, Result};
pub use ids::{material_number, po_number, vendor_number};
pub use model::{
    Dataset, Material, MaterialType, OrderStatus, Plant, PurchaseOrder, Transaction,
    TransactionType, Vendor,
};

/// Current contract version for exported datasets.
pub const DATASET_VERSION: &str = "0.1";
