use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Physical facility partitioning inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plant {
    pub code: &'static str,
    pub name: &'static str,
}

/// SAP material type (`MTART`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, JsonSchema)]
pub enum MaterialType {
    #[serde(rename = "ROH")]
    RawMaterial,
    #[serde(rename = "HALB")]
    SemiFinished,
    #[serde(rename = "FERT")]
    FinishedProduct,
}

impl MaterialType {
    pub const ALL: [MaterialType; 3] = [
        MaterialType::RawMaterial,
        MaterialType::SemiFinished,
        MaterialType::FinishedProduct,
    ];

    /// SAP code as stored in the material master.
    pub fn code(&self) -> &'static str {
        match self {
            MaterialType::RawMaterial => "ROH",
            MaterialType::SemiFinished => "HALB",
            MaterialType::FinishedProduct => "FERT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::RawMaterial => "Raw Materials",
            MaterialType::SemiFinished => "Semi-Finished Goods",
            MaterialType::FinishedProduct => "Finished Products",
        }
    }
}

/// Stock-keeping unit at a specific plant (MARA-style record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Material {
    pub material_number: String,
    pub description: String,
    pub material_type: MaterialType,
    pub base_unit: String,
    pub material_group: String,
    pub plant_code: String,
    pub stock_quantity: u32,
    pub price: f64,
    pub currency: String,
}

/// Supplier master record (LFA1-style record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Vendor {
    pub vendor_number: String,
    pub name: String,
    pub country_code: String,
    pub region_code: String,
    pub city: String,
}

/// Purchase order status, derived from the order age at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Planned,
    Released,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Planned => "Planned",
            OrderStatus::Released => "Released",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Procurement header with a single line item (EKKO/EKPO-style record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PurchaseOrder {
    pub po_number: String,
    pub vendor_number: String,
    pub order_date: NaiveDate,
    pub line_item: String,
    pub material_number: String,
    pub quantity: u32,
    pub net_price: f64,
    pub status: OrderStatus,
}

/// Kind of a simulated ERP posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TransactionType {
    /// Goods receipt.
    #[serde(rename = "GR")]
    GoodsReceipt,
    /// Goods issue.
    #[serde(rename = "GI")]
    GoodsIssue,
    /// Purchase order posting.
    #[serde(rename = "PO")]
    PurchaseOrder,
    /// Invoice receipt.
    #[serde(rename = "INV")]
    Invoice,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::GoodsReceipt,
        TransactionType::GoodsIssue,
        TransactionType::PurchaseOrder,
        TransactionType::Invoice,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::GoodsReceipt => "GR",
            TransactionType::GoodsIssue => "GI",
            TransactionType::PurchaseOrder => "PO",
            TransactionType::Invoice => "INV",
        }
    }
}

/// Entry of the simulated live transaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    pub timestamp: NaiveDateTime,
    pub transaction_type: TransactionType,
    pub material_number: String,
    pub description: String,
    pub quantity: u32,
    pub plant_code: String,
    pub user: String,
}

/// One consistent generation universe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dataset {
    pub materials: Vec<Material>,
    pub vendors: Vec<Vendor>,
    pub purchase_orders: Vec<PurchaseOrder>,
}
