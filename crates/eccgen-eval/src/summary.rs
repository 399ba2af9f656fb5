use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use eccgen_core::{Material, MaterialType, OrderStatus, PurchaseOrder, Vendor};

/// Material counts per material type.
///
/// Every type is present even when no template maps to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTypeCounts {
    pub raw_material: usize,
    pub semi_finished: usize,
    pub finished_product: usize,
}

/// Purchase order counts per status.
///
/// Planned orders are future-dated and not part of the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusCounts {
    pub released: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

/// Flat read-only summary consumed by presentation layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSummary {
    pub total_materials: usize,
    pub total_vendors: usize,
    pub total_purchase_orders: usize,
    pub materials_by_type: MaterialTypeCounts,
    pub orders_by_status: OrderStatusCounts,
    /// Material rows per material group code.
    pub materials_by_group: BTreeMap<String, usize>,
}

/// Count entities and tally materials by type and group, orders by status.
pub fn summarize(
    materials: &[Material],
    vendors: &[Vendor],
    orders: &[PurchaseOrder],
) -> DataSummary {
    let mut summary = DataSummary {
        total_materials: materials.len(),
        total_vendors: vendors.len(),
        total_purchase_orders: orders.len(),
        ..DataSummary::default()
    };

    for material in materials {
        let counts = &mut summary.materials_by_type;
        match material.material_type {
            MaterialType::RawMaterial => counts.raw_material += 1,
            MaterialType::SemiFinished => counts.semi_finished += 1,
            MaterialType::FinishedProduct => counts.finished_product += 1,
        }
        *summary
            .materials_by_group
            .entry(material.material_group.clone())
            .or_insert(0) += 1;
    }

    for order in orders {
        let counts = &mut summary.orders_by_status;
        match order.status {
            OrderStatus::Planned => {}
            OrderStatus::Released => counts.released += 1,
            OrderStatus::InTransit => counts.in_transit += 1,
            OrderStatus::Delivered => counts.delivered += 1,
            OrderStatus::Cancelled => counts.cancelled += 1,
        }
    }

    summary
}

impl MaterialTypeCounts {
    pub fn get(&self, material_type: MaterialType) -> usize {
        match material_type {
            MaterialType::RawMaterial => self.raw_material,
            MaterialType::SemiFinished => self.semi_finished,
            MaterialType::FinishedProduct => self.finished_product,
        }
    }
}

impl OrderStatusCounts {
    /// Released plus in-transit orders.
    pub fn active(&self) -> usize {
        self.released + self.in_transit
    }

    /// Every counted order; planned orders are not part of it.
    pub fn total(&self) -> usize {
        self.released + self.in_transit + self.delivered + self.cancelled
    }
}
