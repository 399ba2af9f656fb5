//! Static reference catalog: plants, material templates and suppliers.
//!
//! These tables are the only stable data in a generation pass; everything
//! stamped from them carries randomized stock, prices and dates.

use serde::Serialize;

use self::VendorRating::{A, B, C};
use crate::error::{Error, Result};
use crate::model::{MaterialType, Plant};

pub static PLANTS: [Plant; 4] = [
    Plant {
        code: "1000",
        name: "North Manila Plant",
    },
    Plant {
        code: "2000",
        name: "South Manila Plant",
    },
    Plant {
        code: "3000",
        name: "East Manila Plant",
    },
    Plant {
        code: "4000",
        name: "Rizal Plant",
    },
];

/// Look up a plant by code.
pub fn plant(code: &str) -> Result<&'static Plant> {
    PLANTS
        .iter()
        .find(|plant| plant.code == code)
        .ok_or_else(|| Error::UnknownCode(format!("plant '{code}'")))
}

/// Category-specific shape used to stamp out one material per plant.
///
/// `attribute` holds the category's distinguishing label: nominal size for
/// pipes and valves, unit of measure for chemicals, meter/equipment type,
/// or rated power for pumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialTemplate {
    pub name: &'static str,
    pub attribute: &'static str,
    pub price: f64,
}

const fn tpl(name: &'static str, attribute: &'static str, price: f64) -> MaterialTemplate {
    MaterialTemplate {
        name,
        attribute,
        price,
    }
}

/// Material group (`MATKL`) with its templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MaterialCategory {
    Pipes,
    Valves,
    Chemicals,
    Meters,
    Pumps,
    Equipment,
    Safety,
}

impl MaterialCategory {
    /// Categories in material-number order.
    pub const ALL: [MaterialCategory; 7] = [
        MaterialCategory::Pipes,
        MaterialCategory::Valves,
        MaterialCategory::Chemicals,
        MaterialCategory::Meters,
        MaterialCategory::Pumps,
        MaterialCategory::Equipment,
        MaterialCategory::Safety,
    ];

    pub fn group_code(&self) -> &'static str {
        match self {
            MaterialCategory::Pipes => "PIP",
            MaterialCategory::Valves => "VAL",
            MaterialCategory::Chemicals => "CHM",
            MaterialCategory::Meters => "MTR",
            MaterialCategory::Pumps => "PMP",
            MaterialCategory::Equipment => "EQP",
            MaterialCategory::Safety => "SAF",
        }
    }

    pub fn from_group_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.group_code() == code)
            .ok_or_else(|| Error::UnknownCode(format!("material group '{code}'")))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Pipes => "Pipes & Fittings",
            MaterialCategory::Valves => "Valves",
            MaterialCategory::Chemicals => "Chemicals",
            MaterialCategory::Meters => "Water Meters",
            MaterialCategory::Pumps => "Pumps",
            MaterialCategory::Equipment => "Equipment",
            MaterialCategory::Safety => "Safety Gear",
        }
    }

    pub fn material_type(&self) -> MaterialType {
        match self {
            MaterialCategory::Pipes
            | MaterialCategory::Valves
            | MaterialCategory::Chemicals
            | MaterialCategory::Safety => MaterialType::RawMaterial,
            MaterialCategory::Meters | MaterialCategory::Pumps | MaterialCategory::Equipment => {
                MaterialType::FinishedProduct
            }
        }
    }

    /// Base unit of measure (`MEINS`) for a template of this category.
    pub fn base_unit(&self, template: &MaterialTemplate) -> &'static str {
        match self {
            MaterialCategory::Pipes => "M",
            MaterialCategory::Chemicals => template.attribute,
            _ => "EA",
        }
    }

    pub fn templates(&self) -> &'static [MaterialTemplate] {
        match self {
            MaterialCategory::Pipes => PIPE_TEMPLATES,
            MaterialCategory::Valves => VALVE_TEMPLATES,
            MaterialCategory::Chemicals => CHEMICAL_TEMPLATES,
            MaterialCategory::Meters => METER_TEMPLATES,
            MaterialCategory::Pumps => PUMP_TEMPLATES,
            MaterialCategory::Equipment => EQUIPMENT_TEMPLATES,
            MaterialCategory::Safety => SAFETY_TEMPLATES,
        }
    }

    /// Rows this category contributes to one material pass.
    pub fn material_count(&self) -> usize {
        self.templates().len() * PLANTS.len()
    }
}

/// Total rows of one material pass: every template replicated per plant.
pub fn material_count() -> usize {
    MaterialCategory::ALL
        .iter()
        .map(MaterialCategory::material_count)
        .sum()
}

const PIPE_TEMPLATES: &[MaterialTemplate] = &[
    tpl("PVC Pipe 50mm", "50mm", 125.50),
    tpl("PVC Pipe 100mm", "100mm", 450.00),
    tpl("PVC Pipe 150mm", "150mm", 890.00),
    tpl("PVC Pipe 200mm", "200mm", 1450.00),
    tpl("PVC Pipe 300mm", "300mm", 2850.00),
    tpl("PVC Pipe 400mm", "400mm", 4200.00),
    tpl("PVC Pipe 500mm", "500mm", 6500.00),
    tpl("HDPE Pipe 63mm", "63mm", 280.00),
    tpl("HDPE Pipe 110mm", "110mm", 580.00),
    tpl("HDPE Pipe 160mm", "160mm", 1150.00),
    tpl("Ductile Iron Pipe 150mm", "150mm", 2200.00),
    tpl("Ductile Iron Pipe 200mm", "200mm", 3100.00),
    tpl("Steel Pipe 100mm", "100mm", 1800.00),
    tpl("Steel Pipe 200mm", "200mm", 3500.00),
];

const VALVE_TEMPLATES: &[MaterialTemplate] = &[
    tpl("Gate Valve 50mm", "50mm", 1250.00),
    tpl("Gate Valve 100mm", "100mm", 2350.00),
    tpl("Gate Valve 150mm", "150mm", 4200.00),
    tpl("Butterfly Valve 200mm", "200mm", 5800.00),
    tpl("Butterfly Valve 300mm", "300mm", 9500.00),
    tpl("Check Valve 100mm", "100mm", 1850.00),
    tpl("Check Valve 150mm", "150mm", 3200.00),
    tpl("Ball Valve 50mm", "50mm", 850.00),
    tpl("Ball Valve 100mm", "100mm", 1650.00),
    tpl("Pressure Reducing Valve", "100mm", 12500.00),
];

const CHEMICAL_TEMPLATES: &[MaterialTemplate] = &[
    tpl("Chlorine Gas Cylinder", "KG", 185.00),
    tpl("Sodium Hypochlorite 12%", "L", 45.00),
    tpl("Lime (Calcium Hydroxide)", "KG", 28.00),
    tpl("Aluminum Sulfate (Alum)", "KG", 35.00),
    tpl("Polymer Coagulant", "KG", 125.00),
    tpl("Activated Carbon", "KG", 95.00),
    tpl("Sodium Hydroxide", "KG", 42.00),
    tpl("pH Adjustment Chemical", "L", 78.00),
];

const METER_TEMPLATES: &[MaterialTemplate] = &[
    tpl("Water Meter 15mm Residential", "Residential", 450.00),
    tpl("Water Meter 20mm Residential", "Residential", 580.00),
    tpl("Water Meter 25mm Commercial", "Commercial", 1250.00),
    tpl("Water Meter 40mm Commercial", "Commercial", 2350.00),
    tpl("Water Meter 50mm Industrial", "Industrial", 4200.00),
    tpl("Water Meter 100mm Industrial", "Industrial", 8500.00),
    tpl("Smart Water Meter 20mm", "Smart", 1850.00),
    tpl("Bulk Flow Meter 200mm", "Bulk", 25000.00),
];

const PUMP_TEMPLATES: &[MaterialTemplate] = &[
    tpl("Centrifugal Pump 5HP", "5HP", 28500.00),
    tpl("Centrifugal Pump 10HP", "10HP", 42000.00),
    tpl("Centrifugal Pump 25HP", "25HP", 85000.00),
    tpl("Submersible Pump 7.5HP", "7.5HP", 35000.00),
    tpl("Booster Pump 15HP", "15HP", 52000.00),
    tpl("Dosing Pump (Chemical)", "1HP", 18500.00),
];

const EQUIPMENT_TEMPLATES: &[MaterialTemplate] = &[
    tpl("Pressure Gauge 0-10 Bar", "Gauge", 850.00),
    tpl("Flow Meter Electromagnetic", "Meter", 45000.00),
    tpl("Water Quality Analyzer", "Analyzer", 125000.00),
    tpl("Chlorine Residual Analyzer", "Analyzer", 85000.00),
    tpl("pH Meter Inline", "Meter", 28000.00),
    tpl("Turbidity Meter", "Meter", 35000.00),
    tpl("Pressure Tank 500L", "Tank", 25000.00),
    tpl("Filtration Media (Sand)", "Media", 15000.00),
];

const SAFETY_TEMPLATES: &[MaterialTemplate] = &[
    tpl("Safety Helmet", "PPE", 350.00),
    tpl("Safety Goggles", "PPE", 250.00),
    tpl("Gas Mask with Filters", "PPE", 2500.00),
    tpl("Chemical Resistant Gloves", "PPE", 450.00),
    tpl("Safety Boots Steel Toe", "PPE", 1850.00),
    tpl("High Visibility Vest", "PPE", 280.00),
    tpl("First Aid Kit", "Safety", 1250.00),
];

/// Supplier quality rating kept on the catalog only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VendorRating {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorTemplate {
    pub name: &'static str,
    pub country: &'static str,
    pub region: &'static str,
    pub city: &'static str,
    pub rating: VendorRating,
}

const fn vendor(
    name: &'static str,
    country: &'static str,
    region: &'static str,
    city: &'static str,
    rating: VendorRating,
) -> VendorTemplate {
    VendorTemplate {
        name,
        country,
        region,
        city,
        rating,
    }
}


/// Suppliers in vendor-number order.
pub static VENDOR_CATALOG: [VendorTemplate; 24] = [
    vendor("Manila Pipe Supply Inc.", "PH", "NCR", "Makati", A),
    vendor("Philippine Valve Corporation", "PH", "NCR", "Quezon City", A),
    vendor("Metro Manila Water Equipment", "PH", "NCR", "Manila", B),
    vendor("Luzon Chemical Supplies", "PH", "NCR", "Pasig", A),
    vendor("Philippine Pump Systems", "PH", "CAL", "Caloocan", B),
    vendor("Asian Water Technologies", "PH", "NCR", "Mandaluyong", A),
    vendor("National Hardware Trading", "PH", "NCR", "Taguig", C),
    vendor("Rizal Industrial Supplies", "PH", "RIZ", "Antipolo", B),
    vendor("Cavite Pipe Traders", "PH", "CAV", "Bacoor", B),
    vendor("Laguna Equipment Center", "PH", "LAG", "Sta. Rosa", C),
    vendor("Singapore Water Systems Pte Ltd", "SG", "SG", "Singapore", A),
    vendor("Asia Pacific Valves", "SG", "SG", "Singapore", A),
    vendor("SEA Industrial Equipment", "SG", "SG", "Singapore", B),
    vendor("Shanghai Pipe Manufacturing", "CN", "SH", "Shanghai", B),
    vendor("Beijing Water Technology", "CN", "BJ", "Beijing", B),
    vendor("Guangzhou Valve Factory", "CN", "GD", "Guangzhou", C),
    vendor("Shenzhen Industrial Supplies", "CN", "GD", "Shenzhen", B),
    vendor("Tokyo Water Solutions KK", "JP", "TYO", "Tokyo", A),
    vendor("Osaka Precision Valves", "JP", "OSA", "Osaka", A),
    vendor("Yokohama Equipment Corp", "JP", "KAN", "Yokohama", A),
    vendor("American Water Technologies", "US", "CA", "Los Angeles", A),
    vendor("European Valve Systems GmbH", "DE", "BY", "Munich", A),
    vendor("UK Water Equipment Ltd", "GB", "LDN", "London", A),
    vendor("Pacific Flow Controls Pty Ltd", "AU", "NSW", "Sydney", B),
];
