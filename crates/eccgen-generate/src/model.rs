use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eccgen_core::ids::PO_INDEX_MAX;

use crate::errors::GenerationError;

/// Inclusive range of order quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Inclusive window of order dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where exported runs are written.
    pub out_dir: PathBuf,
    /// Fixed seed; `None` draws a fresh seed from the OS on every run.
    pub seed: Option<u64>,
    /// Currency stamped on every material.
    pub currency: String,
    /// Relative price perturbation around the template base price.
    pub price_variation: f64,
    /// Purchase orders per generation pass.
    pub order_count: u32,
    pub order_window: DateWindow,
    /// Months (1-12) of the rainy-season procurement peak.
    pub peak_months: Vec<u32>,
    pub peak_quantity: QuantityRange,
    pub base_quantity: QuantityRange,
    /// Share of aged orders classified as cancelled instead of delivered.
    pub cancellation_rate: f64,
    pub transaction_count: u32,
    /// Transactions are stamped within this many minutes before now.
    pub transaction_window_minutes: u32,
    /// Transactions sample from the first N materials.
    pub transaction_sample_size: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            seed: None,
            currency: "PHP".to_string(),
            price_variation: 0.10,
            order_count: 1200,
            order_window: DateWindow {
                start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
                end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
            },
            peak_months: vec![6, 7, 8],
            peak_quantity: QuantityRange::new(100, 1000),
            base_quantity: QuantityRange::new(10, 500),
            cancellation_rate: 0.05,
            transaction_count: 50,
            transaction_window_minutes: 60,
            transaction_sample_size: 50,
        }
    }
}

impl GenerateOptions {
    /// Load options from a TOML file; missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, GenerationError> {
        let content = std::fs::read_to_string(path)?;
        let options: GenerateOptions = toml::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject degenerate ranges before anything is generated.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.order_window.start >= self.order_window.end {
            return Err(invalid("order_window start must be before end"));
        }
        for (name, range) in [
            ("peak_quantity", &self.peak_quantity),
            ("base_quantity", &self.base_quantity),
        ] {
            if range.min > range.max {
                return Err(invalid(&format!("{name} min must be <= max")));
            }
            if range.min == 0 {
                return Err(invalid(&format!("{name} min must be positive")));
            }
        }
        if self.order_count == 0 || self.order_count > PO_INDEX_MAX {
            return Err(invalid(&format!(
                "order_count must be within 1..={PO_INDEX_MAX}"
            )));
        }
        if let Some(month) = self.peak_months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(invalid(&format!("peak month {month} is not within 1..=12")));
        }
        if !(0.0..=1.0).contains(&self.cancellation_rate) {
            return Err(invalid("cancellation_rate must be within 0..=1"));
        }
        if !(0.0..1.0).contains(&self.price_variation) {
            return Err(invalid("price_variation must be within 0..1"));
        }
        if self.transaction_window_minutes == 0 {
            return Err(invalid("transaction_window_minutes must be positive"));
        }
        if self.transaction_sample_size == 0 {
            return Err(invalid("transaction_sample_size must be positive"));
        }
        if self.currency.trim().is_empty() {
            return Err(invalid("currency must not be empty"));
        }
        Ok(())
    }

    /// Quantity range for an order placed in `month`.
    pub fn quantity_range(&self, month: u32) -> QuantityRange {
        if self.peak_months.contains(&month) {
            self.peak_quantity
        } else {
            self.base_quantity
        }
    }
}

fn invalid(message: &str) -> GenerationError {
    GenerationError::InvalidConfig(message.to_string())
}

/// Row count and size of an exported table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for an export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub dataset_version: String,
    pub seed: u64,
    pub generated_at: String,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, generated_at: String) -> Self {
        Self {
            run_id,
            dataset_version: eccgen_core::DATASET_VERSION.to_string(),
            seed,
            generated_at,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: &str, rows: usize, bytes: u64) {
        self.bytes_written += bytes;
        self.tables.push(TableReport {
            table: table.to_string(),
            rows: rows as u64,
            bytes,
        });
    }
}
