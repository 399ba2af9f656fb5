use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use eccgen_core::{Dataset, Material, PurchaseOrder, Transaction, Vendor};

use crate::clock::{Clock, SystemClock};
use crate::errors::GenerationError;
use crate::generators;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::{
    write_materials_csv, write_purchase_orders_csv, write_transactions_csv, write_vendors_csv,
};

/// Resolve a seed (drawing one from the OS when absent) and build the RNG.
pub fn build_rng(seed: Option<u64>) -> (u64, ChaCha8Rng) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (seed, ChaCha8Rng::seed_from_u64(seed))
}

/// Result of an export run.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub run_dir: PathBuf,
    pub dataset: Dataset,
    pub transactions: Vec<Transaction>,
    pub report: GenerationReport,
}

/// Entry point for generating reference data.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    clock: Arc<dyn Clock>,
}

impl GenerationEngine {
    /// Validate `options` and build an engine on the system clock.
    pub fn new(options: GenerateOptions) -> Result<Self, GenerationError> {
        options.validate()?;
        Ok(Self {
            options,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// RNG for one pass, seeded from the options when a seed is configured.
    pub fn rng(&self) -> (u64, ChaCha8Rng) {
        build_rng(self.options.seed)
    }

    pub fn generate_materials(
        &self,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Material>, GenerationError> {
        let materials = generators::generate_materials(&self.options, rng)?;
        debug!(rows = materials.len(), "materials generated");
        Ok(materials)
    }

    pub fn generate_vendors(&self) -> Result<Vec<Vendor>, GenerationError> {
        let vendors = generators::generate_vendors()?;
        debug!(rows = vendors.len(), "vendors generated");
        Ok(vendors)
    }

    /// Orders drawn from exactly the given materials and vendors.
    pub fn generate_purchase_orders(
        &self,
        materials: &[Material],
        vendors: &[Vendor],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<PurchaseOrder>, GenerationError> {
        let today = self.clock.today();
        let orders =
            generators::generate_purchase_orders(materials, vendors, &self.options, today, rng)?;
        debug!(rows = orders.len(), today = %today, "purchase orders generated");
        Ok(orders)
    }

    pub fn generate_transactions(
        &self,
        materials: &[Material],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Transaction>, GenerationError> {
        let transactions = generators::generate_transactions(
            materials,
            count,
            &self.options,
            self.clock.now(),
            rng,
        )?;
        debug!(rows = transactions.len(), "transactions generated");
        Ok(transactions)
    }

    /// Materials, vendors and orders of one consistent universe.
    pub fn generate_dataset(&self, rng: &mut dyn RngCore) -> Result<Dataset, GenerationError> {
        let materials = self.generate_materials(rng)?;
        let vendors = self.generate_vendors()?;
        let purchase_orders = self.generate_purchase_orders(&materials, &vendors, rng)?;
        info!(
            materials = materials.len(),
            vendors = vendors.len(),
            purchase_orders = purchase_orders.len(),
            "dataset generated"
        );
        Ok(Dataset {
            materials,
            vendors,
            purchase_orders,
        })
    }

    /// Generate a dataset and write it as CSV into a fresh run directory.
    pub fn export(&self) -> Result<ExportResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let generated_at = self.clock.now();
        let timestamp = generated_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;

        let (seed, mut rng) = self.rng();
        info!(run_id = %run_id, seed, run_dir = %run_dir.display(), "export started");

        let dataset = self.generate_dataset(&mut rng)?;
        let transactions = self.generate_transactions(
            &dataset.materials,
            self.options.transaction_count as usize,
            &mut rng,
        )?;

        let mut report = GenerationReport::new(
            run_id.clone(),
            seed,
            generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        );
        let bytes = write_materials_csv(&run_dir.join("materials.csv"), &dataset.materials)?;
        report.record_table("materials", dataset.materials.len(), bytes);
        let bytes = write_vendors_csv(&run_dir.join("vendors.csv"), &dataset.vendors)?;
        report.record_table("vendors", dataset.vendors.len(), bytes);
        let bytes = write_purchase_orders_csv(
            &run_dir.join("purchase_orders.csv"),
            &dataset.purchase_orders,
        )?;
        report.record_table("purchase_orders", dataset.purchase_orders.len(), bytes);
        let bytes = write_transactions_csv(&run_dir.join("transactions.csv"), &transactions)?;
        report.record_table("transactions", transactions.len(), bytes);

        std::fs::write(
            run_dir.join("resolved_options.json"),
            serde_json::to_vec_pretty(&self.options)?,
        )?;
        report.duration_ms = start.elapsed().as_millis() as u64;
        std::fs::write(
            run_dir.join("generation_report.json"),
            serde_json::to_vec_pretty(&report)?,
        )?;

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "export completed"
        );

        Ok(ExportResult {
            run_dir,
            dataset,
            transactions,
            report,
        })
    }
}
