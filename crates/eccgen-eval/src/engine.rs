use std::path::PathBuf;

use tracing::{info, warn};

use eccgen_generate::{ExportResult, GenerationEngine};

use crate::errors::EvalError;
use crate::integrity::{IntegrityReport, check_integrity};
use crate::report::render_report;
use crate::summary::{DataSummary, summarize};

/// Summary over a freshly generated universe.
pub fn get_summary(engine: &GenerationEngine) -> Result<DataSummary, EvalError> {
    let (seed, mut rng) = engine.rng();
    let dataset = engine.generate_dataset(&mut rng)?;
    let summary = summarize(
        &dataset.materials,
        &dataset.vendors,
        &dataset.purchase_orders,
    );
    info!(
        seed,
        materials = summary.total_materials,
        purchase_orders = summary.total_purchase_orders,
        "summary computed"
    );
    Ok(summary)
}

/// Artifacts written next to an exported run.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub summary_path: PathBuf,
    pub integrity_path: PathBuf,
    pub report_path: PathBuf,
    pub summary: DataSummary,
    pub integrity: IntegrityReport,
}

/// Summarize and check an export, writing `summary.json`, `integrity.json`
/// and `report.md` into its run directory.
pub fn evaluate_export(
    engine: &GenerationEngine,
    export: &ExportResult,
) -> Result<EvaluationResult, EvalError> {
    let dataset = &export.dataset;
    let summary = summarize(
        &dataset.materials,
        &dataset.vendors,
        &dataset.purchase_orders,
    );
    let integrity = check_integrity(dataset, engine.options());
    if !integrity.is_ok() {
        warn!(issues = integrity.issues.len(), "integrity issues found");
    }

    let summary_path = export.run_dir.join("summary.json");
    let integrity_path = export.run_dir.join("integrity.json");
    let report_path = export.run_dir.join("report.md");
    std::fs::write(&summary_path, serde_json::to_vec_pretty(&summary)?)?;
    std::fs::write(&integrity_path, serde_json::to_vec_pretty(&integrity)?)?;
    std::fs::write(&report_path, render_report(&summary, Some(&integrity)))?;

    info!(run_dir = %export.run_dir.display(), "evaluation written");

    Ok(EvaluationResult {
        summary_path,
        integrity_path,
        report_path,
        summary,
        integrity,
    })
}
