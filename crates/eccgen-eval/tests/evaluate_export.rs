use std::fs;

use chrono::NaiveDate;

use eccgen_eval::{DataSummary, evaluate_export};
use eccgen_generate::{FixedClock, GenerateOptions, GenerationEngine};

#[test]
fn evaluation_artifacts_land_in_the_run_dir() {
    let mut options = GenerateOptions::default();
    options.seed = Some(12);
    options.out_dir = std::env::temp_dir().join(format!("eccgen_eval_{}", uuid::Uuid::new_v4()));
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
    let engine = GenerationEngine::new(options)
        .expect("valid options")
        .with_clock(FixedClock::at_date(today));

    let export = engine.export().expect("export");
    let result = evaluate_export(&engine, &export).expect("evaluate");

    assert!(result.integrity.is_ok());
    assert!(result.report_path.exists());
    let stored: DataSummary = serde_json::from_str(
        &fs::read_to_string(&result.summary_path).expect("read summary.json"),
    )
    .expect("parse summary");
    assert_eq!(stored, result.summary);
    assert_eq!(stored.total_vendors, 24);
}
