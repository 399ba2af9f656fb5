use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use eccgen_core::{Dataset, OrderStatus};
use eccgen_eval::{check_integrity, get_summary, render_report, summarize};
use eccgen_generate::{FixedClock, GenerateOptions, GenerationEngine};

fn engine_at(today: NaiveDate, seed: Option<u64>) -> GenerationEngine {
    let mut options = GenerateOptions::default();
    options.seed = seed;
    GenerationEngine::new(options)
        .expect("valid options")
        .with_clock(FixedClock::at_date(today))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn dataset(today: NaiveDate, seed: u64) -> (GenerationEngine, Dataset) {
    let engine = engine_at(today, Some(seed));
    let dataset = engine
        .generate_dataset(&mut ChaCha8Rng::seed_from_u64(seed))
        .expect("dataset");
    (engine, dataset)
}

#[test]
fn summary_counts_every_entity() {
    let (_, dataset) = dataset(date(2025, 6, 15), 1);
    let summary = summarize(
        &dataset.materials,
        &dataset.vendors,
        &dataset.purchase_orders,
    );

    assert_eq!(summary.total_materials, 244);
    assert_eq!(summary.total_vendors, 24);
    assert_eq!(summary.total_purchase_orders, 1200);
    assert_eq!(summary.materials_by_type.raw_material, 56 + 40 + 32 + 28);
    assert_eq!(summary.materials_by_type.semi_finished, 0);
    assert_eq!(summary.materials_by_type.finished_product, 32 + 24 + 32);
    assert_eq!(summary.materials_by_group.get("PIP"), Some(&56));
    assert_eq!(summary.materials_by_group.get("SAF"), Some(&28));
    assert_eq!(summary.materials_by_group.len(), 7);
}

#[test]
fn planned_orders_are_left_out_of_status_counts() {
    let (_, dataset) = dataset(date(2025, 1, 1), 2);
    let summary = summarize(
        &dataset.materials,
        &dataset.vendors,
        &dataset.purchase_orders,
    );

    let planned = dataset
        .purchase_orders
        .iter()
        .filter(|order| order.status == OrderStatus::Planned)
        .count();
    assert!(planned > 0);
    assert_eq!(summary.orders_by_status.total() + planned, 1200);
}

#[test]
fn semi_finished_is_serialized_as_zero() {
    let summary = summarize(&[], &[], &[]);
    let json = serde_json::to_value(summary).expect("serialize summary");
    assert_eq!(json["materials_by_type"]["semi_finished"], serde_json::json!(0));
    assert!(json["orders_by_status"].get("planned").is_none());
}

#[test]
fn get_summary_generates_a_fresh_universe() {
    let engine = engine_at(date(2026, 10, 16), None);
    let summary = get_summary(&engine).expect("summary");

    assert_eq!(summary.total_purchase_orders, 1200);
    assert_eq!(summary.materials_by_type.semi_finished, 0);
    // Every order in the window is older than 30 days on this clock.
    assert_eq!(
        summary.orders_by_status.delivered + summary.orders_by_status.cancelled,
        1200
    );
}

#[test]
fn generated_datasets_pass_integrity_checks() {
    let (engine, dataset) = dataset(date(2025, 6, 15), 3);
    let report = check_integrity(&dataset, engine.options());
    assert!(report.is_ok(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.checked_orders, 1200);
}

#[test]
fn integrity_flags_dangling_references_and_ordering() {
    let (engine, mut dataset) = dataset(date(2025, 6, 15), 4);
    dataset.purchase_orders[0].material_number = "100999999".to_string();
    dataset.purchase_orders[1].vendor_number = "V999999".to_string();
    dataset.purchase_orders.reverse();

    let report = check_integrity(&dataset, engine.options());
    let codes: Vec<&str> = report.issues.iter().map(|issue| issue.code.as_str()).collect();
    assert!(codes.contains(&"order.unknown_material"));
    assert!(codes.contains(&"order.unknown_vendor"));
    assert!(codes.contains(&"order.unsorted"));
}

#[test]
fn integrity_flags_materials_outside_the_plant_catalog() {
    let (engine, mut dataset) = dataset(date(2025, 6, 15), 6);
    dataset.materials[3].plant_code = "9000".to_string();

    let report = check_integrity(&dataset, engine.options());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].code, "material.unknown_plant");
    assert_eq!(report.issues[0].path, "materials[3]");
}

#[test]
fn report_shows_planned_orders_left_out_of_the_status_table() {
    let (_, dataset) = dataset(date(2025, 1, 1), 2);
    let summary = summarize(
        &dataset.materials,
        &dataset.vendors,
        &dataset.purchase_orders,
    );
    let planned = 1200 - summary.orders_by_status.total();
    assert!(planned > 0);

    let report = render_report(&summary, None);
    assert!(report.contains(&format!("- planned (not counted): {planned}")));
}

#[test]
fn report_lists_types_groups_and_statuses() {
    let (engine, dataset) = dataset(date(2025, 6, 15), 5);
    let summary = summarize(
        &dataset.materials,
        &dataset.vendors,
        &dataset.purchase_orders,
    );
    let integrity = check_integrity(&dataset, engine.options());
    let report = render_report(&summary, Some(&integrity));

    assert!(report.starts_with("# ERP Reference Data Report"));
    assert!(report.contains("| HALB | Semi-Finished Goods | 0 |"));
    assert!(report.contains("| PIP | Pipes & Fittings | 56 |"));
    assert!(report.contains("- materials: 244"));
    assert!(report.contains("- issues: none"));
}
