use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use eccgen_core::{MaterialType, OrderStatus};
use eccgen_generate::generators::{classify_status, stock_quantity};
use eccgen_generate::{FixedClock, GenerateOptions, GenerationEngine};

fn engine_at(today: NaiveDate) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions::default())
        .expect("default options are valid")
        .with_clock(FixedClock::at_date(today))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn materials_cover_every_template_and_plant() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let materials = engine.generate_materials(&mut rng).expect("materials");

    assert_eq!(materials.len(), 244);
    let numbers: HashSet<&str> = materials
        .iter()
        .map(|material| material.material_number.as_str())
        .collect();
    assert_eq!(numbers.len(), 244);
    assert_eq!(materials[0].material_number, "100000001");
    assert_eq!(materials[243].material_number, "100000244");

    let pipes = materials
        .iter()
        .filter(|material| material.material_group == "PIP")
        .count();
    assert_eq!(pipes, 56);
    assert!(
        materials
            .iter()
            .all(|material| material.material_type != MaterialType::SemiFinished)
    );
}

#[test]
fn material_values_respect_bounds() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let materials = engine.generate_materials(&mut rng).expect("materials");

    for material in &materials {
        assert!(material.price > 0.0);
        assert!(material.stock_quantity <= 5000);
        assert_eq!(material.currency, "PHP");
    }

    // First pipe template costs 125.50, replicated across four plants.
    for material in &materials[..4] {
        assert!(material.price >= 125.50 * 0.899 && material.price <= 125.50 * 1.101);
    }
}

#[test]
fn stock_distribution_follows_tiers() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let samples: Vec<u32> = (0..20_000).map(|_| stock_quantity(&mut rng)).collect();
    let zero = samples.iter().filter(|value| **value == 0).count() as f64 / 20_000.0;
    let high = samples.iter().filter(|value| **value > 500).count() as f64 / 20_000.0;

    assert!((0.08..=0.12).contains(&zero), "zero share {zero}");
    assert!((0.27..=0.33).contains(&high), "high share {high}");
    assert!(samples.iter().all(|value| *value <= 5000));
}

#[test]
fn repeated_material_passes_share_shape_not_values() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng_a = ChaCha8Rng::seed_from_u64(100);
    let mut rng_b = ChaCha8Rng::seed_from_u64(200);
    let a = engine.generate_materials(&mut rng_a).expect("materials a");
    let b = engine.generate_materials(&mut rng_b).expect("materials b");

    assert_eq!(a.len(), b.len());
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.material_number, right.material_number);
        assert_eq!(left.description, right.description);
        assert_eq!(left.plant_code, right.plant_code);
    }
    assert!(a.iter().zip(&b).any(|(left, right)| left.price != right.price));
}

#[test]
fn same_seed_reproduces_the_dataset() {
    let engine = engine_at(date(2025, 6, 15));
    let a = engine
        .generate_dataset(&mut ChaCha8Rng::seed_from_u64(77))
        .expect("dataset a");
    let b = engine
        .generate_dataset(&mut ChaCha8Rng::seed_from_u64(77))
        .expect("dataset b");
    assert_eq!(a, b);
}

#[test]
fn vendors_follow_catalog_positions() {
    let engine = engine_at(date(2025, 6, 15));
    let vendors = engine.generate_vendors().expect("vendors");

    assert_eq!(vendors.len(), 24);
    let numbers: HashSet<&str> = vendors
        .iter()
        .map(|vendor| vendor.vendor_number.as_str())
        .collect();
    assert_eq!(numbers.len(), 24);
    assert_eq!(vendors[0].vendor_number, "V000001");
    assert_eq!(vendors[0].name, "Manila Pipe Supply Inc.");
    assert_eq!(vendors[23].vendor_number, "V000024");
}

#[test]
fn purchase_orders_reference_their_universe() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let dataset = engine.generate_dataset(&mut rng).expect("dataset");

    assert_eq!(dataset.purchase_orders.len(), 1200);
    let materials: HashSet<&str> = dataset
        .materials
        .iter()
        .map(|material| material.material_number.as_str())
        .collect();
    let vendors: HashSet<&str> = dataset
        .vendors
        .iter()
        .map(|vendor| vendor.vendor_number.as_str())
        .collect();

    for order in &dataset.purchase_orders {
        assert!(materials.contains(order.material_number.as_str()));
        assert!(vendors.contains(order.vendor_number.as_str()));
        assert_eq!(order.line_item, "00010");
        let material = dataset
            .materials
            .iter()
            .find(|material| material.material_number == order.material_number)
            .expect("referenced material");
        assert_eq!(order.net_price, material.price);
    }

    let po_numbers: HashSet<&str> = dataset
        .purchase_orders
        .iter()
        .map(|order| order.po_number.as_str())
        .collect();
    assert_eq!(po_numbers.len(), 1200);
}

#[test]
fn purchase_orders_are_sorted_newest_first() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let dataset = engine.generate_dataset(&mut rng).expect("dataset");

    for pair in dataset.purchase_orders.windows(2) {
        assert!(pair[0].order_date >= pair[1].order_date);
    }
    let window = engine.options().order_window;
    assert!(
        dataset
            .purchase_orders
            .iter()
            .all(|order| order.order_date >= window.start && order.order_date <= window.end)
    );
}

#[test]
fn quantities_follow_the_rainy_season_rule() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let dataset = engine.generate_dataset(&mut rng).expect("dataset");

    for order in &dataset.purchase_orders {
        if (6..=8).contains(&order.order_date.month()) {
            assert!((100..=1000).contains(&order.quantity), "{order:?}");
        } else {
            assert!((10..=500).contains(&order.quantity), "{order:?}");
        }
    }
}

#[test]
fn statuses_depend_on_the_pinned_clock() {
    let engine = engine_at(date(2025, 1, 1));
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let dataset = engine.generate_dataset(&mut rng).expect("dataset");
    let today = date(2025, 1, 1);

    let statuses: HashSet<OrderStatus> = dataset
        .purchase_orders
        .iter()
        .map(|order| order.status)
        .collect();
    assert!(statuses.contains(&OrderStatus::Planned));
    assert!(statuses.contains(&OrderStatus::Delivered));

    for order in &dataset.purchase_orders {
        let days = (today - order.order_date).num_days();
        match order.status {
            OrderStatus::Planned => assert!(days < 0),
            OrderStatus::Released => assert!((0..7).contains(&days)),
            OrderStatus::InTransit => assert!((7..30).contains(&days)),
            OrderStatus::Delivered | OrderStatus::Cancelled => assert!(days >= 30),
        }
    }

    let later = engine_at(date(2026, 10, 16));
    let dataset = later
        .generate_dataset(&mut ChaCha8Rng::seed_from_u64(6))
        .expect("dataset");
    assert!(dataset.purchase_orders.iter().all(|order| matches!(
        order.status,
        OrderStatus::Delivered | OrderStatus::Cancelled
    )));
}

#[test]
fn cancellation_rate_is_five_percent() {
    let today = date(2026, 1, 1);
    let order_date = date(2024, 6, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let cancelled = (0..10_000)
        .filter(|_| classify_status(order_date, today, 0.05, &mut rng) == OrderStatus::Cancelled)
        .count();
    let rate = cancelled as f64 / 10_000.0;
    assert!((0.04..=0.06).contains(&rate), "cancelled rate {rate}");
}

#[test]
fn purchase_orders_reject_an_empty_universe() {
    let engine = engine_at(date(2025, 6, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let vendors = engine.generate_vendors().expect("vendors");

    let result = engine.generate_purchase_orders(&[], &vendors, &mut rng);
    assert!(matches!(
        result,
        Err(eccgen_generate::GenerationError::InvalidInput(_))
    ));
}

#[test]
fn transactions_sample_recent_activity() {
    let now = date(2025, 6, 15)
        .and_hms_opt(9, 30, 0)
        .expect("valid time");
    let engine = GenerationEngine::new(GenerateOptions::default())
        .expect("default options")
        .with_clock(FixedClock(now));
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let materials = engine.generate_materials(&mut rng).expect("materials");
    let transactions = engine
        .generate_transactions(&materials, 50, &mut rng)
        .expect("transactions");

    assert_eq!(transactions.len(), 50);
    let sample: HashSet<&str> = materials[..50]
        .iter()
        .map(|material| material.material_number.as_str())
        .collect();
    for transaction in &transactions {
        let age = (now - transaction.timestamp).num_minutes();
        assert!((0..60).contains(&age));
        assert!(sample.contains(transaction.material_number.as_str()));
        assert!((1..=100).contains(&transaction.quantity));
        let user: u32 = transaction
            .user
            .trim_start_matches("USER")
            .parse()
            .expect("numeric user suffix");
        assert!((1..=20).contains(&user));
    }
    for pair in transactions.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}
