use chrono::{Duration, NaiveDateTime};
use rand::{Rng, RngCore};

use eccgen_core::{Material, PLANTS, Transaction, TransactionType};

use crate::errors::GenerationError;
use crate::generators::pick;
use crate::model::GenerateOptions;

const MAX_QUANTITY: u32 = 100;
const USER_COUNT: u32 = 20;

/// Simulated live postings against the first materials of the master data.
///
/// Timestamps fall within the configured window before `now`; the log is
/// sorted newest first.
pub fn generate_transactions(
    materials: &[Material],
    count: usize,
    options: &GenerateOptions,
    now: NaiveDateTime,
    rng: &mut dyn RngCore,
) -> Result<Vec<Transaction>, GenerationError> {
    options.validate()?;
    let sample = &materials[..materials.len().min(options.transaction_sample_size)];
    if sample.is_empty() && count > 0 {
        return Err(GenerationError::InvalidInput(
            "transactions need at least one material".to_string(),
        ));
    }

    let mut transactions = Vec::with_capacity(count);
    for _ in 0..count {
        let minutes_ago = rng.random_range(0..options.transaction_window_minutes);
        let transaction_type = pick(&TransactionType::ALL, rng)
            .copied()
            .unwrap_or(TransactionType::PurchaseOrder);
        let material = pick(sample, rng)
            .ok_or_else(|| GenerationError::InvalidInput("no material to pick".to_string()))?;
        let plant = pick(&PLANTS, rng)
            .ok_or_else(|| GenerationError::InvalidInput("no plant to pick".to_string()))?;

        transactions.push(Transaction {
            timestamp: now - Duration::minutes(i64::from(minutes_ago)),
            transaction_type,
            material_number: material.material_number.clone(),
            description: material.description.clone(),
            quantity: rng.random_range(1..=MAX_QUANTITY),
            plant_code: plant.code.to_string(),
            user: format!("USER{}", rng.random_range(1..=USER_COUNT)),
        });
    }

    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(transactions)
}
