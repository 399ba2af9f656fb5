use rand::{Rng, RngCore};

use eccgen_core::{Material, MaterialCategory, PLANTS, material_number};

use crate::errors::GenerationError;
use crate::model::GenerateOptions;

/// Stock tiers as (cumulative probability, min, max).
const STOCK_TIERS: [(f64, u32, u32); 4] = [
    (0.1, 0, 0),
    (0.3, 1, 50),
    (0.7, 50, 500),
    (1.0, 500, 5000),
];

/// Tiered stock level: 10% out of stock, 20% low, 40% normal, 30% high.
pub fn stock_quantity(rng: &mut dyn RngCore) -> u32 {
    let roll: f64 = rng.random();
    let (_, min, max) = STOCK_TIERS
        .iter()
        .copied()
        .find(|(threshold, _, _)| roll < *threshold)
        .unwrap_or(STOCK_TIERS[STOCK_TIERS.len() - 1]);
    rng.random_range(min..=max)
}

/// Cross-join every category template with every plant.
///
/// Material numbers run 1..=N in category, template, plant order. Prices are
/// the template base price perturbed by `price_variation` in either
/// direction.
pub fn generate_materials(
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Result<Vec<Material>, GenerationError> {
    options.validate()?;
    let mut materials = Vec::with_capacity(eccgen_core::catalog::material_count());
    let mut index = 0_u32;

    for category in MaterialCategory::ALL {
        for template in category.templates() {
            for plant in &PLANTS {
                index += 1;
                let factor = 1.0 - options.price_variation
                    + rng.random::<f64>() * 2.0 * options.price_variation;
                materials.push(Material {
                    material_number: material_number(index)?,
                    description: template.name.to_string(),
                    material_type: category.material_type(),
                    base_unit: category.base_unit(template).to_string(),
                    material_group: category.group_code().to_string(),
                    plant_code: plant.code.to_string(),
                    stock_quantity: stock_quantity(rng),
                    price: template.price * factor,
                    currency: options.currency.clone(),
                });
            }
        }
    }

    Ok(materials)
}
