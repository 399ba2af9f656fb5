use eccgen_core::{VENDOR_CATALOG, Vendor, vendor_number};

use crate::errors::GenerationError;

/// One vendor per catalog entry, numbered by catalog position.
pub fn generate_vendors() -> Result<Vec<Vendor>, GenerationError> {
    VENDOR_CATALOG
        .iter()
        .zip(1_u32..)
        .map(|(template, index)| {
            Ok(Vendor {
                vendor_number: vendor_number(index)?,
                name: template.name.to_string(),
                country_code: template.country.to_string(),
                region_code: template.region.to_string(),
                city: template.city.to_string(),
            })
        })
        .collect()
}
