//! Fixed-width business identifiers.
//!
//! Every generator drives these with a 1-based counter local to its pass, so
//! uniqueness within a pass follows from the counter never repeating.

use crate::error::{Error, Result};

/// Largest index that keeps a material number at 9 characters.
pub const MATERIAL_INDEX_MAX: u32 = 999_999;
/// Largest index that keeps a vendor number at 7 characters.
pub const VENDOR_INDEX_MAX: u32 = 999_999;
/// Largest index that keeps a purchase order number at 10 characters.
pub const PO_INDEX_MAX: u32 = 99_999;

/// `100` + 6-digit index, e.g. `100000001`.
pub fn material_number(index: u32) -> Result<String> {
    check_width("material", index, MATERIAL_INDEX_MAX)?;
    Ok(format!("100{index:06}"))
}

/// `V` + 6-digit index, e.g. `V000001`.
pub fn vendor_number(index: u32) -> Result<String> {
    check_width("vendor", index, VENDOR_INDEX_MAX)?;
    Ok(format!("V{index:06}"))
}

/// `55000` + 5-digit index, e.g. `5500000001`.
pub fn po_number(index: u32) -> Result<String> {
    check_width("purchase order", index, PO_INDEX_MAX)?;
    Ok(format!("55000{index:05}"))
}

fn check_width(kind: &str, index: u32, max: u32) -> Result<()> {
    if index > max {
        return Err(Error::IdentifierOverflow(format!(
            "{kind} index {index} exceeds {max}"
        )));
    }
    Ok(())
}
