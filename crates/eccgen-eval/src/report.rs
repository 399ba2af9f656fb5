use eccgen_core::{MaterialCategory, MaterialType};

use crate::integrity::IntegrityReport;
use crate::summary::DataSummary;

/// Render a deterministic markdown report from a summary.
pub fn render_report(summary: &DataSummary, integrity: Option<&IntegrityReport>) -> String {
    let mut lines = Vec::new();

    lines.push("# ERP Reference Data Report".to_string());
    lines.push(String::new());
    lines.push("## Totals".to_string());
    lines.push(format!("- materials: {}", summary.total_materials));
    lines.push(format!("- vendors: {}", summary.total_vendors));
    lines.push(format!("- purchase_orders: {}", summary.total_purchase_orders));
    lines.push(String::new());

    lines.push("## Materials by type".to_string());
    lines.push("| type | description | count |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for material_type in MaterialType::ALL {
        lines.push(format!(
            "| {} | {} | {} |",
            material_type.code(),
            material_type.label(),
            summary.materials_by_type.get(material_type)
        ));
    }
    lines.push(String::new());

    lines.push("## Materials by group".to_string());
    lines.push("| group | name | count |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for (group, count) in &summary.materials_by_group {
        let name = MaterialCategory::from_group_code(group)
            .map(|category| category.display_name())
            .unwrap_or("-");
        lines.push(format!("| {group} | {name} | {count} |"));
    }
    lines.push(String::new());

    let status = &summary.orders_by_status;
    lines.push("## Purchase orders by status".to_string());
    lines.push("| status | count |".to_string());
    lines.push("| --- | --- |".to_string());
    lines.push(format!("| Released | {} |", status.released));
    lines.push(format!("| In Transit | {} |", status.in_transit));
    lines.push(format!("| Delivered | {} |", status.delivered));
    lines.push(format!("| Cancelled | {} |", status.cancelled));
    lines.push(format!("- active: {}", status.active()));
    lines.push(format!(
        "- planned (not counted): {}",
        summary.total_purchase_orders.saturating_sub(status.total())
    ));
    lines.push(String::new());

    if let Some(integrity) = integrity {
        lines.push("## Integrity".to_string());
        lines.push(format!("- checked_orders: {}", integrity.checked_orders));
        if integrity.is_ok() {
            lines.push("- issues: none".to_string());
        } else {
            lines.push(format!("- issues: {}", integrity.issues.len()));
            for issue in &integrity.issues {
                lines.push(format!("- {} {}: {}", issue.code, issue.path, issue.message));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
