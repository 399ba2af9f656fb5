use std::fs::File;
use std::io::Write;
use std::path::Path;

use eccgen_core::{Material, PurchaseOrder, Transaction, Vendor};

const MATERIAL_HEADER: [&str; 9] = [
    "material_number",
    "description",
    "material_type",
    "base_unit",
    "material_group",
    "plant_code",
    "stock_quantity",
    "price",
    "currency",
];
const VENDOR_HEADER: [&str; 5] = ["vendor_number", "name", "country_code", "region_code", "city"];
const PURCHASE_ORDER_HEADER: [&str; 8] = [
    "po_number",
    "vendor_number",
    "order_date",
    "line_item",
    "material_number",
    "quantity",
    "net_price",
    "status",
];
const TRANSACTION_HEADER: [&str; 7] = [
    "timestamp",
    "transaction_type",
    "material_number",
    "description",
    "quantity",
    "plant_code",
    "user",
];

pub fn write_materials_csv(path: &Path, materials: &[Material]) -> Result<u64, csv::Error> {
    write_table_csv(
        path,
        &MATERIAL_HEADER,
        materials.iter().map(|material| {
            vec![
                material.material_number.clone(),
                material.description.clone(),
                material.material_type.code().to_string(),
                material.base_unit.clone(),
                material.material_group.clone(),
                material.plant_code.clone(),
                material.stock_quantity.to_string(),
                format!("{:.2}", material.price),
                material.currency.clone(),
            ]
        }),
    )
}

pub fn write_vendors_csv(path: &Path, vendors: &[Vendor]) -> Result<u64, csv::Error> {
    write_table_csv(
        path,
        &VENDOR_HEADER,
        vendors.iter().map(|vendor| {
            vec![
                vendor.vendor_number.clone(),
                vendor.name.clone(),
                vendor.country_code.clone(),
                vendor.region_code.clone(),
                vendor.city.clone(),
            ]
        }),
    )
}

pub fn write_purchase_orders_csv(
    path: &Path,
    orders: &[PurchaseOrder],
) -> Result<u64, csv::Error> {
    write_table_csv(
        path,
        &PURCHASE_ORDER_HEADER,
        orders.iter().map(|order| {
            vec![
                order.po_number.clone(),
                order.vendor_number.clone(),
                order.order_date.format("%Y-%m-%d").to_string(),
                order.line_item.clone(),
                order.material_number.clone(),
                order.quantity.to_string(),
                format!("{:.2}", order.net_price),
                order.status.label().to_string(),
            ]
        }),
    )
}

pub fn write_transactions_csv(
    path: &Path,
    transactions: &[Transaction],
) -> Result<u64, csv::Error> {
    write_table_csv(
        path,
        &TRANSACTION_HEADER,
        transactions.iter().map(|transaction| {
            vec![
                transaction.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
                transaction.transaction_type.code().to_string(),
                transaction.material_number.clone(),
                transaction.description.clone(),
                transaction.quantity.to_string(),
                transaction.plant_code.clone(),
                transaction.user.clone(),
            ]
        }),
    )
}

/// Stream one table to `path`. The returned size is what reached the file,
/// header included.
fn write_table_csv(
    path: &Path,
    header: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<u64, csv::Error> {
    let file = File::create(path)?;
    let mut table = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(ByteTally::new(file));

    table.write_record(header)?;
    rows.map(|row| table.write_record(&row))
        .collect::<Result<(), _>>()?;

    let tally = table.into_inner().map_err(|err| err.into_error())?;
    Ok(tally.total)
}

/// File sink that keeps a running byte total for the generation report.
struct ByteTally<W> {
    sink: W,
    total: u64,
}

impl<W> ByteTally<W> {
    fn new(sink: W) -> Self {
        Self { sink, total: 0 }
    }
}

impl<W: Write> Write for ByteTally<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let accepted = self.sink.write(buf)?;
        self.total += accepted as u64;
        Ok(accepted)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.sink.flush()
    }
}
