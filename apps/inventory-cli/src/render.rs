//! Product table output.

use std::io::{self, Write};

use inventory_core::Product;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

/// Renders products as a table, one row per product.
pub fn products_table(products: &[Product]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Quantity", "Price"]);

    for product in products {
        builder.push_record([
            product.id.clone(),
            product.name.clone(),
            product.quantity.to_string(),
            product.display_price(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());
    table.to_string()
}

pub fn write_products(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found");
    }
    writeln!(out, "{}", products_table(products))
}
