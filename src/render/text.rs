use crate::view::OrderTable;

/// Plain-text rendering for terminals: one aligned line per order, its
/// products indented underneath.
pub fn table(table: &OrderTable) -> String {
    let cells: Vec<[String; 6]> = table
        .rows
        .iter()
        .map(|row| {
            [
                row.number.to_string(),
                row.status.clone(),
                row.buyer.clone(),
                row.date.clone(),
                row.payment.clone(),
                row.quantity.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 6];
    for (i, header) in table.headers.iter().take(6).enumerate() {
        widths[i] = header.chars().count();
    }
    for line in &cells {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&table.title);
    out.push('\n');
    out.push_str(&join_padded(table.headers.iter().map(String::as_str), &widths));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for (line, row) in cells.iter().zip(&table.rows) {
        out.push_str(&join_padded(line.iter().map(String::as_str), &widths));
        out.push('\n');
        for product in &row.products {
            out.push_str(&format!(
                "    {} | {} | {}\n",
                product.name, product.description, product.price_label
            ));
        }
    }
    out
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}
