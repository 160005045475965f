use std::fmt::Write;

use crate::view::{OrderRow, OrderTable};

/// Full admin page. Each order gets its own table so its product cards sit
/// directly under its row.
pub fn page(table: &OrderTable) -> String {
    let mut out = String::with_capacity(1024 + table.rows.len() * 512);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>Dashboard - {}</title>", escape(&table.title));
    out.push_str("</head>\n<body>\n<div class=\"orders\">\n");
    let _ = writeln!(out, "<h1 class=\"text-center\">{}</h1>", escape(&table.title));

    if table.rows.is_empty() {
        out.push_str("<div class=\"border shadow\">\n<table class=\"table\">\n");
        header_row(&mut out, &table.headers);
        out.push_str("<tbody></tbody>\n</table>\n</div>\n");
    }

    for row in &table.rows {
        out.push_str("<div class=\"border shadow\">\n<table class=\"table\">\n");
        header_row(&mut out, &table.headers);
        data_row(&mut out, row);
        out.push_str("</table>\n<div class=\"container\">\n");
        for product in &row.products {
            let _ = write!(
                out,
                "<div class=\"row mb-2 p-3 card flex-row\" data-product-id=\"{}\">\n\
                 <p>{}</p>\n<p>{}</p>\n<p>{}</p>\n</div>\n",
                escape(&product.id),
                escape(&product.name),
                escape(&product.description),
                escape(&product.price_label),
            );
        }
        out.push_str("</div>\n</div>\n");
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn header_row(out: &mut String, headers: &[String]) {
    out.push_str("<thead>\n<tr>\n");
    for header in headers {
        let _ = writeln!(out, "<th scope=\"col\">{}</th>", escape(header));
    }
    out.push_str("</tr>\n</thead>\n");
}

fn data_row(out: &mut String, row: &OrderRow) {
    out.push_str("<tbody>\n<tr>\n");
    let cells = [
        row.number.to_string(),
        row.status.clone(),
        row.buyer.clone(),
        row.date.clone(),
        row.payment.clone(),
        row.quantity.to_string(),
    ];
    for cell in &cells {
        let _ = writeln!(out, "<td>{}</td>", escape(cell));
    }
    out.push_str("</tr>\n</tbody>\n");
}

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{HEADERS, ProductCard, TITLE};

    fn table(rows: Vec<OrderRow>) -> OrderTable {
        OrderTable {
            title: TITLE.into(),
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn empty_table_keeps_headers() {
        let html = page(&table(Vec::new()));
        assert!(html.contains("<h1 class=\"text-center\">All Orders</h1>"));
        for header in HEADERS {
            assert!(html.contains(&format!("<th scope=\"col\">{header}</th>")));
        }
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn cells_and_cards_are_escaped() {
        let row = OrderRow {
            number: 1,
            status: "Not Process".into(),
            buyer: "<script>".into(),
            date: "an hour ago".into(),
            payment: "Failure".into(),
            quantity: 1,
            products: vec![ProductCard {
                id: "1".into(),
                name: "Tom & Jerry".into(),
                description: "Classic".into(),
                price_label: "Price : 9.99".into(),
            }],
        };
        let html = page(&table(vec![row]));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td>Failure</td>"));
        assert!(html.contains("<p>Tom &amp; Jerry</p>"));
        assert!(html.contains("<p>Price : 9.99</p>"));
    }
}
