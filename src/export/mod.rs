//! Quote/invoice spreadsheet rendering.
//!
//! Each order becomes one fixed-layout sheet: business letterhead, recipient
//! block, item table padded to a three-row minimum, subtotal / 21% IVA /
//! grand total, then the payment-instructions block. Currency values are
//! rendered as `"12.34€"` strings, not numeric cells.

use std::collections::HashMap;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::models::{order_items, orders};
use crate::pricing;

// Issuer identity and payment details are business constants, not parameters.
const BUSINESS_NAME: &str = "TOT PER FIRA";
const ISSUER_NAME: &str = "Carlos Más Iserte";
const ISSUER_TAX_ID: &str = "53382123-C";
const ISSUER_EMAIL: &str = "totperfira@gmail.com";
const ISSUER_ADDRESS: &str = "Carretera C/ Faro Miguel Ximeno, 8 1-D, Onda, Castellón. 12200";
const ISSUER_PHONE: &str = "618 12 15 97";
const BANK_NAME: &str = "N26";
const ACCOUNT_HOLDER: &str = "Carlos Mas Iserte";
const ACCOUNT_NUMBER: &str = "ES1415632626393267355399";

const IVA_RATE: f64 = 0.21;
const MIN_ITEM_ROWS: usize = 3;
const COLUMN_WIDTHS: [f64; 4] = [40.0, 12.0, 12.0, 12.0];

/// One cell of the fixed-layout sheet. Quantities are real numbers; money is
/// preformatted text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

fn euros(amount: f64) -> String {
    format!("{amount:.2}€")
}

/// Build the full row grid for one order's sheet. Kept separate from the
/// xlsx writing so the layout is unit-testable.
pub fn sheet_rows(
    order: &orders::Model,
    items: &[order_items::Model],
    invoice_number: u32,
) -> Vec<Vec<Cell>> {
    let subtotal = pricing::subtotal(items);
    let iva = subtotal * IVA_RATE;
    let total = subtotal + iva;
    let fecha = order.fecha_creacion.format("%-d/%-m/%Y").to_string();

    let mut rows: Vec<Vec<Cell>> = vec![
        vec![text(BUSINESS_NAME)],
        vec![],
        vec![
            text("Emisor de Factura:"),
            Cell::Empty,
            Cell::Empty,
            text("Factura Emitida a:"),
        ],
        vec![
            text("Nombre:"),
            text(ISSUER_NAME),
            Cell::Empty,
            text("Nombre:"),
            text(&order.nombre_completo),
        ],
        vec![
            text("DNI/CIF:"),
            text(ISSUER_TAX_ID),
            Cell::Empty,
            text("DNI/CIF:"),
            Cell::Empty,
        ],
        vec![
            text("E-mail:"),
            text(ISSUER_EMAIL),
            Cell::Empty,
            text("Dirección:"),
            text(&order.direccion),
        ],
        vec![text("Dirección:"), text(ISSUER_ADDRESS)],
        vec![text("N.º Teléfono:"), text(ISSUER_PHONE)],
        vec![],
        vec![
            text("Fecha:"),
            text(&fecha),
            Cell::Empty,
            text(&format!("N° Factura: {invoice_number:03}")),
        ],
        vec![],
        vec![
            text("Descripción"),
            text("Cantidad"),
            text("Precio"),
            text("Total"),
        ],
    ];

    for item in items {
        let line_total = item.precio.unwrap_or(0.0) * f64::from(item.unidades);
        // Zero behaves like "no price": placeholder, not "0.00€".
        let (precio_cell, total_cell) = match item.precio {
            Some(precio) if precio > 0.0 => (text(&euros(precio)), text(&euros(line_total))),
            _ => (text("-"), text("-")),
        };
        rows.push(vec![
            text(&item.nombre),
            Cell::Number(f64::from(item.unidades)),
            precio_cell,
            total_cell,
        ]);
    }

    // Pad short item tables for visual consistency.
    for _ in items.len()..MIN_ITEM_ROWS {
        rows.push(vec![Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty]);
    }

    rows.push(vec![
        Cell::Empty,
        Cell::Empty,
        text("Total"),
        text(&euros(subtotal)),
    ]);
    rows.push(vec![
        Cell::Empty,
        Cell::Empty,
        text("IVA (21%)"),
        text(&euros(iva)),
    ]);
    rows.push(vec![
        Cell::Empty,
        Cell::Empty,
        text("Total"),
        text(&euros(total)),
    ]);

    rows.push(vec![]);
    rows.push(vec![text("Información de Pago")]);
    rows.push(vec![
        text("Fecha de pago:"),
        Cell::Empty,
        text(&format!("Nombre del Banco: {BANK_NAME}")),
    ]);
    rows.push(vec![
        text("Titular de la cuenta:"),
        Cell::Empty,
        text("Numero de la cuenta:"),
    ]);
    rows.push(vec![text(ACCOUNT_HOLDER), Cell::Empty, text(ACCOUNT_NUMBER)]);

    rows
}

/// Sheet names are capped well under the 31-character xlsx limit and carry a
/// zero-padded sequence number to avoid collisions between customers with
/// the same name.
pub fn sheet_name(nombre_completo: &str, index: usize) -> String {
    let truncated: String = nombre_completo.chars().take(25).collect();
    format!("{}_{:03}", truncated, index + 1)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    order: &orders::Model,
    items: &[order_items::Model],
    invoice_number: u32,
) -> Result<(), XlsxError> {
    for (row_idx, row) in sheet_rows(order, items, invoice_number).iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(value) => {
                    worksheet.write_string(row_idx as u32, col_idx as u16, value)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_idx as u32, col_idx as u16, *value)?;
                }
                Cell::Empty => {}
            }
        }
    }

    for (col_idx, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, *width)?;
    }

    Ok(())
}

/// One-sheet workbook for a single order. The invoice sequence number
/// defaults to 1.
pub fn single_order_workbook(
    order: &orders::Model,
    items: &[order_items::Model],
    invoice_number: Option<u32>,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Presupuesto")?;
    write_sheet(worksheet, order, items, invoice_number.unwrap_or(1))?;
    workbook.save_to_buffer()
}

/// One sheet per order, invoice numbers following the listing order.
pub fn orders_workbook(
    all_orders: &[orders::Model],
    items_by_order_id: &HashMap<String, Vec<order_items::Model>>,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    for (index, order) in all_orders.iter().enumerate() {
        let empty = Vec::new();
        let items = items_by_order_id.get(&order.id).unwrap_or(&empty);
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet_name(&order.nombre_completo, index))?;
        write_sheet(worksheet, order, items, (index + 1) as u32)?;
    }

    workbook.save_to_buffer()
}

/// `Presupuesto_<Nombre_Apellido>_<YYYY-MM-DD>.xlsx`
pub fn single_order_filename(nombre_completo: &str) -> String {
    let name = nombre_completo.split_whitespace().collect::<Vec<_>>().join("_");
    let date = chrono::Utc::now().format("%Y-%m-%d");
    format!("Presupuesto_{name}_{date}.xlsx")
}

/// `Presupuestos_<YYYY-MM-DD>.xlsx`
pub fn all_orders_filename() -> String {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    format!("Presupuestos_{date}.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order_items::Categoria;
    use crate::models::orders::Estado;
    use chrono::Utc;

    fn order() -> orders::Model {
        let now = Utc::now();
        orders::Model {
            id: "aaa111".to_string(),
            nombre_completo: "Ana López".to_string(),
            nombre_penya: None,
            direccion: "Calle Mayor 1, Onda".to_string(),
            correo_electronico: "ana@x.com".to_string(),
            numero_telefono: "600111222".to_string(),
            segundo_numero_telefono: None,
            estado: Estado::Pendiente,
            total_estimado: Some(36.0),
            comentarios: None,
            fecha_creacion: now,
            fecha_actualizacion: now,
        }
    }

    fn item(nombre: &str, unidades: i32, precio: Option<f64>) -> order_items::Model {
        order_items::Model {
            id: format!("item-{nombre}"),
            order_id: "aaa111".to_string(),
            nombre: nombre.to_string(),
            unidades,
            precio,
            categoria: Categoria::Cervezas,
            fecha_creacion: Utc::now(),
        }
    }

    /// Rows below the item header for an n-item sheet: items + padding +
    /// 3 totals rows + 5 payment-block rows (one blank).
    const HEADER_ROWS: usize = 12;

    #[test]
    fn two_items_get_exactly_one_padding_row() {
        let items = vec![item("Cerveza", 24, Some(1.5)), item("Hielo", 2, Some(3.0))];
        let rows = sheet_rows(&order(), &items, 1);

        let padding: Vec<_> = rows[HEADER_ROWS..]
            .iter()
            .take(MIN_ITEM_ROWS)
            .filter(|row| row.iter().all(|cell| *cell == Cell::Empty))
            .collect();
        assert_eq!(padding.len(), 1);
    }

    #[test]
    fn four_items_get_no_padding() {
        let items = vec![
            item("Cerveza", 24, Some(1.5)),
            item("Hielo", 2, Some(3.0)),
            item("Vasos", 100, Some(0.1)),
            item("Altavoz", 1, Some(50.0)),
        ];
        let rows = sheet_rows(&order(), &items, 1);
        let all_empty = |row: &Vec<Cell>| !row.is_empty() && row.iter().all(|c| *c == Cell::Empty);
        assert!(!rows[HEADER_ROWS..HEADER_ROWS + 4].iter().any(all_empty));
    }

    #[test]
    fn totals_satisfy_iva_math() {
        let items = vec![item("Cerveza", 24, Some(1.5)), item("Hielo", 2, Some(3.0))];
        let rows = sheet_rows(&order(), &items, 1);

        // items (2) + padding (1) then subtotal / IVA / total
        let totals_start = HEADER_ROWS + MIN_ITEM_ROWS;
        assert_eq!(rows[totals_start][3], Cell::Text("42.00€".to_string()));
        assert_eq!(rows[totals_start + 1][2], Cell::Text("IVA (21%)".to_string()));
        assert_eq!(rows[totals_start + 1][3], Cell::Text("8.82€".to_string()));
        assert_eq!(rows[totals_start + 2][3], Cell::Text("50.82€".to_string()));
    }

    #[test]
    fn unpriced_items_render_placeholders() {
        let items = vec![item("Congelador", 1, None)];
        let rows = sheet_rows(&order(), &items, 1);
        assert_eq!(rows[HEADER_ROWS][2], Cell::Text("-".to_string()));
        assert_eq!(rows[HEADER_ROWS][3], Cell::Text("-".to_string()));
    }

    #[test]
    fn zero_priced_items_also_render_placeholders() {
        let items = vec![item("Vasos", 100, Some(0.0))];
        let rows = sheet_rows(&order(), &items, 1);
        assert_eq!(rows[HEADER_ROWS][2], Cell::Text("-".to_string()));
        assert_eq!(rows[HEADER_ROWS][3], Cell::Text("-".to_string()));
    }

    #[test]
    fn invoice_number_is_zero_padded() {
        let rows = sheet_rows(&order(), &[item("Cerveza", 1, None)], 7);
        assert_eq!(rows[9][3], Cell::Text("N° Factura: 007".to_string()));
    }

    #[test]
    fn sheet_names_truncate_and_sequence() {
        assert_eq!(sheet_name("Ana López", 0), "Ana López_001");
        let long = "Nombre Larguísimo De Verdad Que No Cabe";
        let name = sheet_name(long, 11);
        assert!(name.ends_with("_012"));
        assert!(name.chars().count() <= 29);
    }

    #[test]
    fn workbook_builds_for_single_order() {
        let items = vec![item("Cerveza", 24, Some(1.5))];
        let bytes = single_order_workbook(&order(), &items, None).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn multi_order_workbook_handles_missing_items() {
        let items_by_order_id = HashMap::new();
        let bytes = orders_workbook(&[order()], &items_by_order_id).unwrap();
        assert!(!bytes.is_empty());
    }
}
