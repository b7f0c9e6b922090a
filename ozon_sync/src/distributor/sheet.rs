//! Parsing the distributor stock workbook (or a CSV export of it)

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Reader};
use serde::Deserialize;

use super::{CellValue, DistributorRecord};
use crate::error::{Result, SyncError};

/// Zero-based row holding the column headers; the rows above are a letterhead
pub const HEADER_ROW: usize = 17;

pub const CODE_COLUMN: &str = "Код";
pub const QUANTITY_COLUMN: &str = "Количество";
pub const PRICE_COLUMN: &str = "Цена";

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Read the first worksheet of an `.xls`/`.xlsx` workbook held in memory
pub fn read_workbook(bytes: Vec<u8>) -> Result<Vec<DistributorRecord>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SyncError::EmptyWorkbook)??;

    // calamine trims leading empty rows; HEADER_ROW counts from the sheet top
    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    let header_row = HEADER_ROW
        .checked_sub(first_row)
        .ok_or(SyncError::HeaderRowMissing(HEADER_ROW))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect::<Vec<_>>());
    records_from_rows(rows, header_row)
}

/// Build records from raw rows, using `rows[header_row]` as the header.
///
/// Columns are located by name. Rows with an empty code are skipped; they
/// are spacers and totals in the distributor's layout.
pub fn records_from_rows<I, R>(rows: I, header_row: usize) -> Result<Vec<DistributorRecord>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[CellValue]>,
{
    let mut rows = rows.into_iter().skip(header_row);
    let header = rows.next().ok_or(SyncError::HeaderRowMissing(header_row))?;
    let header = header.as_ref();

    let code_col = column_index(header, CODE_COLUMN)?;
    let quantity_col = column_index(header, QUANTITY_COLUMN)?;
    let price_col = column_index(header, PRICE_COLUMN)?;

    let mut records = Vec::new();
    for row in rows {
        let row = row.as_ref();
        let code = cell(row, code_col).as_key();
        if code.trim().is_empty() {
            continue;
        }
        records.push(DistributorRecord {
            code,
            quantity: cell(row, quantity_col).as_key(),
            price: cell(row, price_col).clone(),
        });
    }

    log::debug!("Parsed {} distributor records", records.len());
    Ok(records)
}

fn column_index(header: &[CellValue], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell.as_key().trim() == name)
        .ok_or_else(|| SyncError::MissingColumn(name.to_string()))
}

fn cell(row: &[CellValue], index: usize) -> &CellValue {
    row.get(index).unwrap_or(&EMPTY_CELL)
}

/// CSV export row: `code,quantity,price`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    code: String,
    quantity: String,
    price: String,
}

/// Read a comma-separated stock export with `code`, `quantity` and `price` headers
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<DistributorRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    for name in ["code", "quantity", "price"] {
        if !headers.iter().any(|h| h == name) {
            return Err(SyncError::MissingColumn(name.to_string()));
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRecord = result?;
        if row.code.trim().is_empty() {
            continue;
        }
        let price = if row.price.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(row.price)
        };
        records.push(DistributorRecord {
            code: row.code,
            quantity: row.quantity,
            price,
        });
    }

    Ok(records)
}

/// Load a local stock file, picking the parser by extension
pub fn load_stock_file<P: AsRef<Path>>(path: P) -> Result<Vec<DistributorRecord>> {
    let path = path.as_ref();
    log::info!("Loading distributor stock from {}", path.display());

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_csv(path)
    } else {
        read_workbook(std::fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn header() -> Vec<CellValue> {
        vec![
            text("№"),
            text(CODE_COLUMN),
            text("Наименование"),
            text(QUANTITY_COLUMN),
            text(PRICE_COLUMN),
        ]
    }

    #[test]
    fn parses_rows_after_header() {
        let rows = vec![
            vec![text("Остатки на складе")],
            vec![],
            header(),
            vec![
                CellValue::Int(1),
                text("GA-100-1A1"),
                text("Casio G-Shock"),
                text(">10"),
                text("13'899.99 руб."),
            ],
            vec![
                CellValue::Int(2),
                CellValue::Float(71234.0),
                text("Casio Edifice"),
                CellValue::Float(3.0),
                text("5'990.00 руб."),
            ],
        ];

        let records = records_from_rows(rows, 2).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "GA-100-1A1");
        assert_eq!(records[0].quantity, ">10");
        assert_eq!(records[0].price, text("13'899.99 руб."));
        assert_eq!(records[1].code, "71234");
        assert_eq!(records[1].quantity, "3");
    }

    #[test]
    fn skips_rows_without_code_and_pads_short_rows() {
        let rows = vec![
            header(),
            vec![CellValue::Empty, CellValue::Empty, text("Итого")],
            vec![CellValue::Int(1), text("A")],
        ];

        let records = records_from_rows(rows, 0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "A");
        assert_eq!(records[0].quantity, "");
        assert_eq!(records[0].price, CellValue::Empty);
    }

    #[test]
    fn missing_column_fails_fast() {
        let rows = vec![vec![text(CODE_COLUMN), text(QUANTITY_COLUMN)]];
        match records_from_rows(rows, 0).unwrap_err() {
            SyncError::MissingColumn(name) => assert_eq!(name, PRICE_COLUMN),
            other => panic!("Expected MissingColumn, got: {other:?}"),
        }
    }

    #[test]
    fn missing_header_row() {
        let rows: Vec<Vec<CellValue>> = vec![vec![], vec![]];
        assert!(matches!(
            records_from_rows(rows, HEADER_ROW),
            Err(SyncError::HeaderRowMissing(HEADER_ROW))
        ));
    }

    #[test]
    fn reads_csv_export() {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            tmp,
            "code,quantity,price\nA,5,\"6'300.50 руб.\"\nB,>10,\n,1,100\n"
        )
        .unwrap();

        let records = load_stock_file(tmp.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "A");
        assert_eq!(records[0].price, text("6'300.50 руб."));
        assert_eq!(records[1].quantity, ">10");
        assert_eq!(records[1].price, CellValue::Empty);
    }

    #[test]
    fn csv_without_price_column_is_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "code,quantity\nA,5\n").unwrap();

        match read_csv(tmp.path()).unwrap_err() {
            SyncError::MissingColumn(name) => assert_eq!(name, "price"),
            other => panic!("Expected MissingColumn, got: {other:?}"),
        }
    }

    /// Cell written into a test workbook
    enum XlsxCell<'a> {
        Text(&'a str),
        Number(f64),
    }

    /// Builds an .xlsx with the given (row, col, cell) entries on its first sheet.
    fn xlsx_with(cells: &[(u32, u16, XlsxCell<'_>)]) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            for (row, col, cell) in cells {
                match cell {
                    XlsxCell::Text(s) => worksheet.write_string(*row, *col, *s).unwrap(),
                    XlsxCell::Number(n) => worksheet.write_number(*row, *col, *n).unwrap(),
                };
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    /// Distributor layout: header on row 17, two goods rows and a totals row.
    fn stock_sheet_body() -> Vec<(u32, u16, XlsxCell<'static>)> {
        use XlsxCell::{Number, Text};
        vec![
            (17, 0, Text("№")),
            (17, 1, Text(CODE_COLUMN)),
            (17, 2, Text(QUANTITY_COLUMN)),
            (17, 3, Text(PRICE_COLUMN)),
            (18, 0, Number(1.0)),
            (18, 1, Number(71234.0)),
            (18, 2, Text(">10")),
            (18, 3, Text("13'899.99 руб.")),
            (19, 0, Number(2.0)),
            (19, 1, Text("A-1")),
            (19, 2, Number(1.0)),
            (19, 3, Text("5'990.00 руб.")),
            (20, 2, Text("Итого")),
        ]
    }

    fn assert_stock_sheet_records(records: &[DistributorRecord]) {
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "71234");
        assert_eq!(records[0].quantity, ">10");
        assert_eq!(records[0].price, text("13'899.99 руб."));
        assert_eq!(records[1].code, "A-1");
        assert_eq!(records[1].quantity, "1");
        assert_eq!(records[1].price, text("5'990.00 руб."));
    }

    #[test]
    fn workbook_header_is_read_from_sheet_row_17() {
        let mut cells: Vec<(u32, u16, XlsxCell<'_>)> = vec![
            (0, 0, XlsxCell::Text("ООО «Тайм Ворлд»")),
            (3, 0, XlsxCell::Text("Остатки на складе")),
        ];
        cells.extend(stock_sheet_body());

        let records = read_workbook(xlsx_with(&cells)).unwrap();
        assert_stock_sheet_records(&records);
    }

    #[test]
    fn workbook_with_blank_leading_rows_keeps_header_position() {
        // First non-empty row is 3, so calamine's range does not start at the sheet top
        let mut cells: Vec<(u32, u16, XlsxCell<'_>)> = vec![
            (3, 0, XlsxCell::Text("Остатки на складе")),
            (16, 0, XlsxCell::Text("Цены указаны в рублях")),
        ];
        cells.extend(stock_sheet_body());

        let records = read_workbook(xlsx_with(&cells)).unwrap();
        assert_stock_sheet_records(&records);
    }

    #[test]
    fn workbook_without_letterhead_starts_at_header() {
        let records = read_workbook(xlsx_with(&stock_sheet_body())).unwrap();
        assert_stock_sheet_records(&records);
    }

    #[test]
    fn workbook_starting_below_header_row() {
        let cells: Vec<(u32, u16, XlsxCell<'_>)> = vec![(20, 0, XlsxCell::Text(CODE_COLUMN))];
        assert!(matches!(
            read_workbook(xlsx_with(&cells)),
            Err(SyncError::HeaderRowMissing(HEADER_ROW))
        ));
    }

    #[test]
    fn loads_xlsx_stock_file_from_disk() {
        let mut tmp = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        tmp.write_all(&xlsx_with(&stock_sheet_body())).unwrap();

        let records = load_stock_file(tmp.path()).unwrap();
        assert_stock_sheet_records(&records);
    }

    #[test]
    fn unreadable_workbook_is_spreadsheet_error() {
        let result = read_workbook(b"definitely not a workbook".to_vec());
        assert!(matches!(result, Err(SyncError::Spreadsheet(_))));
    }
}
