//! Distributor stock file: record model, download and parsing

mod download;
mod sheet;

pub use download::{download_stock, extract_workbook, STOCK_ARCHIVE_URL, STOCK_FILE_NAME};
pub use sheet::{
    load_stock_file, read_csv, read_workbook, records_from_rows, CODE_COLUMN, HEADER_ROW,
    PRICE_COLUMN, QUANTITY_COLUMN,
};

use crate::error::{Result, SyncError};

/// A single spreadsheet cell, reduced to the shapes the stock file uses
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Empty,
}

impl CellValue {
    /// Stringify the cell the way it is compared against offer identifiers.
    ///
    /// Whole floats lose their fractional part, so a numeric code cell
    /// holding `12345.0` matches the offer `"12345"`.
    pub fn as_key(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (*f as i64).to_string()
            }
            CellValue::Float(f) => f.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Int(_) | CellValue::Float(_) => "number",
            CellValue::Empty => "empty",
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(cell: &calamine::Data) -> Self {
        use calamine::Data;
        match cell {
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Empty => CellValue::Empty,
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// One row of the distributor's stock file
#[derive(Debug, Clone, PartialEq)]
pub struct DistributorRecord {
    /// Article code, matches an Ozon offer identifier
    pub code: String,
    /// Raw quantity: a digit string, `">10"`, or the `"1"` sentinel
    pub quantity: String,
    /// Raw price cell, e.g. `"5'990.00 руб."`
    pub price: CellValue,
}

impl DistributorRecord {
    pub fn new(code: impl Into<String>, quantity: impl Into<String>, price: CellValue) -> Self {
        Self {
            code: code.into(),
            quantity: quantity.into(),
            price,
        }
    }

    /// Price cell as text. An empty cell reads as `""`.
    ///
    /// Numeric cells are rejected with [`SyncError::PriceTypeMismatch`]
    /// rather than converted, since the price format carries its own
    /// separators and currency suffix.
    pub fn price_text(&self) -> Result<&str> {
        match &self.price {
            CellValue::Text(s) => Ok(s),
            CellValue::Empty => Ok(""),
            other => Err(SyncError::PriceTypeMismatch {
                offer_id: self.code.clone(),
                found: other.kind(),
            }),
        }
    }
}
