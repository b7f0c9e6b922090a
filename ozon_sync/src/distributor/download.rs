//! Fetching the zipped stock workbook from the distributor's site

use std::io::{Cursor, Read};

use super::{read_workbook, DistributorRecord};
use crate::error::{Result, SyncError};

/// Distributor stock archive URL
pub const STOCK_ARCHIVE_URL: &str = "https://timeworld.ru/upload/files/ostatki.zip";

/// Workbook name inside the archive
pub const STOCK_FILE_NAME: &str = "ostatki.xls";

/// Download the stock archive and parse the workbook inside it.
///
/// Everything stays in memory; nothing is written next to the binary.
pub async fn download_stock(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<DistributorRecord>> {
    log::info!("Downloading distributor stock from {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SyncError::HttpStatus { status, body });
    }

    let archive = response.bytes().await?;
    log::debug!("Stock archive size: {} bytes", archive.len());

    let workbook = extract_workbook(&archive)?;
    let records = read_workbook(workbook)?;
    log::info!("Loaded {} distributor records", records.len());
    Ok(records)
}

/// Pull [`STOCK_FILE_NAME`] out of a zip archive
pub fn extract_workbook(archive: &[u8]) -> Result<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive))?;
    let mut file = archive.by_name(STOCK_FILE_NAME)?;
    let mut workbook = Vec::new();
    file.read_to_end(&mut workbook)?;
    Ok(workbook)
}
