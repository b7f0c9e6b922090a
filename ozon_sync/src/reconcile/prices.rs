//! Prices for offers present in the stock file

use std::collections::HashSet;

use crate::distributor::DistributorRecord;
use crate::error::Result;
use crate::ozon::PriceUpdate;
use crate::price::normalize_price;

/// Build a price update for every record whose code is a listed offer.
///
/// Records for unlisted codes are skipped. Output follows file order;
/// a code repeated in the file yields one update per occurrence.
pub fn create_prices(
    records: &[DistributorRecord],
    offer_ids: &[String],
) -> Result<Vec<PriceUpdate>> {
    let listed: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();

    let prices = records
        .iter()
        .filter(|record| listed.contains(record.code.as_str()))
        .map(|record| {
            let price = normalize_price(record.price_text()?);
            Ok(PriceUpdate::new(record.code.clone(), price))
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("Prepared {} price updates", prices.len());
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributor::CellValue;
    use crate::error::SyncError;

    fn record(code: &str, price: &str) -> DistributorRecord {
        DistributorRecord::new(code, "5", CellValue::Text(price.to_string()))
    }

    #[test]
    fn listed_offer_gets_normalized_price() {
        let prices = create_prices(&[record("A", "6'300.50 руб.")], &["A".to_string()]).unwrap();
        assert_eq!(
            prices,
            vec![PriceUpdate {
                auto_action_enabled: "UNKNOWN".to_string(),
                currency_code: "RUB".to_string(),
                offer_id: "A".to_string(),
                old_price: "0".to_string(),
                price: "6300".to_string(),
            }]
        );
    }

    #[test]
    fn unlisted_codes_are_skipped() {
        let records = [
            record("X", "100.00 руб."),
            record("A", "5'990.00 руб."),
            record("Y", "200.00 руб."),
        ];
        let prices = create_prices(&records, &["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(prices, vec![PriceUpdate::new("A", "5990")]);
    }

    #[test]
    fn file_order_is_kept() {
        let records = [record("B", "2.00"), record("A", "1.00")];
        let prices = create_prices(&records, &["A".to_string(), "B".to_string()]).unwrap();
        let order: Vec<&str> = prices.iter().map(|p| p.offer_id.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn numeric_price_cell_is_type_mismatch() {
        let records = [DistributorRecord::new("A", "5", CellValue::Float(6300.5))];
        let result = create_prices(&records, &["A".to_string()]);
        assert!(matches!(result, Err(SyncError::PriceTypeMismatch { .. })));
    }

    #[test]
    fn numeric_price_for_unlisted_code_is_not_inspected() {
        let records = [DistributorRecord::new("X", "5", CellValue::Int(10))];
        assert!(create_prices(&records, &["A".to_string()]).unwrap().is_empty());
    }
}
