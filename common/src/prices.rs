//! Price ledger operations
//!
//! The ledger is an ordered list of one record per bottle name. Committing a
//! price for a name that already has a record replaces it; everything else is
//! left untouched.

use crate::types::PriceRecord;

/// Parses user price input. Only strictly positive finite numbers are
/// accepted; anything else means "no draft".
pub fn parse_price(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Inserts or replaces the record for `name`. A replaced record moves to the
/// end of the list; other records keep their position and timestamp.
pub fn upsert_price(records: &mut Vec<PriceRecord>, name: &str, price: f64, timestamp: f64) {
    records.retain(|record| record.name != name);
    records.push(PriceRecord {
        name: name.to_string(),
        price,
        timestamp,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("49.99"), Some(49.99));
        assert_eq!(parse_price(" 45.00 "), Some(45.0));
        assert_eq!(parse_price("1"), Some(1.0));
    }

    #[test]
    fn test_parse_price_rejects_zero_and_negative() {
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("-49.99"), None);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_upsert_inserts_new_record() {
        let mut records = Vec::new();
        upsert_price(&mut records, "Buffalo Trace", 49.99, 1000.0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Buffalo Trace");
        assert_eq!(records[0].price, 49.99);
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut records = Vec::new();
        upsert_price(&mut records, "Buffalo Trace", 49.99, 1000.0);
        upsert_price(&mut records, "Buffalo Trace", 45.00, 2000.0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, 45.00);
        assert_eq!(records[0].timestamp, 2000.0);
    }

    #[test]
    fn test_upsert_leaves_other_records_untouched() {
        let mut records = Vec::new();
        upsert_price(&mut records, "Ardbeg 10", 54.99, 500.0);
        upsert_price(&mut records, "Buffalo Trace", 49.99, 1000.0);
        upsert_price(&mut records, "Buffalo Trace", 45.00, 2000.0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ardbeg 10");
        assert_eq!(records[0].timestamp, 500.0);
        // replaced record moves to the end
        assert_eq!(records[1].name, "Buffalo Trace");
        assert_eq!(records[1].price, 45.00);
    }
}
