use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::allocation::model::PriceRecord;
use crate::errors::{AllocationError, RecordKind};

/// SKU price lookup over validity intervals.
#[derive(Debug, Default)]
pub struct PriceResolver {
    by_sku: HashMap<String, Vec<PriceRecord>>,
}

impl PriceResolver {
    /// Indexes the price list. Records with a non-finite or negative
    /// `unit_price`, or whose `price_end` precedes `price_start`, are handed
    /// to `on_invalid`; returning an error from it aborts construction,
    /// returning `Ok` drops the record.
    pub fn build<F>(records: &[PriceRecord], mut on_invalid: F) -> Result<Self, AllocationError>
    where
        F: FnMut(AllocationError) -> Result<(), AllocationError>,
    {
        let mut by_sku: HashMap<String, Vec<PriceRecord>> = HashMap::new();

        for record in records {
            if !record.unit_price.is_finite() || record.unit_price < 0.0 {
                on_invalid(AllocationError::InvalidPrice {
                    key: record.record_key(),
                    reason: format!("unit price {} is not a finite non-negative number", record.unit_price),
                })?;
                continue;
            }
            if let Some(end) = record.price_end {
                if end < record.price_start {
                    on_invalid(AllocationError::InvalidInterval {
                        kind: RecordKind::PriceRecord,
                        key: record.record_key(),
                        start: record.price_start,
                        end,
                    })?;
                    continue;
                }
            }
            by_sku
                .entry(record.sku_name.clone())
                .or_default()
                .push(record.clone());
        }

        // Latest start first so overlapping price lists resolve to the newest entry.
        for prices in by_sku.values_mut() {
            prices.sort_by(|a, b| b.price_start.cmp(&a.price_start));
        }

        Ok(Self { by_sku })
    }

    /// Unit price effective on `date`, or `None` when no record covers it.
    pub fn resolve(&self, sku_name: &str, date: NaiveDate) -> Option<f64> {
        self.by_sku
            .get(sku_name)?
            .iter()
            .find(|p| p.covers(date))
            .map(|p| p.unit_price)
    }

    pub fn sku_count(&self) -> usize {
        self.by_sku.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn price(sku: &str, unit_price: f64, start: (i32, u32, u32), end: Option<(i32, u32, u32)>) -> PriceRecord {
        PriceRecord {
            sku_name: sku.into(),
            unit_price,
            price_start: Utc.with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0).unwrap(),
            price_end: end.map(|e| Utc.with_ymd_and_hms(e.0, e.1, e.2, 0, 0, 0).unwrap()),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolves_price_by_validity_interval() {
        let prices = vec![
            price("JOBS", 0.10, (2024, 1, 1), Some((2024, 2, 1))),
            price("JOBS", 0.12, (2024, 2, 1), None),
            price("SQL", 0.22, (2024, 1, 1), None),
        ];
        let resolver = PriceResolver::build(&prices, |e| Err(e)).unwrap();

        assert_eq!(resolver.resolve("JOBS", day(2024, 1, 15)), Some(0.10));
        assert_eq!(resolver.resolve("JOBS", day(2024, 2, 1)), Some(0.12));
        assert_eq!(resolver.resolve("SQL", day(2024, 3, 1)), Some(0.22));
        assert_eq!(resolver.sku_count(), 2);
    }

    #[test]
    fn missing_sku_or_uncovered_date_is_none() {
        let prices = vec![price("JOBS", 0.10, (2024, 1, 1), Some((2024, 2, 1)))];
        let resolver = PriceResolver::build(&prices, |e| Err(e)).unwrap();

        assert_eq!(resolver.resolve("GPU", day(2024, 1, 15)), None);
        assert_eq!(resolver.resolve("JOBS", day(2023, 12, 31)), None);
        assert_eq!(resolver.resolve("JOBS", day(2024, 2, 1)), None);
    }

    #[test]
    fn newest_overlapping_price_wins() {
        let prices = vec![
            price("JOBS", 0.10, (2024, 1, 1), None),
            price("JOBS", 0.15, (2024, 3, 1), None),
        ];
        let resolver = PriceResolver::build(&prices, |e| Err(e)).unwrap();
        assert_eq!(resolver.resolve("JOBS", day(2024, 2, 1)), Some(0.10));
        assert_eq!(resolver.resolve("JOBS", day(2024, 4, 1)), Some(0.15));
    }

    #[test]
    fn reversed_price_interval_is_rejected_or_dropped() {
        let prices = vec![price("JOBS", 0.10, (2024, 2, 1), Some((2024, 1, 1)))];

        let err = PriceResolver::build(&prices, |e| Err(e)).unwrap_err();
        assert_eq!(err.kind(), RecordKind::PriceRecord);

        let mut dropped = 0;
        let resolver = PriceResolver::build(&prices, |_| {
            dropped += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(resolver.sku_count(), 0);
    }

    #[test]
    fn nan_unit_price_is_rejected_or_dropped() {
        let prices = vec![
            price("BAD", f64::NAN, (2024, 1, 1), None),
            price("JOBS", 0.10, (2024, 1, 1), None),
        ];

        let err = PriceResolver::build(&prices, |e| Err(e)).unwrap_err();
        assert!(matches!(err, AllocationError::InvalidPrice { .. }));
        assert_eq!(err.kind(), RecordKind::PriceRecord);

        let resolver = PriceResolver::build(&prices, |_| Ok(())).unwrap();
        assert_eq!(resolver.resolve("BAD", day(2024, 1, 15)), None);
        assert_eq!(resolver.resolve("JOBS", day(2024, 1, 15)), Some(0.10));
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let prices = vec![price("JOBS", -2.0, (2024, 1, 1), None)];

        let err = PriceResolver::build(&prices, |e| Err(e)).unwrap_err();
        assert!(err.to_string().contains("unit price -2"));

        let resolver = PriceResolver::build(&prices, |_| Ok(())).unwrap();
        assert_eq!(resolver.sku_count(), 0);
    }
}
