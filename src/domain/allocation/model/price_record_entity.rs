use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Effective unit price of a SKU over `[price_start, price_end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub sku_name: String,
    /// USD per consumption unit.
    pub unit_price: f64,
    pub price_start: DateTime<Utc>,
    /// `None` means the price is still current.
    #[serde(default)]
    pub price_end: Option<DateTime<Utc>>,
}

impl PriceRecord {
    /// Whether the observation day (taken at 00:00 UTC) falls in this price's validity.
    pub fn covers(&self, date: NaiveDate) -> bool {
        let at = date.and_time(chrono::NaiveTime::MIN).and_utc();
        self.price_start <= at && self.price_end.map_or(true, |end| at < end)
    }

    pub fn record_key(&self) -> String {
        format!("{}@{}", self.sku_name, self.price_start.to_rfc3339())
    }
}
