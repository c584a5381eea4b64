use serde::{Deserialize, Serialize};

use crate::api_client;

/// One calendar day of aggregated revenue.
///
/// The warehouse serializes numeric columns as strings; parsing happens on
/// access, and a missing or malformed value counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub day: String,
    pub revenue: String,
}

/// Units sold for one distinct product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPoint {
    pub product_name: String,
    pub units: String,
}

/// Orders processed on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPoint {
    pub day: String,
    pub orders: String,
}

impl RevenuePoint {
    pub fn amount(&self) -> f64 {
        parse_amount(&self.revenue)
    }
}

impl ProductPoint {
    pub fn unit_count(&self) -> u64 {
        parse_count(&self.units)
    }
}

impl OrderPoint {
    pub fn count(&self) -> u64 {
        parse_count(&self.orders)
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Per-day revenue for the latest processed dataset, ordered by date.
pub async fn daily_revenue() -> Result<Vec<RevenuePoint>, String> {
    log::trace!("Fetching daily revenue");
    let result = api_client::get::<Vec<RevenuePoint>>("/analytics/daily-revenue").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch daily revenue: {}", e);
    } else {
        log::info!("Successfully fetched daily revenue");
    }

    result
}

/// Top-selling products by units, already ranked by the backend.
pub async fn top_products() -> Result<Vec<ProductPoint>, String> {
    log::trace!("Fetching top products");
    let result = api_client::get::<Vec<ProductPoint>>("/analytics/top-products").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch top products: {}", e);
    } else {
        log::info!("Successfully fetched top products");
    }

    result
}

/// Per-day order counts, ordered by date.
pub async fn order_count() -> Result<Vec<OrderPoint>, String> {
    log::trace!("Fetching order counts");
    let result = api_client::get::<Vec<OrderPoint>>("/analytics/order-count").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch order counts: {}", e);
    } else {
        log::info!("Successfully fetched order counts");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_parses_or_defaults_to_zero() {
        let good = RevenuePoint {
            day: "2024-01-01".to_string(),
            revenue: "123.45".to_string(),
        };
        let bad = RevenuePoint {
            day: "2024-01-02".to_string(),
            revenue: "x".to_string(),
        };
        let empty = RevenuePoint {
            day: "2024-01-03".to_string(),
            revenue: "".to_string(),
        };

        assert_eq!(good.amount(), 123.45);
        assert_eq!(bad.amount(), 0.0);
        assert_eq!(empty.amount(), 0.0);
    }

    #[test]
    fn counts_parse_or_default_to_zero() {
        let product = ProductPoint {
            product_name: "Widget".to_string(),
            units: " 12 ".to_string(),
        };
        let order = OrderPoint {
            day: "2024-01-01".to_string(),
            orders: "not-a-number".to_string(),
        };

        assert_eq!(product.unit_count(), 12);
        assert_eq!(order.count(), 0);
    }

    #[test]
    fn points_decode_from_backend_field_names() {
        let body = r#"[{"productName":"A","units":"5"},{"productName":"B","units":"7"}]"#;

        let points: Vec<ProductPoint> = serde_json::from_str(body).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].product_name, "A");
        assert_eq!(points[1].unit_count(), 7);
    }

    #[test]
    fn day_keyed_points_decode() {
        let body = r#"[{"day":"2024-01-01","revenue":"100"},{"day":"2024-01-02","revenue":"200"}]"#;

        let points: Vec<RevenuePoint> = serde_json::from_str(body).unwrap();

        assert_eq!(points[0].day, "2024-01-01");
        assert_eq!(points[1].amount(), 200.0);
    }
}
