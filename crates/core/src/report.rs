//! Monthly yield report aggregation.
//!
//! Groups delivered shipment quantities by calendar month and fruit name
//! into the structure the console's chart and table views consume. Buckets
//! are month-of-year only -- deliveries from different years land in the
//! same twelve buckets.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

use crate::shipping::is_delivered;
use crate::types::DbId;

/// Fixed English month names, in calendar order. Every report contains all
/// twelve keys so the table view can render a full 12-row grid.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month-of-year (1-12) to English month name.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// A delivery row projected to the fields the aggregator reads.
#[derive(Debug, Clone)]
pub struct DeliveryFact {
    pub fruit_id: Option<DbId>,
    pub quantity: i32,
    pub delivery_date: NaiveDate,
    pub status: String,
}

/// Catalog entry echoed back in the report payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitSummary {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

/// `<MonthName> -> <fruit name lowercased> -> total quantity`.
///
/// `IndexMap` keeps months in calendar order when serialized.
pub type MonthBuckets = IndexMap<String, IndexMap<String, i64>>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_deliveries: i64,
    pub delivered_count: i64,
    pub total_fruits: i64,
    pub report_year: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub monthly_data: MonthBuckets,
    pub summary: ReportSummary,
    pub fruits: Vec<FruitSummary>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Build the monthly yield report from all deliveries and the fruit catalog.
///
/// Only `Delivered` records contribute quantity. A delivery whose fruit id
/// resolves to no catalog entry is skipped silently: it still counts in
/// `total_deliveries` but adds nothing to any bucket, matching the totals
/// the console expects.
pub fn build_monthly_report(
    deliveries: &[DeliveryFact],
    fruits: &[FruitSummary],
    report_year: i32,
) -> MonthlyReport {
    let fruit_names: HashMap<DbId, &str> =
        fruits.iter().map(|f| (f.id, f.name.as_str())).collect();

    let mut monthly_data: MonthBuckets = MONTH_NAMES
        .iter()
        .map(|m| (m.to_string(), IndexMap::new()))
        .collect();

    let mut delivered_count = 0i64;

    for delivery in deliveries {
        if !is_delivered(&delivery.status) {
            continue;
        }
        delivered_count += 1;

        let Some(name) = delivery.fruit_id.and_then(|id| fruit_names.get(&id)) else {
            continue;
        };

        let month = month_name(delivery.delivery_date.month());
        let bucket = monthly_data.entry(month.to_string()).or_default();
        *bucket.entry(name.to_lowercase()).or_insert(0) += i64::from(delivery.quantity);
    }

    MonthlyReport {
        monthly_data,
        summary: ReportSummary {
            total_deliveries: deliveries.len() as i64,
            delivered_count,
            total_fruits: fruits.len() as i64,
            report_year,
        },
        fruits: fruits.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipping::{STATUS_CANCELLED, STATUS_DELIVERED, STATUS_IN_TRANSIT, STATUS_PENDING};

    fn fruit(id: DbId, name: &str) -> FruitSummary {
        FruitSummary {
            id,
            name: name.to_string(),
            price: 2.5,
            image_url: None,
        }
    }

    fn delivery(fruit_id: Option<DbId>, quantity: i32, date: &str, status: &str) -> DeliveryFact {
        DeliveryFact {
            fruit_id,
            quantity,
            delivery_date: date.parse().expect("valid test date"),
            status: status.to_string(),
        }
    }

    #[test]
    fn delivered_quantity_lands_in_its_month() {
        let fruits = vec![fruit(1, "Apple")];
        let deliveries = vec![delivery(Some(1), 5, "2024-03-10", STATUS_DELIVERED)];

        let report = build_monthly_report(&deliveries, &fruits, 2024);

        assert_eq!(report.monthly_data["March"]["apple"], 5);
        assert_eq!(report.summary.delivered_count, 1);
        assert_eq!(report.summary.total_deliveries, 1);
    }

    #[test]
    fn non_delivered_statuses_contribute_nothing() {
        let fruits = vec![fruit(1, "Apple")];
        let deliveries = vec![
            delivery(Some(1), 10, "2024-01-05", STATUS_PENDING),
            delivery(Some(1), 10, "2024-02-05", STATUS_IN_TRANSIT),
            delivery(Some(1), 10, "2024-03-05", STATUS_CANCELLED),
        ];

        let report = build_monthly_report(&deliveries, &fruits, 2024);

        for month in MONTH_NAMES {
            assert!(
                report.monthly_data[month].is_empty(),
                "{month} should be empty"
            );
        }
        assert_eq!(report.summary.total_deliveries, 3);
        assert_eq!(report.summary.delivered_count, 0);
    }

    #[test]
    fn all_twelve_months_present_with_no_deliveries() {
        let report = build_monthly_report(&[], &[fruit(1, "Apple")], 2024);

        assert_eq!(report.monthly_data.len(), 12);
        for month in MONTH_NAMES {
            assert!(report.monthly_data.contains_key(month));
            assert!(report.monthly_data[month].is_empty());
        }
    }

    #[test]
    fn months_serialize_in_calendar_order() {
        let report = build_monthly_report(&[], &[], 2024);
        let keys: Vec<&String> = report.monthly_data.keys().collect();
        assert_eq!(keys.first().map(|s| s.as_str()), Some("January"));
        assert_eq!(keys.last().map(|s| s.as_str()), Some("December"));
    }

    #[test]
    fn dangling_fruit_id_is_skipped_silently() {
        let fruits = vec![fruit(1, "Apple")];
        let deliveries = vec![
            delivery(Some(1), 5, "2024-03-10", STATUS_DELIVERED),
            delivery(Some(999), 7, "2024-03-11", STATUS_DELIVERED),
            delivery(None, 3, "2024-03-12", STATUS_DELIVERED),
        ];

        let report = build_monthly_report(&deliveries, &fruits, 2024);

        // The dangling rows count as deliveries but add no quantity.
        assert_eq!(report.summary.total_deliveries, 3);
        assert_eq!(report.summary.delivered_count, 3);
        assert_eq!(report.monthly_data["March"].len(), 1);
        assert_eq!(report.monthly_data["March"]["apple"], 5);
    }

    #[test]
    fn multi_year_data_collapses_into_the_same_buckets() {
        let fruits = vec![fruit(1, "Apple")];
        let deliveries = vec![
            delivery(Some(1), 5, "2023-03-10", STATUS_DELIVERED),
            delivery(Some(1), 4, "2024-03-20", STATUS_DELIVERED),
        ];

        let report = build_monthly_report(&deliveries, &fruits, 2024);

        assert_eq!(report.monthly_data["March"]["apple"], 9);
    }

    #[test]
    fn fruit_names_are_lowercased_and_accumulated() {
        let fruits = vec![fruit(1, "Apple"), fruit(2, "Dragon Fruit")];
        let deliveries = vec![
            delivery(Some(1), 2, "2024-07-01", STATUS_DELIVERED),
            delivery(Some(1), 3, "2024-07-15", STATUS_DELIVERED),
            delivery(Some(2), 8, "2024-07-20", STATUS_DELIVERED),
        ];

        let report = build_monthly_report(&deliveries, &fruits, 2024);

        assert_eq!(report.monthly_data["July"]["apple"], 5);
        assert_eq!(report.monthly_data["July"]["dragon fruit"], 8);
    }

    #[test]
    fn summary_echoes_catalog_size_and_year() {
        let fruits = vec![fruit(1, "Apple"), fruit(2, "Mango")];
        let report = build_monthly_report(&[], &fruits, 2026);

        assert_eq!(report.summary.total_fruits, 2);
        assert_eq!(report.summary.report_year, 2026);
        assert_eq!(report.fruits.len(), 2);
    }
}
