// src/export/model.rs

use crate::models::OrderRow;
use serde::Serialize;

/// Named-column record written to every export format.
/// Field order is the column order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderRecord {
    #[serde(rename = "Order Number")]
    pub order_number: String,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Meal Type")]
    pub meal_type: String,
    #[serde(rename = "Food Preference")]
    pub food_preference: String,
    #[serde(rename = "Meal Size")]
    pub meal_size: String,
    #[serde(rename = "Plan Type")]
    pub plan_type: String,
    #[serde(rename = "Payment Status")]
    pub payment_status: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&OrderRow> for OrderRecord {
    fn from(row: &OrderRow) -> Self {
        Self {
            order_number: row.order_number.clone(),
            customer_name: row.customer_name.clone(),
            phone: row.phone.clone(),
            address: row.address.clone(),
            meal_type: row.meal_type.clone(),
            food_preference: row.food_preference.clone(),
            meal_size: row.meal_size.clone(),
            plan_type: row.plan_type.clone(),
            payment_status: row.payment_status.clone(),
            notes: row.notes.clone(),
        }
    }
}

/// Header + width (in characters) of each column, in order.
pub(crate) const COLUMNS: [(&str, u16); 10] = [
    ("Order Number", 20),
    ("Customer Name", 20),
    ("Phone", 15),
    ("Address", 35),
    ("Meal Type", 12),
    ("Food Preference", 15),
    ("Meal Size", 12),
    ("Plan Type", 20),
    ("Payment Status", 15),
    ("Notes", 25),
];

pub(crate) fn get_headers() -> Vec<&'static str> {
    COLUMNS.iter().map(|(h, _)| *h).collect()
}

/// Record → cell values, in column order.
pub(crate) fn record_to_row(r: &OrderRecord) -> [&str; 10] {
    [
        r.order_number.as_str(),
        r.customer_name.as_str(),
        r.phone.as_str(),
        r.address.as_str(),
        r.meal_type.as_str(),
        r.food_preference.as_str(),
        r.meal_size.as_str(),
        r.plan_type.as_str(),
        r.payment_status.as_str(),
        r.notes.as_str(),
    ]
}

pub(crate) fn rows_to_records(rows: &[OrderRow]) -> Vec<OrderRecord> {
    rows.iter().map(OrderRecord::from).collect()
}
