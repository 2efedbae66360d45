//! Terminal views of remote data.
//! Every function returns the text instead of printing it.

use crate::core::as_order_rows;
use crate::export::OrderRecord;
use crate::models::{DashboardStats, GenerationResult, OrderRow};
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RED, YELLOW, colorize, colorize_count};
use crate::utils::table::Table;
use serde_json::Value;

const ORDER_HEADERS: [&str; 10] = [
    "Order Number",
    "Customer Name",
    "Phone",
    "Address",
    "Meal Type",
    "Food Pref",
    "Size",
    "Plan",
    "Payment",
    "Notes",
];

pub fn render_stats(stats: &DashboardStats) -> String {
    format!(
        "Total Orders: {}  |  Active Orders: {}  |  Pending Payments: {}  |  Today's Meals: {}\n",
        stats.total_orders,
        colorize_count(stats.active_orders, GREEN),
        colorize_count(stats.pending_payments, YELLOW),
        colorize_count(stats.total_meals_today, BLUE),
    )
}

pub fn render_result(result: &GenerationResult) -> String {
    let s = &result.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "Date: {}  |  Meal Type: {}  |  Total Orders: {}  |  Updated: {}\n",
        s.date, s.meal_type, s.total_orders, s.updated_count
    ));

    let mut counts = vec![
        format!("Lunch Orders: {}", colorize_count(s.lunch_count, BLUE)),
        format!("Dinner Orders: {}", colorize_count(s.dinner_count, YELLOW)),
        format!("Both Meals: {}", colorize_count(s.both_count, MAGENTA)),
        format!("Veg: {}", colorize_count(s.veg_count, GREEN)),
        format!("Non-Veg: {}", colorize_count(s.non_veg_count, RED)),
    ];
    if s.skipped_count > 0 {
        counts.push(format!("Skipped: {}", s.skipped_count));
    }
    out.push_str(&counts.join("  |  "));
    out.push('\n');

    if !result.completed_orders.is_empty() {
        out.push_str(&format!(
            "\n🎉 Completed Orders ({}): {}\n",
            result.completed_orders.len(),
            colorize(&result.completed_orders.join(", "), GREEN)
        ));
    }

    if result.has_orders() {
        out.push('\n');
        out.push_str(&render_orders(&result.orders));
    }

    out
}

pub fn render_orders(rows: &[OrderRow]) -> String {
    let mut table = Table::new(&ORDER_HEADERS);
    for row in rows {
        let rec = OrderRecord::from(row);
        table.add_row(vec![
            rec.order_number,
            rec.customer_name,
            rec.phone,
            rec.address,
            rec.meal_type,
            rec.food_preference,
            rec.meal_size,
            rec.plan_type,
            rec.payment_status,
            rec.notes,
        ]);
    }
    table.render()
}

/// Remote data of unknown shape: a table when it holds order rows,
/// pretty JSON otherwise.
pub fn render_data(data: &Value) -> String {
    if let Some(rows) = as_order_rows(data) {
        return render_orders(&rows);
    }
    match data {
        Value::Null => String::new(),
        other => {
            let mut s = serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string());
            s.push('\n');
            s
        }
    }
}
