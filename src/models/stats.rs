use super::wire::lenient_count;
use serde::{Deserialize, Serialize};

/// Dashboard counters from `getDashboardStats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub active_orders: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pending_payments: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_meals_today: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_counters() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalOrders": 40,
            "activeOrders": 31,
            "pendingPayments": 4,
            "totalMealsToday": 52.0
        }))
        .unwrap();

        assert_eq!(stats.active_orders, 31);
        assert_eq!(stats.total_meals_today, 52);
    }
}
