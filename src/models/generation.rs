use super::meal_type::MealType;
use super::order_row::OrderRow;
use super::wire::{lenient_count, lenient_string, lenient_strings, null_as_default};
use serde::{Deserialize, Serialize};

/// Aggregate counters returned with a generated kitchen list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub meal_type: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub updated_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub lunch_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub dinner_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub both_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub veg_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub non_veg_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub skipped_count: u64,
}

/// Outcome of one successful `generateKitchenList` call.
///
/// `completed_orders` lists the orders the remote sheet closed as a side
/// effect of this run (their plan ran out with today's meal).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: GenerationSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<OrderRow>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub completed_orders: Vec<String>,
}

impl GenerationResult {
    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Meal type reported by the remote summary, if it is a known one.
    pub fn summary_meal_type(&self) -> Option<MealType> {
        MealType::from_code(&self.summary.meal_type)
    }
}

/// Request body fields for `generateKitchenList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub date: String,
    pub meal_type: MealType,
    pub skip_orders: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_payload() {
        let data = json!({
            "summary": {
                "date": "09/02/2026",
                "mealType": "Lunch",
                "totalOrders": 3,
                "updatedCount": 3,
                "lunchCount": 2,
                "dinnerCount": 0,
                "bothCount": 1,
                "vegCount": 2,
                "nonVegCount": 1,
                "skippedCount": 1
            },
            "orders": [
                [
                    "ORD-1", "Asha", "111", "A", "Lunch", "Veg", "Regular", "Monthly", "Paid",
                    "extra roti"
                ],
                ["ORD-2", "Ravi", "222", "B", "Both", "Non-Veg", "Large", "Weekly", "Pending"]
            ],
            "completedOrders": ["ORD-2"]
        });

        let result: GenerationResult = serde_json::from_value(data).unwrap();
        assert_eq!(result.summary.total_orders, 3);
        assert_eq!(result.summary.skipped_count, 1);
        assert_eq!(result.orders.len(), 2);
        assert_eq!(result.orders[1].notes, "");
        assert_eq!(result.completed_orders, vec!["ORD-2".to_string()]);
        assert_eq!(result.summary_meal_type(), Some(MealType::Lunch));
    }

    #[test]
    fn absent_counters_and_lists_default() {
        let result: GenerationResult = serde_json::from_value(json!({
            "summary": { "date": "09/02/2026", "mealType": "Dinner" },
            "orders": null
        }))
        .unwrap();

        assert_eq!(result.summary.veg_count, 0);
        assert!(!result.has_orders());
        assert!(result.completed_orders.is_empty());
    }

    #[test]
    fn request_uses_wire_field_names() {
        let req = GenerationRequest {
            date: "09/02/2026".into(),
            meal_type: MealType::Dinner,
            skip_orders: vec!["A".into(), "B".into()],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"date": "09/02/2026", "mealType": "Dinner", "skipOrders": ["A", "B"]})
        );
    }
}
