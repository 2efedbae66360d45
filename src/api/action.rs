use crate::models::GenerationRequest;
use serde_json::{Map, Value, json};

/// The remote actions this client knows how to call.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GenerateKitchenList(GenerationRequest),
    GetOrders,
    GetDashboardStats,
    GetKitchenOrderList,
    UpdatePaymentStatus {
        order_number: String,
        payment_status: String,
    },
    UpdateOrderStatus {
        order_number: String,
        status: String,
    },
    CreateOrder {
        order_data: Value,
    },
}

impl Action {
    /// Name sent in the envelope's `action` field
    pub fn name(&self) -> &'static str {
        match self {
            Action::GenerateKitchenList(_) => "generateKitchenList",
            Action::GetOrders => "getOrders",
            Action::GetDashboardStats => "getDashboardStats",
            Action::GetKitchenOrderList => "getKitchenOrderList",
            Action::UpdatePaymentStatus { .. } => "updatePaymentStatus",
            Action::UpdateOrderStatus { .. } => "updateOrderStatus",
            Action::CreateOrder { .. } => "createOrder",
        }
    }

    /// Action-specific fields, merged into the envelope next to `action` and `token`.
    pub fn payload(&self) -> Map<String, Value> {
        let value = match self {
            Action::GenerateKitchenList(req) => json!({
                "date": req.date,
                "mealType": req.meal_type,
                "skipOrders": req.skip_orders,
            }),
            Action::GetOrders | Action::GetDashboardStats | Action::GetKitchenOrderList => {
                json!({})
            }
            Action::UpdatePaymentStatus {
                order_number,
                payment_status,
            } => json!({
                "orderNumber": order_number,
                "paymentStatus": payment_status,
            }),
            Action::UpdateOrderStatus {
                order_number,
                status,
            } => json!({
                "orderNumber": order_number,
                "status": status,
            }),
            Action::CreateOrder { order_data } => json!({ "orderData": order_data }),
        };

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Message shown when the remote refuses without saying why
    pub fn fallback_error(&self) -> &'static str {
        match self {
            Action::GenerateKitchenList(_) => "Failed to generate kitchen list",
            Action::GetOrders => "Failed to load orders",
            Action::GetDashboardStats => "Failed to load dashboard stats",
            Action::GetKitchenOrderList => "Failed to load kitchen order list",
            Action::UpdatePaymentStatus { .. } => "Failed to update payment status",
            Action::UpdateOrderStatus { .. } => "Failed to update order status",
            Action::CreateOrder { .. } => "Failed to create order",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    #[test]
    fn generate_payload_uses_wire_names() {
        let action = Action::GenerateKitchenList(GenerationRequest {
            date: "09/02/2026".into(),
            meal_type: MealType::Lunch,
            skip_orders: vec!["ORD-1".into()],
        });

        assert_eq!(action.name(), "generateKitchenList");
        assert_eq!(
            Value::Object(action.payload()),
            json!({"date": "09/02/2026", "mealType": "Lunch", "skipOrders": ["ORD-1"]})
        );
    }

    #[test]
    fn read_actions_have_empty_payload() {
        assert!(Action::GetOrders.payload().is_empty());
        assert!(Action::GetDashboardStats.payload().is_empty());
        assert!(Action::GetKitchenOrderList.payload().is_empty());
    }

    #[test]
    fn update_payloads() {
        let pay = Action::UpdatePaymentStatus {
            order_number: "ORD-7".into(),
            payment_status: "Paid".into(),
        };
        assert_eq!(
            Value::Object(pay.payload()),
            json!({"orderNumber": "ORD-7", "paymentStatus": "Paid"})
        );

        let status = Action::UpdateOrderStatus {
            order_number: "ORD-7".into(),
            status: "Paused".into(),
        };
        assert_eq!(status.name(), "updateOrderStatus");
        assert_eq!(
            Value::Object(status.payload()),
            json!({"orderNumber": "ORD-7", "status": "Paused"})
        );
    }
}
