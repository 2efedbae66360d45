use crate::api::{Action, ApiGateway};
use crate::errors::{AppError, AppResult};
use crate::models::OrderRow;
use serde_json::Value;

/// Order-level actions other than list generation.
///
/// The remote payloads for these actions have no fixed shape, so the data is
/// handed back as JSON; `as_order_rows` recognizes the common case of a list
/// of positional order rows.
pub struct OrderLogic;

impl OrderLogic {
    pub fn orders(gateway: &ApiGateway<'_>) -> AppResult<Value> {
        Self::run(gateway, Action::GetOrders)
    }

    pub fn kitchen_list(gateway: &ApiGateway<'_>) -> AppResult<Value> {
        Self::run(gateway, Action::GetKitchenOrderList)
    }

    pub fn update_payment(
        gateway: &ApiGateway<'_>,
        order_number: &str,
        payment_status: &str,
    ) -> AppResult<Value> {
        let action = Action::UpdatePaymentStatus {
            order_number: required("order number", order_number)?,
            payment_status: required("payment status", payment_status)?,
        };
        Self::run(gateway, action)
    }

    pub fn update_status(
        gateway: &ApiGateway<'_>,
        order_number: &str,
        status: &str,
    ) -> AppResult<Value> {
        let action = Action::UpdateOrderStatus {
            order_number: required("order number", order_number)?,
            status: required("status", status)?,
        };
        Self::run(gateway, action)
    }

    pub fn create(gateway: &ApiGateway<'_>, order_data: Value) -> AppResult<Value> {
        if !order_data.is_object() {
            return Err(AppError::InvalidInput(
                "Order data must be a JSON object".to_string(),
            ));
        }
        Self::run(gateway, Action::CreateOrder { order_data })
    }

    fn run(gateway: &ApiGateway<'_>, action: Action) -> AppResult<Value> {
        log::info!("calling {}", action.name());
        let data = gateway.call(&action)?.into_result(action.fallback_error())?;
        Ok(data)
    }
}

/// Rows of `data` when it is a list of positional order arrays, either bare
/// or under an `orders` key.
pub fn as_order_rows(data: &Value) -> Option<Vec<OrderRow>> {
    let list = match data {
        Value::Array(items) => items,
        Value::Object(obj) => obj.get("orders")?.as_array()?,
        _ => return None,
    };

    if list.is_empty() || !list.iter().all(Value::is_array) {
        return None;
    }

    Some(
        list.iter()
            .filter_map(Value::as_array)
            .map(|cells| OrderRow::from_cells(cells))
            .collect(),
    )
}

fn required(label: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(format!("Missing {label}")));
    }
    Ok(v.to_string())
}
