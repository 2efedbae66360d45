use crate::api::{Action, ApiGateway};
use crate::errors::{AppError, AppResult};
use crate::models::{GenerationRequest, GenerationResult, MealType};
use crate::utils::date::is_ddmmyyyy;

/// High-level logic for the kitchen-list generation.
pub struct GenerateLogic;

impl GenerateLogic {
    /// Ask the remote sheet to build the kitchen list for `date` / `meal_type`,
    /// leaving out the orders named in `skip_orders_text` (comma separated).
    ///
    /// The returned result exists only if the remote reported success.
    pub fn generate(
        gateway: &ApiGateway<'_>,
        date: &str,
        meal_type: MealType,
        skip_orders_text: &str,
    ) -> AppResult<GenerationResult> {
        let request = Self::build_request(date, meal_type, skip_orders_text)?;
        Self::submit(gateway, request)
    }

    /// Send an already validated request.
    pub fn submit(
        gateway: &ApiGateway<'_>,
        request: GenerationRequest,
    ) -> AppResult<GenerationResult> {
        log::info!(
            "generating kitchen list for {} {} (skipping {})",
            request.date,
            request.meal_type,
            request.skip_orders.len()
        );

        let action = Action::GenerateKitchenList(request);
        let result = gateway
            .call(&action)?
            .decode::<GenerationResult>()?
            .into_result(action.fallback_error())?;

        Ok(result)
    }

    /// Validate and normalize operator input.
    pub fn build_request(
        date: &str,
        meal_type: MealType,
        skip_orders_text: &str,
    ) -> AppResult<GenerationRequest> {
        let date = date.trim();
        if !is_ddmmyyyy(date) {
            return Err(AppError::InvalidDate(date.to_string()));
        }

        Ok(GenerationRequest {
            date: date.to_string(),
            meal_type,
            skip_orders: parse_skip_orders(skip_orders_text),
        })
    }
}

/// `"A, B,, C "` → `["A", "B", "C"]`.
/// Order is kept and duplicates are not removed.
pub fn parse_skip_orders(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
