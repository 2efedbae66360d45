pub mod config;
pub mod export;
pub mod generate;
pub mod init;
pub mod login;
pub mod orders;
pub mod stats;

use crate::errors::{AppError, AppResult};
use crate::models::MealType;

/// `--meal` value, or the configured default when omitted.
pub(crate) fn resolve_meal(meal: Option<&str>, default: MealType) -> AppResult<MealType> {
    match meal {
        None => Ok(default),
        Some(m) => MealType::from_code(m).ok_or_else(|| AppError::InvalidMealType(m.to_string())),
    }
}
