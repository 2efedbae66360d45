pub mod generation;
pub mod meal_type;
pub mod order_row;
pub mod stats;
pub(crate) mod wire;

pub use generation::{GenerationRequest, GenerationResult, GenerationSummary};
pub use meal_type::MealType;
pub use order_row::OrderRow;
pub use stats::DashboardStats;
