pub mod generate;
pub mod orders;
pub mod stats;

pub use generate::{GenerateLogic, parse_skip_orders};
pub use orders::{OrderLogic, as_order_rows};
pub use stats::StatsLogic;
