use crate::api::{Action, ApiGateway};
use crate::errors::GatewayError;
use crate::models::DashboardStats;
use crate::ui::messages::warning;

pub struct StatsLogic;

impl StatsLogic {
    /// Read the dashboard counters.
    pub fn fetch(gateway: &ApiGateway<'_>) -> Result<DashboardStats, GatewayError> {
        let action = Action::GetDashboardStats;
        gateway
            .call(&action)?
            .decode::<DashboardStats>()?
            .into_result(action.fallback_error())
    }

    /// Same as `fetch`, but a failure only logs: the dashboard stays usable
    /// without counters.
    pub fn load(gateway: &ApiGateway<'_>) -> Option<DashboardStats> {
        match Self::fetch(gateway) {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::warn!("Failed to load stats: {e}");
                warning(format!("Dashboard stats unavailable: {e}"));
                None
            }
        }
    }
}
