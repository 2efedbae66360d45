use crate::core::StatsLogic;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::header;
use crate::ui::render::render_stats;

/// Handle `stats`. Unlike the dashboard view, a failure here is reported.
pub fn handle(session: &Session) -> AppResult<()> {
    let gateway = session.gateway()?;
    let stats = StatsLogic::fetch(&gateway)?;

    header("📊 Dashboard");
    print!("{}", render_stats(&stats));
    Ok(())
}
