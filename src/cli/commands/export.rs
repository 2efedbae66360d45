use crate::cli::commands::resolve_meal;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::session::Session;
use crate::utils::path::expand_tilde;

/// Handle `export`: project a saved result into a spreadsheet.
/// Works offline; nothing is fetched again.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        input,
        date,
        meal,
        format,
        out,
        force,
    } = cmd
    {
        let result = ExportLogic::load_result(&expand_tilde(input))?;

        let date = date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .or_else(|| Some(result.summary.date.trim().to_string()).filter(|d| !d.is_empty()))
            .ok_or_else(|| {
                AppError::InvalidInput("Saved result has no date: pass --date".to_string())
            })?;

        let default_meal = result
            .summary_meal_type()
            .unwrap_or(session.config.default_meal_type);
        let meal_type = resolve_meal(meal.as_deref(), default_meal)?;

        let fmt = format.unwrap_or(session.config.export_format);
        let dir = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| session.config.export_path());

        let exported = ExportLogic::project(Some(&result), &date, meal_type, fmt)?;
        ExportLogic::write(&exported, &dir, *force)?;
    }
    Ok(())
}
