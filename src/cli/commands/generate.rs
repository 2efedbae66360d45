use crate::cli::commands::resolve_meal;
use crate::cli::parser::Commands;
use crate::core::{GenerateLogic, StatsLogic};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::Session;
use crate::ui::messages::{header, info, success};
use crate::ui::render::{render_result, render_stats};
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Handle `generate`: the dashboard flow.
///
///  1. dashboard counters (a failure is only a warning)
///  2. kitchen list generation
///  3. optional save / export of the same result
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Generate {
        date: date_arg,
        meal,
        skip,
        no_stats,
        export,
        format,
        out,
        save,
        force,
    } = cmd
    {
        let date = date_arg
            .as_deref()
            .map(|d| d.trim().to_string())
            .unwrap_or_else(date::today_ddmmyyyy);
        let meal_type = resolve_meal(meal.as_deref(), session.config.default_meal_type)?;
        // bad input stops here, before any request
        let request = GenerateLogic::build_request(&date, meal_type, skip)?;

        let gateway = session.gateway()?;

        header("🍱 Tiffin Manager");

        // 1️⃣ STATS (non bloccanti)
        if !*no_stats
            && session.store.load().is_some()
            && let Some(stats) = StatsLogic::load(&gateway)
        {
            print!("{}", render_stats(&stats));
        }

        // 2️⃣ GENERAZIONE
        info(format!("Generating kitchen list for {} ({})…", date, meal_type));
        let result = GenerateLogic::submit(&gateway, request)?;

        header("Kitchen Order List Generated");
        print!("{}", render_result(&result));

        // 3️⃣ SAVE / EXPORT
        if let Some(file) = save {
            ExportLogic::save_result(&result, &expand_tilde(file), *force)?;
        }

        if *export {
            let fmt = format.unwrap_or(session.config.export_format);
            let dir = out
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| session.config.export_path());

            let exported = ExportLogic::project(Some(&result), &date, meal_type, fmt)?;
            ExportLogic::write(&exported, &dir, *force)?;
        }

        success("Done.");
    }
    Ok(())
}
