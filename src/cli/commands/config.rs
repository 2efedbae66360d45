use crate::cli::parser::Commands;
use crate::config::{Config, ENDPOINT_ENV};
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{field, header, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            info("Nothing to do: use --print or --edit.");
            return Ok(());
        }

        if *print_config {
            print(session)?;
        }

        if *edit_config {
            edit(session, editor.as_deref())?;
        }
    }

    Ok(())
}

fn print(session: &Session) -> AppResult<()> {
    header(format!("Configuration ({})", session.config_path.display()));

    let yaml =
        serde_yaml::to_string(&session.config).map_err(|e| AppError::Config(e.to_string()))?;
    println!("{}", yaml.trim_end());

    // what login would actually propose, env included
    let endpoint = session
        .config
        .default_endpoint()
        .unwrap_or_else(|| "(none)".to_string());
    println!();
    field("Effective endpoint", endpoint, 18);
    field("Override variable", ENDPOINT_ENV, 18);
    Ok(())
}

fn edit(session: &Session, editor: Option<&str>) -> AppResult<()> {
    let path = &session.config_path;
    if Config::init_at(path)? {
        info(format!("Config file created: {}", path.display()));
    }

    // --editor first, then $EDITOR / $VISUAL, then the platform default
    let mut candidates: Vec<String> = Vec::new();
    candidates.extend(editor.map(str::to_string));
    candidates.extend(std::env::var("EDITOR").ok());
    candidates.extend(std::env::var("VISUAL").ok());
    let fallback = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };
    candidates.push(fallback.to_string());
    candidates.dedup();

    for (i, ed) in candidates.iter().enumerate() {
        if i > 0 {
            warning(format!("Falling back to '{}'", ed));
        }
        match Command::new(ed).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", ed));
                // re-read to catch YAML mistakes right away
                return Config::load_from(path).map(|_| ());
            }
            Ok(s) => log::warn!("editor '{ed}' exited with {s}"),
            Err(e) => log::warn!("editor '{ed}' not available: {e}"),
        }
    }

    Err(AppError::Config(format!(
        "No usable editor found for {}",
        path.display()
    )))
}
