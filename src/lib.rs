//! rTiffin library root.
//! Exposes the CLI parser, the high-level run() function, and the client
//! modules (session, api, core, export) used by the commands.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::{CredentialStore, Session};
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(session),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, session),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, session),
        Commands::Logout => cli::commands::login::logout(session),
        Commands::Session => cli::commands::login::show(session),
        Commands::Stats => cli::commands::stats::handle(session),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, session),
        Commands::Orders { .. }
        | Commands::KitchenList { .. }
        | Commands::Payment { .. }
        | Commands::OrderStatus { .. }
        | Commands::CreateOrder { .. } => cli::commands::orders::handle(&cli.command, session),
    }
}

/// Map `-v` count to a log level: warn, info, debug, trace.
/// `RTIFFIN_LOG` (env_logger syntax) refines it.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RTIFFIN_LOG")
        .format_timestamp_millis()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once (custom path from --config)
    let config_path = cli
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ credential store (custom path from --session)
    let session_path = cli
        .session
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::session_file);
    log::debug!(
        "config: {}, session: {}",
        config_path.display(),
        session_path.display()
    );

    let session = Session::new(cfg, CredentialStore::file(session_path), config_path);

    // 4️⃣ pass everything to the dispatcher
    dispatch(&cli, &session)
}
