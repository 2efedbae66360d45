use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and a default configuration file
/// (left untouched when it already exists).
pub fn handle(session: &Session) -> AppResult<()> {
    let path = &session.config_path;

    info("Initializing rTiffin…");

    if Config::init_at(path)? {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    info("Next step: rtiffin login --url <API URL> --token <API TOKEN>");
    Ok(())
}
