use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::session::{Credentials, Session};
use crate::ui::messages::{field, info, success};

/// Handle `login`: store URL + token. No request is made here; a wrong URL
/// or token shows up on the first real command.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Login { url, token } = cmd {
        let url = non_blank(url.as_deref()).or_else(|| session.config.default_endpoint());
        let token = non_blank(token.as_deref());

        let (Some(url), Some(token)) = (url, token) else {
            return Err(AppError::InvalidInput(
                "Please enter both API URL and Token".to_string(),
            ));
        };

        let creds = Credentials::new(url, token);
        session.store.save(&creds)?;

        success(format!("Logged in to {}", creds.endpoint_url));
        info("Connection will be tested on the first request.");
    }
    Ok(())
}

/// Handle `logout`: both keys go away together.
pub fn logout(session: &Session) -> AppResult<()> {
    session.store.clear()?;
    success("Logged out. Stored API URL and token removed.");
    Ok(())
}

/// Handle `session`: show what is stored, token masked.
pub fn show(session: &Session) -> AppResult<()> {
    match session.store.load() {
        Some(creds) => {
            field("API URL", &creds.endpoint_url, 9);
            field("API Token", creds.masked_token(), 9);
        }
        None => info("Not logged in. Run `rtiffin login --url <URL> --token <TOKEN>`."),
    }
    Ok(())
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
