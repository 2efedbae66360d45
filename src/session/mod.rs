//! Explicit session context: configuration plus the credential store.
//! Built once in `run()` and handed to every command; nothing here is global.

pub mod credentials;
pub mod store;

pub use credentials::Credentials;
pub use store::{CredentialStore, FileStore, KeyValueStore, MemoryStore};

use crate::api::{ApiGateway, HttpTransport};
use crate::config::Config;
use crate::errors::AppResult;
use std::path::PathBuf;

pub struct Session {
    pub config: Config,
    pub store: CredentialStore,
    /// Where the config came from (for `config --print/--edit`)
    pub config_path: PathBuf,
}

impl Session {
    pub fn new(config: Config, store: CredentialStore, config_path: PathBuf) -> Self {
        Self {
            config,
            store,
            config_path,
        }
    }

    /// Gateway over the real HTTP transport.
    pub fn gateway(&self) -> AppResult<ApiGateway<'_>> {
        let transport = HttpTransport::new(self.config.request_timeout_secs)?;
        Ok(ApiGateway::new(&self.store, Box::new(transport)))
    }
}
