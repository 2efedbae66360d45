//! Persistent key-value storage for the login.
//!
//! Two well-known keys hold the endpoint URL and the token. Every write
//! replaces the whole document at once (temp file + rename), so a reader
//! sees either both keys or neither.

use super::credentials::Credentials;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const TOKEN_KEY: &str = "api_token";
pub const URL_KEY: &str = "api_url";

/// Minimal key-value backend. Multi-key operations are all-or-nothing.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set_many(&self, entries: &[(&str, &str)]) -> AppResult<()>;
    fn remove_many(&self, keys: &[&str]) -> AppResult<()>;
}

type Document = BTreeMap<String, String>;

/// YAML document on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> AppResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", self.path.display(), e)))
    }

    fn write(&self, doc: &Document) -> AppResult<()> {
        if doc.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(doc).map_err(|e| AppError::Other(e.to_string()))?;
        let tmp = self.path.with_extension("yml.tmp");
        write_private(&tmp, yaml.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Create `path` readable by the owner only (0600 on unix); the token is a secret.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    // a leftover temp file would keep its old mode
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> AppResult<()> {
        let mut doc = self.read()?;
        for (k, v) in entries {
            doc.insert((*k).to_string(), (*v).to_string());
        }
        self.write(&doc)
    }

    fn remove_many(&self, keys: &[&str]) -> AppResult<()> {
        let mut doc = self.read()?;
        for k in keys {
            doc.remove(*k);
        }
        self.write(&doc)
    }
}

/// Process-local store, for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Document>> {
        self.doc
            .lock()
            .map_err(|_| AppError::Other("credential store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> AppResult<()> {
        let mut doc = self.lock()?;
        for (k, v) in entries {
            doc.insert((*k).to_string(), (*v).to_string());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> AppResult<()> {
        let mut doc = self.lock()?;
        for k in keys {
            doc.remove(*k);
        }
        Ok(())
    }
}

/// Save / load / clear the operator's login.
pub struct CredentialStore {
    backend: Box<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileStore::new(path)))
    }

    pub fn memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Persist both keys in one write. No validation here.
    pub fn save(&self, credentials: &Credentials) -> AppResult<()> {
        self.backend.set_many(&[
            (URL_KEY, credentials.endpoint_url.as_str()),
            (TOKEN_KEY, credentials.token.as_str()),
        ])
    }

    /// Stored login, or None when either key is missing or blank.
    /// An unreadable store counts as logged out.
    pub fn load(&self) -> Option<Credentials> {
        let read = || -> AppResult<Option<Credentials>> {
            let url = self.backend.get(URL_KEY)?;
            let token = self.backend.get(TOKEN_KEY)?;
            Ok(match (url, token) {
                (Some(u), Some(t)) => Some(Credentials::new(u, t)).filter(Credentials::is_complete),
                _ => None,
            })
        };

        match read() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("credential store unreadable, treating as logged out: {e}");
                None
            }
        }
    }

    /// Remove both keys in one operation.
    pub fn clear(&self) -> AppResult<()> {
        self.backend.remove_many(&[TOKEN_KEY, URL_KEY])
    }
}
