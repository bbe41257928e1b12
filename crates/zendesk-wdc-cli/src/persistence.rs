//! On-disk cookie jar.
//!
//! Plays the role of the browser cookie store: the `login` command writes
//! the `accessToken` cookie the way the redirect service would, and the
//! connector reads it back during `init`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};
use zendesk_wdc_sdk::CookieJar;

const APP_DIR: &str = "zendesk-wdc";
const COOKIES_FILE: &str = "cookies.json";

/// Default location of the cookie jar, under the user config directory.
pub fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join(COOKIES_FILE))
}

/// A cookie jar persisted as a JSON object.
#[derive(Debug)]
pub struct CookieStore {
    path: PathBuf,
    cookies: HashMap<String, String>,
}

impl CookieStore {
    /// Load the jar at `path`; a missing file is an empty jar.
    pub fn load(path: &Path) -> Result<Self> {
        let cookies = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            debug!(path = %path.display(), "no cookie jar yet");
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            cookies,
        })
    }

    /// Set a cookie (in memory; call [`Self::save`] to persist).
    pub fn set(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    /// Remove a cookie, returning whether it was set.
    pub fn remove(&mut self, name: &str) -> bool {
        self.cookies.remove(name).is_some()
    }

    /// Write the jar back to disk, creating the parent directory.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.cookies)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        info!(path = %self.path.display(), cookies = self.cookies.len(), "cookie jar saved");
        Ok(())
    }
}

impl CookieJar for CookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}

/// A page that carries no cookies, as in the host's data-gathering phase.
pub struct NoCookies;

impl CookieJar for NoCookies {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}
