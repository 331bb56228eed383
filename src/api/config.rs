// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "https://api.icicidirect.com/breezeapi/api/v1/";

const APP_KEY_VAR: &str = "BREEZE_APP_KEY";
const API_URL_VAR: &str = "BREEZE_API_URL";

/// Static configuration needed to create a client. The application key is passed to the
/// service as is, it is not validated here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreezeConfig {
    pub app_key: String,
    pub api_url: String,
}

impl BreezeConfig {
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            api_url: DEFAULT_API_URL.into(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Reads `BREEZE_APP_KEY` and the optional `BREEZE_API_URL` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_key = lookup(APP_KEY_VAR)
            .with_context(|| format!("environment variable {APP_KEY_VAR} is not set"))?;
        let config = Self::new(app_key);
        Ok(match lookup(API_URL_VAR) {
            Some(api_url) => config.with_api_url(api_url),
            None => config,
        })
    }
}
