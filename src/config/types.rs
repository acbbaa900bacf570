// Configuration type definitions

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::notification::StyleOverrides;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;

/// Backend the smoke checks talk to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

/// Simulated login settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_login_delay_ms")]
    pub delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

impl Default for LoginConfig {
    fn default() -> Self {
        LoginConfig {
            delay_ms: default_login_delay_ms(),
        }
    }
}

/// Per-category style overrides, keyed by category key (`success`, `auth.login`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub overrides: BTreeMap<String, StyleOverrides>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}
