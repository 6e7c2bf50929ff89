// This file is part of the product Vitrina.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::whatsapp;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Accent tokens the built-in stylesheet ships palette classes for.
pub const ACCENT_SAFELIST: &[&str] = &[
    "amber-500",
    "amber-600",
    "amber-700",
    "amber-800",
    "orange-500",
    "orange-600",
    "orange-700",
    "orange-800",
    "stone-500",
    "stone-600",
    "stone-700",
    "stone-800",
];

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    2
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    pub name: String,
    /// Destination identifier for wa.me links, digits only. Presence is
    /// required at startup; the digit/length format is enforced when a
    /// dispatch link is built, so a malformed value degrades dispatch
    /// without taking the storefront down.
    pub whatsapp_number: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub hero_tagline: String,
}

fn default_accent() -> String {
    "amber-700".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    pub primary_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join("config.yaml");
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        let config: Config = serde_yaml::from_str(&config_content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Loads and validates configuration at startup. If validation fails, the application should not start.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config = Self::load(root)?;

        Self::validate_store(&config.store)?;
        Self::validate_catalog(&config.catalog)?;
        Self::validate_logging(&config.logging)?;

        if whatsapp::validate_destination(&config.store.whatsapp_number).is_err() {
            warn!(
                "store.whatsapp_number '{}' is not 8-15 digits; WhatsApp dispatch will be refused until it is fixed",
                config.store.whatsapp_number
            );
        }

        Ok(ValidatedConfig {
            server: config.server,
            store: config.store,
            catalog: config.catalog,
            logging: config.logging,
        })
    }

    fn validate_store(store: &StoreConfig) -> Result<(), ConfigError> {
        if store.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "store.name must not be empty".to_string(),
            ));
        }
        if store.whatsapp_number.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "store.whatsapp_number must be set".to_string(),
            ));
        }
        if !ACCENT_SAFELIST.contains(&store.accent.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "store.accent '{}' is not a known accent token (expected one of: {})",
                store.accent,
                ACCENT_SAFELIST.join(", ")
            )));
        }
        Ok(())
    }

    fn validate_catalog(catalog: &CatalogConfig) -> Result<(), ConfigError> {
        let url = catalog.primary_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "catalog.primary_url '{}' must be an http(s) URL",
                catalog.primary_url
            )));
        }
        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        match logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                other
            ))),
        }
    }
}
