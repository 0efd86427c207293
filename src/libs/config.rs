//! Configuration management for the clearpath application.
//!
//! Settings are stored as pretty-printed JSON in the platform-specific
//! application data directory. Every section is optional; a missing section
//! (or a missing file) falls back to defaults, so the application works
//! without any setup.
//!
//! ## Configuration Structure
//!
//! - **Undo**: length of the window in which a transition can be reversed
//! - **Storage**: name of the SQLite database file inside the data directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use clearpath::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Undo window: {:?}", config.undo_window());
//!
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DEFAULT_DB_FILE: &str = "clearpath.db";

/// Default undo window in seconds.
pub const DEFAULT_UNDO_WINDOW_SECS: u64 = 4;

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Undo window settings.
///
/// Every completion, restoration and deletion is written immediately and can
/// be reversed until the window closes. After that the change is final.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UndoConfig {
    /// Length of the undo window in seconds.
    ///
    /// Zero is accepted and means the change is committed as soon as the
    /// timer task runs.
    pub window_secs: u64,
}

impl Default for UndoConfig {
    fn default() -> Self {
        UndoConfig {
            window_secs: DEFAULT_UNDO_WINDOW_SECS,
        }
    }
}

/// Database location settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// File name (or absolute path) of the SQLite database.
    ///
    /// Relative names are resolved inside the application data directory.
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: DEFAULT_DB_FILE.to_string(),
        }
    }
}

/// Main configuration container.
///
/// The `skip_serializing_if = "Option::is_none"` attribute keeps sections the
/// user never configured out of the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undo: Option<UndoConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads configuration from the application data directory.
    ///
    /// ## File Location
    ///
    /// - **Windows**: `%LOCALAPPDATA%\clearpath\clearpath\config.json`
    /// - **macOS**: `~/Library/Application Support/clearpath/clearpath/config.json`
    /// - **Linux**: `~/.local/share/clearpath/clearpath/config.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. A
    /// missing file is not an error and yields the defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads configuration from an explicit file, defaulting when absent.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Saves the configuration to an explicit file as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn undo_window(&self) -> Duration {
        Duration::from_secs(self.undo.clone().unwrap_or_default().window_secs)
    }

    pub fn db_file(&self) -> String {
        self.storage.clone().unwrap_or_default().db_file
    }

    /// Runs the interactive setup wizard.
    ///
    /// Starts from the current configuration, lets the user pick which
    /// sections to edit and prompts for each value with the current one
    /// pre-filled. The result is returned unsaved.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "undo".to_string(),
                name: "Undo".to_string(),
            },
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "undo" => {
                    let default = config.undo.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleUndo);
                    config.undo = Some(UndoConfig {
                        window_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUndoWindow.to_string())
                            .default(default.window_secs)
                            .interact_text()?,
                    });
                }
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbFile.to_string())
                            .default(default.db_file)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
