// Settings model and loaders

use crate::{EnvLoader, Result, SettingsError, Toolkit};
use paramguard_core::{MessageLocale, Messages, Validator};
use paramguard_presets::{PresetSettings, Presets};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Everything needed to build a [`Toolkit`].
///
/// ```toml
/// locale = "zh-cn"
///
/// [presets]
/// time_zone = "Asia/Shanghai"
/// birthday_min_year = 1905
///
/// [messages]
/// required = "{name} is required"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in message set
    pub locale: MessageLocale,
    pub presets: PresetSettings,
    /// Per-template overrides applied on top of the locale's set
    pub messages: BTreeMap<String, String>,
}

impl Settings {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loading settings file");
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by `PARAMGUARD_*` variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::default().with_env(&EnvLoader::default().load())
    }

    /// Load `path` as a `.env` file, then read the environment
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self> {
        dotenvy::from_path(path.as_ref())?;
        Self::default().with_env(&EnvLoader::default().load())
    }

    /// Defaults overridden by an explicit set of `PARAMGUARD_*` variables
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::default().with_env(&EnvLoader::default().collect(vars))
    }

    /// Apply variables collected by an [`EnvLoader`].
    ///
    /// Recognised keys: `locale`, `time_zone`, `birthday_min_year`.
    pub fn with_env(mut self, vars: &HashMap<String, String>) -> Result<Self> {
        if let Some(locale) = vars.get("locale") {
            self.locale = locale.parse().map_err(|_| invalid("locale", locale))?;
        }

        if let Some(zone) = vars.get("time_zone") {
            self.presets.time_zone = zone.clone();
        }

        if let Some(year) = vars.get("birthday_min_year") {
            self.presets.birthday_min_year = year
                .trim()
                .parse()
                .map_err(|_| invalid("birthday_min_year", year))?;
        }

        Ok(self)
    }

    /// Message templates for the configured locale with overrides applied
    pub fn messages(&self) -> Result<Messages> {
        let mut messages = Messages::for_locale(self.locale);

        for (key, template) in &self.messages {
            if !messages.set(key, template.as_str()) {
                return Err(invalid(&format!("messages.{}", key), template));
            }
        }

        Ok(messages)
    }

    /// Build a validator with the built-in catalogue and matching presets.
    ///
    /// Fails if a message key is unknown or the time zone cannot be loaded.
    pub fn build(&self) -> Result<Toolkit> {
        let messages = self.messages()?;
        let presets = Presets::new(&self.presets)?.with_messages(messages.clone());
        let validator = Validator::default().with_messages(messages);

        tracing::info!(
            locale = %self.locale,
            time_zone = %presets.zone().name(),
            "Validation toolkit ready"
        );

        Ok(Toolkit { validator, presets })
    }
}

fn invalid(key: &str, value: &str) -> SettingsError {
    SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
