// Environment variable loading

use std::collections::HashMap;
use std::env;

/// Prefix of every variable read by [`Settings::from_env`](crate::Settings::from_env)
pub const ENV_PREFIX: &str = "PARAMGUARD";

/// Collects prefixed variables, keyed by the lowercased remainder.
///
/// With prefix `PARAMGUARD`, `PARAMGUARD_TIME_ZONE` becomes `time_zone`.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Read from the process environment
    pub fn load(&self) -> HashMap<String, String> {
        self.collect(env::vars())
    }

    /// Read from an explicit set of variables
    pub fn collect<I, K, V>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = HashMap::new();

        for (key, value) in vars {
            let Some(rest) = key.as_ref().strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            let Some(rest) = rest.strip_prefix('_') else {
                continue;
            };
            config.insert(rest.to_lowercase(), value.into());
        }

        config
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(ENV_PREFIX)
    }
}
