// Reference time zone

use crate::Clock;
use chrono::Datelike;
use chrono_tz::Tz;
use paramguard_core::ConfigError;

/// Default zone for calendar-dependent checks
pub const DEFAULT_TIME_ZONE: &str = "Asia/Shanghai";

/// IANA time zone used to decide "today" for date presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceZone(Tz);

impl ReferenceZone {
    /// Load a zone by IANA name.
    ///
    /// Fails instead of falling back to UTC, so a typo in configuration is
    /// caught at startup.
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        let tz: Tz = name.parse().map_err(|e| ConfigError::InvalidTimeZone {
            zone: name.to_string(),
            reason: format!("{}", e),
        })?;

        tracing::debug!(zone = %name, "Loaded reference time zone");
        Ok(Self(tz))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn tz(&self) -> Tz {
        self.0
    }

    /// Calendar year at `clock`'s current instant in this zone
    pub fn current_year(&self, clock: &dyn Clock) -> i32 {
        clock.now().with_timezone(&self.0).year()
    }
}
