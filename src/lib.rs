// paramguard - declarative validation for string request parameters
//
// Describe each parameter as a field with an ordered list of rules, hand the
// list to a validator together with a lookup function, and get back either
// the raw values or the first failure.

// Re-export core functionality
pub use paramguard_core::*;

// Re-export optional crates
#[cfg(feature = "presets")]
pub use paramguard_presets;

#[cfg(feature = "config")]
pub use paramguard_config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Bound, Catalogue, ConfigError, Error, FieldSpec, FnRule, Members, MessageLocale, Messages,
        PatternRule, PredicateRule, Range, RuleParam, ValidatedParams, ValidationError, Validator,
    };

    #[cfg(feature = "presets")]
    pub use paramguard_presets::{FixedClock, HEIGHT, PresetSettings, Presets, SystemClock, WEIGHT};

    #[cfg(feature = "config")]
    pub use paramguard_config::{Settings, SettingsError, Toolkit};
}
