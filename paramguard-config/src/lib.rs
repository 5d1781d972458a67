//! Configuration for paramguard
//!
//! [`Settings`] chooses the message locale, template overrides and preset
//! options. Load them from TOML, from `PARAMGUARD_*` environment variables,
//! or both, then [`build`](Settings::build) a [`Toolkit`].
//!
//! ```
//! use paramguard_config::Settings;
//! use paramguard_core::FieldSpec;
//!
//! let settings = Settings::from_toml_str(r#"locale = "en""#).unwrap();
//! let toolkit = settings.build().unwrap();
//!
//! let fields = vec![FieldSpec::new("email", "Email").matches(toolkit.presets.email())];
//! assert!(toolkit.validator.validate(|_| "booldesign@163.com".to_string(), &fields).is_ok());
//! ```

mod env;
mod error;
mod settings;

pub use env::*;
pub use error::*;
pub use settings::*;

use paramguard_core::Validator;
use paramguard_presets::Presets;

/// A validator and presets sharing one set of message templates.
#[derive(Debug, Clone)]
pub struct Toolkit {
    pub validator: Validator,
    pub presets: Presets,
}
