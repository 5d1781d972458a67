//! Request parameter validation for paramguard
//!
//! Validates a flat set of string parameters (query strings, form fields)
//! against ordered, declarative rules. Every field is looked up once, its
//! rules run in order, and the first failure across the whole field list is
//! reported.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use paramguard_core::{Bound, FieldSpec, Members, Range, Validator};
//! use std::collections::HashMap;
//!
//! let fields = vec![
//!     FieldSpec::new("orgId", "Organization id")
//!         .required()
//!         .integer()
//!         .min(Bound::Int(1)),
//!     FieldSpec::new("status", "Status").one_of(["DELETED", "ENABLED", "DISABLED"]),
//!     FieldSpec::new("ids", "Ids").array_in(",", Members::ints([1, 2, 3])),
//!     FieldSpec::new("pageSize", "Page size").between(Range::int(-1, 100)),
//! ];
//!
//! let mut params = HashMap::new();
//! params.insert("orgId".to_string(), "1".to_string());
//! params.insert("ids".to_string(), "1,3".to_string());
//!
//! let validator = Validator::default();
//! let data = validator.validate_map(&params, &fields).unwrap();
//! assert_eq!(data.get("ids"), Some("1,3"));
//! assert_eq!(data.get("status"), Some(""));
//! ```
//!
//! ## Compile Once, Run Many
//!
//! ```
//! use paramguard_core::{FieldSpec, Validator};
//!
//! let plan = Validator::default()
//!     .compile(&[FieldSpec::new("isSync", "Sync flag").required().boolean()])
//!     .expect("rules are well formed");
//!
//! assert!(plan.run(|_| "true".to_string()).is_ok());
//!
//! let err = plan.run(|_| "yes".to_string()).unwrap_err();
//! assert_eq!(err.field, "isSync");
//! assert_eq!(err.message, "Sync flag must be true or false");
//! ```

mod catalogue;
mod engine;
mod errors;
mod messages;
mod params;
mod rules;
mod traits;
mod validators;

pub use catalogue::*;
pub use engine::*;
pub use errors::*;
pub use messages::*;
pub use params::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
