//! Schema inference engine
//!
//! Turns parsed records into a typed schema tree plus advisory
//! suggestions.
//!
//! ## How it works
//!
//! - **Value classification** - every observed value gets an
//!   [`InferredType`] label (string, number, date, email, url, ...)
//! - **Column classification** - a field's type is the majority vote over
//!   its values across all records
//! - **Schema assembly** - the first record supplies the field list; the
//!   result is an array-of-records tree with one leaf per field
//!
//! ## Example
//!
//! ```rust,ignore
//! use league_onboarding_core::inference::build_schema;
//!
//! let records = vec![
//!     serde_json::json!({"name": "Sharks", "founded": "1998-04-01"}),
//!     serde_json::json!({"name": "Otters", "founded": "2003-09-12"}),
//! ];
//! let schema = build_schema(&records, "teams");
//! println!("{}", serde_json::to_string_pretty(&schema)?);
//! ```

mod builder;
mod classify;
mod config;
mod types;

pub use builder::{build_schema, generate_suggestions};
pub use classify::{classify_value, column_type};
pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use types::{InferredType, SchemaKind, SchemaNode};
