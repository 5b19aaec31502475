//! Core data types shared by loading, extraction and the rules.
//!
//! ## Module Structure
//!
//! - `known_codes`: KnownCodes, the set of codes declared in the properties file
//! - `source`: Template location types (SourceContext, SourceLocation)

pub mod known_codes;
pub mod source;

pub use known_codes::KnownCodes;
pub use source::{SourceContext, SourceLocation};
