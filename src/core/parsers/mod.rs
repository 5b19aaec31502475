//! File parsers for message properties and templates.
//!
//! - `properties`: `key=value` message properties loader
//! - `jsp`: JSP template parser (macro declaration and message codes)

pub mod jsp;
pub mod properties;
