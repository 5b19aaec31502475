//! Core analysis engine.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. **Load**: read the properties file into `KnownCodes`
//! 2. **Scan**: walk the template root and collect template files
//! 3. **Extract**: parse each template into its resolved message codes
//!
//! `CheckContext` drives all three; the rules in `crate::rules` consume it.
//!
//! ## Module Structure
//!
//! - `context`: CheckContext, one per invocation
//! - `data`: Shared data types (KnownCodes, SourceContext)
//! - `file_scanner`: Template tree walk
//! - `parsers`: Properties and JSP parsers

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;

pub use context::CheckContext;
pub use data::{KnownCodes, SourceContext, SourceLocation};
pub use parsers::jsp::{ExtractedCode, ParsedTemplate};
