//! Rule implementations for jspcheck.
//!
//! Each rule has a `check_*_issues(ctx)` entry point plus a pure function
//! taking only the inputs it needs.
//!
//! ## Module Structure
//!
//! - `missing_code`: Codes referenced in templates but not declared
//! - `unresolved_code`: Codes that still contain an expression after substitution

pub mod missing_code;
pub mod unresolved_code;
