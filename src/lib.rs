//! jspcheck - JSP message code checker
//!
//! jspcheck is a CLI tool and library that verifies every message code
//! referenced by `<spring:message code="...">` in a tree of JSP templates is
//! declared in a `key=value` message properties file. Unknown codes fail the
//! run, so a build pipeline stops before shipping pages with broken labels.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Properties loading, template scanning and code extraction
//! - `issues`: Issue type definitions
//! - `rules`: Detection rules turning extracted codes into issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
