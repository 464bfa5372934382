//! i18nize - replace hardcoded Thai text in EJS article templates with
//! `t()` lookup calls.
//!
//! The conversion is a literal search-and-replace driven by a fixed
//! dictionary. Each dictionary entry is tried in four template contexts
//! (element text, `placeholder` attributes, single-quoted script strings,
//! text after an icon), longest entry first.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation table, substitution rules, converter, scanner,
//!   key verification
//! - `issues`: Findings reported by the `scan` and `verify` commands

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
