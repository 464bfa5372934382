//! Conversion engine: translation table, substitution rules, file
//! converter, the leftover-text scanner, and key verification.

mod builtin;
pub mod converter;
pub mod rules;
pub mod scan;
pub mod table;
pub mod verify;

pub use converter::{
    Conversion, FileConversion, RuleHit, WriteMode, convert_file, convert_text,
};
pub use rules::{SubstitutionRule, lookup_expression};
pub use scan::{scan_file, scan_text};
pub use table::{TranslationEntry, TranslationTable};
pub use verify::{FileVerification, KeyUsage, load_defined_keys, verify_file, verify_text};
