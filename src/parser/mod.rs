//! Parsers for chop input files.
//!
//! Grid descriptions are plain JSON and deserialize straight into
//! [`crate::types::SheetDescription`]. Stylesheets need real parsing: each
//! line is matched independently against a single rule pattern.
//!
//! # Usage
//!
//! ```ignore
//! use chop::parser::parse_stylesheet;
//!
//! let source = std::fs::read_to_string("toExtractFrom/pokesprite.scss")?;
//! for rule in parse_stylesheet(&source) {
//!     println!("{} at {}", rule.token, rule.background_position());
//! }
//! ```

pub mod stylesheet;

pub use stylesheet::{extract_positions, parse_rule_line, parse_stylesheet, StyleRule};
