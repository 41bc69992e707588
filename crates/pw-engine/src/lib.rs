//! Phoneword engine — turns phone numbers into keypad words.
//!
//! Stages:
//! 1. Encoder — letter → keypad digit
//! 2. Dictionary — encoding → words, built once and shared read-only
//! 3. Substring finder — digit runs that are dictionary keys
//! 4. Pattern generator — groups of non-overlapping matches
//! 5. Expander — every word substitution of a pattern
//! 6. Validator + formatter — reject leftover digit pairs, insert dashes

pub mod dictionary;
pub mod encoder;
pub mod expander;
pub mod formatter;
pub mod pattern;
pub mod pipeline;
pub mod substring;
pub mod validator;

pub use dictionary::Dictionary;
pub use pattern::Pattern;
pub use pipeline::{normalize, Engine, Lookup};
pub use substring::SubString;
