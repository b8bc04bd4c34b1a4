//! Passcard page layout for Perfect Paper Passwords.
//!
//! Renders an ordered list of passcodes as a printable card: a title line
//! (with an optional right-aligned page number), a dashed rule, a row of
//! column letters, numbered rows of passcodes, and a closing rule.

pub mod card;
pub mod error;

pub use card::{CardConfig, Passcard, DEFAULT_COLUMNS, DEFAULT_TITLE};
pub use error::CardError;
