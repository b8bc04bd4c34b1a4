#![deny(missing_docs)]

//! Perfect Paper Passwords - Complete SDK.
//!
//! Re-exports all PPP components for convenient single-crate usage.

pub use ppp_card as card;
pub use ppp_core as passcode;
