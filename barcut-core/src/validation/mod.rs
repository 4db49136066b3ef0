//! Validation of cut requests and produced bars.

mod validate;

pub use validate::*;
