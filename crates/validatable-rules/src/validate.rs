//! This module contains the built-in value validators backing the format rules.
//!
//! Each validator takes a [`crate::prelude::Value`] as input and returns whether the value
//! passes the check. Validators only accept the value types they understand: anything else
//! fails the check.

mod case;
mod charset;
mod email;
mod pattern;
mod web;

pub use self::case::{LowercaseValidator, UppercaseValidator};
pub use self::charset::{AlphaDashValidator, AlphaNumValidator, AlphaValidator};
pub use self::email::EmailValidator;
pub use self::pattern::PatternValidator;
pub use self::web::{UrlValidator, UuidValidator};
use crate::value::Value;

/// Trait for validating [`Value`]s.
pub trait Validate {
    /// Returns whether the given [`Value`] passes the check.
    fn validate(&self, value: &Value) -> bool;
}
