//! This module contains the error message types produced by a [`crate::prelude::Validator`].
//!
//! - [`MessageBag`] collects the messages of failed rules, per field.
//! - [`CustomMessages`] and [`AttributeNames`] customize how messages are rendered.

mod bag;
mod custom;
mod template;

pub use self::bag::MessageBag;
pub use self::custom::{AttributeNames, CustomMessages};
pub(crate) use self::template::render;
