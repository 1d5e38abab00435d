//! Error handling for the Wizard engine.

pub mod domain;

pub use domain::{ActionKind, ConfigKind, DomainError};
