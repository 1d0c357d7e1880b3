//! Error handling for the scoring engine.

pub mod domain;

pub use domain::{ConflictKind, DomainError, NotFoundKind};
