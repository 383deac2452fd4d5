//! Domain layer for the weather bot
//!
//! Contains core value objects and domain errors. This layer has no I/O
//! dependencies and defines the ubiquitous language.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
