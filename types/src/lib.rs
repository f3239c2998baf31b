//! Core domain types for the Udyam registration wizard.
//!
//! This crate holds the declarative form schema, the pure validators, and
//! the value/error maps the state machine mutates. No IO, no async: the
//! engine owns orchestration, the TUI owns rendering, and everything in
//! here is plain data plus pure functions.

mod errors;
mod schema;
mod validate;
mod values;

pub use errors::FieldErrors;
pub use schema::{FieldKind, FieldSpec, StepSpec, field_spec, fields, steps};
pub use validate::{governed_fields, validate};
pub use values::{FormValues, SetFieldError};
