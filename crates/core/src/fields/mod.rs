//! Form-schema inference from template variable names.
//!
//! Given the variables extracted from a template, this module derives a
//! display schema (label, input kind, options, required-ness) using
//! naming-convention heuristics. The naming conventions are load-bearing:
//! an address field that does not contain "adresse" renders as plain text.

pub mod inference;
pub mod types;

pub use inference::{LEGAL_FORM_OPTIONS, format_field_label, guess_field_kind, infer_fields};
pub use types::{FieldDescriptor, FieldKind};
