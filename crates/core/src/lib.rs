#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::implicit_hasher,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod config;
pub mod fields;
pub mod providers;
pub mod template;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
