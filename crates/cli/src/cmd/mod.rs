pub mod doctor;
pub mod fields;
pub mod generate;
pub mod list_providers;
pub mod list_templates;
