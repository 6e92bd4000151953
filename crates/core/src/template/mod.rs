//! The DOCX template engine.
//!
//! A template is a ZIP-packaged OOXML document whose `word/document.xml`
//! member contains `{variable}` placeholders. The engine is stateless: each
//! operation opens the archive, transforms the document body and emits the
//! result in one self-contained call.

pub mod discovery;
pub mod engine;
pub mod repository;
pub mod values;

pub use discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
pub use engine::{DOCUMENT_MEMBER, TemplateError, extract_variables, render};
pub use repository::{LoadedTemplate, TemplateRepoError, TemplateRepository};
pub use values::{AFFIRMATIVE_TOKEN, FormValue, FormValues, NEGATIVE_TOKEN};
