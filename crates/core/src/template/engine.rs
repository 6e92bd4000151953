use std::collections::HashSet;
use std::io::{Cursor, Read, Seek, Write};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::providers::{ProviderRegistry, mentions_provider, provider_field};

use super::values::{FormValue, FormValues};

/// Archive member holding the document body. No other member is inspected.
pub const DOCUMENT_MEMBER: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template bytes are not a valid ZIP package.
    #[error("template bytes are not a valid archive: {0}")]
    Archive(#[source] ZipError),

    /// The archive is valid but holds no document body.
    #[error("template archive has no {DOCUMENT_MEMBER} member")]
    MissingContent,

    /// Re-serializing the modified archive failed.
    #[error("failed to re-package rendered document: {0}")]
    Packaging(#[source] ZipError),
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("valid regex"))
}

/// Variable names found in `markup`, unique, in order of first appearance.
fn scan_placeholders(markup: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for cap in placeholder_regex().captures_iter(markup) {
        let name = cap[1].to_string();
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }
    names
}

/// Extract all `{variable}` names from a template.
///
/// Duplicates collapse; order is the order of first appearance in the
/// document body. An empty result is valid: the template simply has no
/// placeholders.
pub fn extract_variables(template: &[u8]) -> Result<Vec<String>, TemplateError> {
    let mut archive = open(template)?;
    let markup = read_document(&mut archive)?;
    let names = scan_placeholders(&markup);
    debug!(count = names.len(), "extracted template variables");
    Ok(names)
}

/// Substitute `values` into the template and re-package it.
///
/// Provider selection values are expanded first: a text value on a
/// provider-selector key is looked up in the registry and, when found, fills
/// the document's derived provider placeholders (address, website, name)
/// that have no explicit value. The caller's map is never mutated.
///
/// Values are inserted verbatim by exact `{key}` match, with no
/// markup-aware escaping. Placeholders left unmatched after substitution
/// stay as literal text in the output.
pub fn render(
    template: &[u8],
    values: &FormValues,
    registry: &ProviderRegistry,
) -> Result<Vec<u8>, TemplateError> {
    let mut archive = open(template)?;
    let markup = read_document(&mut archive)?;

    let derived = expand_providers(&scan_placeholders(&markup), values, registry);

    let mut rendered = markup;
    for (key, value) in values {
        rendered = substitute(&rendered, key, &value.render());
    }
    for (key, text) in &derived {
        rendered = substitute(&rendered, key, text);
    }

    for leftover in scan_placeholders(&rendered) {
        warn!(placeholder = %leftover, "placeholder left unsubstituted");
    }

    repackage(&mut archive, &rendered)
}

fn open(template: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>, TemplateError> {
    ZipArchive::new(Cursor::new(template)).map_err(TemplateError::Archive)
}

fn read_document<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String, TemplateError> {
    let mut member = match archive.by_name(DOCUMENT_MEMBER) {
        Ok(m) => m,
        Err(ZipError::FileNotFound) => return Err(TemplateError::MissingContent),
        Err(e) => return Err(TemplateError::Archive(e)),
    };
    let mut markup = String::new();
    member
        .read_to_string(&mut markup)
        .map_err(|e| TemplateError::Archive(e.into()))?;
    Ok(markup)
}

/// Replace every literal `{key}` occurrence with `replacement`.
fn substitute(markup: &str, key: &str, replacement: &str) -> String {
    markup.replace(&format!("{{{key}}}"), replacement)
}

/// Derive values for provider placeholders present in the document.
///
/// A provider-selector value (a key mentioning the provider token without
/// naming a derived attribute) is treated as a display name. When the
/// registry knows it, the document's derived placeholders without an
/// explicit value get the record's attributes; unknown names derive nothing
/// and their placeholders stay literal.
fn expand_providers(
    document_vars: &[String],
    values: &FormValues,
    registry: &ProviderRegistry,
) -> Vec<(String, String)> {
    let mut derived = Vec::new();
    for (key, value) in values {
        if !mentions_provider(key) || provider_field(key).is_some() {
            continue;
        }
        let FormValue::Text(display_name) = value else {
            continue;
        };
        let Some(record) = registry.lookup_by_name(display_name) else {
            debug!(provider = %display_name, "unknown provider name, derived placeholders left as-is");
            continue;
        };
        for var in document_vars {
            if values.contains_key(var) {
                continue;
            }
            if let Some(field) = provider_field(var) {
                derived.push((var.clone(), field.value(record).to_string()));
            }
        }
    }
    derived
}

fn repackage<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    document: &str,
) -> Result<Vec<u8>, TemplateError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(TemplateError::Archive)?;
        let name = entry.name().to_string();

        if entry.is_dir() {
            writer.add_directory(name, options).map_err(TemplateError::Packaging)?;
            continue;
        }

        writer.start_file(name.as_str(), options).map_err(TemplateError::Packaging)?;
        if name == DOCUMENT_MEMBER {
            writer
                .write_all(document.as_bytes())
                .map_err(|e| TemplateError::Packaging(e.into()))?;
        } else {
            let mut content = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
            entry
                .read_to_end(&mut content)
                .map_err(|e| TemplateError::Archive(e.into()))?;
            writer.write_all(&content).map_err(|e| TemplateError::Packaging(e.into()))?;
        }
    }

    let cursor = writer.finish().map_err(TemplateError::Packaging)?;
    Ok(cursor.into_inner())
}
