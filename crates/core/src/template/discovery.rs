use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// A discovered template, addressed by logical name.
///
/// The logical name is the path relative to the templates directory without
/// the `.docx` extension, e.g. `mentions-legales` or
/// `fr/politique-confidentialite`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("templates directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// List `.docx` templates under `root`, sorted by logical name.
pub fn discover_templates(root: &Path) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        return Err(TemplateDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;
        if !entry.file_type().is_file() || !is_template_file(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        templates.push(TemplateInfo {
            logical_name: logical_name_from_relative(rel),
            path: entry.path().to_path_buf(),
        });
    }

    templates.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    Ok(templates)
}

fn is_template_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("docx"))
}

fn logical_name_from_relative(rel: &Path) -> String {
    let stem = rel.with_extension("");
    stem.components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docx_extension_is_case_insensitive() {
        assert!(is_template_file(Path::new("a.docx")));
        assert!(is_template_file(Path::new("a.DOCX")));
        assert!(!is_template_file(Path::new("a.doc")));
        assert!(!is_template_file(Path::new("a")));
    }

    #[test]
    fn logical_names_use_forward_slashes() {
        let rel = Path::new("fr").join("mentions-legales.docx");
        assert_eq!(logical_name_from_relative(&rel), "fr/mentions-legales");
    }
}
