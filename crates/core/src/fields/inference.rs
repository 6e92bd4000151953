use tracing::debug;

use crate::providers::{ProviderRegistry, is_provider_selector, provider_field};

use super::types::{FieldDescriptor, FieldKind};

/// Closed enumeration of legal entity forms, offered whenever a variable
/// name mentions "forme" or "type".
pub const LEGAL_FORM_OPTIONS: &[&str] =
    &["SARL", "SAS", "EURL", "Auto-entrepreneur", "Association", "Autre"];

/// Ordered (substrings, kind) rules, first match wins. Matched against the
/// lowercased variable name.
const KIND_RULES: &[(&[&str], FieldKind)] = &[
    (&["email", "mail"], FieldKind::Email),
    (&["adresse", "description", "commentaire"], FieldKind::Textarea),
    (&["date"], FieldKind::Date),
    (&["accepte", "coche", "oui", "non"], FieldKind::Checkbox),
];

/// Derive a human-readable label from a camel-case variable name.
///
/// Inserts a space before each internal capital, uppercases the first
/// character and trims. Purely textual, no locale-aware casing:
/// `nomSociete` becomes `Nom Societe`.
#[must_use]
pub fn format_field_label(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() && !spaced.is_empty() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    let mut chars = spaced.chars();
    let label: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    label.trim().to_string()
}

/// Guess the input kind from the variable name via the rule table.
#[must_use]
pub fn guess_field_kind(name: &str) -> FieldKind {
    let lower = name.to_lowercase();
    for (needles, kind) in KIND_RULES {
        if needles.iter().any(|needle| lower.contains(needle)) {
            return *kind;
        }
    }
    FieldKind::Text
}

/// Derive the form schema for a set of extracted variables.
///
/// Output order is the input order (order of first appearance in the
/// template). Provider-derived variables (address/site/name of the selected
/// provider) are suppressed: they exist in the template but are filled
/// automatically at render time.
#[must_use]
pub fn infer_fields(names: &[String], registry: &ProviderRegistry) -> Vec<FieldDescriptor> {
    names
        .iter()
        .filter_map(|name| {
            if provider_field(name).is_some() {
                debug!(variable = %name, "suppressing provider-derived variable");
                return None;
            }
            if is_provider_selector(name) {
                return Some(
                    FieldDescriptor::new(name, "Hébergeur", FieldKind::Select)
                        .with_placeholder("Sélectionnez votre hébergeur")
                        .with_options(
                            registry.display_names().iter().map(ToString::to_string).collect(),
                        ),
                );
            }

            let mut field =
                FieldDescriptor::new(name, format_field_label(name), guess_field_kind(name));

            let lower = name.to_lowercase();
            if lower.contains("forme") || lower.contains("type") {
                field = field
                    .with_options(LEGAL_FORM_OPTIONS.iter().map(ToString::to_string).collect());
            }

            Some(field)
        })
        .collect()
}
