use super::registry::ProviderRecord;

/// Reserved substring identifying hosting-provider variables in templates.
pub const PROVIDER_TOKEN: &str = "hebergeur";

/// Canonicalize a variable name for provider detection: lowercase with
/// `_` and `-` separators stripped, so `adresse_hebergeur`,
/// `adresseHebergeur` and `Adresse-Hebergeur` all compare equal.
#[must_use]
pub fn normalize_identifier(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// The provider selection field itself (exact match on the reserved
/// identifier, after normalization).
#[must_use]
pub fn is_provider_selector(name: &str) -> bool {
    normalize_identifier(name) == PROVIDER_TOKEN
}

/// Any variable whose name mentions the provider token.
#[must_use]
pub fn mentions_provider(name: &str) -> bool {
    normalize_identifier(name).contains(PROVIDER_TOKEN)
}

/// A provider attribute derived from the selected provider at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderField {
    Address,
    Website,
    Name,
}

impl ProviderField {
    /// The record attribute this field maps to.
    #[must_use]
    pub fn value<'a>(&self, record: &'a ProviderRecord) -> &'a str {
        match self {
            ProviderField::Address => &record.address,
            ProviderField::Website => &record.website,
            ProviderField::Name => &record.name,
        }
    }
}

/// Classify a variable name as a provider-derived field.
///
/// Returns `Some` only when the normalized name contains the provider token
/// together with an attribute token. These variables are filled
/// automatically and never shown to the user.
#[must_use]
pub fn provider_field(name: &str) -> Option<ProviderField> {
    let normalized = normalize_identifier(name);
    if !normalized.contains(PROVIDER_TOKEN) {
        return None;
    }
    if normalized.contains("adresse") {
        Some(ProviderField::Address)
    } else if normalized.contains("site") {
        Some(ProviderField::Website)
    } else if normalized.contains("nom") {
        Some(ProviderField::Name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_collapses_spellings() {
        assert_eq!(normalize_identifier("adresseHebergeur"), "adressehebergeur");
        assert_eq!(normalize_identifier("adresse_hebergeur"), "adressehebergeur");
        assert_eq!(normalize_identifier("Adresse-Hebergeur"), "adressehebergeur");
    }

    #[test]
    fn selector_is_exact_after_normalization() {
        assert!(is_provider_selector("hebergeur"));
        assert!(is_provider_selector("Hebergeur"));
        assert!(!is_provider_selector("adresseHebergeur"));
        assert!(!is_provider_selector("nomSociete"));
    }

    #[test]
    fn derived_fields_need_both_tokens() {
        assert_eq!(provider_field("adresseHebergeur"), Some(ProviderField::Address));
        assert_eq!(provider_field("site_hebergeur"), Some(ProviderField::Website));
        assert_eq!(provider_field("nomHebergeur"), Some(ProviderField::Name));
        assert_eq!(provider_field("hebergeur"), None);
        assert_eq!(provider_field("adresse"), None);
    }
}
