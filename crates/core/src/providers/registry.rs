use serde::Deserialize;

/// A single hosting provider as it appears in generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderRecord {
    /// Display name shown to the user and matched on lookup.
    pub name: String,
    /// Registered postal address.
    pub address: String,
    /// Public website URL.
    pub website: String,
}

/// A registry entry as declared in the config file (`[[providers]]`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEntry {
    /// Internal key (e.g. "ovh"), never shown to the user.
    pub key: String,
    #[serde(flatten)]
    pub record: ProviderRecord,
}

/// Ordered, immutable table of hosting providers.
///
/// Declaration order is preserved: [`ProviderRegistry::display_names`]
/// returns names in the order providers were registered, which is also the
/// order they appear in the provider selection field.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    entries: Vec<(String, ProviderRecord)>,
}

impl ProviderRegistry {
    /// The compiled-in provider table.
    #[must_use]
    pub fn builtin() -> Self {
        let record = |name: &str, address: &str, website: &str| ProviderRecord {
            name: name.to_string(),
            address: address.to_string(),
            website: website.to_string(),
        };
        Self {
            entries: vec![
                (
                    "ovh".to_string(),
                    record("OVH", "2 rue Kellermann, 59100 Roubaix, France", "https://www.ovh.com"),
                ),
                (
                    "planet-hoster".to_string(),
                    record(
                        "PlanetHoster",
                        "4416 Louis B. Mayer, Laval, QC H7P 0G1, Canada",
                        "https://www.planethoster.com",
                    ),
                ),
                (
                    "ionos".to_string(),
                    record("IONOS", "Montabaur, Allemagne", "https://www.ionos.fr"),
                ),
                (
                    "hostinger".to_string(),
                    record(
                        "Hostinger",
                        "61 Lordou Vironos Street, 6023 Larnaca, Chypre",
                        "https://www.hostinger.fr",
                    ),
                ),
                ("autre".to_string(), record("Autre", "", "")),
            ],
        }
    }

    /// Build a registry from config-declared entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<ProviderEntry>) -> Self {
        Self { entries: entries.into_iter().map(|e| (e.key, e.record)).collect() }
    }

    /// Exact match against the `name` attribute (not the internal key).
    ///
    /// Absence is an expected outcome, not an error.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<&ProviderRecord> {
        self.entries.iter().map(|(_, r)| r).find(|r| r.name == name)
    }

    /// Display names in declaration order, used to populate the provider
    /// selection field.
    #[must_use]
    pub fn display_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, r)| r.name.as_str()).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ProviderRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
