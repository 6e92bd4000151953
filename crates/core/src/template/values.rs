use std::collections::HashMap;

use serde::Deserialize;

/// Token substituted for a `true` checkbox value.
pub const AFFIRMATIVE_TOKEN: &str = "Oui";
/// Token substituted for a `false` checkbox value.
pub const NEGATIVE_TOKEN: &str = "Non";

/// Values collected for a form, keyed by raw variable name.
pub type FormValues = HashMap<String, FormValue>;

/// One submitted value.
///
/// Untagged so a values file maps directly:
///
/// ```toml
/// nomSociete = "ACME"
/// activites = ["conseil", "formation"]
/// accepteConditions = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl FormValue {
    /// The text substituted for this value: strings verbatim, lists joined
    /// with `", "`, booleans as the fixed Oui/Non token pair.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            FormValue::Text(s) => s.clone(),
            FormValue::List(items) => items.join(", "),
            FormValue::Flag(true) => AFFIRMATIVE_TOKEN.to_string(),
            FormValue::Flag(false) => NEGATIVE_TOKEN.to_string(),
        }
    }

    /// The string content, when this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Flag(b)
    }
}
