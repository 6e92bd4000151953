use std::fmt;

/// The input widget a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
    Select,
    Checkbox,
    Date,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Date => "date",
        };
        f.write_str(s)
    }
}

/// Rendering metadata for one template variable.
///
/// Created once per extracted variable at form-build time and immutable
/// thereafter. `name` is the raw variable name: substitution always keys on
/// it, the label is cosmetic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Always defaults to false; callers apply their own required policy.
    pub required: bool,
    pub placeholder: Option<String>,
    /// Present only for `FieldKind::Select`.
    pub options: Option<Vec<String>>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            options: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.kind = FieldKind::Select;
        self.options = Some(options);
        self
    }
}
