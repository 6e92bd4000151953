use crate::{logging, FieldsArgs};
use legidoc_core::config::ConfigLoader;
use legidoc_core::fields::{infer_fields, FieldDescriptor, FieldKind};
use legidoc_core::template::{extract_variables, TemplateRepository};
use std::path::Path;
use tabled::{Table, Tabled};
use tracing::warn;

#[derive(Tabled)]
struct FieldRow {
    name: String,
    label: String,
    kind: String,
    required: bool,
    options: String,
}

impl From<&FieldDescriptor> for FieldRow {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            kind: field.kind.to_string(),
            required: field.required,
            options: field.options.as_deref().map(|o| o.join(", ")).unwrap_or_default(),
        }
    }
}

pub fn run(config: Option<&Path>, args: &FieldsArgs) {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL legidoc fields");
            println!("{e}");
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    let repo = match TemplateRepository::new(&rc.templates_dir) {
        Ok(r) => r,
        Err(e) => {
            println!("FAIL legidoc fields");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let loaded = match repo.get_by_name(&args.template) {
        Ok(t) => t,
        Err(e) => {
            println!("FAIL legidoc fields");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let fields = match extract_variables(&loaded.bytes) {
        Ok(names) => infer_fields(&names, &rc.providers),
        Err(e) => {
            warn!(error = %e, "extraction failed, using the default field list");
            fallback_fields()
        }
    };

    let rows: Vec<FieldRow> = fields.iter().map(FieldRow::from).collect();
    println!("{}", Table::new(rows));
}

/// Predefined mentions-légales fields, used when extraction fails.
fn fallback_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("nomSociete", "Nom de la société", FieldKind::Text).required(),
        FieldDescriptor::new("adresse", "Adresse", FieldKind::Textarea).required(),
        FieldDescriptor::new("codePostal", "Code postal", FieldKind::Text).required(),
        FieldDescriptor::new("ville", "Ville", FieldKind::Text).required(),
        FieldDescriptor::new("telephone", "Téléphone", FieldKind::Text).required(),
        FieldDescriptor::new("email", "Email", FieldKind::Email).required(),
        FieldDescriptor::new("siteWeb", "Site web", FieldKind::Text),
        FieldDescriptor::new("siret", "SIRET", FieldKind::Text).required(),
        FieldDescriptor::new("dirigeant", "Dirigeant", FieldKind::Text).required(),
    ]
}
