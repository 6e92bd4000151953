use crate::prompt::{collect_values, PromptOptions};
use crate::{logging, GenerateArgs};
use chrono::Utc;
use legidoc_core::config::ConfigLoader;
use legidoc_core::fields::infer_fields;
use legidoc_core::template::{
    extract_variables, render, FormValue, FormValues, TemplateRepository,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run(config: Option<&Path>, args: &GenerateArgs) {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL legidoc generate");
            println!("{e}");
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    let repo = match TemplateRepository::new(&rc.templates_dir) {
        Ok(r) => r,
        Err(e) => {
            println!("FAIL legidoc generate");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let loaded = match repo.get_by_name(&args.template) {
        Ok(t) => t,
        Err(e) => {
            println!("FAIL legidoc generate");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let names = match extract_variables(&loaded.bytes) {
        Ok(names) => names,
        Err(e) => {
            println!("FAIL legidoc generate");
            println!("{e}");
            std::process::exit(1);
        }
    };
    let fields = infer_fields(&names, &rc.providers);

    let provided = match provided_values(args) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let options = PromptOptions { batch_mode: args.batch };
    let values = match collect_values(&fields, &provided, &options) {
        Ok(v) => v,
        Err(e) => {
            println!("FAIL legidoc generate");
            println!("{e}");
            std::process::exit(1);
        }
    };
    debug!(count = values.len(), "collected values");

    let output_bytes = match render(&loaded.bytes, &values, &rc.providers) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("FAIL legidoc generate");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&loaded.logical_name));

    if let Err(e) = fs::write(&output_path, &output_bytes) {
        println!("FAIL legidoc generate");
        println!("failed to write {}: {e}", output_path.display());
        std::process::exit(1);
    }

    println!("OK   legidoc generate");
    println!("wrote: {}", output_path.display());
}

/// Values from the `--values` file, with `--var` overrides on top.
fn provided_values(args: &GenerateArgs) -> Result<FormValues, String> {
    let mut values: FormValues = match &args.values {
        Some(path) => {
            let s = fs::read_to_string(path)
                .map_err(|e| format!("failed to read values file {}: {e}", path.display()))?;
            toml::from_str(&s)
                .map_err(|e| format!("failed to parse values file {}: {e}", path.display()))?
        }
        None => HashMap::new(),
    };

    for pair in &args.vars {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(format!("--var expects KEY=VALUE, got: {pair}"));
        };
        values.insert(key.to_string(), FormValue::from(value));
    }

    Ok(values)
}

fn default_output_path(logical_name: &str) -> PathBuf {
    let stem = logical_name.replace('/', "-");
    PathBuf::from(format!("{stem}-{}.docx", Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_name_flattens_nested_logical_names() {
        let path = default_output_path("fr/mentions-legales");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("fr-mentions-legales-"));
        assert!(name.ends_with(".docx"));
    }
}
