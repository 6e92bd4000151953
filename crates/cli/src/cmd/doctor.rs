use legidoc_core::config::{default_config_path, ConfigLoader};
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   legidoc doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("templates_dir: {}", rc.templates_dir.display());
            println!("providers: {}", rc.providers.len());
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL legidoc doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
