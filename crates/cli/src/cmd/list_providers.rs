use legidoc_core::config::ConfigLoader;
use std::path::Path;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ProviderRow {
    key: String,
    name: String,
    address: String,
    website: String,
}

pub fn run(config: Option<&Path>) {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL legidoc list-providers");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let rows: Vec<ProviderRow> = rc
        .providers
        .entries()
        .map(|(key, record)| ProviderRow {
            key: key.to_string(),
            name: record.name.clone(),
            address: record.address.clone(),
            website: record.website.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
