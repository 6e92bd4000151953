mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "legidoc", version, about = "Generate legal documents from DOCX templates")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// List logical template names discovered under templates_dir
    ListTemplates,

    /// List the hosting-provider registry
    ListProviders,

    /// Show the form fields inferred from a template's placeholders
    Fields(FieldsArgs),

    /// Fill a template and write the generated DOCX
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Logical template name (e.g. "mentions-legales")
    #[arg(long)]
    pub template: String,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Logical template name (e.g. "mentions-legales")
    #[arg(long)]
    pub template: String,

    /// TOML file with values (string, list of strings, or boolean per key)
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// Set a single value, repeatable
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Output file (default: <template>-<unix-millis>.docx)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Never prompt; missing values stay as literal placeholders
    #[arg(long)]
    pub batch: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
        Commands::ListTemplates => cmd::list_templates::run(cli.config.as_deref()),
        Commands::ListProviders => cmd::list_providers::run(cli.config.as_deref()),
        Commands::Fields(args) => cmd::fields::run(cli.config.as_deref(), &args),
        Commands::Generate(args) => cmd::generate::run(cli.config.as_deref(), &args),
    }
}
