//! Subcommands and their arguments

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use docpipe::config::ConfigFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration, then print a summary
    Check(ConfigArgs),

    /// Print the normalized configuration with placeholders expanded
    Show(ShowArgs),

    /// Print the configured directories resolved to absolute paths
    Paths(ConfigArgs),

    /// Print the JSON Schema of the configuration document
    Schema,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file (.yml, .yaml, .json or .toml)
    #[arg(long, short, env = "DOCPIPE_CONFIG", default_value = "config.yml")]
    pub config: PathBuf,

    /// Project root for relative paths; defaults to the config file's directory
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: ConfigArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
    Toml,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => ConfigFormat::Yaml,
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Toml => ConfigFormat::Toml,
        }
    }
}
