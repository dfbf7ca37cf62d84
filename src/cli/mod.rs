//! `docpipe` command line
//!
//! Thin layer over [`docpipe::config`]: every command loads the file through
//! [`ConfigLoader`] and prints to stdout. Errors propagate to `main` and
//! produce a non-zero exit status.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, ConfigArgs, ShowArgs};
use docpipe::config::{schema, ConfigLoader, PipelineConfig};

#[derive(Parser, Debug)]
#[command(
    name = "docpipe",
    version,
    about = "Check and inspect the document pipeline configuration."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args) => run_check(&args),
            Commands::Show(args) => run_show(&args),
            Commands::Paths(args) => run_paths(&args),
            Commands::Schema => {
                println!("{}", serde_json::to_string_pretty(&schema::json_schema())?);
                Ok(())
            }
        }
    }
}

fn loader(args: &ConfigArgs) -> ConfigLoader {
    let loader = ConfigLoader::new(&args.config);
    match &args.root {
        Some(root) => loader.with_root(root),
        None => loader,
    }
}

fn load(args: &ConfigArgs) -> Result<(ConfigLoader, PipelineConfig)> {
    let loader = loader(args);
    let config = loader
        .load()
        .with_context(|| format!("loading {}", args.config.display()))?;
    Ok((loader, config))
}

fn run_check(args: &ConfigArgs) -> Result<()> {
    let (_, config) = load(args)?;
    let rules = config.processing.compile()?;

    println!("{}: OK", args.config.display());
    println!("  patterns:   {}", rules.len());
    for rule in rules.iter() {
        match &rule.replacement {
            Some(replacement) => println!("    {} -> {:?}", rule.name, replacement),
            None => println!("    {}", rule.name),
        }
    }
    println!(
        "  sweep:      {} depths x {} metrics = {} points",
        config.experiment.depth_values.len(),
        config.experiment.metrics.len(),
        config.experiment.sweep().count()
    );
    println!(
        "  llm:        {} (temperature {}, max_tokens {})",
        config.llm.model, config.llm.temperature, config.llm.max_tokens
    );
    Ok(())
}

fn run_show(args: &ShowArgs) -> Result<()> {
    let (_, config) = load(&args.target)?;
    let text = config.render(args.format.into())?;
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_paths(args: &ConfigArgs) -> Result<()> {
    let (loader, config) = load(args)?;
    let paths = loader.resolve_paths(&config)?;
    println!("raw_pdf_dir      {}", paths.raw_pdf_dir.display());
    println!("interim_txt_dir  {}", paths.interim_txt_dir.display());
    println!("processed_corpus {}", paths.processed_corpus.display());
    Ok(())
}
