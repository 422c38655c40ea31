use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, SourceKind, StartupPolicy};

#[derive(Debug, Parser)]
#[command(name = "cheesy-advice")]
#[command(about = "Questionable advice, lightly cheeseified", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ~/.config/cheesy-advice/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Advice provider kind
    #[arg(long, value_parser = ["http", "file"])]
    pub source: Option<String>,

    /// Advice endpoint for the http source
    #[arg(long)]
    pub url: Option<String>,

    /// Advice JSON file for the file source
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Seed for joke draws and collection sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fetch once at startup instead of waiting for a trigger
    #[arg(long)]
    pub eager: bool,

    /// Trigger once, print the result and exit
    #[arg(long)]
    pub once: bool,

    /// Log file (default: <cache_dir>/cheesy-advice/cheesy-advice.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        match self.source.as_deref() {
            Some("http") => config.source.kind = SourceKind::Http,
            Some("file") => config.source.kind = SourceKind::File,
            _ => {}
        }
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(file) = &self.file {
            config.source.path = file.clone();
            if self.source.is_none() {
                config.source.kind = SourceKind::File;
            }
        }
        if self.eager {
            config.behavior.startup = StartupPolicy::Eager;
        }
    }
}
