//! CLI argument definitions

use clap::{ArgAction, Parser};
use pw_core::{PhonewordConfig, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phoneword")]
#[command(about = "Find dictionary words hidden in phone numbers")]
#[command(version)]
pub struct Cli {
    /// Dictionary file, one word per line
    #[arg(short = 'd', long)]
    pub dictionary: Option<PathBuf>,

    /// File of phone numbers, one per line
    #[arg(short = 'f', long = "file")]
    pub input: Option<PathBuf>,

    /// Output file [default: output.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Also print phonewords to stdout
    #[arg(long)]
    pub print: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge the config file (if any) with the flags and check the result.
    pub fn into_config(self) -> Result<PhonewordConfig> {
        let mut config = match &self.config {
            Some(path) => PhonewordConfig::from_file(path)?,
            None => PhonewordConfig::default(),
        };

        if self.dictionary.is_some() {
            config.dictionary = self.dictionary;
        }
        if self.input.is_some() {
            config.input = self.input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config.print |= self.print;

        config.validate()?;
        Ok(config)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
