//! Batch run: load the dictionary, look up every number, write the results.

use anyhow::Result;
use pw_core::{PhonewordConfig, PhonewordError};
use pw_engine::Engine;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Counts reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub words: usize,
    pub numbers: usize,
    pub phonewords: usize,
}

/// Execute one run as described by `config`.
pub fn run(config: &PhonewordConfig) -> Result<RunSummary> {
    config.validate()?;
    let dictionary = config
        .dictionary
        .as_deref()
        .ok_or_else(|| PhonewordError::ArgumentMissing("-d".into()))?;
    let input = config
        .input
        .as_deref()
        .ok_or_else(|| PhonewordError::ArgumentMissing("-f".into()))?;

    let started = Instant::now();
    let engine = Engine::from_file(dictionary)?;
    let numbers = read_numbers(input)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let phonewords = pool.install(|| engine.find_all_flat(&numbers));

    write_phonewords(&config.output, &phonewords)?;
    if config.print {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for word in &phonewords {
            writeln!(out, "{word}")?;
        }
    }

    info!(
        "Found {} phonewords for {} numbers in {:?}, written to {}",
        phonewords.len(),
        numbers.len(),
        started.elapsed(),
        config.output.display()
    );

    Ok(RunSummary {
        words: engine.dictionary().len(),
        numbers: numbers.len(),
        phonewords: phonewords.len(),
    })
}

/// Non-blank lines of the input file.
pub fn read_numbers(path: &Path) -> pw_core::Result<Vec<String>> {
    if !path.exists() {
        return Err(PhonewordError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// One phoneword per line.
pub fn write_phonewords(path: &Path, phonewords: &[String]) -> pw_core::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for word in phonewords {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;
    Ok(())
}
