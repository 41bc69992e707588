use crate::error::{PhonewordError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonewordConfig {
    /// Newline-delimited word list.
    pub dictionary: Option<PathBuf>,
    /// Newline-delimited phone numbers.
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    /// Worker threads for the batch; 0 lets rayon decide.
    pub threads: usize,
    /// Echo results to stdout as well as the output file.
    pub print: bool,
}

impl Default for PhonewordConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            threads: 0,
            print: false,
        }
    }
}

impl PhonewordConfig {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PhonewordError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Both file paths must be known before a run can start.
    pub fn validate(&self) -> Result<()> {
        if self.dictionary.is_none() {
            return Err(PhonewordError::ArgumentMissing("-d".into()));
        }
        if self.input.is_none() {
            return Err(PhonewordError::ArgumentMissing("-f".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(PhonewordError::Config("output path is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_output() {
        let cfg = PhonewordConfig::default();
        assert_eq!(cfg.output, PathBuf::from("output.txt"));
        assert_eq!(cfg.threads, 0);
        assert!(!cfg.print);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = PhonewordConfig::from_json(r#"{"dictionary":"words.txt","threads":4}"#).unwrap();
        assert_eq!(cfg.dictionary, Some(PathBuf::from("words.txt")));
        assert_eq!(cfg.threads, 4);
        assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(cfg.input.is_none());
    }

    #[test]
    fn test_invalid_json() {
        let err = PhonewordConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PhonewordError::Serialization(_)));
    }

    #[test]
    fn test_validate_missing_dictionary() {
        let cfg = PhonewordConfig { input: Some("numbers.txt".into()), ..Default::default() };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing argument [-d]");
    }

    #[test]
    fn test_validate_missing_input() {
        let cfg = PhonewordConfig { dictionary: Some("words.txt".into()), ..Default::default() };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing argument [-f]");
    }

    #[test]
    fn test_validate_ok() {
        let cfg = PhonewordConfig {
            dictionary: Some("words.txt".into()),
            input: Some("numbers.txt".into()),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"input":"in.txt","output":"out.txt","print":true}}"#).unwrap();
        let cfg = PhonewordConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cfg.output, PathBuf::from("out.txt"));
        assert!(cfg.print);
    }

    #[test]
    fn test_from_missing_file() {
        let err = PhonewordConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PhonewordError::Config(_)));
    }
}
