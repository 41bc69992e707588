//! End-to-end runs against files in a temporary directory.

use pw_cli::app::{read_numbers, run, write_phonewords};
use pw_core::{PhonewordConfig, PhonewordError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup(words: &str, numbers: &str) -> (TempDir, PhonewordConfig) {
    let dir = TempDir::new().unwrap();
    let dictionary = dir.path().join("words.txt");
    let input = dir.path().join("numbers.txt");
    fs::write(&dictionary, words).unwrap();
    fs::write(&input, numbers).unwrap();
    let config = PhonewordConfig {
        dictionary: Some(dictionary),
        input: Some(input),
        output: dir.path().join("output.txt"),
        threads: 2,
        print: false,
    };
    (dir, config)
}

fn output_lines(config: &PhonewordConfig) -> Vec<String> {
    fs::read_to_string(&config.output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_run_writes_all_phonewords() {
    let (_dir, config) = setup("AAA\nBBB\nDDD\nstar\nwars\n", "222-333\n\n7827 9277 1\n");
    let summary = run(&config).unwrap();
    assert_eq!(summary.words, 5);
    assert_eq!(summary.numbers, 2);
    assert_eq!(summary.phonewords, 3);

    let mut lines = output_lines(&config);
    lines.sort();
    assert_eq!(lines, vec!["AAA-DDD", "BBB-DDD", "STAR-WARS-1"]);
}

#[test]
fn test_run_skips_bad_dictionary_lines() {
    let (_dir, config) = setup("hello\nit's\n42\n\nkitty\n", "43556\n54889\n");
    let summary = run(&config).unwrap();
    assert_eq!(summary.words, 2);
    assert_eq!(output_lines(&config), vec!["HELLO", "KITTY"]);
}

#[test]
fn test_run_no_matches_writes_empty_file() {
    let (_dir, config) = setup("hello\n", "1111111\n");
    let summary = run(&config).unwrap();
    assert_eq!(summary.phonewords, 0);
    assert!(output_lines(&config).is_empty());
}

#[test]
fn test_run_missing_dictionary() {
    let (dir, mut config) = setup("", "23\n");
    config.dictionary = Some(dir.path().join("missing.txt"));
    let err = run(&config).unwrap_err();
    let err = err.downcast_ref::<PhonewordError>().unwrap();
    assert!(matches!(err, PhonewordError::DictionaryNotFound(_)));
}

#[test]
fn test_run_missing_input() {
    let (dir, mut config) = setup("a\n", "");
    config.input = Some(dir.path().join("missing.txt"));
    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
    assert!(matches!(
        err.downcast_ref::<PhonewordError>(),
        Some(PhonewordError::InputNotFound(_))
    ));
}

#[test]
fn test_run_requires_paths() {
    let config = PhonewordConfig::default();
    let err = run(&config).unwrap_err();
    assert_eq!(err.to_string(), "Missing argument [-d]");
}

#[test]
fn test_read_numbers_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numbers.txt");
    fs::write(&path, "123\n\n   \n456\r\n").unwrap();
    assert_eq!(read_numbers(&path).unwrap(), vec!["123", "456"]);
}

#[test]
fn test_write_phonewords() {
    let dir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("out.txt");
    write_phonewords(&path, &["A-3".to_string(), "HELLO".to_string()]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "A-3\nHELLO\n");
}
