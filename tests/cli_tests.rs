mod common;

use common::{ENGLISH_SAMPLE, PANGRAM};
use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    input_path: PathBuf,
    config_path: PathBuf,
    language_path: PathBuf,
}

impl TestContext {
    fn new(text: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_path = dir.path().join("cipher.txt");
        let config_path = dir.path().join("config.json");
        let language_path = dir.path().join("letters.csv");

        let mut input = File::create(&input_path).unwrap();
        write!(input, "{}", text).unwrap();

        let mut config = File::create(&config_path).unwrap();
        writeln!(
            config,
            r#"{{ "search": {{ "seed": 11, "climb_iterations": 100 }}, "keys": {{ "max_key_length": 8 }} }}"#
        )
        .unwrap();

        let mut letters = File::create(&language_path).unwrap();
        writeln!(letters, "letter,percent").unwrap();
        for c in 'A'..='Z' {
            writeln!(letters, "{},{}", c, if "ETAOINSHR".contains(c) { 8.0 } else { 1.5 }).unwrap();
        }

        Self {
            _dir: dir,
            input_path,
            config_path,
            language_path,
        }
    }

    fn input(&self) -> &str {
        self.input_path.to_str().unwrap()
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cipherforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn table_value(out: &str, label: &str) -> Option<String> {
    let re = Regex::new(&format!(r"\|\s*{}\s*\|\s*([^|]+?)\s*\|", regex::escape(label))).unwrap();
    re.captures(out).map(|c| c[1].to_string())
}

#[test]
fn test_cli_encrypt_decrypt_caesar() {
    let out = run(&["encrypt", "caesar", "--key", "3", "--text", "Hello, World!"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "Khoor, Zruog!");

    let out = run(&["decrypt", "caesar", "--key", "13", "--text", "URYYB JBEYQ"]);
    assert_eq!(stdout(&out).trim(), "HELLO WORLD");
}

#[test]
fn test_cli_vigenere_and_substitution_transforms() {
    let out = run(&["encrypt", "vigenere", "-k", "LEMON", "-t", "ATTACKATDAWN"]);
    assert_eq!(stdout(&out).trim(), "LXFOPVEFRNHR");

    let key = "QWERTYUIOPASDFGHJKLZXCVBNM";
    let enc = run(&["encrypt", "substitution", "-k", key, "-t", "Attack at dawn"]);
    let ct = stdout(&enc).trim().to_string();
    let dec = run(&["decrypt", "substitution", "-k", key, "-t", &ct]);
    assert_eq!(stdout(&dec).trim(), "Attack at dawn");
}

#[test]
fn test_cli_rejects_bad_keys() {
    assert!(!run(&["encrypt", "caesar", "-k", "three", "-t", "abc"]).status.success());
    assert!(!run(&["encrypt", "substitution", "-k", "ABC", "-t", "abc"]).status.success());
    assert!(!run(&["encrypt", "vigenere", "-k", "123", "-t", "abc"]).status.success());
}

#[test]
fn test_cli_break_caesar_table() {
    let ct = cipherforge::cipher::caesar::encrypt(PANGRAM, 7);
    let out = run(&["break", "caesar", "--text", &ct]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert_eq!(table_value(&text, "Key").as_deref(), Some("7"));
    assert_eq!(table_value(&text, "Status").as_deref(), Some("solved"));
    let confidence: f64 = table_value(&text, "Confidence").unwrap().parse().unwrap();
    assert!(confidence > 50.0);
    assert!(text.contains(PANGRAM));
}

#[test]
fn test_cli_break_vigenere_json_from_file() {
    let ctx = TestContext::new(&cipherforge::cipher::vigenere::encrypt(ENGLISH_SAMPLE, "LEMON"));
    let out = run(&["break", "vigenere", "--input", ctx.input(), "--json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["result"]["plaintext"], ENGLISH_SAMPLE);
    assert_eq!(json["result"]["status"], "solved");
    assert!(json["keyLengths"]["ranked"].as_array().map_or(false, |a| !a.is_empty()));
}

#[test]
fn test_cli_config_file_and_overrides() {
    let ctx = TestContext::new(&cipherforge::cipher::vigenere::encrypt(ENGLISH_SAMPLE, "LEMON"));
    let config = ctx.config_path.to_str().unwrap();

    let out = run(&["break", "vigenere", "-i", ctx.input(), "--config", config, "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let ranked = json["keyLengths"]["ranked"].as_array().unwrap();
    assert!(ranked.iter().all(|c| c["length"].as_u64().unwrap() <= 8));

    // typed flag beats the file
    let out = run(&[
        "break", "vigenere", "-i", ctx.input(), "--config", config, "--max-key-length", "4", "--json",
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let ranked = json["keyLengths"]["ranked"].as_array().unwrap();
    assert!(ranked.iter().all(|c| c["length"].as_u64().unwrap() <= 4));
}

#[test]
fn test_cli_analyze() {
    let out = run(&["analyze", "--text", ENGLISH_SAMPLE]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Index of coincidence"));
    assert_eq!(table_value(&text, "Detected language").map(|v| v.starts_with("english")), Some(true));
}

#[test]
fn test_cli_custom_language_file() {
    let ctx = TestContext::new(ENGLISH_SAMPLE);
    let lang = ctx.language_path.to_str().unwrap();
    let out = run(&["analyze", "-i", ctx.input(), "--language", "custom", "--language-file", lang, "--json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["language"], "custom");
}

#[test]
fn test_cli_unknown_language_fails() {
    let out = run(&["break", "caesar", "--language", "klingon", "--text", PANGRAM]);
    assert!(!out.status.success());
}

#[test]
fn test_cli_invalid_input_reports_status() {
    let out = run(&["break", "substitution", "--text", "1234 5678", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["result"]["status"], "invalid_input");
}
