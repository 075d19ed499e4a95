// tests/test_cli.rs
use clap::Parser;
use std::fs;
use workout_core::cli::{run, Args};
use workout_core::BatchReport;

#[test]
fn test_cli_default_batch() {
    let args = Args::parse_from(["workout-summary"]);
    let mut out = Vec::new();
    let report = run(&args, &mut out).unwrap();

    assert_eq!(report, Some(BatchReport { processed: 3, failed: 0 }));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_cli_input_file_and_metrics() {
    let path = "tests/tmp_cli_batch.json";
    fs::write(path, r#"[["GGR", [1, 2]], ["RUN", [15000, 1, 75]]]"#).unwrap();

    let args = Args::parse_from(["workout-summary", "--input", path, "--metrics"]);
    let mut out = Vec::new();
    let report = run(&args, &mut out).unwrap();
    let _ = fs::remove_file(path);

    assert_eq!(report, Some(BatchReport { processed: 1, failed: 1 }));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error: "));
    assert!(text.contains("workout_summaries_total"));
    assert!(text.contains("workout_package_errors_total"));
}

#[test]
fn test_cli_missing_input_fails() {
    let args = Args::parse_from(["workout-summary", "-i", "tests/no_such_batch.json"]);
    let mut out = Vec::new();
    assert!(run(&args, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_cli_save_default() {
    let path = "tests/tmp_cli_default.json";
    let args = Args::parse_from(["workout-summary", "--save-default", path]);
    let mut out = Vec::new();
    assert_eq!(run(&args, &mut out).unwrap(), None);

    let saved = fs::read_to_string(path).unwrap();
    let _ = fs::remove_file(path);
    assert!(saved.contains("\"SWM\""));
}

#[test]
fn test_cli_save_default_rejects_batch_flags() {
    for flag in ["--json", "--metrics"] {
        let res = Args::try_parse_from(["workout-summary", "--save-default", "x.json", flag]);
        assert!(res.is_err(), "{flag} should conflict with --save-default");
    }
    let res = Args::try_parse_from(["workout-summary", "--save-default", "x.json", "-i", "b.json"]);
    assert!(res.is_err());
}
