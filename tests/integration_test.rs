use snes_rom_analyzer::{analyze_bytes, analyze_rom, AnalyzerConfig, AnalyzerError, RomAnalysis};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, NamedTempFile};

const BIN: &str = env!("CARGO_BIN_EXE_snes-rom-analyzer");

/// A 32 KiB LoROM image with a header, some code and a string
fn sample_rom() -> Vec<u8> {
    let mut data = vec![0xFFu8; 0x8000];
    data[0..0x1000].fill(0x00);
    data[0x1000..0x1008].copy_from_slice(&[0x78, 0x18, 0xFB, 0x4C, 0x00, 0x90, 0x20, 0x10]);
    data[0x1008] = 0x80;
    data[0x2000..0x2010].copy_from_slice(b"HELLO SNES WORLD");
    data[0x7FC0..0x7FD5].copy_from_slice(b"INTEGRATION TEST     ");
    data[0x7FD9] = 0x01;
    data[0x7FFC..0x7FFE].copy_from_slice(&0x8000u16.to_le_bytes());
    data
}

fn write_rom(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(BIN).args(args).output().expect("failed to run analyzer binary")
}

#[test]
fn test_analyze_rom_from_file() {
    let file = write_rom(&sample_rom());
    let analysis = analyze_rom(file.path(), &AnalyzerConfig::default()).unwrap();

    assert_eq!(analysis.size, 0x8000);
    let header = analysis.header.as_ref().unwrap();
    assert_eq!(header.title, "INTEGRATION TEST");
    assert_eq!(header.reset_vector, 0x8000);
    assert_eq!(analysis.entry_points[0].target, header.reset_vector);
    assert!(analysis.strings.iter().any(|s| s.offset == 0x2000 && s.text == "HELLO SNES WORLD"));
}

#[test]
fn test_analyze_bytes_matches_file_analysis() {
    let file = write_rom(&sample_rom());
    let source = file.path().display().to_string();
    let config = AnalyzerConfig::default();

    let from_file = analyze_rom(file.path(), &config).unwrap();
    let from_bytes = analyze_bytes(&source, sample_rom(), &config);
    assert_eq!(from_file, from_bytes);
}

#[test]
fn test_analyze_bytes_small_image() {
    let analysis = analyze_bytes("tiny.sfc", vec![0x4C, 0x00, 0x20, 0x00], &AnalyzerConfig::default());

    assert!(analysis.header.is_none());
    assert!(analysis.header_diagnostic.is_some());
    // The JSR byte at offset 2 has only one operand byte after it
    assert_eq!(analysis.entry_points.len(), 1);
    assert_eq!(analysis.entry_points[0].target, 0x2000);
    assert_eq!(analysis.regions.len(), 1);
    assert_eq!((analysis.regions[0].start, analysis.regions[0].end), (0, 4));
}

#[test]
fn test_analyze_missing_file() {
    let err = analyze_rom(Path::new("/definitely/not/here.sfc"), &AnalyzerConfig::default()).unwrap_err();
    assert!(matches!(err, AnalyzerError::NotFound { .. }));
}

#[test]
fn test_cli_report_is_deterministic() {
    let file = write_rom(&sample_rom());
    let path = file.path().to_str().unwrap();

    let first = run_cli(&[path]);
    let second = run_cli(&[path]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let report = String::from_utf8(first.stdout).unwrap();
    assert!(report.contains("Game Title: INTEGRATION TEST\n"));
    assert!(report.contains("Reset Vector: 0x8000\n"));
    assert!(report.contains("  Reset Vector: 0x8000\n"));
    assert!(report.contains("  JMP at 0x001003: 0x9000\n"));
    assert!(report.contains("  JSR at 0x001006: 0x8010\n"));
    assert!(report.contains("  0x000000-0x001000: Zero-filled\n"));
    assert!(report.ends_with("Analysis complete!\n"));
}

#[test]
fn test_cli_small_rom_still_succeeds() {
    let file = write_rom(&vec![0x00u8; 0x7FFF]);
    let output = run_cli(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let report = String::from_utf8(output.stdout).unwrap();
    assert!(report.contains("ROM too small for SNES header"));
    assert!(report.contains("=== Entry Point Analysis ==="));
}

#[test]
fn test_cli_missing_file_fails() {
    let output = run_cli(&["/definitely/not/here.sfc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_wrong_argument_count_fails() {
    assert_eq!(run_cli(&[]).status.code(), Some(2));
    assert_eq!(run_cli(&["a.sfc", "b.sfc"]).status.code(), Some(2));
}

#[test]
fn test_cli_json_output_file() {
    let file = write_rom(&sample_rom());
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out").join("report.json");

    let output = run_cli(&[
        file.path().to_str().unwrap(),
        "--json",
        "--output",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let printed: RomAnalysis = serde_json::from_slice(&output.stdout).unwrap();
    let saved: RomAnalysis = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(printed, saved);
    assert_eq!(saved.header.unwrap().title, "INTEGRATION TEST");
}
