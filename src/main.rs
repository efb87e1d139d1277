use anyhow::Result;
use env_logger::Builder;
use log::{info, LevelFilter};
use snes_rom_analyzer::analyzer::Analyzer;
use snes_rom_analyzer::{generator, AnalyzerConfig, AnalyzerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Parsed command line options for an analysis run
#[derive(Debug, PartialEq)]
struct CliOptions {
    rom_path: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
    config: AnalyzerConfig,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Analyze(CliOptions),
}

// Simple CLI without clap
fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("snes-rom-analyzer");

    let command = match parse_args(&args[1.min(args.len())..]) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", usage(program));
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            print!("{}", usage(program));
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("SNES ROM Analyzer v{}", snes_rom_analyzer::VERSION);
            ExitCode::SUCCESS
        }
        Command::Analyze(options) => {
            init_logger(options.verbose);
            match run(&options) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn init_logger(verbose: bool) {
    Builder::new()
        .format(|buf, record| {
            let secs = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            writeln!(buf, "{} [{}] - {}", secs, record.level(), record.args())
        })
        .filter(None, if verbose { LevelFilter::Info } else { LevelFilter::Warn })
        .parse_default_env()
        .init();
}

fn run(options: &CliOptions) -> Result<()> {
    let analyzer = Analyzer::new(options.config.clone());
    let analysis = analyzer.analyze_file(&options.rom_path)?;

    if options.json {
        println!("{}", generator::to_json(&analysis)?);
    } else {
        print!("{}", generator::render_report(&analysis));
    }

    if let Some(path) = &options.output {
        generator::save_report(&analysis, path)?;
        info!("Saved JSON report to: {}", path.display());
    }

    Ok(())
}

fn usage(program: &str) -> String {
    format!(
        "SNES ROM Analyzer v{version}\n\
         \n\
         Usage:\n  {program} <ROM_FILE> [--min-length N] [--json] [--output PATH] [--verbose]\n  {program} --version\n\
         \n\
         Options:\n\
         \x20 --min-length, -m N   Minimum length of reported strings (default: 4)\n\
         \x20 --json               Print the analysis as JSON instead of text\n\
         \x20 --output, -o PATH    Also save the analysis as JSON to PATH\n\
         \x20 --verbose            Log progress to stderr\n\
         \x20 --version, -v        Show version information\n\
         \x20 --help, -h           Show this help\n",
        version = snes_rom_analyzer::VERSION,
        program = program,
    )
}

/// Parse arguments (program name excluded)
fn parse_args(args: &[String]) -> Result<Command, AnalyzerError> {
    let mut rom_path: Option<PathBuf> = None;
    let mut json = false;
    let mut output = None;
    let mut verbose = false;
    let mut config = AnalyzerConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--json" => {
                json = true;
                i += 1;
            }
            "--verbose" => {
                verbose = true;
                i += 1;
            }
            "--output" | "-o" => {
                let value = args.get(i + 1).ok_or_else(|| {
                    AnalyzerError::InvalidArguments("missing value for --output".to_string())
                })?;
                output = Some(PathBuf::from(value));
                i += 2;
            }
            "--min-length" | "-m" => {
                let value = args.get(i + 1).ok_or_else(|| {
                    AnalyzerError::InvalidArguments("missing value for --min-length".to_string())
                })?;
                let min_length = value.parse::<usize>().ok().filter(|&n| n > 0).ok_or_else(|| {
                    AnalyzerError::InvalidArguments(format!("invalid --min-length: {}", value))
                })?;
                config = config.with_min_string_length(min_length);
                i += 2;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(AnalyzerError::InvalidArguments(format!("unknown argument: {}", flag)));
            }
            path => {
                if rom_path.is_some() {
                    return Err(AnalyzerError::InvalidArguments(format!(
                        "unexpected extra argument: {}",
                        path
                    )));
                }
                rom_path = Some(PathBuf::from(path));
                i += 1;
            }
        }
    }

    let rom_path = rom_path
        .ok_or_else(|| AnalyzerError::InvalidArguments("missing ROM file argument".to_string()))?;

    Ok(Command::Analyze(CliOptions {
        rom_path,
        json,
        output,
        verbose,
        config,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_path() {
        let command = parse_args(&args(&["game.sfc"])).unwrap();
        assert_eq!(
            command,
            Command::Analyze(CliOptions {
                rom_path: PathBuf::from("game.sfc"),
                json: false,
                output: None,
                verbose: false,
                config: AnalyzerConfig::default(),
            })
        );
    }

    #[test]
    fn test_options() {
        let command = parse_args(&args(&["--json", "-m", "6", "game.sfc", "-o", "out.json"])).unwrap();
        match command {
            Command::Analyze(options) => {
                assert!(options.json);
                assert_eq!(options.config.min_string_length, 6);
                assert_eq!(options.output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["a.sfc", "b.sfc"])).is_err());
    }

    #[test]
    fn test_bad_values() {
        assert!(parse_args(&args(&["a.sfc", "--min-length"])).is_err());
        assert!(parse_args(&args(&["a.sfc", "--min-length", "zero"])).is_err());
        assert!(parse_args(&args(&["a.sfc", "--min-length", "0"])).is_err());
        assert!(parse_args(&args(&["a.sfc", "--bogus"])).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), Command::Version);
    }
}
