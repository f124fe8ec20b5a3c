//! Command-line interface for rgb_conversions
//!
//! Prints a color in hex, HSL and CMYK form

use rgb_conversions::{render, ConversionError, ReportConfig, ReportFormat, RgbColor};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = ReportConfig::default();
    let mut json = false;
    let mut precision = None;
    let mut positional = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--precision" => {
                i += 1;
                match args.get(i).and_then(|p| p.parse::<usize>().ok()) {
                    Some(p) => precision = Some(p),
                    None => {
                        eprintln!("Error: --precision expects a non-negative integer");
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("Error: --config expects a file path");
                    process::exit(1);
                };
                config = match ReportConfig::from_json_file(Path::new(path)) {
                    Ok(config) => config,
                    Err(error) => fail(&error),
                };
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    // Flags override the config file
    if json {
        config.format = ReportFormat::Json;
    }
    if let Some(p) = precision {
        config.precision = p;
    }

    let colors = match parse_colors(&positional) {
        Ok(colors) => colors,
        Err(error) => fail(&error),
    };

    match render(&colors, &config) {
        Ok(report) => print!("{}", report),
        Err(error) => fail(&error),
    }
}

/// Either groups of three integers or one hex string per color
fn parse_colors(args: &[String]) -> Result<Vec<RgbColor>, ConversionError> {
    if args.is_empty() {
        return Ok(vec![RgbColor::from_channels(255, 165, 0)]);
    }

    let numbers: Option<Vec<i64>> = args.iter().map(|a| a.parse().ok()).collect();
    match numbers {
        Some(values) if values.len() % 3 == 0 => values
            .chunks(3)
            .map(|rgb| RgbColor::new(rgb[0], rgb[1], rgb[2]))
            .collect(),
        Some(values) => {
            eprintln!("Error: expected channels in groups of three, got {}", values.len());
            process::exit(1);
        }
        None => args.iter().map(|a| a.parse()).collect(),
    }
}

fn fail(error: &ConversionError) -> ! {
    eprintln!("Conversion failed: {}", error);
    eprintln!("Suggestion: {}", error.user_message());
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [<R> <G> <B> ... | <#RRGGBB> ...]", program_name);
    eprintln!();
    eprintln!("Convert colors to hex, HSL and CMYK. Defaults to orange RGB(255, 165, 0).");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json            Print a JSON array instead of text lines");
    eprintln!("  --precision N     Decimals for HSL and CMYK values (default: 2)");
    eprintln!("  --config FILE     Load report settings from a JSON file");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to see log output on stderr.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 255 165 0", program_name);
    eprintln!("  {} --json '#336699' '#FFFFFF'", program_name);
}
