//! Command-line interface for toylang
//! This binary scans or parses a toy language program and prints the result in one of the
//! processing formats.
//!
//! Usage:
//!   toylang `<path>` [--format `<format>`] [--config `<file>`]   - Process a program
//!   toylang --list-formats                                      - List all available formats

use clap::{Arg, ArgAction, Command};
use toylang::toylang::config::{Loader, ToylangConfig};
use toylang::toylang::processor::{available_formats, process_file, ProcessingSpec};

fn main() {
    let matches = Command::new("toylang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for scanning and parsing toy language programs")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the program")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'ast-tag', 'token-simple'); defaults to output.format"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(matches.get_one::<String>("config"));
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: a program path is required");
        std::process::exit(1);
    };
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());

    handle_process_command(path, &format, &config);
}

fn load_config(path: Option<&String>) -> ToylangConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the default process command
fn handle_process_command(path: &str, format: &str, config: &ToylangConfig) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats: {}", available_formats().join(", "));
        std::process::exit(1);
    });

    let output = process_file(path, &spec, config.scanner).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
