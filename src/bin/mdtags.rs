//! Command-line interface for mdtags
//! This binary scans a markdown file and prints its tag stream in one of the registered formats.
//!
//! Usage:
//!   mdtags `<path>` [--format `<format>`] [--config `<file>`] [--backend `<backend>`]
//!   mdtags - ...            - Read the markdown from stdin
//!   mdtags --list-formats   - List the available output formats
//!
//! Logging goes to stderr and is controlled by the `MDTAGS_LOG` environment variable
//! (e.g. `MDTAGS_LOG=debug`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use mdtags::markdown::config::{Loader, MdTagsConfig};
use mdtags::markdown::formats::{OutputFormat, TagStream};
use mdtags::markdown::ParserKind;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let backends: Vec<&str> = ParserKind::ALL.iter().map(|kind| kind.name()).collect();
    let matches = Command::new("mdtags")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scan markdown into a flat stream of tags")
        .arg(
            Arg::new("path")
                .help("Path to the markdown file, or - for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (defaults to output.format from the config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .help("Parser backend")
                .value_parser(backends),
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

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");

    handle_scan_command(&config, path);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MDTAGS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then --config, then --backend and --format.
fn load_config(matches: &ArgMatches) -> Result<MdTagsConfig, Box<dyn std::error::Error>> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(backend) = matches
        .get_one::<String>("backend")
        .and_then(|name| ParserKind::from_name(name))
    {
        loader = loader.with_backend(backend)?;
    }
    if let Some(name) = matches.get_one::<String>("format") {
        loader = loader.with_format(name.parse::<OutputFormat>()?)?;
    }
    Ok(loader.build()?)
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Scan the input and print it in the configured format
fn handle_scan_command(config: &MdTagsConfig, path: &str) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let parser = config.build_parser();
    let format = config.output.format;
    debug!(backend = parser.name(), path, %format, "scanning");
    let stream = TagStream::scan(parser.as_ref(), &source);
    let output = format.serialize(&stream).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
    }
}
