//! Command-line interface for pgsl
//!
//! Usage:
//!   pgsl tokenize `<name>` [--format `<format>`]  - Tokenize `<name>.pgl` and print the tokens
//!   pgsl formats                                - List all available output formats
//!
//! Settings come from `--config <file>` if given, otherwise from `./pgsl.toml`
//! when present; `--format` overrides them.

use clap::{Arg, ArgAction, ArgMatches, Command};
use pgsl::pgsl::config::{Loader, PgslConfig};
use pgsl::pgsl::processor::{available_formats, format_tokens, OutputFormat};
use pgsl::pgsl::stream::tokenize_with;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let matches = Command::new("pgsl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting pgsl schema files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase logging verbosity (-v: debug, -vv+: trace)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file to use instead of ./pgsl.toml"),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a schema file and print its tokens")
                .arg(
                    Arg::new("name")
                        .help("Schema name or path, relative to the current directory (.pgl is optional)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'token-json')"),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => handle_tokenize_command(tokenize_matches).await,
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn init_tracing(verbose: u8) {
    let directive = match verbose {
        0 => "pgsl=warn",
        1 => "pgsl=debug",
        _ => "pgsl=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    config_file: Option<&String>,
    format: Option<&String>,
) -> Result<PgslConfig, config::ConfigError> {
    let mut loader = match config_file {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("pgsl.toml"),
    };
    if let Some(format) = format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the tokenize command
async fn handle_tokenize_command(matches: &ArgMatches) {
    let Some(name) = matches.get_one::<String>("name") else {
        unreachable!("name is a required argument");
    };

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let format = OutputFormat::from_name(&config.output.format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nRun 'pgsl formats' to see available formats");
        std::process::exit(1);
    });

    let rendered = match tokenize_with(name, &config.source).await {
        Ok(stream) => format_tokens(&stream, format),
        Err(e) => Err(e),
    };

    match rendered {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {:<14} {}", format.name(), format.description());
    }
}
