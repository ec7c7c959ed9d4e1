use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use chatmark::{CliError, Config};

/// Config file picked up from the working directory when `--config` is not given.
const LOCAL_CONFIG: &str = "chatmark.toml";

#[derive(Parser)]
#[command(name = "chatmark", version)]
#[command(about = "Convert chat-message markdown to message markup")]
struct Cli {
    /// Input file (defaults to stdin, `-` also reads stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ./chatmark.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Allow link syntax
    #[arg(long)]
    links: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Html)]
    emit: Emit,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    Html,
    Tokens,
    Ast,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(LOCAL_CONFIG))?,
    };
    if cli.links {
        config.render.allow_links = true;
    }

    let input = read_input(cli.input.as_deref())?;

    let output = match cli.emit {
        Emit::Html => chatmark::render_with_config(&input, &config),
        Emit::Tokens => {
            let mut out = String::new();
            for token in chatmark::tokenize(&input) {
                out.push_str(&token.to_string());
                out.push('\n');
            }
            out
        }
        Emit::Ast => {
            let languages = config.languages.registry();
            let mut out = String::new();
            chatmark::parse_with(&input, &languages).write_outline(0, &mut out);
            out
        }
    };

    write_output(cli.output.as_deref(), &output)
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                name: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| CliError::Read {
                    name: "stdin".to_string(),
                    source,
                })?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, output).map_err(|source| CliError::Write {
                name: path.display().to_string(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    name: "stdout".to_string(),
                    source,
                })
        }
    }
}
