use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::{ArgGroup, Parser, ValueEnum};
use letter::{
    ast::printer::{render, OutputFormat},
    display_error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Sexpr,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Sexpr => OutputFormat::SExpression,
        }
    }
}

/// Parses Letter source and prints its syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["expression", "file"])))]
struct Args {
    /// Source text to parse.
    #[arg(short, long)]
    expression: Option<String>,

    /// Path of a file to parse.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Shape of the printed tree.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print the token stream instead of the tree.
    #[arg(long)]
    tokens: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("letter=warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let (source, origin) = match (&args.expression, &args.file) {
        (Some(expression), _) => (expression.clone(), String::from("<expression>")),
        (None, Some(path)) => match read_to_string(path) {
            Ok(contents) => (contents, path.display().to_string()),
            Err(error) => {
                eprintln!("Failed to read the input file '{}': {}", path.display(), error);
                process::exit(1);
            }
        },
        // clap enforces exactly one input
        (None, None) => unreachable!(),
    };

    let start = Instant::now();

    let result = if args.tokens {
        tokenize(&source).map(|tokens| dump_tokens(&tokens))
    } else {
        parse(&source).map(|program| render(&program, args.format.into()))
    };

    tracing::info!(elapsed = ?start.elapsed(), "finished");

    match result {
        Ok(Ok(text)) => println!("{}", text),
        Ok(Err(error)) => {
            eprintln!("Error: failed to render output: {}", error);
            process::exit(1);
        }
        Err(error) => {
            display_error(&error, &source, &origin);
            process::exit(1);
        }
    }
}

/// One `KIND value` line per token.
fn dump_tokens(tokens: &[Token]) -> Result<String, serde_json::Error> {
    let lines: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    Ok(lines.join("\n"))
}
