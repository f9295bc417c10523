//! Command-line interface for pylex
//! This binary answers structural questions about Python-like source files.
//!
//! Usage:
//!   pylex context `<path>` --line `<n>`                          - Describe the blocks enclosing a line
//!   pylex cursor `<path>` --line `<n>` --column `<c>` [--window `<w>`] - Words around a cursor
//!   pylex indent `<path>` --line `<n>`                           - Indentation units of a line
//!   pylex leading-spaces `<path>` --line `<n>` [--method `<m>`]    - Leading whitespace of a line
//!   pylex tree `<path>` [--format treeviz|json|yaml]             - Print the block tree
//!   pylex tokens `<path>` [--format simple|json]                 - Print the token stream
//!
//! Lines and columns are 1-based. `--config`, `--tab-size` and `--hard-tabs` apply to every
//! command and are layered over the built-in defaults.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pylex::pylex::config::{Loader, PylexConfig};
use pylex::pylex::formats::{format_tokens, format_tree, TokenFormat, TreeFormat};
use pylex::pylex::lexing::{lex, source_lines};
use pylex::pylex::messages::{indent_message, leading_spaces_message};
use pylex::pylex::{create_context_string, cursor_context, Parser, PylexError};
use std::error::Error;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn Error>>;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the source file")
        .required(true)
        .index(1)
}

fn line_arg() -> Arg {
    Arg::new("line")
        .long("line")
        .short('l')
        .help("1-based line number")
        .required(true)
        .value_parser(value_parser!(usize))
}

fn build_cli() -> Command {
    Command::new("pylex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Structural queries over indentation-based source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("tab-size")
                .long("tab-size")
                .global(true)
                .help("Spaces per indentation unit (non-numeric values fall back to 4)"),
        )
        .arg(
            Arg::new("hard-tabs")
                .long("hard-tabs")
                .global(true)
                .help("Measure indentation in tab characters")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("context")
                .about("Describe the blocks enclosing a line")
                .arg(path_arg())
                .arg(line_arg()),
        )
        .subcommand(
            Command::new("cursor")
                .about("Show the words around a cursor position")
                .arg(path_arg())
                .arg(line_arg())
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("1-based cursor column")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("window")
                        .long("window")
                        .short('w')
                        .help("Words to show on each side of the cursor word")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("indent")
                .about("Count the indentation units of a line")
                .arg(path_arg())
                .arg(line_arg()),
        )
        .subcommand(
            Command::new("leading-spaces")
                .about("Count the leading whitespace of a line")
                .arg(path_arg())
                .arg(line_arg())
                .arg(
                    Arg::new("method")
                        .long("method")
                        .short('m')
                        .help("Counting method")
                        .value_parser(["index", "arithmetic"]),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the block tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["treeviz", "json", "yaml"])
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["simple", "json"])
                        .default_value("simple"),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> CliResult<()> {
    let (name, sub) = matches
        .subcommand()
        .ok_or("a subcommand is required")?;
    let config = load_config(sub)?;
    let path = sub
        .get_one::<String>("path")
        .ok_or("a path is required")?;
    let text = std::fs::read_to_string(path).map_err(PylexError::Io)?;
    let tab_info = config.tabs.tab_info();
    tracing::debug!(path = %path, ?tab_info, "loaded document");

    let output = match name {
        "context" => {
            let line = zero_based(sub, "line")?;
            let mut parser = Parser::new(text, tab_info);
            parser.parse();
            let path = parser.context(line)?;
            create_context_string(&path, line)?
        }
        "cursor" => {
            let line = zero_based(sub, "line")?;
            let column = zero_based(sub, "column")?;
            let text_line = line_text(&text, line)?;
            cursor_context(text_line, column, config.reader.context_window)
                .unwrap_or_else(|| format!("Line {}: no context at column {}", line + 1, column + 1))
        }
        "indent" => {
            let line = zero_based(sub, "line")?;
            indent_message(line_text(&text, line)?, line, &tab_info)
        }
        "leading-spaces" => {
            let line = zero_based(sub, "line")?;
            leading_spaces_message(line_text(&text, line)?, line, config.reader.leading_spaces)
        }
        "tree" => {
            let format: TreeFormat = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("treeviz")
                .parse()?;
            let mut parser = Parser::new(text, tab_info);
            format_tree(parser.parse(), format)?
        }
        "tokens" => {
            let format: TokenFormat = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("simple")
                .parse()?;
            format_tokens(&lex(&text, tab_info), format)?
        }
        other => return Err(format!("unknown command '{}'", other).into()),
    };

    println!("{}", output);
    Ok(())
}

/// Defaults, then the optional config file, then command-line overrides.
fn load_config(sub: &ArgMatches) -> CliResult<PylexConfig> {
    let mut loader = Loader::new();
    if let Some(file) = sub.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(size) = sub.get_one::<String>("tab-size") {
        loader = loader.set_override("tabs.size", size.as_str())?;
    }
    if sub.get_flag("hard-tabs") {
        loader = loader.set_override("tabs.hard", true)?;
    }
    if let Ok(Some(window)) = sub.try_get_one::<usize>("window") {
        loader = loader.set_override("reader.context_window", *window as i64)?;
    }
    if let Ok(Some(method)) = sub.try_get_one::<String>("method") {
        loader = loader.set_override("reader.leading_spaces", method.as_str())?;
    }
    Ok(loader.build()?)
}

/// Read a 1-based numeric argument and convert it to 0-based.
fn zero_based(sub: &ArgMatches, name: &str) -> CliResult<usize> {
    let value = *sub
        .get_one::<usize>(name)
        .ok_or_else(|| format!("--{} is required", name))?;
    value
        .checked_sub(1)
        .ok_or_else(|| format!("--{} is 1-based, got 0", name).into())
}

fn line_text(text: &str, line: usize) -> CliResult<&str> {
    let lines = source_lines(text);
    let line_count = lines.len();
    lines
        .get(line)
        .copied()
        .ok_or_else(|| PylexError::out_of_bounds(line, line_count).into())
}
