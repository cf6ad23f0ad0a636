//! `hanzi58` CLI -- encode, decode, validate, and inspect the glyph table.
//!
//! Every subcommand works line by line: each non-empty input line is one
//! token (an address, a WIF key, or its glyph form).
//!
//! ## Usage
//!
//! ```sh
//! # Encode an address (stdin → stdout)
//! echo 1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa | hanzi58 encode
//!
//! # Encode a WIF key for a paper wallet, 26 glyphs per chunk
//! hanzi58 encode -i key.txt --chunk 26 --separator '<br>'
//!
//! # Decode (display separators are ignored)
//! hanzi58 decode -i key.hanzi -o key.txt
//!
//! # Check what each line is
//! hanzi58 validate -i tokens.txt
//!
//! # Print the table, or one class of it, optionally as JSON
//! hanzi58 table --class uppercase --json
//! ```
//!
//! Set `RUST_LOG=debug` to see codec diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hanzi58::{Codec, SymbolClass, TableEntry};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hanzi58",
    version,
    about = "Encode base58ext strings as Chinese glyphs and back"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode base58ext lines into glyphs
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Insert a separator after every N glyphs (never at the end)
        #[arg(long)]
        chunk: Option<usize>,
        /// Separator used with --chunk
        #[arg(long, default_value = " ")]
        separator: String,
    },
    /// Decode glyph lines back to base58ext
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Classify each line as base58ext, hanzi, or invalid
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the symbol/glyph table
    Table {
        /// Only print one symbol class
        #[arg(long, value_enum)]
        class: Option<ClassArg>,
        /// Print a JSON array instead of tab-separated rows
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassArg {
    Digit,
    Uppercase,
    Lowercase,
}

impl From<ClassArg> for SymbolClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Digit => SymbolClass::Digit,
            ClassArg::Uppercase => SymbolClass::Uppercase,
            ClassArg::Lowercase => SymbolClass::Lowercase,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let codec = hanzi58::default_codec();

    match cli.command {
        Commands::Encode {
            input,
            output,
            chunk,
            separator,
        } => {
            if chunk == Some(0) {
                anyhow::bail!("--chunk must be at least 1");
            }
            check_separator(&separator)?;
            let text = read_input(input.as_deref())?;
            tracing::debug!(lines = token_lines(&text).count(), "encoding");
            let encoded = codec
                .encode_batch(token_lines(&text))
                .context("Failed to encode base58ext input")?;
            let lines: Vec<String> = match chunk {
                Some(n) => encoded
                    .iter()
                    .map(|line| chunk_glyphs(line, n, &separator))
                    .collect(),
                None => encoded,
            };
            write_output(output.as_deref(), &join_lines(&lines))?;
        }
        Commands::Decode { input, output } => {
            let text = read_input(input.as_deref())?;
            tracing::debug!(lines = token_lines(&text).count(), "decoding");
            let decoded = codec
                .decode_batch(token_lines(&text))
                .context("Failed to decode glyph input")?;
            write_output(output.as_deref(), &join_lines(&decoded))?;
        }
        Commands::Validate { input } => {
            let text = read_input(input.as_deref())?;
            let mut any_invalid = false;
            for line in token_lines(&text) {
                let kind = classify(codec, line);
                any_invalid |= kind == "invalid";
                println!("{}\t{}", kind, line);
            }
            if any_invalid {
                process::exit(1);
            }
        }
        Commands::Table { class, json } => {
            let entries: Vec<TableEntry> = codec
                .entries()
                .into_iter()
                .filter(|e| class.is_none_or(|c| e.class == SymbolClass::from(c)))
                .collect();
            if json {
                let out = serde_json::to_string_pretty(&entries)
                    .context("Failed to serialize table")?;
                println!("{}", out);
            } else {
                for e in &entries {
                    println!("{}\t{}\t{}", e.symbol, e.glyph, e.class.name());
                }
            }
        }
    }

    Ok(())
}

/// Non-empty, trimmed lines of the input.
fn token_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn classify(codec: &Codec, line: &str) -> &'static str {
    if codec.is_valid_base58ext(line) {
        "base58ext"
    } else if codec.is_valid_hanzi_encoded(line) {
        "hanzi"
    } else {
        "invalid"
    }
}

/// Reject separators that would not survive `decode`: CJK characters are
/// read back as glyphs, and line breaks split one token into several.
fn check_separator(separator: &str) -> Result<()> {
    if let Some(c) = separator
        .chars()
        .find(|&c| hanzi58::filter::is_cjk_unified(c) || c == '\n' || c == '\r')
    {
        anyhow::bail!(
            "--separator must not contain CJK characters or line breaks (found {:?})",
            c
        );
    }
    Ok(())
}

/// Insert `separator` after every `n` glyphs, except after the last group.
fn chunk_glyphs(glyphs: &str, n: usize, separator: &str) -> String {
    let chars: Vec<char> = glyphs.chars().collect();
    chars
        .chunks(n)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
