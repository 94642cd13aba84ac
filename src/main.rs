use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsconv::translate::{self, ErrorPolicy, TranslateOptions};

/// Environment variable holding the log filter, e.g. `mipsconv=debug`.
const LOG_ENV: &str = "MIPSCONV_LOG";

#[derive(Parser, Debug)]
#[command(name = "mipsconv", version, about = "Translate MIPS words and assembly")]
struct Args {
    /// Stop at the first line that cannot be translated
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Translate hexadecimal words into assembly
    #[command(name = "disasm", alias = "d")]
    Disasm {
        /// Words to translate, one per argument. Reads stdin when empty.
        words: Vec<String>,
    },
    /// Translate assembly into hexadecimal words
    #[command(name = "asm", alias = "a")]
    Asm {
        /// Instructions to translate, one per argument. Reads stdin when
        /// empty.
        lines: Vec<String>,
    },
    /// Convert a binary string to hexadecimal
    #[command(name = "bin2hex")]
    BinToHex { bits: String },
    /// Convert a hexadecimal string to binary
    #[command(name = "hex2bin")]
    HexToBin { hex: String },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = TranslateOptions {
        errors: if args.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Annotate
        },
    };

    let result: CliResult = match args.command {
        Command::Disasm { words } => input(words)
            .and_then(|text| Ok(translate::hex_to_mips(&text, &options)?)),
        Command::Asm { lines } => input(lines)
            .and_then(|text| Ok(translate::mips_to_hex(&text, &options)?)),
        Command::BinToHex { bits } => translate::binary_to_hex(&bits)
            .ok_or_else(|| format!("`{bits}` is not a binary number").into()),
        Command::HexToBin { hex } => translate::hex_to_binary(&hex)
            .ok_or_else(|| format!("`{hex}` is not a hexadecimal number").into()),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

type CliResult = Result<String, Box<dyn std::error::Error>>;

/// Joins the positional arguments into one block, or reads stdin when none
/// were given.
fn input(args: Vec<String>) -> CliResult {
    if !args.is_empty() {
        return Ok(args.join("\n"));
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    // A trailing newline would otherwise produce an extra empty line
    Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
}
