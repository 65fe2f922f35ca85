use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, error};
use notation_converter::interpreter::convert;
use notation_converter::interpreter::token::Notation;
use std::io;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Validates an arithmetic expression and converts it between
/// infix, postfix and prefix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert. Read from standard input when omitted
    expression: Option<String>,

    /// Notation of the expression: infix, postfix, prefix, or 1, 2, 3.
    /// Asked for interactively when omitted
    #[clap(short, long)]
    notation: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            println!("Failed to process conversion.");
            println!("Detail: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Arguments) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let expression = match args.expression {
        Some(expression) => expression,
        None => prompt(&mut input, "Enter expression: ")?,
    };
    let choice = match args.notation {
        Some(choice) => choice,
        None => {
            println!("Choose input notation:");
            for (number, notation) in Notation::ALL.iter().enumerate() {
                println!("{}. {}", number + 1, notation);
            }
            prompt(&mut input, "Choice (1/2/3): ")?
        }
    };

    let notation: Notation = match choice.parse() {
        Ok(notation) => notation,
        Err(err) => {
            debug!("{:#}", err);
            println!("Invalid choice!");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("-> Checking {}...", notation);
    let conversion = convert(expression.trim(), notation)
        .with_context(|| format!("could not convert {} expression", notation))?;
    println!("{}", conversion);

    Ok(ExitCode::SUCCESS)
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("could not write prompt")?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("could not read from standard input")?;
    Ok(line.trim().to_string())
}
