use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::error;
use reckon_rs::batch::evaluate_lines;
use reckon_rs::calculator::DEFAULT_CACHE_SIZE;
use reckon_rs::format::{format_number, DEFAULT_PRECISION};
use reckon_rs::repl::Repl;
use reckon_rs::Calculator;

/// Arithmetic calculator with variables, constants and result history.
///
/// Without arguments an interactive session is started on stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate each line of this file; `#` starts a comment line.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Significant digits used when printing results.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Number of parsed statements kept for reuse; 0 disables the cache.
    #[arg(long, default_value_t = DEFAULT_CACHE_SIZE)]
    cache_size: usize,

    /// A single statement to evaluate, e.g. `2 + 3 * 4`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    let mut calculator = Calculator::with_cache_size(args.cache_size);

    let result = if let Some(path) = &args.file {
        run_file(&mut calculator, path, args.precision)
    } else if !args.expression.is_empty() {
        run_single(&mut calculator, &args.expression.join(" "), args.precision)
    } else {
        run_repl(&mut calculator, args.precision)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("I/O error: {}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_file(calculator: &mut Calculator, path: &Path, precision: usize) -> io::Result<ExitCode> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open file: {} ({})", path.display(), e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let summary = evaluate_lines(
        calculator,
        BufReader::new(file),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        precision,
    )?;

    Ok(if summary.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_single(calculator: &mut Calculator, statement: &str, precision: usize) -> io::Result<ExitCode> {
    match calculator.evaluate(statement) {
        Ok(value) => {
            println!("{}", format_number(value, precision));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_repl(calculator: &mut Calculator, precision: usize) -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    Repl::new(calculator)
        .precision(precision)
        .interactive(interactive)
        .run(stdin.lock(), &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::SUCCESS)
}
