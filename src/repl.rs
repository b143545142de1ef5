use crate::calculator::Calculator;
use crate::format::{format_number, DEFAULT_PRECISION};
use log::debug;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  help      Show this help text
  history   Show computed results as $1, $2, ...
  exit      Quit the calculator

Supported operators: +, -, *, /, %, ^
Functions: sin, cos, tan, sqrt, log, log10, abs, ceil, floor, min, max
Constants: pi, e
Variable assignment: x = 3.14
History references: $1, $2, ...
";

/// Line-oriented front end over a [`Calculator`] session.
pub struct Repl<'a> {
    calculator: &'a mut Calculator,
    precision: usize,
    interactive: bool,
}

impl<'a> Repl<'a> {
    pub fn new(calculator: &'a mut Calculator) -> Self {
        Self {
            calculator,
            precision: DEFAULT_PRECISION,
            interactive: false,
        }
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Interactive mode prints a banner and a prompt before each line.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
        out.write_all(HELP.as_bytes())
    }

    /// Reads statements until end of input or `exit`/`quit`. Evaluation
    /// errors go to `err` and never stop the loop.
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.interactive {
            writeln!(out, "Calculator REPL. Type 'help' for commands, 'exit' to quit.")?;
        }

        let mut lines = input.lines();
        loop {
            if self.interactive {
                write!(out, "calc> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();

            match line {
                "" => continue,
                "exit" | "quit" => break,
                "help" => Self::print_help(out)?,
                "history" => {
                    for (i, value) in self.calculator.history().iter().enumerate() {
                        writeln!(out, "${} = {}", i + 1, format_number(*value, self.precision))?;
                    }
                }
                statement => match self.calculator.evaluate(statement) {
                    Ok(value) => writeln!(out, "= {}", format_number(value, self.precision))?,
                    Err(e) => {
                        debug!("Statement failed: {:?}", e);
                        writeln!(err, "{}", e)?;
                    }
                },
            }
        }

        Ok(())
    }
}
