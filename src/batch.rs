use crate::calculator::Calculator;
use crate::format::format_number;
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// Outcome of evaluating a batch of statements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn has_errors(&self) -> bool {
        self.failed > 0
    }
}

/// Evaluates every line of `input` in one session. Blank lines and lines
/// starting with `#` are skipped; failures are reported as `Line N: message`
/// and evaluation continues with the next line.
pub fn evaluate_lines<R, W, E>(
    calculator: &mut Calculator,
    input: R,
    out: &mut W,
    err: &mut E,
    precision: usize,
) -> io::Result<BatchSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let statement = line.trim();
        if statement.is_empty() || statement.starts_with('#') {
            continue;
        }

        summary.evaluated += 1;
        match calculator.evaluate(statement) {
            Ok(value) => writeln!(out, "{}", format_number(value, precision))?,
            Err(e) => {
                warn!("Line {} failed: {}", index + 1, e);
                summary.failed += 1;
                writeln!(err, "Line {}: {}", index + 1, e)?;
            }
        }
    }

    info!(
        "Batch finished: {} evaluated, {} failed",
        summary.evaluated, summary.failed
    );
    Ok(summary)
}
