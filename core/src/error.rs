// Error taxonomy for the engine, aggregated into one enum the way the
// teacher aggregates lexer/parser/semantic errors: each variant keeps enough
// location context to print a caret line, and `Display` is hand-rolled
// rather than derived so the CLI gets readable diagnostics without an extra
// formatting pass at the call site.

use colored::Colorize;
use std::fmt;

/// A location in a DIMACS-style input file, used to point a caret at the
/// offending line.
#[derive(Debug, Clone)]
pub struct Location {
    pub line: usize,
    pub col: usize,
    pub source: String,
}

#[derive(Debug)]
pub struct ParseError {
    pub at: Location,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_common(&self.at, &self.message, f)
    }
}

impl std::error::Error for ParseError {}

/// Raised when an internal invariant the algorithms depend on does not
/// hold, e.g. the crossing matrix sweep finishing with a nonempty active
/// set, or a reducer rule handed a sub-instance it cannot apply to.
#[derive(Debug)]
pub struct InvariantViolated {
    pub message: String,
}

impl fmt::Display for InvariantViolated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            "invariant violated".bright_red().bold(),
            self.message
        )
    }
}

impl std::error::Error for InvariantViolated {}

/// An optimizer backend reported failure: infeasible model, solver timeout,
/// or a bound it could not certify.
#[derive(Debug)]
pub struct SolverError {
    pub backend: String,
    pub message: String,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {}",
            "solver error".bright_red().bold(),
            self.backend,
            self.message
        )
    }
}

impl std::error::Error for SolverError {}

/// The `--verify` pass recomputed the objective from a produced solution
/// and found it did not match what the optimizer claimed.
#[derive(Debug)]
pub struct VerificationFailed {
    pub claimed: i64,
    pub actual: i64,
}

impl fmt::Display for VerificationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: solver claimed {} but the recomputed objective is {}",
            "verification failed".bright_red().bold(),
            self.claimed,
            self.actual
        )
    }
}

impl std::error::Error for VerificationFailed {}

#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Invariant(InvariantViolated),
    Solver(SolverError),
    Verification(VerificationFailed),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Invariant(e) => e.fmt(f),
            Self::Solver(e) => e.fmt(f),
            Self::Verification(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<InvariantViolated> for Error {
    fn from(e: InvariantViolated) -> Self {
        Self::Invariant(e)
    }
}

impl From<SolverError> for Error {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

impl From<VerificationFailed> for Error {
    fn from(e: VerificationFailed) -> Self {
        Self::Verification(e)
    }
}

fn carat_line(line: &str, col: usize) -> String {
    let mut carat = String::new();
    for x in line[..col.min(line.len())].chars() {
        if x.is_whitespace() {
            carat.push(x);
        } else {
            carat.push(' ');
        }
    }
    let rest = &line[col.min(line.len())..];
    let len = rest.split_whitespace().next().map(str::len).unwrap_or(1).max(1);
    for _ in 0..len {
        carat.push('^');
    }
    carat
}

fn fmt_common(at: &Location, message: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let loc = format!("[{}:{}]", at.line + 1, at.col + 1)
        .as_str()
        .bright_red();
    writeln!(
        f,
        "{}: {}\n{}\n",
        "error".bright_red(),
        message.bright_white().bold(),
        loc,
    )?;
    writeln!(f, "  {}", at.source)?;
    write!(f, "  {}", carat_line(&at.source, at.col).bright_red())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_caret_under_offending_token() {
        let e = ParseError {
            at: Location {
                line: 2,
                col: 4,
                source: "p ocr  2 3 5".into(),
            },
            message: "expected an integer".into(),
        };
        let rendered = format!("{e}");
        assert!(rendered.contains("expected an integer"));
        assert!(rendered.contains('^'));
    }

    #[test]
    fn verification_failed_reports_both_values() {
        let e = VerificationFailed {
            claimed: 3,
            actual: 5,
        };
        let rendered = format!("{e}");
        assert!(rendered.contains('3'));
        assert!(rendered.contains('5'));
    }
}
