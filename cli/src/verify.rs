//! The `--verify` pass: read an external solution file, convert its
//! 1-based ids to the 0-based ids the oracle works with, and check it
//! reproduces the objective the solver itself computed.

use occm_core::error::{Error, Location, ParseError};
use occm_core::oracle::Oracle;
use std::fs;

fn parse_error(path: &str, message: String) -> Error {
    Error::from(ParseError {
        at: Location {
            line: 0,
            col: 0,
            source: path.to_string(),
        },
        message,
    })
}

pub fn check(path: &str, oracle: &Oracle, claimed_objective: i64) -> Result<(), Error> {
    let contents = fs::read_to_string(path)
        .map_err(|e| parse_error(path, format!("reading verification file {path}: {e}")))?;

    let order: Vec<usize> = contents
        .split_whitespace()
        .map(|tok| {
            tok.parse::<usize>()
                .map(|v| v - 1)
                .map_err(|_| parse_error(path, format!("expected a 1-based vertex id, found `{tok}`")))
        })
        .collect::<Result<_, _>>()?;

    oracle.verify(&order, claimed_objective)?;
    Ok(())
}
