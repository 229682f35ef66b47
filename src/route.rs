//! Builds an ordered route of positions from a whole log.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use err::RouteError;
use extract;
use position::Position;
use sentence;

/// Runs validate → decompose → extract over `lines` and collects the
/// resulting positions in input order.
///
/// Lines that fail validation are skipped silently. A line that validates
/// but fails extraction halts the pass: the error carries the 1-based line
/// number, the partial route built before the fault, and the extraction
/// error itself.
pub fn route_from_lines<I, S>(lines: I) -> Result<Vec<Position>, RouteError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut route = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(valid) = sentence::validate(line.as_ref()) {
            match extract::extract(&sentence::decompose(valid)) {
                Ok(pos) => route.push(pos),
                Err(e) => return Err(RouteError::Halted(idx + 1, route, e)),
            }
        }
    }
    Ok(route)
}

/// Reads `input` line by line and builds the route.
///
/// A trailing carriage return is stripped from each line so CRLF logs
/// behave the same as LF logs; the checksum comparison runs to the end of
/// the line and would otherwise reject every line of a CRLF file.
pub fn route_from_reader<R: io::Read>(input: R) -> Result<Vec<Position>, RouteError> {
    let mut route = Vec::new();
    for (idx, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        if let Some(valid) = sentence::validate(line.trim_end_matches('\r')) {
            match extract::extract(&sentence::decompose(valid)) {
                Ok(pos) => route.push(pos),
                Err(e) => return Err(RouteError::Halted(idx + 1, route, e)),
            }
        }
    }
    Ok(route)
}

/// Opens the log file at `path` and builds the route from its lines.
///
/// Fails with `RouteError::Source` if the file cannot be opened, before
/// any line is processed. The file handle is released on every exit path.
pub fn route_from_log<P: AsRef<Path>>(path: P) -> Result<Vec<Position>, RouteError> {
    let file = File::open(path)?;
    route_from_reader(file)
}
