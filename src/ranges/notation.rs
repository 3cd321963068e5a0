use super::run::Run;
use super::runs::Runs;
use crate::EXPANSION_LIMIT;
use crate::Error;

/// Compress a sorted sequence of distinct integers into range notation.
///
/// Runs of three or more consecutive values collapse to `start-end`;
/// shorter runs are written out. Unsorted or repeated input is not
/// rejected, it just compresses poorly.
pub fn extract(values: &[i64]) -> String {
    Runs::from(values)
        .map(|run| run.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// Expand range notation back into the integers it names.
///
/// Accepts negative bounds (`-3--1`) and ranges of any length, including
/// the two-value ranges `extract` never writes. A token that would push the
/// output past [`EXPANSION_LIMIT`] values is rejected as malformed.
pub fn expand(notation: &str) -> Result<Vec<i64>, Error> {
    if notation.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut values = Vec::new();
    for token in notation.split(',').map(str::trim) {
        let run = parse(token)?;
        match (values.len() as u64).checked_add(run.span()) {
            Some(last) if last < EXPANSION_LIMIT as u64 => values.extend(run.start()..=run.end()),
            _ => {
                log::debug!("{} expands past {} values", token, EXPANSION_LIMIT);
                return Err(Error::MalformedRange(token.to_string()));
            }
        }
    }
    Ok(values)
}

/// one token: a literal or `start-end`
fn parse(token: &str) -> Result<Run, Error> {
    let malformed = || Error::MalformedRange(token.to_string());
    if let Ok(n) = token.parse::<i64>() {
        return Ok(Run::from(n));
    }
    let split = token
        .char_indices()
        .skip(1)
        .find(|&(i, c)| c == '-' && token[..i].ends_with(|p: char| p.is_ascii_digit()))
        .map(|(i, _)| i)
        .ok_or_else(malformed)?;
    let start = token[..split].trim().parse::<i64>().map_err(|_| malformed())?;
    let end = token[split + 1..].trim().parse::<i64>().map_err(|_| malformed())?;
    match start <= end {
        true => Ok(Run::from((start, end))),
        false => Err(malformed()),
    }
}
