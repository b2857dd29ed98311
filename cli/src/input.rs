use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No location given")]
    Empty,
    #[error("Not a number: {0:?}")]
    NotANumber(String),
}

/// Parses `row,col` as typed by the player.
///
/// Whitespace around each part is ignored. Only the first and the last comma separated parts
/// are used, so a lone number digs on the diagonal. Values are signed so that negative input
/// can be reported as out of range by the caller instead of as a parse failure.
pub fn parse_location(line: &str) -> Result<(i64, i64), InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let mut tokens = line.split(',').map(str::trim);
    let first = tokens.next().ok_or(InputError::Empty)?;
    let last = tokens.next_back().unwrap_or(first);

    Ok((parse_number(first)?, parse_number(last)?))
}

fn parse_number(token: &str) -> Result<i64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_owned()))
}
