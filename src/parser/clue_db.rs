//! Clue database line format
//!
//! One clue per line: `WORD<TAB>clue<TAB>count[<TAB>year]`.
//! Blank lines and lines starting with `#` are ignored.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, space0},
    IResult,
};
use serde::Serialize;

use crate::error::ClueDbError;

/// One clue for one answer word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueRecord {
    #[serde(skip_serializing)]
    pub word: String,
    pub clue: String,
    /// How many times this clue has been used
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

fn field(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '\t' && c != '\n' && c != '\r')(input)
}

fn number<T: std::str::FromStr>(input: &str) -> IResult<&str, T> {
    let (rest, digits) = digit1(input)?;
    let value = digits.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    Ok((rest, value))
}

/// Parse a single database line
pub fn parse_clue_line(input: &str) -> IResult<&str, ClueRecord> {
    let (input, word) = field(input)?;
    let (input, _) = char('\t')(input)?;
    let (input, clue) = field(input)?;
    let (input, _) = char('\t')(input)?;
    let (input, count) = number::<u32>(input)?;

    let (input, year) = if input.starts_with('\t') {
        let (input, _) = char('\t')(input)?;
        let (input, year) = number::<u16>(input)?;
        (input, Some(year))
    } else {
        (input, None)
    };
    let (input, _) = space0(input)?;

    Ok((
        input,
        ClueRecord {
            word: normalize_word(word),
            clue: clue.trim().to_string(),
            count,
            year,
        },
    ))
}

/// Parse a whole database file
pub fn parse_clue_database(content: &str) -> Result<Vec<ClueRecord>, ClueDbError> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_clue_line(trimmed) {
            Ok((rest, record)) if rest.is_empty() => records.push(record),
            Ok((rest, _)) => {
                return Err(ClueDbError::InvalidLine {
                    line: idx + 1,
                    message: format!("unexpected trailing text {:?}", rest),
                })
            }
            Err(e) => {
                return Err(ClueDbError::InvalidLine {
                    line: idx + 1,
                    message: e.to_string(),
                })
            }
        }
    }

    Ok(records)
}

/// Uppercase and strip everything but letters and digits
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
