//! Text ingestion: a count `N`, then `N` coordinate pairs.
//!
//! Tokens are whitespace-separated integers; line breaks carry no meaning.
//! Anything after the last pair is ignored.

use crate::point::Point;
use std::fmt;
use std::io::{self, Read};

/// Malformed input.
#[derive(Debug)]
pub enum ParseError {
    Io(io::Error),
    MissingCount,
    NegativeCount { value: i64 },
    BadToken { position: usize, token: String },
    OutOfRange { position: usize, value: i64 },
    Truncated { expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading points: {e}"),
            Self::MissingCount => write!(f, "empty input: expected a point count"),
            Self::NegativeCount { value } => write!(f, "point count must be >= 0, got {value}"),
            Self::BadToken { position, token } => {
                write!(f, "token {position}: expected an integer, got {token:?}")
            }
            Self::OutOfRange { position, value } => {
                write!(f, "token {position}: coordinate {value} does not fit in i32")
            }
            Self::Truncated { expected, found } => {
                write!(f, "expected {expected} points, input ends after {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Read the whole stream and parse it with [`parse_points`].
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<Point>, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_points(&text)
}

/// Parse `N x1 y1 ... xN yN`.
pub fn parse_points(text: &str) -> Result<Vec<Point>, ParseError> {
    // Positions in errors are 1-based token indices.
    let mut tokens = text.split_whitespace().enumerate().map(|(i, t)| (i + 1, t));

    let (pos, tok) = tokens.next().ok_or(ParseError::MissingCount)?;
    let count = parse_int(pos, tok)?;
    let count = usize::try_from(count).map_err(|_| ParseError::NegativeCount { value: count })?;

    // The count is untrusted; cap the up-front reservation.
    let mut points = Vec::with_capacity(count.min(1 << 20));
    for found in 0..count {
        let mut coord = || -> Result<i32, ParseError> {
            let (pos, tok) = tokens.next().ok_or(ParseError::Truncated {
                expected: count,
                found,
            })?;
            let value = parse_int(pos, tok)?;
            i32::try_from(value).map_err(|_| ParseError::OutOfRange {
                position: pos,
                value,
            })
        };
        let x = coord()?;
        let y = coord()?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn parse_int(position: usize, token: &str) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|_| ParseError::BadToken {
        position,
        token: token.to_string(),
    })
}

/// Render points in the format accepted by [`parse_points`], one pair per line.
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::with_capacity(12 + points.len() * 16);
    out.push_str(&points.len().to_string());
    out.push('\n');
    for p in points {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    out
}
