use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::xy::xy::XY;

const COMMENT_PREFIX: char = '#';
const QUOTE: char = '"';
const HEADER_SEPARATORS: [char; 3] = ['\t', ':', '='];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read data: {0}")]
    Io(#[from] std::io::Error),
    #[error("column numbers start from 1, got x = {x}, y = {y}")]
    InvalidColumns { x: usize, y: usize },
    #[error("line {line} has {found} fields, {required} required")]
    FieldCount { line: usize, required: usize, found: usize },
    #[error("line {line}: bare or unterminated quote")]
    Quote { line: usize },
    #[error("no records found")]
    Empty,
    #[error("'{0}' is not a number")]
    InvalidFloat(String)
}

/// 1-based numbers of the columns holding X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSelection {
    x: usize,
    y: usize
}

impl ColumnSelection {
    pub fn new(x: usize, y: usize) -> ColumnSelection {
        ColumnSelection { x, y }
    }

    /// X from the first column, Y from column `y`.
    pub fn y_only(y: usize) -> ColumnSelection {
        ColumnSelection { x: 1, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Zero-based (x, y) field indexes.
    pub fn indexes(&self) -> Result<(usize, usize), ParseError> {
        if self.x == 0 || self.y == 0 {
            return Err(ParseError::InvalidColumns { x: self.x, y: self.y });
        }
        Ok((self.x - 1, self.y - 1))
    }

    pub fn required_fields(&self) -> usize {
        self.x.max(self.y)
    }
}

impl Default for ColumnSelection {
    fn default() -> Self {
        ColumnSelection { x: 1, y: 2 }
    }
}

/// Parses a float that may use a decimal comma.
pub fn parse_float(s: &str) -> Result<f64, ParseError> {
    s.trim()
        .replacen(',', ".", 1)
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidFloat(s.to_owned()))
}

/// Splits a header line into a (key, value) pair.
///
/// The first tab, colon or equals sign after the first character separates
/// key from value; without one the first word is the key and the remaining
/// words, single-spaced, are the value.
pub fn parse_header(line: &str) -> Option<(String, String)> {
    let header = line.trim();
    match header.find(HEADER_SEPARATORS) {
        Some(index) if index > 0 => {
            let (key, value) = header.split_at(index);
            Some((key.to_owned(), value[1..].to_owned()))
        },
        _ => {
            let mut words = header.split_whitespace();
            let key = words.next()?;
            Some((key.to_owned(), words.collect::<Vec<_>>().join(" ")))
        }
    }
}

fn is_skipped(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(COMMENT_PREFIX)
}

fn parse_pair(x: &str, y: &str) -> Option<Point2D> {
    Some(Point2D::new(parse_float(x).ok()?, parse_float(y).ok()?))
}

fn trim_leading_space(field: &str) -> &str {
    field.trim_start_matches(|c: char| c.is_whitespace() && c != '\t')
}

/// Splits one tab-separated record.
///
/// A field starting with `"` runs to the matching closing quote, which must
/// end the field; `""` inside it stands for one quote. A quote anywhere else
/// in a field is an error, as is a quoted field left open at the end of the
/// line (quoted fields do not span lines).
fn split_tsv_record(record: &str, line: usize) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut rest = record;
    loop {
        let field = trim_leading_space(rest);
        let after = match field.strip_prefix(QUOTE) {
            Some(mut body) => {
                let mut value = String::new();
                let after = loop {
                    let end = body.find(QUOTE).ok_or(ParseError::Quote { line })?;
                    value.push_str(&body[..end]);
                    let tail = &body[end + 1..];
                    match tail.strip_prefix(QUOTE) {
                        Some(unescaped) => {
                            value.push(QUOTE);
                            body = unescaped;
                        },
                        None => break tail,
                    }
                };
                fields.push(value);
                if !after.is_empty() && !after.starts_with('\t') {
                    return Err(ParseError::Quote { line });
                }
                after.strip_prefix('\t')
            },
            None => {
                let (value, next) = match field.split_once('\t') {
                    Some((value, next)) => (value, Some(next)),
                    None => (field, None),
                };
                if value.contains(QUOTE) {
                    return Err(ParseError::Quote { line });
                }
                fields.push(value.to_owned());
                next
            }
        };
        match after {
            Some(next) => rest = next,
            None => return Ok(fields),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// Strict tab-separated records. Every record has as many fields as the
/// first one; records whose selected fields are not numbers become
/// metadata.
pub(crate) fn parse_tsv(text: &str, columns: ColumnSelection) -> Result<XY, ParseError> {
    let (xcol, ycol) = columns.indexes()?;
    let records = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(i, line)| split_tsv_record(line, i + 1).map(|fields| (i + 1, fields)))
        .collect::<Result<Vec<(usize, Vec<String>)>, ParseError>>()?;

    let (first_line, first) = records.first().ok_or(ParseError::Empty)?;
    let width = first.len();
    if width < columns.required_fields() {
        return Err(ParseError::FieldCount {
            line: *first_line,
            required: columns.required_fields(),
            found: width,
        });
    }

    let mut points = Vec::with_capacity(records.len());
    let mut meta = HashMap::new();
    for (line, fields) in &records {
        if fields.len() != width {
            return Err(ParseError::FieldCount { line: *line, required: width, found: fields.len() });
        }
        match parse_pair(&fields[xcol], &fields[ycol]) {
            Some(point) => points.push(point),
            None => {
                meta.insert(fields[xcol].clone(), fields[ycol].clone());
            }
        }
    }
    Ok(XY::from_points(points).with_meta(meta))
}

/// Whitespace-separated fields. Lines whose selected fields are not numbers
/// are parsed as headers.
pub(crate) fn parse_whitespace(text: &str, columns: ColumnSelection) -> Result<XY, ParseError> {
    let (xcol, ycol) = columns.indexes()?;
    let required = columns.required_fields();

    let mut points = Vec::new();
    let mut meta = HashMap::new();
    for (i, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < required {
            return Err(ParseError::FieldCount { line: i + 1, required, found: fields.len() });
        }
        match parse_pair(fields[xcol], fields[ycol]) {
            Some(point) => points.push(point),
            None => {
                if let Some((key, value)) = parse_header(line) {
                    meta.insert(key, value);
                }
            }
        }
    }
    Ok(XY::from_points(points).with_meta(meta))
}
