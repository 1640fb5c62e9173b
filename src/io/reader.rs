use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::xy::xy::XY;
use super::parser::{
    parse_tsv,
    parse_whitespace,
    ColumnSelection,
    ParseError
};

impl XY {
    /// Reads a text file holding one sample per line.
    ///
    /// Strict tab-separated records are tried first; if they do not fit,
    /// the text is read again as whitespace-separated fields with free-form
    /// header lines.
    pub fn from_file<P: AsRef<Path>>(path: P, columns: ColumnSelection) -> Result<XY, ParseError> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("parsing {}", path.as_ref().display());
        XY::parse_str(&text, columns)
    }

    pub fn parse_str(text: &str, columns: ColumnSelection) -> Result<XY, ParseError> {
        parse_tsv(text, columns).or_else(|error| {
            if let ParseError::InvalidColumns { .. } = error {
                return Err(error);
            }
            log::debug!("not a strict TSV ({}), falling back to whitespace fields", error);
            parse_whitespace(text, columns)
        })
    }
}

impl FromStr for XY {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        XY::parse_str(s, ColumnSelection::default())
    }
}
