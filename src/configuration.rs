use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::io::parser::ColumnSelection;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::PolynomialType;
use crate::xy::analysis::NoiseOptions;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot open configuration: {0}")]
    IOError(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    JsonParseError(#[from] serde_json::Error)
}

/// Tool settings; every field falls back to its default when absent.
///
/// ```json
/// {
///     "interpolation": "linear",
///     "noise": { "min_precision": 3, "max_precision": 12 },
///     "columns": { "x": 1, "y": 3 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    interpolation: PolynomialType,
    noise: NoiseOptions,
    columns: ColumnSelection
}

impl Configuration {
    pub fn new(interpolation: PolynomialType, noise: NoiseOptions, columns: ColumnSelection) -> Configuration {
        Configuration { interpolation, noise, columns }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn interpolation(&self) -> PolynomialType {
        self.interpolation
    }

    pub fn noise(&self) -> &NoiseOptions {
        &self.noise
    }

    pub fn columns(&self) -> ColumnSelection {
        self.columns
    }

    pub fn set_columns(&mut self, columns: ColumnSelection) {
        self.columns = columns;
    }
}
