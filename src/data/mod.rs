//! Input dataset contract consumed at chart construction.
//!
//! The wire format is a JSON document of parallel columns: each column is a
//! leading string identifier followed by numeric values. Exactly one column
//! is typed `"x"` (strictly increasing epoch-seconds integers), every other
//! column is typed `"line"` and must be present in `types`, `names` and
//! `colors`. Any violation is a single terminal load error; no partial
//! chart is constructed.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::{Chart, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One element of a column: the leading identifier or a numeric value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColumnEntry {
    Label(String),
    Value(f64),
}

/// Column role as declared in the `types` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    X,
    Line,
}

impl ColumnType {
    fn parse(raw: &str) -> ChartResult<Self> {
        match raw {
            "x" => Ok(Self::X),
            "line" => Ok(Self::Line),
            other => Err(ChartError::InvalidDataset(format!(
                "unknown column type `{other}`"
            ))),
        }
    }
}

/// Decoded dataset record, prior to validation into a [`Chart`].
///
/// The identifier maps preserve document order, which defines legend order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartData {
    pub columns: Vec<Vec<ColumnEntry>>,
    pub types: IndexMap<String, String>,
    pub names: IndexMap<String, String>,
    pub colors: IndexMap<String, String>,
}

impl ChartData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidDataset(format!("failed to parse dataset: {err}")))
    }

    /// Decodes a document holding several chart records.
    pub fn list_from_json_str(input: &str) -> ChartResult<Vec<Self>> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidDataset(format!("failed to parse dataset: {err}")))
    }

    /// Validates the record and builds the chart aggregate.
    pub fn into_chart(self) -> ChartResult<Chart> {
        let mut x_axis: Option<Vec<i64>> = None;
        let mut series = Vec::new();

        for column in self.columns {
            let mut entries = column.into_iter();
            let Some(ColumnEntry::Label(id)) = entries.next() else {
                return Err(ChartError::InvalidDataset(
                    "column is missing its leading identifier".to_owned(),
                ));
            };

            let mut values = Vec::new();
            for entry in entries {
                match entry {
                    ColumnEntry::Value(value) => values.push(value),
                    ColumnEntry::Label(stray) => {
                        return Err(ChartError::InvalidDataset(format!(
                            "column `{id}` contains a stray string `{stray}`"
                        )));
                    }
                }
            }

            let raw_type = self.types.get(&id).ok_or_else(|| {
                ChartError::InvalidDataset(format!("column `{id}` is missing from `types`"))
            })?;

            match ColumnType::parse(raw_type)? {
                ColumnType::X => {
                    if x_axis.is_some() {
                        return Err(ChartError::InvalidDataset(
                            "dataset declares more than one x column".to_owned(),
                        ));
                    }
                    x_axis = Some(values.iter().map(|&v| v as i64).collect());
                }
                ColumnType::Line => {
                    let name = self.names.get(&id).ok_or_else(|| {
                        ChartError::InvalidDataset(format!(
                            "column `{id}` is missing from `names`"
                        ))
                    })?;
                    let color = self.colors.get(&id).ok_or_else(|| {
                        ChartError::InvalidDataset(format!(
                            "column `{id}` is missing from `colors`"
                        ))
                    })?;
                    let color = Color::from_hex(color).map_err(|err| {
                        ChartError::InvalidDataset(format!("column `{id}`: {err}"))
                    })?;
                    series.push(Series::new(id, name.clone(), color, values));
                }
            }
        }

        let Some(x_axis) = x_axis else {
            return Err(ChartError::InvalidDataset(
                "dataset has no x column".to_owned(),
            ));
        };

        Chart::new(x_axis, series)
    }
}
