//! The location-code lookup table.

use crate::errors::AppError;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Maps short location codes to human-readable display names.
///
/// Codes absent from the table pass through unchanged as the display name, so
/// an unknown prefix still files cleanly into a folder named after the code.
/// The table is an explicit value handed to the sorter, never global state,
/// so tests can swap in alternate tables freely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LocationMap {
    entries: HashMap<String, String>,
}

impl LocationMap {
    /// The table compiled into the tool: the dining locations of the original
    /// archive.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("JG1", "教工餐厅一层"),
            ("JG2", "教工餐厅二层"),
            ("JG3", "教工餐厅三层"),
            ("JG4", "教工餐厅四层"),
            ("JG5", "教工餐厅五层"),
            ("FW1", "风味餐厅一层"),
            ("FW2", "风味餐厅二层"),
            ("FW3", "风味餐厅三层"),
            ("FW4", "风味餐厅四层"),
            ("FW5", "风味餐厅五层"),
            ("NQ1", "南区餐厅一层"),
            ("NQ2", "南区餐厅二层"),
            ("NQ3", "南区餐厅三层"),
            ("OUT", "校外美食"),
            ("WM", "外卖"),
            ("OTH", "其他"),
        ])
    }

    /// Builds a table from `(code, display name)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Loads a replacement table from a JSON object of `{"code": "name"}`
    /// pairs. The file replaces the built-in table entirely; it is not merged.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::MappingError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let map: Self = serde_json::from_str(&text).map_err(|e| AppError::MappingError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        if map.is_empty() {
            log::warn!(
                "Location mapping '{}' is empty; all codes will pass through unchanged",
                path.display()
            );
        }
        Ok(map)
    }

    /// Resolves a code to its display name, falling back to the code itself.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.entries.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
