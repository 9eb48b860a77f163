//! Sensitivity table loader
//!
//! Tables are stored as a single JSON document:
//!
//! ```json
//! {
//!   "treatments": ["Amoxicilline", "Ceftriaxone"],
//!   "items": [
//!     {"name": "Escherichia coli", "type": "bacterie", "is_bgn": true,
//!      "scores": {"Amoxicilline": 2, "Ceftriaxone": ""}}
//!   ]
//! }
//! ```
//!
//! - Rows without a name are skipped
//! - `type` may be absent or null (item has no category)
//! - Missing or unreadable files are collaborator failures

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::{TableError, TableResult};
use super::types::{parse_bgn_flag, Category, Item, TreatmentTable};

#[derive(Debug, Deserialize)]
struct RawTable {
    treatments: Vec<String>,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    category: Option<String>,
    #[serde(default)]
    is_bgn: Value,
    #[serde(default)]
    scores: Map<String, Value>,
}

/// Loads a sensitivity table snapshot from disk.
pub struct TableLoader {
    path: PathBuf,
}

impl TableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the table file. Every call produces a fresh snapshot.
    pub fn load(&self) -> TableResult<TreatmentTable> {
        let source = self.path.display().to_string();

        let content = fs::read_to_string(&self.path)
            .map_err(|e| TableError::unreadable(&source, format!("Failed to read file: {}", e)))?;

        parse_table(&content).map_err(|e| e.with_source(source))
    }
}

/// Parses a table document held in memory.
pub fn parse_table(content: &str) -> TableResult<TreatmentTable> {
    let raw: RawTable = serde_json::from_str(content)
        .map_err(|e| TableError::malformed("<in-memory>", format!("Invalid JSON: {}", e)))?;

    let mut items = Vec::with_capacity(raw.items.len());
    for raw_item in raw.items {
        if let Some(item) = convert_item(raw_item)? {
            items.push(item);
        }
    }

    TreatmentTable::new(raw.treatments, items)
}

fn convert_item(raw: RawItem) -> TableResult<Option<Item>> {
    let name = match raw.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Ok(None),
    };

    let category = match raw.category.as_deref() {
        None => None,
        Some(label) => Some(Category::parse(label).ok_or_else(|| {
            TableError::malformed(
                "<in-memory>",
                format!("Item '{}' has unknown type '{}'", name, label),
            )
        })?),
    };

    let mut item = Item::new(name, category).with_bgn(parse_bgn_flag(&raw.is_bgn));
    for (treatment, cell) in raw.scores {
        item = item.with_score(treatment, cell);
    }

    Ok(Some(item))
}
