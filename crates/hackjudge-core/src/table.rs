//! In-memory tabular data
//!
//! A [`Table`] is a header row plus string cells, the shape both the CSV
//! snapshots and the remote table store hand us. Typed records are built
//! from it by the score and roster loaders.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{HackError, Result};

/// Header-addressed rows of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from headers and rows; short rows are padded with blanks
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header matching any of `aliases`, in alias order
    pub fn find_column<S: AsRef<str>>(&self, aliases: &[S]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            self.headers
                .iter()
                .position(|h| h.trim() == alias.as_ref())
        })
    }

    /// Like [`Table::find_column`], but a miss is a `MissingColumn` error
    pub fn require_column<S: AsRef<str>>(&self, table: &str, aliases: &[S]) -> Result<usize> {
        self.find_column(aliases).ok_or_else(|| {
            let name = aliases.first().map(|a| a.as_ref()).unwrap_or("<unnamed>");
            HackError::missing_column(table, name)
        })
    }

    /// Read a CSV file with a header row
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HackError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::new(headers, rows))
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| HackError::io_operation("create", path.display(), e))?;
        self.write_csv(file)
    }

    /// Build a table from field maps as returned by the remote store.
    ///
    /// Columns appear in first-seen order across all records. Array values
    /// (lookup and multi-select fields) are joined with `, `; missing
    /// fields become blank cells.
    pub fn from_field_maps(records: &[Map<String, Value>]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for fields in records {
            for key in fields.keys() {
                if !index.contains_key(key) {
                    index.insert(key.clone(), headers.len());
                    headers.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|fields| {
                let mut row = vec![String::new(); headers.len()];
                for (key, value) in fields {
                    row[index[key]] = cell_text(value);
                }
                row
            })
            .collect();

        Self { headers, rows }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(cell_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => obj
            .get("name")
            .or_else(|| obj.get("email"))
            .map(cell_text)
            .unwrap_or_else(|| value.to_string()),
    }
}
