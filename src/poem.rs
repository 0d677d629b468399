// Poem module: the record written to the archive's static data files,
// plus the helpers that build it, name its file and put it on disk.
// Everything here is synchronous and free of terminal concerns so the
// session logic in `ui` can be tested against a temporary directory.

use crate::error::{EntryError, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One poem as stored in `static/poems/poem-<id>.json`. Field order here
/// is the field order in the file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PoemRecord {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub category: String,
    pub location: String,
    pub content: String,
}

/// Metadata exactly as collected from the prompts, defaults already
/// applied. `raw_id` is kept as text because it names the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemFields {
    pub raw_id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub location: String,
}

impl PoemRecord {
    /// Coerce the id and assemble the record. Fails with
    /// `EntryError::InvalidId` when the id is not an integer.
    pub fn build(fields: &PoemFields, content: String) -> Result<Self> {
        let id = parse_id(&fields.raw_id)?;
        Ok(PoemRecord {
            id,
            title: fields.title.clone(),
            date: fields.date.clone(),
            category: fields.category.clone(),
            location: fields.location.clone(),
            content,
        })
    }

    /// Pretty JSON with two-space indentation; non-ASCII stays literal.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| EntryError::InvalidId { raw: raw.to_string() })
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// `<dir>/poem-<raw_id>.json`, using the id text as entered.
pub fn poem_path(dir: &Path, raw_id: &str) -> PathBuf {
    dir.join(format!("poem-{}.json", raw_id))
}

/// Write the record, creating `dir` if needed. An existing file with the
/// same name is replaced. Returns the path written.
pub fn save(dir: &Path, raw_id: &str, record: &PoemRecord) -> Result<PathBuf> {
    let json = record.to_json()?;
    fs::create_dir_all(dir).map_err(EntryError::file("Failed to create poems directory", dir))?;
    debug!(dir = %dir.display(), "poems directory ready");

    let path = poem_path(dir, raw_id);
    fs::write(&path, json).map_err(EntryError::file("Failed to write poem file", &path))?;
    info!(path = %path.display(), id = record.id, "poem written");
    Ok(path)
}

/// Read a previously written poem file back.
pub fn load(path: &Path) -> Result<PoemRecord> {
    let data = fs::read_to_string(path).map_err(EntryError::file("Failed to read poem file", path))?;
    Ok(serde_json::from_str(&data)?)
}

/// First `max_chars` characters of `content`, with `...` appended when
/// anything was cut off.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let head: String = content.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}
