//! Records whose tag field can be migrated

use larder_core::{LarderError, LarderResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Anything carrying a tag list. Migration rewrites the tags and leaves every
/// other field alone.
pub trait Tagged {
    fn tags(&self) -> Vec<String>;
    fn set_tags(&mut self, tags: Vec<String>);
}

impl Tagged for Vec<String> {
    fn tags(&self) -> Vec<String> {
        self.clone()
    }

    fn set_tags(&mut self, tags: Vec<String>) {
        *self = tags;
    }
}

/// A recipe's `tags` value as found in legacy data.
///
/// Older ingest jobs stored the list JSON-encoded inside a string
/// (`"[\"Italian\", \"Easy\"]"`); both shapes are read, and the shape is kept
/// when tags are written back. `null` and a missing field both read as no
/// tags and are written back the way they were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagField {
    List(Vec<String>),
    Encoded(String),
    Null,
    /// The record had no `tags` key
    #[serde(skip)]
    Absent,
}

impl Default for TagField {
    fn default() -> Self {
        Self::Absent
    }
}

impl TagField {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::List(tags) => tags.clone(),
            Self::Encoded(raw) => match serde_json::from_str::<Vec<String>>(raw) {
                Ok(tags) => tags,
                Err(_) if raw.trim().is_empty() => Vec::new(),
                Err(e) => {
                    tracing::warn!(raw = %raw, error = %e, "tag string is not a JSON list, treating as one tag");
                    vec![raw.clone()]
                }
            },
            Self::Null | Self::Absent => Vec::new(),
        }
    }

    fn replace(&mut self, tags: Vec<String>) {
        *self = match self {
            Self::Null | Self::Absent if tags.is_empty() => return,
            Self::List(_) | Self::Null | Self::Absent => Self::List(tags),
            Self::Encoded(_) => match serde_json::to_string(&tags) {
                Ok(encoded) => Self::Encoded(encoded),
                Err(_) => Self::List(tags),
            },
        };
    }
}

/// A JSON recipe record: `tags` plus whatever else the record holds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyRecord {
    #[serde(default, skip_serializing_if = "TagField::is_absent")]
    pub tags: TagField,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl LegacyRecord {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: TagField::List(tags.into_iter().map(Into::into).collect()),
            rest: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.rest.insert(key.into(), value);
        self
    }
}

impl Tagged for LegacyRecord {
    fn tags(&self) -> Vec<String> {
        self.tags.to_vec()
    }

    fn set_tags(&mut self, tags: Vec<String>) {
        self.tags.replace(tags);
    }
}

fn is_json_lines(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("jsonl" | "ndjson")
    )
}

/// Read records from a JSON array file, or one record per line for `.jsonl`/`.ndjson`
pub fn read_records<P: AsRef<Path>>(path: P) -> LarderResult<Vec<LegacyRecord>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let records: Vec<LegacyRecord> = if is_json_lines(path) {
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line).map_err(|e| {
                    LarderError::Serialization(format!("{}:{}: {}", path.display(), n + 1, e))
                })
            })
            .collect::<LarderResult<_>>()?
    } else {
        serde_json::from_str(&contents)?
    };

    tracing::debug!(path = %path.display(), records = records.len(), "read records");
    Ok(records)
}

/// Write records in the same layout `read_records` accepts for `path`
pub fn write_records<P: AsRef<Path>>(path: P, records: &[LegacyRecord]) -> LarderResult<()> {
    let path = path.as_ref();
    let contents = if is_json_lines(path) {
        let mut out = String::new();
        for record in records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        out
    } else {
        serde_json::to_string_pretty(records)?
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
