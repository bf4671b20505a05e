//! Per-locale labels and descriptions

use larder_core::{LarderError, LarderResult, TagId, TaxonomyError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::data;
use crate::registry::TaxonomyRegistry;

pub const DEFAULT_LOCALE: &str = "en";

/// Display text for one tag in one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    pub tag_id: TagId,
    pub locale: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocaleEntry {
    pub fn new(tag_id: TagId, locale: &str, label: impl Into<String>) -> Self {
        Self {
            tag_id,
            locale: normalize_locale(locale),
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// On-disk locale file; the same shape is accepted as TOML or JSON.
///
/// ```toml
/// locale = "fr"
///
/// [[entries]]
/// tagId = "cuisine.french"
/// label = "Française"
/// description = "Cuisine de France"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleFile {
    pub locale: String,
    #[serde(default)]
    pub entries: Vec<LocaleFileEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleFileEntry {
    pub tag_id: TagId,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lowercase and use `-` between language and region (`pt_BR` -> `pt-br`)
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('_', "-").to_lowercase()
}

/// Locale lookup store with a fixed fallback chain:
/// requested locale, its base language, the default locale, the canonical
/// name, and finally a humanized leaf for ids the registry does not know.
///
/// The default locale is `en` unless overridden with
/// [`with_default_locale`](Self::with_default_locale); an overridden default
/// is tried before `en`, which always stays in the chain.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    default_locale: String,
    entries: HashMap<String, HashMap<TagId, LocaleEntry>>,
    names: HashMap<TagId, String>,
}

impl LocalizationStore {
    /// Empty store that only knows the registry's canonical names
    pub fn new(registry: &TaxonomyRegistry) -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            entries: HashMap::new(),
            names: registry
                .iter()
                .map(|n| (n.id.clone(), n.canonical_name.clone()))
                .collect(),
        }
    }

    /// Store loaded with the built-in tables.
    ///
    /// Entries for tags missing from `registry` are skipped, so this also
    /// works for registries holding a subset of the built-in taxonomy.
    pub fn builtin(registry: &TaxonomyRegistry) -> Self {
        let mut store = Self::new(registry);
        let mut skipped = 0usize;

        for entry in data::builtin_locale_entries() {
            if store.insert(entry).is_err() {
                skipped += 1;
            }
        }

        tracing::debug!(
            locales = store.entries.len(),
            skipped,
            "loaded built-in localization tables"
        );
        store
    }

    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = normalize_locale(locale);
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Add or replace an entry; the tag must be registered
    pub fn insert(&mut self, mut entry: LocaleEntry) -> Result<(), TaxonomyError> {
        if !self.names.contains_key(&entry.tag_id) {
            return Err(TaxonomyError::NotFound { id: entry.tag_id });
        }
        entry.locale = normalize_locale(&entry.locale);
        self.entries
            .entry(entry.locale.clone())
            .or_default()
            .insert(entry.tag_id.clone(), entry);
        Ok(())
    }

    /// Load a `.toml` or `.json` locale file, returning the number of entries added
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> LarderResult<usize> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let file: LocaleFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            Some("toml") => toml::from_str(&contents)?,
            _ => {
                return Err(LarderError::InvalidInput(format!(
                    "Unsupported locale file: {} (expected .toml or .json)",
                    path.display()
                )))
            }
        };

        let count = file.entries.len();
        for item in file.entries {
            let mut entry = LocaleEntry::new(item.tag_id, &file.locale, item.label);
            entry.description = item.description;
            self.insert(entry)?;
        }

        tracing::info!(path = %path.display(), locale = %file.locale, count, "loaded locale file");
        Ok(count)
    }

    /// Load every locale file in `dir` in file-name order; a missing directory loads nothing
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> LarderResult<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| matches!(p.extension().and_then(|e| e.to_str()), Some("toml" | "json")))
            .collect();
        paths.sort();

        let mut total = 0;
        for path in paths {
            total += self.load_file(&path)?;
        }
        Ok(total)
    }

    pub fn get_label(&self, id: &TagId, locale: &str) -> String {
        if let Some(entry) = self.resolve(id, locale, |_| true) {
            return entry.label.clone();
        }
        match self.names.get(id) {
            Some(name) => name.clone(),
            None => humanize(id.leaf()),
        }
    }

    pub fn get_description(&self, id: &TagId, locale: &str) -> Option<&str> {
        self.resolve(id, locale, |e| e.description.is_some())
            .and_then(|e| e.description.as_deref())
    }

    /// Locales with at least one entry, sorted
    pub fn supported_locales(&self) -> Vec<&str> {
        let locales: BTreeSet<&str> = self.entries.keys().map(String::as_str).collect();
        locales.into_iter().collect()
    }

    pub fn entry_count(&self, locale: &str) -> usize {
        self.entries.get(&normalize_locale(locale)).map_or(0, HashMap::len)
    }

    fn resolve<F>(&self, id: &TagId, locale: &str, accept: F) -> Option<&LocaleEntry>
    where
        F: Fn(&LocaleEntry) -> bool,
    {
        self.chain(locale)
            .iter()
            .filter_map(|loc| self.entries.get(loc).and_then(|m| m.get(id)))
            .find(|e| accept(e))
    }

    fn chain(&self, locale: &str) -> Vec<String> {
        let requested = normalize_locale(locale);
        let mut chain = Vec::with_capacity(4);

        if let Some((base, _)) = requested.split_once('-') {
            let base = base.to_string();
            chain.push(requested.clone());
            chain.push(base);
        } else if !requested.is_empty() {
            chain.push(requested);
        }
        for fallback in [self.default_locale.as_str(), DEFAULT_LOCALE] {
            if !chain.iter().any(|l| l == fallback) {
                chain.push(fallback.to_string());
            }
        }
        chain
    }
}

/// Turn a leaf such as `glutenFree` or `xyz-nonsense-123` into `Gluten Free` / `Xyz Nonsense 123`
pub fn humanize(leaf: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in leaf.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
