//! Persistence of filter words and the last opened page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{FilterList, Result};

/// Key-value state shared by the browser shell and the filter editor.
pub trait Store: Send + Sync {
    /// Stored filter phrases; an absent key reads as an empty list.
    fn added_filters(&self) -> Result<FilterList>;

    /// Replace the stored filter phrases.
    fn set_added_filters(&self, filters: &FilterList) -> Result<()>;

    /// The page committed most recently, if any.
    fn last_opened_page(&self) -> Result<Option<String>>;

    /// Record (or clear) the last opened page.
    fn set_last_opened_page(&self, page: Option<&str>) -> Result<()>;
}

/// On-disk layout of the state file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub added_filters: FilterList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_page: Option<String>,
}

/// JSON file store. Every write goes straight to disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl FileStore {
    /// Open the store at `path`, reading existing state.
    ///
    /// A missing file is an empty store; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                StoreState::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            StoreState::default()
        };

        debug!(
            path = %path.display(),
            filters = state.added_filters.len(),
            "Opened state store"
        );

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, apply: impl FnOnce(&mut StoreState)) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let mut next = state.clone();
        apply(&mut next);
        write_state(&self.path, &next)?;
        *state = next;
        Ok(())
    }

    fn snapshot(&self) -> StoreState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

fn write_state(path: &Path, state: &StoreState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(state)?;

    // Write then rename so readers never see a half-written file
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;

    info!(path = %path.display(), "Saved state");
    Ok(())
}

impl Store for FileStore {
    fn added_filters(&self) -> Result<FilterList> {
        Ok(self.snapshot().added_filters)
    }

    fn set_added_filters(&self, filters: &FilterList) -> Result<()> {
        self.update(|state| state.added_filters = filters.clone())
    }

    fn last_opened_page(&self) -> Result<Option<String>> {
        Ok(self.snapshot().last_opened_page)
    }

    fn set_last_opened_page(&self, page: Option<&str>) -> Result<()> {
        self.update(|state| state.last_opened_page = page.map(str::to_string))
    }
}

/// In-process store for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut filters = FilterList::new();
        for phrase in phrases {
            filters.add(phrase.as_ref());
        }
        Self {
            state: RwLock::new(StoreState {
                added_filters: filters,
                last_opened_page: None,
            }),
        }
    }
}

impl Store for MemoryStore {
    fn added_filters(&self) -> Result<FilterList> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state.added_filters.clone())
    }

    fn set_added_filters(&self, filters: &FilterList) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.added_filters = filters.clone();
        Ok(())
    }

    fn last_opened_page(&self) -> Result<Option<String>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state.last_opened_page.clone())
    }

    fn set_last_opened_page(&self, page: Option<&str>) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.last_opened_page = page.map(str::to_string);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterError;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).unwrap();

        assert!(store.added_filters().unwrap().is_empty());
        assert_eq!(store.last_opened_page().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_writes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("state.json");

        let store = FileStore::open(&path).unwrap();
        let mut filters = FilterList::new();
        filters.add("cat");
        filters.add("foo bar");
        store.set_added_filters(&filters).unwrap();
        store
            .set_last_opened_page(Some("https://example.com/"))
            .unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.added_filters().unwrap(), filters);
        assert_eq!(
            reopened.last_opened_page().unwrap().as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_file_format_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStore::open(&path).unwrap();
        store.set_last_opened_page(Some("https://a.example")).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["addedFilters"], serde_json::json!([]));
        assert_eq!(json["lastOpenedPage"], "https://a.example");
    }

    #[test]
    fn test_clearing_last_page_drops_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStore::open(&path).unwrap();
        store.set_last_opened_page(Some("https://a.example")).unwrap();
        store.set_last_opened_page(None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("lastOpenedPage"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(FileStore::open(&path), Err(FilterError::Json(_))));
    }

    #[test]
    fn test_memory_store_with_filters_dedupes() {
        let store = MemoryStore::with_filters(&["a", "b", "a"]);
        assert_eq!(store.added_filters().unwrap().as_slice(), ["b", "a"]);
    }
}
