//! Persisted "last opened component" state.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use serde_json::{json, Map, Value};

use crate::error::SessionError;

const REMEMBER_LAST_COMPONENT_FIELD: &str = "rememberLastComponent";
const LAST_COMPONENT_FIELD: &str = "lastComponent";
const INDEX_FIELD: &str = "index";
const CHECKSUM_FIELD: &str = "checksum";

pub trait SessionStore: Send {
    fn should_remember_last_component(&self) -> bool;

    fn set_should_remember_last_component(&mut self, enabled: bool) -> Result<(), SessionError>;

    /// Index stored for the manifest with `checksum`, if any.
    fn last_opened_component(&self, checksum: &str) -> Option<usize>;

    fn store_component(&mut self, index: usize, checksum: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SessionRecord {
    remember_last_component: bool,
    last_component: Option<(usize, String)>,
}

impl SessionRecord {
    fn last_opened_component(&self, checksum: &str) -> Option<usize> {
        self.last_component
            .as_ref()
            .filter(|(_, stored)| stored == checksum)
            .map(|(index, _)| *index)
    }
}

/// Session state that lives only as long as the process. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    record: Arc<Mutex<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_record<T>(&self, f: impl FnOnce(&mut SessionRecord) -> T) -> Result<T, SessionError> {
        let mut guard = self.record.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&mut guard))
    }
}

impl SessionStore for MemorySessionStore {
    fn should_remember_last_component(&self) -> bool {
        self.with_record(|record| record.remember_last_component)
            .unwrap_or(false)
    }

    fn set_should_remember_last_component(&mut self, enabled: bool) -> Result<(), SessionError> {
        self.with_record(|record| record.remember_last_component = enabled)
    }

    fn last_opened_component(&self, checksum: &str) -> Option<usize> {
        self.with_record(|record| record.last_opened_component(checksum))
            .ok()
            .flatten()
    }

    fn store_component(&mut self, index: usize, checksum: &str) -> Result<(), SessionError> {
        self.with_record(|record| record.last_component = Some((index, checksum.to_string())))
    }
}

/// Session state kept in a JSON object file. Unknown fields are preserved.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Option<Value> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn read_record(&self) -> SessionRecord {
        let Some(state) = self.read_state() else {
            return SessionRecord::default();
        };

        let remember_last_component = state
            .get(REMEMBER_LAST_COMPONENT_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let last_component = state.get(LAST_COMPONENT_FIELD).and_then(|entry| {
            let index = usize::try_from(entry.get(INDEX_FIELD)?.as_u64()?).ok()?;
            let checksum = entry.get(CHECKSUM_FIELD)?.as_str()?;
            Some((index, checksum.to_string()))
        });

        SessionRecord {
            remember_last_component,
            last_component,
        }
    }

    fn update_state(&self, update: impl FnOnce(&mut Map<String, Value>)) -> Result<(), SessionError> {
        if let Some(parent_dir) = self.path.parent() {
            fs::create_dir_all(parent_dir).map_err(|source| SessionError::Io {
                path: parent_dir.to_path_buf(),
                source,
            })?;
        }

        let mut state = match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => value,
                Err(error) => {
                    tracing::warn!(
                        "failed to parse session state {}: {}. resetting state file",
                        self.path.display(),
                        error
                    );
                    Value::Object(Map::new())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Value::Object(Map::new()),
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if !state.is_object() {
            tracing::warn!(
                "session state {} has non-object root; resetting state file",
                self.path.display()
            );
            state = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut state {
            update(map);
        }

        let serialized = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, serialized).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn should_remember_last_component(&self) -> bool {
        self.read_record().remember_last_component
    }

    fn set_should_remember_last_component(&mut self, enabled: bool) -> Result<(), SessionError> {
        self.update_state(|map| {
            map.insert(REMEMBER_LAST_COMPONENT_FIELD.to_string(), Value::Bool(enabled));
        })
    }

    fn last_opened_component(&self, checksum: &str) -> Option<usize> {
        self.read_record().last_opened_component(checksum)
    }

    fn store_component(&mut self, index: usize, checksum: &str) -> Result<(), SessionError> {
        self.update_state(|map| {
            map.insert(
                LAST_COMPONENT_FIELD.to_string(),
                json!({ INDEX_FIELD: index, CHECKSUM_FIELD: checksum }),
            );
        })
    }
}
