use std::collections::HashMap;
use std::sync::RwLock;

/// Narrow view of the host's settings service.
///
/// Extensions flip boolean flags through this seam (e.g. a store's enable
/// setting) so tests can substitute an in-memory double for whatever backend
/// the host actually uses.
pub trait SettingsStore: Send + Sync {
    fn set_bool(&self, key: &str, value: bool);
    fn get_bool(&self, key: &str) -> Option<bool>;
}

/// In-memory settings backend.
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, bool>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn set_bool(&self, key: &str, value: bool) {
        self.values.write().unwrap().insert(key.to_owned(), value);
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.read().unwrap().get(key).copied()
    }
}
