use super::ProfileStore;
use anyhow::Result;
use dashmap::DashMap;

/// In-memory profile store.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    values: DashMap<String, String>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).map(|v| v.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AMOUNT_KEY, TASK_NAME_KEY};

    #[test]
    fn test_set_get_unset() {
        let store = MemoryProfileStore::new();
        assert!(store.is_empty());

        store.set(TASK_NAME_KEY, "rats").unwrap();
        store.set(AMOUNT_KEY, "17").unwrap();
        assert_eq!(store.get(TASK_NAME_KEY).unwrap().as_deref(), Some("rats"));
        assert_eq!(store.get_int(AMOUNT_KEY).unwrap(), Some(17));

        store.unset(AMOUNT_KEY).unwrap();
        assert_eq!(store.get_int(AMOUNT_KEY).unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_int_rejects_text() {
        let store = MemoryProfileStore::new();
        store.set(AMOUNT_KEY, "lots").unwrap();
        assert!(store.get_int(AMOUNT_KEY).is_err());
    }
}
