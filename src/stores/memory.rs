use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{Error, stores::KeyValueStore};

#[derive(Debug, Default)]
struct State {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// An in-memory key-value store whose clones share the same data.
///
/// Tests keep a clone to inspect what was written and to simulate a storage
/// medium that has stopped working.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    state: Arc<Mutex<State>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .state
            .lock()
            .unwrap()
            .values
            .insert(key.to_owned(), value.to_owned());

        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.state.lock().unwrap().values.get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let state = self.state.lock().unwrap();

        if state.fail_reads {
            return Err(Error::StorageUnavailable("reads are switched off".to_owned()));
        }

        Ok(state.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();

        if state.fail_writes {
            return Err(Error::StorageUnavailable("writes are switched off".to_owned()));
        }

        state.values.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}
