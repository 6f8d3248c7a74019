use std::sync::{Arc, Mutex};

use allowance_core::{storage::JsonStore, time::Clock};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a store backed by a unique temporary directory for each test.
pub fn temp_store() -> JsonStore {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(temp.path().join("budget_data.json"));
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    store
}

/// Manually advanced clock shared between a test and the engine it drives.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<NaiveDateTime>>);

impl ManualClock {
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().expect("clock poisoned") = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().expect("clock poisoned")
    }
}
