use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::LedgerState,
    utils::{app_data_dir, ensure_dir},
};

use super::{Result, StorageBackend};

const STORE_FILE: &str = "budget_data.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON-backed store keeping the whole ledger record in one file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the default location under the application data dir.
    pub fn new_default() -> Result<Self> {
        let dir = app_data_dir();
        ensure_dir(&dir)?;
        Ok(Self::new(dir.join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    fn load(&self) -> Result<LedgerState> {
        if !self.path.exists() {
            return Ok(LedgerState::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let state: LedgerState = serde_json::from_str(&data).map_err(LedgerError::CorruptStore)?;
        Ok(state)
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
