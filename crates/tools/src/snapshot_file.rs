//! JSON export of a finished generation run, written atomically.

use std::fs;
use std::io;
use std::path::Path;

use dungeon_core::{GenerationConfig, GenerationResult};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub format_version: u32,
    pub config: GenerationConfig,
    pub fingerprint_hex: String,
    pub result: GenerationResult,
}

impl SnapshotFile {
    pub fn new(config: GenerationConfig, result: GenerationResult) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            config,
            fingerprint_hex: format_fingerprint(result.fingerprint()),
            result,
        }
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(snapshot)
    }
}

/// `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}
