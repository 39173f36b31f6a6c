use std::fs;
use std::path::{Path, PathBuf};

use crate::model::SubmissionRecord;

/// Fallback directory for records the collector never accepted.
pub fn results_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "cyberquiz")
        .map(|dirs| dirs.data_local_dir().join("unsaved"))
        .unwrap_or_else(|| PathBuf::from(".cyberquiz-unsaved"))
}

pub fn save_record(record: &SubmissionRecord, dir: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(dir).map_err(|e| format!("Cannot create results dir: {}", e))?;

    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("result-{}-{}.json", record.roll_no, stamp));

    let json = serde_json::to_string_pretty(record)
        .map_err(|e| format!("Cannot serialize record: {}", e))?;
    atomic_write(&path, &json)?;

    Ok(path)
}

pub fn load_record(path: &Path) -> Result<SubmissionRecord, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Corrupt record file: {}", e))
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}
