//! Writing an export to disk.

use crate::error::{Error, Result};
use crate::pipeline::VideoRecord;
use jiff::civil::Date;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// The file an export taken on `date` is written to. One file per calendar day.
pub fn output_path(dir: &Path, date: Date) -> PathBuf {
    dir.join(format!("YT_data_{date}.json"))
}

/// Serializes `records` as an indented JSON array with non-ASCII text kept as-is.
pub fn to_json(records: &[VideoRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser).map_err(Error::Serialize)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Writes `records` to the export file for `date` inside `dir`, replacing any earlier export
/// from the same day. `dir` is created if needed.
///
/// The file is first written next to its destination and then renamed into place, so a failed
/// write never leaves a truncated export behind.
#[instrument(skip(records), fields(records = records.len()))]
pub async fn write_records(dir: &Path, date: Date, records: &[VideoRecord]) -> Result<PathBuf> {
    let path = output_path(dir, date);
    let json = to_json(records)?;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::io(dir, e))?;

    let staging = path.with_extension("json.tmp");
    if let Err(e) = tokio::fs::write(&staging, &json).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(Error::io(staging, e));
    }
    if let Err(e) = tokio::fs::rename(&staging, &path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(Error::io(path, e));
    }

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote export");
    Ok(path)
}
