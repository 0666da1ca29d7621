// Author: kelexine (https://github.com/kelexine)
// export/json.rs — JSON and JSONL export logic

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::BatchReport;

/// The full batch report, pretty-printed.
pub fn export_json(report: &BatchReport, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| "Failed to serialize JSON")?;
    writer.flush()?;

    eprintln!("[SUCCESS] Exported JSON → {}", path.display());
    Ok(())
}

/// One per-file outcome per line, failures included.
pub fn export_jsonl(report: &BatchReport, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(f);

    for outcome in report.outcomes() {
        let line = serde_json::to_string(outcome)
            .with_context(|| "Failed to serialize JSONL record")?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    eprintln!("[SUCCESS] Exported JSONL → {}", path.display());
    Ok(())
}
