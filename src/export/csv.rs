// Author: kelexine (https://github.com/kelexine)
// export/csv.rs — CSV export logic

use crate::models::BatchReport;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One row per function. Files that failed or have no functions produce no rows.
pub fn export_csv(report: &BatchReport, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(f));

    wtr.write_record([
        "filename",
        "language",
        "function",
        "start_line",
        "lines",
        "complexity",
    ])?;

    for file in report.outcomes().iter().filter_map(|o| o.report()) {
        for func in &file.functions {
            wtr.write_record([
                file.filename.as_str(),
                file.language.as_str(),
                func.name.as_str(),
                &func.start_line.to_string(),
                &func.lines.to_string(),
                &func.complexity.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    eprintln!("[SUCCESS] Exported CSV → {}", path.display());
    Ok(())
}
