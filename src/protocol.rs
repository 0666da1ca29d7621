// Author: kelexine (https://github.com/kelexine)
// protocol.rs — JSON request/response handling for `--stdin` mode
//
// Every failure is answered with an `{"error": ...}` object rather than an
// exit code, so a caller driving the tool over pipes always gets JSON back.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use tracing::debug;

use crate::aggregate::{BatchOptions, analyze_file, analyze_snippet, run_batch};
use crate::collect::{SourceFile, collect_files};
use crate::language::supported_extensions;
use crate::models::{FileFailure, FileOutcome, Thresholds};

/// One entry of a `files` manifest.
#[derive(Debug, Default, Deserialize)]
pub struct ManifestEntry {
    pub path: Option<String>,
    pub original_name: Option<String>,
    pub filename: Option<String>,
}

impl ManifestEntry {
    fn display_name(&self) -> Option<String> {
        self.original_name
            .clone()
            .or_else(|| self.filename.clone())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                self.path.as_deref().map(|p| {
                    Path::new(p)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| p.to_string())
                })
            })
    }
}

/// Threshold overrides, accepted both top-level and under `metadata`.
#[derive(Debug, Default, Deserialize)]
pub struct ThresholdOverrides {
    pub max_file_lines: Option<usize>,
    pub max_function_lines: Option<usize>,
    pub max_complexity: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Request {
    pub path: Option<String>,
    pub directory: Option<String>,
    #[serde(default, deserialize_with = "lenient_manifest")]
    pub files: Vec<ManifestEntry>,
    pub code: Option<String>,
    pub language: Option<String>,
    #[serde(flatten)]
    pub thresholds: ThresholdOverrides,
    pub metadata: Option<ThresholdOverrides>,
    #[serde(default)]
    pub summary: bool,
}

/// `files` that is null or not an array reads as an empty manifest; entries
/// that are not objects are kept as entries with no path.
fn lenient_manifest<'de, D>(deserializer: D) -> Result<Vec<ManifestEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

impl Request {
    /// Local path to scan; `path` wins over `directory`, empty strings are absent.
    pub fn local_path(&self) -> Option<&str> {
        self.path
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.directory.as_deref().filter(|d| !d.is_empty()))
    }

    /// `metadata` beats top-level fields, which beat `base`.
    pub fn thresholds(&self, base: &Thresholds) -> Thresholds {
        let meta = self.metadata.as_ref();
        let pick = |f: fn(&ThresholdOverrides) -> Option<usize>, fallback: usize| {
            meta.and_then(f).or_else(|| f(&self.thresholds)).unwrap_or(fallback)
        };
        Thresholds {
            max_file_lines: pick(|t| t.max_file_lines, base.max_file_lines),
            max_function_lines: pick(|t| t.max_function_lines, base.max_function_lines),
            max_complexity: pick(|t| t.max_complexity, base.max_complexity),
        }
    }
}

/// Parse a request and produce the JSON response.
pub fn handle_request(input: &str, base: &Thresholds, parallel: bool, max_files: usize) -> Value {
    let request: Request = match serde_json::from_str(input) {
        Ok(r) => r,
        Err(e) => return json!({ "error": format!("Invalid JSON input: {}", e) }),
    };

    let thresholds = request.thresholds(base);
    let options = BatchOptions {
        parallel,
        summary_only: request.summary,
    };

    if let Some(dir) = request.local_path() {
        return scan_directory(dir, &thresholds, options, max_files);
    }

    if !request.files.is_empty() {
        return analyze_manifest(&request.files, &thresholds, options);
    }

    match request.code.as_deref().filter(|c| !c.is_empty()) {
        Some(code) => {
            let report = analyze_snippet(code, request.language.as_deref(), &thresholds);
            to_value(&report)
        }
        None => json!({
            "error": "Missing required input. Provide 'path'/'directory' (local path), 'files' (array), or 'code' (string).",
            "examples": {
                "local": { "path": "." },
                "files": { "files": [{ "path": "/tmp/file.py", "original_name": "file.py" }] },
                "code": { "code": "def hello(): pass" },
            },
        }),
    }
}

fn scan_directory(dir: &str, thresholds: &Thresholds, options: BatchOptions, max_files: usize) -> Value {
    let files = match collect_files(Path::new(dir), max_files) {
        Ok(f) => f,
        Err(e) => return json!({ "error": e.to_string() }),
    };
    if files.is_empty() {
        return json!({
            "error": format!("No supported code files found in {}", dir),
            "supported_extensions": supported_extensions(),
        });
    }
    debug!("scanning {} files under {}", files.len(), dir);
    let report = run_batch(&files, options, |f| analyze_file(f, None, thresholds));
    to_value(&report)
}

fn analyze_manifest(entries: &[ManifestEntry], thresholds: &Thresholds, options: BatchOptions) -> Value {
    let planned: Vec<Result<SourceFile, FileFailure>> = entries
        .iter()
        .map(|entry| {
            let name = entry.display_name();
            match entry.path.as_deref().filter(|p| !p.is_empty()) {
                Some(path) => Ok(SourceFile::new(path, name.unwrap_or_else(|| path.to_string()))),
                None => Err(FileFailure {
                    filename: name.unwrap_or_else(|| "unknown".to_string()),
                    error: "File path missing in file manifest".to_string(),
                }),
            }
        })
        .collect();

    let report = run_batch(&planned, options, |entry| match entry {
        Ok(file) => analyze_file(file, None, thresholds),
        Err(failure) => FileOutcome::Failed(failure.clone()),
    });
    to_value(&report)
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| json!({ "error": format!("Analysis failed: {}", e) }))
}
