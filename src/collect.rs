// Author: kelexine (https://github.com/kelexine)
// collect.rs — Directory traversal and the file inclusion policy

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::language::is_supported_extension;

/// Directories that never contain first-party source.
pub static SKIP_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Dependencies
        "node_modules", "bower_components", "vendor",
        // Python envs & caches
        ".venv", "venv", "env", "__pycache__", ".pytest_cache",
        ".mypy_cache", ".ruff_cache", "site-packages",
        // Build output
        "dist", "build", "out", "_next", ".next", ".nuxt",
        "target", ".output", ".vercel", ".turbo",
        // Version control & IDE
        ".git", ".svn", ".hg", ".idea", ".vscode",
        // Coverage & misc
        "coverage", ".coverage", ".env",
    ]
    .iter()
    .copied()
    .collect()
});

/// File-name suffixes of generated / minified / non-source files.
const SKIP_SUFFIXES: &[&str] = &[".min.js", ".min.css", ".bundle.js", ".chunk.js", ".map"];

const MINIFIED_SAMPLE_BYTES: usize = 8192;
const MINIFIED_LINE_LENGTH: usize = 500;

pub const DEFAULT_MAX_FILES: usize = 100;

/// A file selected for analysis: where to read it and how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub display_name: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
        }
    }

    /// Report a path under its own file name.
    pub fn from_path(path: &Path) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(path, display_name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// .gitignore
// ─────────────────────────────────────────────────────────────────────────────

/// Compiled top-level `.gitignore` patterns.
///
/// Plain patterns match any single path component; patterns containing a
/// `/` match the whole relative path or anything below it.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    components: Option<GlobSet>,
    paths: Option<GlobSet>,
}

impl IgnoreRules {
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut components = GlobSetBuilder::new();
        let mut paths = GlobSetBuilder::new();
        let (mut n_components, mut n_paths) = (0, 0);

        for raw in patterns {
            let pattern = raw.as_ref().trim().trim_end_matches('/');
            let pattern = pattern.trim_start_matches('/');
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }

            if pattern.contains('/') {
                for candidate in [pattern.to_string(), format!("{pattern}/*")] {
                    match Glob::new(&candidate) {
                        Ok(glob) => {
                            paths.add(glob);
                            n_paths += 1;
                        }
                        Err(e) => warn!("ignoring .gitignore pattern {:?}: {}", candidate, e),
                    }
                }
            } else {
                match Glob::new(pattern) {
                    Ok(glob) => {
                        components.add(glob);
                        n_components += 1;
                    }
                    Err(e) => warn!("ignoring .gitignore pattern {:?}: {}", pattern, e),
                }
            }
        }

        let build = |builder: GlobSetBuilder, n: usize| {
            if n == 0 {
                return None;
            }
            builder
                .build()
                .map_err(|e| warn!("failed to compile .gitignore patterns: {}", e))
                .ok()
        };

        Self {
            components: build(components, n_components),
            paths: build(paths, n_paths),
        }
    }

    /// Read `<dir>/.gitignore`; a missing or unreadable file means no rules.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(".gitignore");
        match std::fs::read(&path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                debug!("loaded {}", path.display());
                Self::from_patterns(text.lines())
            }
            Err(_) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_none() && self.paths.is_none()
    }

    pub fn is_ignored(&self, rel_path: &str) -> bool {
        let rel_path = rel_path.replace('\\', "/");
        if let Some(paths) = &self.paths
            && paths.is_match(&rel_path)
        {
            return true;
        }
        match &self.components {
            Some(set) => rel_path.split('/').any(|part| set.is_match(part)),
            None => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inclusion policy
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a file (given relative to the scan root) is a candidate for
/// analysis. Pure: looks only at the path and the ignore rules.
pub fn should_include(rel_path: &Path, ignore: &IgnoreRules) -> bool {
    if !is_supported_extension(rel_path) {
        return false;
    }

    let in_skip_dir = rel_path
        .iter()
        .filter_map(|c| c.to_str())
        .any(|c| SKIP_DIRS.contains(c));
    if in_skip_dir {
        return false;
    }

    let name = rel_path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if SKIP_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return false;
    }

    ignore.is_empty() || !ignore.is_ignored(&rel_path.to_string_lossy())
}

/// Heuristic over a text sample: minified when lines average > 500 bytes.
pub fn looks_minified(sample: &str) -> bool {
    if sample.is_empty() {
        return false;
    }
    let lines = sample.split('\n').count();
    if lines < 2 {
        return sample.len() > MINIFIED_LINE_LENGTH;
    }
    sample.len() / lines > MINIFIED_LINE_LENGTH
}

fn is_minified(path: &Path) -> bool {
    let mut buf = Vec::with_capacity(MINIFIED_SAMPLE_BYTES);
    match std::fs::File::open(path) {
        Ok(f) => {
            if f.take(MINIFIED_SAMPLE_BYTES as u64).read_to_end(&mut buf).is_err() {
                return false;
            }
            looks_minified(&String::from_utf8_lossy(&buf))
        }
        Err(_) => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Traversal
// ─────────────────────────────────────────────────────────────────────────────

/// Collect up to `max_files` analyzable files under `dir`, in sorted order.
pub fn collect_files(dir: &Path, max_files: usize) -> Result<Vec<SourceFile>> {
    let root = dir
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", dir.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let ignore = IgnoreRules::load(&root);
    let mut files = Vec::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !SKIP_DIRS.contains(e.file_name().to_string_lossy().as_ref())
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if !should_include(rel, &ignore) {
            continue;
        }
        if is_minified(entry.path()) {
            debug!("skipping minified file {}", rel.display());
            continue;
        }

        files.push(SourceFile::new(
            entry.path(),
            rel.to_string_lossy().replace('\\', "/"),
        ));
        if files.len() >= max_files {
            debug!("reached file limit of {}", max_files);
            break;
        }
    }

    Ok(files)
}
