// Author: kelexine (https://github.com/kelexine)
// language.rs — Language variants, extension mapping and content sniffing

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Languages the engine has a dedicated analyzer for, plus the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    Generic,
}

impl Language {
    /// Canonical name used in reports. `Generic` has no name of its own; the
    /// caller reports whatever string it resolved from.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Generic => "unknown",
        }
    }

    /// `//` line comments, `/* */` block comments, brace-delimited bodies.
    #[inline]
    pub fn is_c_family(self) -> bool {
        matches!(
            self,
            Language::JavaScript | Language::TypeScript | Language::Go | Language::Rust
        )
    }

    /// Look up a canonical name or alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let canonical = ALIASES.get(lower.as_str()).copied().unwrap_or(lower.as_str());
        match canonical {
            "python" => Some(Language::Python),
            "javascript" => Some(Language::JavaScript),
            "typescript" => Some(Language::TypeScript),
            "go" => Some(Language::Go),
            "rust" => Some(Language::Rust),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static map from file extension (with leading dot) → language.
pub static EXTENSION_MAP: Lazy<HashMap<&'static str, Language>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(".py",  Language::Python);
    m.insert(".js",  Language::JavaScript);
    m.insert(".jsx", Language::JavaScript);
    m.insert(".mjs", Language::JavaScript);
    m.insert(".cjs", Language::JavaScript);
    m.insert(".ts",  Language::TypeScript);
    m.insert(".tsx", Language::TypeScript);
    m.insert(".go",  Language::Go);
    m.insert(".rs",  Language::Rust);
    m
});

/// Aliases: short names → canonical language names.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("py",     "python");
    m.insert("js",     "javascript");
    m.insert("jsx",    "javascript");
    m.insert("ts",     "typescript");
    m.insert("tsx",    "typescript");
    m.insert("rs",     "rust");
    m.insert("golang", "go");
    m
});

/// Content sniffing table, tried in order. First hit wins.
static SNIFFERS: Lazy<Vec<(Regex, Language)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\bdef\s+\w+\s*\(").unwrap(), Language::Python),
        (Regex::new(r"\bfunction\s+\w+\s*\(|=>").unwrap(), Language::JavaScript),
        (Regex::new(r"\bfunc\s+\w+\s*\(").unwrap(), Language::Go),
        (Regex::new(r"\bfn\s+\w+\s*\(").unwrap(), Language::Rust),
    ]
});

/// The outcome of language resolution: the analyzer to run and the name to
/// report. They differ only for pass-through overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    pub language: Language,
    pub name: String,
}

impl ResolvedLanguage {
    fn known(language: Language) -> Self {
        Self {
            language,
            name: language.name().to_string(),
        }
    }
}

/// Map a filename's extension to a language, if it has a dedicated analyzer.
pub fn language_from_extension(filename: &str) -> Option<Language> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))?;
    EXTENSION_MAP.get(ext.as_str()).copied()
}

/// Guess the language from the source text alone.
pub fn detect_language(code: &str) -> Language {
    SNIFFERS
        .iter()
        .find(|(re, _)| re.is_match(code))
        .map(|(_, lang)| *lang)
        .unwrap_or(Language::Generic)
}

/// Resolve in order: explicit override → extension → content sniffing.
///
/// An override naming no known language is passed through verbatim and
/// analyzed with the generic analyzer.
pub fn resolve(filename: &str, code: &str, override_name: Option<&str>) -> ResolvedLanguage {
    if let Some(raw) = override_name.filter(|s| !s.trim().is_empty()) {
        return match Language::from_name(raw) {
            Some(lang) => ResolvedLanguage::known(lang),
            None => ResolvedLanguage {
                language: Language::Generic,
                name: raw.to_string(),
            },
        };
    }
    let language = language_from_extension(filename).unwrap_or_else(|| detect_language(code));
    ResolvedLanguage::known(language)
}

/// Whether a file extension is one the collector should pick up.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSION_MAP.contains_key(format!(".{}", e.to_lowercase()).as_str()))
        .unwrap_or(false)
}

/// All supported extensions, sorted (for help and error text).
pub fn supported_extensions() -> Vec<&'static str> {
    let mut exts: Vec<_> = EXTENSION_MAP.keys().copied().collect();
    exts.sort_unstable();
    exts
}
