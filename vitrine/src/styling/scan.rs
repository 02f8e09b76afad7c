use crate::styling::StyleError;
use crate::styling::utilities::Utility;
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

// Class attributes land in the markup through `.class("…")` call sites.
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\.class\("([^"]*)"\)"#).expect("class call-site pattern"));

/// The file-path globs scanned for class-name usage. Utilities whose class
/// never appears under the scanned roots are excluded from the emitted
/// stylesheet, so unused tokens cost nothing.
#[derive(Clone, Debug, Default)]
pub struct ContentScan {
    globs: Vec<String>,
}

impl ContentScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glob(mut self, pattern: &str) -> Self {
        self.globs.push(pattern.to_string());
        self
    }

    pub fn globs(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.globs.extend(patterns);
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.globs
    }

    fn glob_set(&self) -> Result<GlobSet, StyleError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.globs {
            let glob = Glob::new(pattern).map_err(|source| StyleError::BadGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| StyleError::BadGlob {
            pattern: self.globs.join(", "),
            source,
        })
    }

    /// Walks `root` and collects every class name referenced by a file
    /// matching the glob set. Multi-class attributes are split on
    /// whitespace.
    pub fn referenced_classes(&self, root: &Path) -> Result<BTreeSet<String>, StyleError> {
        let glob_set = self.glob_set()?;
        let mut classes = BTreeSet::new();

        for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if !glob_set.is_match(relative) {
                continue;
            }
            let text = std::fs::read_to_string(entry.path())?;
            for capture in CLASS_RE.captures_iter(&text) {
                for class in capture[1].split_whitespace() {
                    classes.insert(class.to_string());
                }
            }
        }

        Ok(classes)
    }
}

/// Keeps only utilities whose class is referenced.
pub fn filter_used(utilities: Vec<Utility>, used: &BTreeSet<String>) -> Vec<Utility> {
    utilities
        .into_iter()
        .filter(|utility| used.contains(utility.class()))
        .collect()
}
