use std::path::{Path, PathBuf};

use crate::bundle::Bundle;
use crate::error::PatchError;
use crate::language::Language;
use crate::patch::{POEM_GENERATE_PATCHES, PatchEntry};

pub const DEFAULT_NAMESPACE: &str = "poemGenerate";
pub const DEFAULT_INDENT: usize = 2;

/// Applies a fixed set of insert-if-absent entries to bundles
#[derive(Debug, Clone)]
pub struct Patcher {
    namespace: String,
    entries: &'static [PatchEntry],
    indent: usize,
    dry_run: bool,
}

/// Outcome of patching one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: Option<PathBuf>,
    pub language: Language,
    /// Dotted key paths (relative to the namespace) that were added
    pub inserted: Vec<String>,
    pub already_present: usize,
    pub written: bool,
}

impl PatchReport {
    pub fn is_changed(&self) -> bool {
        !self.inserted.is_empty()
    }
}

impl Default for Patcher {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl Patcher {
    /// An empty namespace patches sections directly under the root object.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: POEM_GENERATE_PATCHES,
            indent: DEFAULT_INDENT,
            dry_run: false,
        }
    }

    pub fn with_entries(mut self, entries: &'static [PatchEntry]) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Evaluate every entry in order against `bundle`
    pub fn apply(
        &self,
        bundle: &mut Bundle,
        language: Language,
    ) -> Result<PatchReport, PatchError> {
        let mut report = PatchReport {
            path: None,
            language,
            inserted: Vec::new(),
            already_present: 0,
            written: false,
        };

        for entry in self.entries {
            let section = self.section_path(entry);
            let value = entry.value.resolve(language);

            if bundle.insert_if_absent(&section, entry.key, value)? {
                tracing::debug!("[{language}] inserted {} = {value:?}", entry.dotted_path());
                report.inserted.push(entry.dotted_path());
            } else {
                report.already_present += 1;
            }
        }

        Ok(report)
    }

    /// Load, patch and rewrite a bundle file. Nothing is written if any step fails.
    pub fn patch_file(&self, path: &Path, language: Language) -> Result<PatchReport, PatchError> {
        let mut bundle = Bundle::load(path)?;
        let mut report = self.apply(&mut bundle, language)?;
        report.path = Some(path.to_path_buf());

        if self.dry_run {
            tracing::warn!(
                "Dry run, not writing {} ({} missing keys)",
                path.display(),
                report.inserted.len()
            );
            return Ok(report);
        }

        bundle.save(path, self.indent)?;
        report.written = true;
        tracing::info!(
            "Patched {} [{language}]: {} inserted, {} already present",
            path.display(),
            report.inserted.len(),
            report.already_present
        );

        Ok(report)
    }

    fn section_path<'a>(&'a self, entry: &PatchEntry) -> Vec<&'a str> {
        let mut section = Vec::with_capacity(entry.section.len() + 1);
        if !self.namespace.is_empty() {
            section.push(self.namespace.as_str());
        }
        section.extend_from_slice(entry.section);
        section
    }
}
