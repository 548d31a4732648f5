use std::io::Write;

use anyhow::Context;
use linguo_config::Config;
use linguo_core::{PatchReport, Patcher};

/// Patch every configured target in order, stopping at the first failure
pub fn run(
    config: &Config,
    dry_run: bool,
    out: &mut impl Write,
) -> anyhow::Result<Vec<PatchReport>> {
    let patcher = Patcher::new(config.namespace.clone())
        .with_indent(config.indent)
        .dry_run(dry_run);

    let mut reports = Vec::with_capacity(config.targets.len());

    for (path, language) in config.resolved_targets() {
        tracing::info!("Processing {} [{language}]", path.display());

        let report = patcher
            .patch_file(&path, language)
            .with_context(|| format!("failed to update {}", path.display()))?;

        if report.written {
            writeln!(out, "✅ Updated {}", path.display())?;
        } else {
            writeln!(
                out,
                "🔍 {}: {} missing keys",
                path.display(),
                report.inserted.len()
            )?;
            for key in &report.inserted {
                writeln!(out, "   + {key}")?;
            }
        }

        reports.push(report);
    }

    if dry_run {
        writeln!(out, "✅ Dry run complete, no files written.")?;
    } else {
        writeln!(out, "✅ All translation files updated successfully!")?;
    }

    Ok(reports)
}
