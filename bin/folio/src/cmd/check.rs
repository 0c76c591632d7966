//! Check command - validate configuration and content

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail};
use folio_content::ContentRepository;
use folio_core::{ContentKind, content::slug_from_path};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Loads every record of every collection, reporting files the repository
/// would skip and record files placed outside the collection directories.
pub fn run(config_path: Option<&Path>, root: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?root, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match crate::load_config(config_path, root) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            bail!("Configuration error: {e:#}");
        }
    };

    let repo = ContentRepository::from_config(&config);
    if !repo.root().is_dir() {
        result.add_warning(format!(
            "Content root does not exist: {}",
            repo.root().display()
        ));
    } else {
        println!("\nChecking collections...");
        check_collections(&repo, &mut result);

        println!("\nChecking for stray files...");
        check_stray_files(repo.root(), &mut result);
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Scan each collection and record every skipped file as an error.
fn check_collections(repo: &ContentRepository, result: &mut ValidationResult) {
    for kind in ContentKind::ALL {
        if !repo.dir_for(kind).is_dir() {
            result.add_warning(format!("Collection directory missing: {kind}/"));
            println!("  ⚠ {kind}/ missing");
            continue;
        }

        let report = repo.report(kind);
        for skip in &report.skipped {
            result.add_error(skip.error.to_string());
        }

        if report.skipped.is_empty() {
            println!("  ✓ {kind}: {} record(s)", report.loaded);
        } else {
            println!(
                "  ✗ {kind}: {} record(s), {} skipped",
                report.loaded,
                report.skipped.len()
            );
        }

        if report.unpublished > 0 {
            println!("  ℹ {kind}: {} unpublished", report.unpublished);
        }
    }
}

/// Warn about record files the repository will never read.
fn check_stray_files(root: &Path, result: &mut ValidationResult) {
    let stray = find_stray_files(root);

    for path in &stray {
        result.add_warning(format!(
            "Record file outside a collection directory: {}",
            path.display()
        ));
    }

    if stray.is_empty() {
        println!("  ✓ No stray record files");
    } else {
        println!("  ⚠ {} stray record file(s)", stray.len());
    }
}

/// Record files under `root` that are not directly inside one of the
/// collection directories.
fn find_stray_files(root: &Path) -> Vec<PathBuf> {
    let collection_dirs: Vec<PathBuf> = ContentKind::ALL
        .iter()
        .map(|kind| root.join(kind.dir_name()))
        .collect();

    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| slug_from_path(e.path()).is_some())
        .filter(|e| {
            e.path()
                .parent()
                .is_none_or(|parent| !collection_dirs.iter().any(|dir| dir == parent))
        })
        .map(|e| e.into_path())
        .collect()
}
