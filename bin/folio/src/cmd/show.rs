//! Show command - print one record by slug

use color_eyre::eyre::{Result, bail};
use folio_content::{ContentRepository, TocEntry, render_body};
use folio_core::ContentKind;
use serde::Serialize;

/// What to print for the selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The whole record as JSON.
    Json,
    /// The body rendered to HTML.
    Html,
    /// The body's heading outline.
    Toc,
}

/// Run the show command.
///
/// Unknown slugs (and unpublished writings) fail with "not found".
pub fn run(repo: &ContentRepository, kind: ContentKind, slug: &str, view: View) -> Result<()> {
    tracing::info!(%kind, slug, ?view, "Showing record");

    let output = match kind {
        ContentKind::CaseStudies => format_record(kind, slug, repo.get_case_study(slug), view, |r| {
            Some(r.body.as_str())
        })?,
        ContentKind::Projects => format_record(kind, slug, repo.get_project(slug), view, |r| {
            Some(r.body.as_str())
        })?,
        ContentKind::Artwork => format_record(kind, slug, repo.get_artwork(slug), view, |r| {
            r.body.as_deref()
        })?,
        ContentKind::Writings => format_record(kind, slug, repo.get_writing(slug), view, |r| {
            Some(r.body.as_str())
        })?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn format_record<T: Serialize>(
    kind: ContentKind,
    slug: &str,
    record: Option<T>,
    view: View,
    body: impl Fn(&T) -> Option<&str>,
) -> Result<String> {
    let Some(record) = record else {
        bail!("{kind} '{slug}' not found");
    };

    match view {
        View::Json => Ok(serde_json::to_string_pretty(&record)?),
        View::Html => Ok(render_body(body(&record).unwrap_or_default()).html),
        View::Toc => Ok(format_toc(&render_body(body(&record).unwrap_or_default()).toc)),
    }
}

/// One line per heading, indented by level.
fn format_toc(toc: &[TocEntry]) -> String {
    toc.iter()
        .map(|entry| {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            format!("{indent}- {} (#{})", entry.text, entry.id)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn repo_with_writing(published: bool) -> (tempfile::TempDir, ContentRepository) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let writings = dir.path().join("writings");
        fs::create_dir_all(&writings).expect("mkdir");
        fs::write(
            writings.join("essay.md"),
            format!("---\ntitle: Essay\ndate: 2024-01-01\npublished: {published}\n---\n\n# Intro\n"),
        )
        .expect("write");
        let repo = ContentRepository::new(dir.path());
        (dir, repo)
    }

    #[test]
    fn test_format_record_json() {
        let (_dir, repo) = repo_with_writing(true);
        let out = format_record(
            ContentKind::Writings,
            "essay",
            repo.get_writing("essay"),
            View::Json,
            |r| Some(r.body.as_str()),
        )
        .expect("format");

        assert!(out.contains("\"slug\": \"essay\""));
        assert!(out.contains("\"readingTime\": 1"));
    }

    #[test]
    fn test_format_record_html() {
        let (_dir, repo) = repo_with_writing(true);
        let out = format_record(
            ContentKind::Writings,
            "essay",
            repo.get_writing("essay"),
            View::Html,
            |r| Some(r.body.as_str()),
        )
        .expect("format");

        assert!(out.contains("<h1 id=\"intro\">Intro</h1>"));
    }

    #[test]
    fn test_unpublished_is_not_found() {
        let (_dir, repo) = repo_with_writing(false);
        let err = run(&repo, ContentKind::Writings, "essay", View::Json).unwrap_err();
        assert_eq!(err.to_string(), "writings 'essay' not found");
    }

    #[test]
    fn test_format_record_toc() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let projects = dir.path().join("projects");
        fs::create_dir_all(&projects).expect("mkdir");
        let content = concat!(
            "---\ntitle: Tool\ntype: backend\nyear: 2024\n---\n",
            "# Overview\n\n## Setup\n\n## Setup\n",
        );
        fs::write(projects.join("tool.md"), content).expect("write");
        let repo = ContentRepository::new(dir.path());

        let out = format_record(
            ContentKind::Projects,
            "tool",
            repo.get_project("tool"),
            View::Toc,
            |r| Some(r.body.as_str()),
        )
        .expect("format");

        assert_eq!(
            out,
            "- Overview (#overview)\n  - Setup (#setup)\n  - Setup (#setup-1)"
        );
    }
}
