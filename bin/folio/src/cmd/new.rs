//! New command - create a record file from a template

use std::{fs, path::PathBuf};

use chrono::{Datelike, Utc};
use color_eyre::eyre::{Result, WrapErr, bail};
use folio_content::ContentRepository;
use folio_core::{ContentKind, RecordFormat};

/// Run the new command.
///
/// Creates `<root>/<kind>/<slug>.md` with template front matter and returns
/// its path. Fails if any record file already claims the slug.
pub fn run(repo: &ContentRepository, kind: ContentKind, slug: &str) -> Result<PathBuf> {
    tracing::info!(%kind, slug, "Creating new record");

    validate_slug(slug)?;

    let dir = repo.dir_for(kind);
    if let Some(existing) = ["md", "mdx", "markdown"]
        .iter()
        .map(|ext| dir.join(format!("{slug}.{ext}")))
        .find(|path| path.exists())
    {
        bail!("{} already exists", existing.display());
    }

    let file_path = dir.join(format!("{slug}.{}", RecordFormat::Markdown.extension()));

    fs::create_dir_all(&dir).wrap_err("Failed to create collection directory")?;
    fs::write(&file_path, template(kind, slug)).wrap_err("Failed to write file")?;

    tracing::info!(?file_path, "Created new record");
    println!("Created: {}", file_path.display());

    Ok(file_path)
}

fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("slug cannot be empty");
    }
    if slug.starts_with('.') || slug.contains(['/', '\\']) {
        bail!("slug '{slug}' must be a plain file name");
    }
    Ok(())
}

fn template(kind: ContentKind, slug: &str) -> String {
    let title = slug.replace(['-', '_'], " ");
    let now = Utc::now();
    let year = now.year();

    match kind {
        ContentKind::CaseStudies => format!(
            r#"---
title: "{title}"
subtitle: ""
role: UX
year: {year}
duration: ""
problem: ""
goals: []
process: []
tools: []
coverImage: ""
gallery: []
---

Tell the story here.
"#
        ),
        ContentKind::Projects => format!(
            r#"---
title: "{title}"
stack: []
summary: ""
coverImage: ""
screens: []
year: {year}
type: fullstack
---

Describe the project here.
"#
        ),
        ContentKind::Artwork => format!(
            r#"---
title: "{title}"
type: photo
year: {year}
image: ""
---
"#
        ),
        ContentKind::Writings => {
            let date = now.format("%Y-%m-%d");
            format!(
                r#"---
title: "{title}"
date: {date}
tags: []
excerpt: ""
published: false
---

Write your content here.
"#
            )
        }
    }
}
