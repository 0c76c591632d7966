//! List command - print a collection in listing order

use color_eyre::eyre::{Result, bail};
use folio_content::ContentRepository;
use folio_core::{ArtworkType, ContentKind, Record};
use serde::Serialize;

/// One printed line: slug, date or year, title.
type Row = (String, String, String);

/// Run the list command.
///
/// `artwork_type` narrows artwork listings and `tag` narrows writings; each
/// is rejected for other kinds.
pub fn run(
    repo: &ContentRepository,
    kind: ContentKind,
    artwork_type: Option<ArtworkType>,
    tag: Option<&str>,
    json: bool,
) -> Result<()> {
    tracing::info!(%kind, ?artwork_type, ?tag, "Listing content");

    if artwork_type.is_some() && kind != ContentKind::Artwork {
        bail!("--type only applies to artwork");
    }
    if tag.is_some() && kind != ContentKind::Writings {
        bail!("--tag only applies to writings");
    }

    let output = match kind {
        ContentKind::CaseStudies => {
            render(&repo.list_case_studies(), json, |c| c.year.to_string())?
        }
        ContentKind::Projects => render(&repo.list_projects(), json, |p| p.year.to_string())?,
        ContentKind::Artwork => {
            let artwork = match artwork_type {
                Some(t) => repo.list_artwork_by_type(t),
                None => repo.list_artwork(),
            };
            render(&artwork, json, |a| format!("{} {}", a.year, a.artwork_type))?
        }
        ContentKind::Writings => {
            let writings = match tag {
                Some(tag) => repo.list_writings_by_tag(tag),
                None => repo.list_writings(),
            };
            render(&writings, json, |w| w.date.clone())?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn render<T: Record + Serialize>(
    records: &[T],
    json: bool,
    when: impl Fn(&T) -> String,
) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }

    let rows: Vec<Row> = records
        .iter()
        .map(|r| (r.slug().to_string(), when(r), r.title().to_string()))
        .collect();
    Ok(format_rows(&rows))
}

fn format_rows(rows: &[Row]) -> String {
    let slug_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0);
    let when_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|(slug, when, title)| format!("{slug:<slug_width$}  {when:<when_width$}  {title}"))
        .collect::<Vec<_>>()
        .join("\n")
}
