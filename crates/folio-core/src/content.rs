//! Content kinds and the record types stored under each of them.

use std::{fmt, path::Path, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{CoreError, Result};

/// Words read per minute when estimating reading time.
const WORDS_PER_MINUTE: usize = 200;

/// The four record collections under a content root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    CaseStudies,
    Projects,
    Artwork,
    Writings,
}

impl ContentKind {
    /// Every kind, in the order sites usually present them.
    pub const ALL: [ContentKind; 4] = [
        Self::CaseStudies,
        Self::Projects,
        Self::Artwork,
        Self::Writings,
    ];

    /// Name of the subdirectory holding this kind's records.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::CaseStudies => "case-studies",
            Self::Projects => "projects",
            Self::Artwork => "artwork",
            Self::Writings => "writings",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "case-studies" | "case-study" => Ok(Self::CaseStudies),
            "projects" | "project" => Ok(Self::Projects),
            "artwork" | "artworks" => Ok(Self::Artwork),
            "writings" | "writing" => Ok(Self::Writings),
            other => Err(format!(
                "unknown content kind '{other}' (expected case-studies, projects, artwork or writings)"
            )),
        }
    }
}

/// Record file formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// Plain Markdown (.md files).
    Markdown,
    /// MDX (.mdx files). The body is kept verbatim.
    Mdx,
}

impl RecordFormat {
    /// Determine the record format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Mdx => "mdx",
        }
    }
}

/// Derive a record slug from its file name.
///
/// The slug is the file stem, case preserved. Hidden files and files without
/// a record extension yield `None`.
pub fn slug_from_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if name.starts_with('.') {
        return None;
    }

    let ext = path.extension()?.to_str()?;
    RecordFormat::from_extension(ext)?;

    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Parse a calendar date or timestamp.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, and naive date-times written
/// with either a `T` or a space separator. Naive values are taken as UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_time(text: &str) -> u32 {
    let minutes = word_count(text).div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// A typed record loaded from one file of a collection.
///
/// The metadata block deserializes directly into the implementing type;
/// `slug` and `body` come from the file itself and are attached afterwards
/// by [`Record::finish`].
pub trait Record: DeserializeOwned + Clone + Send {
    /// The collection this record lives in.
    const KIND: ContentKind;

    /// Sort key; collections are listed in descending key order.
    type Key: Ord;

    /// Attach the file-derived slug and body, filling computed fields.
    fn finish(&mut self, slug: String, body: String);

    /// Check the values serde cannot (non-empty title, parseable dates).
    fn validate(&self, path: &Path) -> Result<()>;

    /// The record's slug.
    fn slug(&self) -> &str;

    /// The record's title.
    fn title(&self) -> &str;

    /// Key used for "most recent first" ordering.
    fn sort_key(&self) -> Self::Key;
}

fn require_title(title: &str, path: &Path) -> Result<()> {
    if title.trim().is_empty() {
        return Err(CoreError::validation(path, "title is required"));
    }
    Ok(())
}

/// Design discipline credited on a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "UX")]
    Ux,
    #[serde(rename = "UI")]
    Ui,
    Research,
    #[serde(rename = "UX/UI")]
    UxUi,
}

/// One step of a case study's process narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSection {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// An image shown in a case study gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub alt: String,
}

/// Kind of destination an external link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    Figma,
    Github,
    Demo,
    CaseStudy,
}

/// An external link attached to a case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

/// A long-form design case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    /// File stem of the source record.
    #[serde(skip_deserializing)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub role: Role,
    pub year: i32,
    #[serde(default)]
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    #[serde(default)]
    pub process: Vec<ProcessSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Vec<String>>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
    /// Markdown body following the metadata block.
    #[serde(skip_deserializing)]
    pub body: String,
}

impl Record for CaseStudy {
    const KIND: ContentKind = ContentKind::CaseStudies;
    type Key = i32;

    fn finish(&mut self, slug: String, body: String) {
        self.slug = slug;
        self.body = body;
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require_title(&self.title, path)
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn sort_key(&self) -> i32 {
        self.year
    }
}

/// Engineering focus of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Frontend,
    Backend,
    Fullstack,
    Design,
}

/// A shipped software or design project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_deserializing)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_image: String,
    /// Screenshot URLs.
    #[serde(default)]
    pub screens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    pub year: i32,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(skip_deserializing)]
    pub body: String,
}

impl Record for Project {
    const KIND: ContentKind = ContentKind::Projects;
    type Key = i32;

    fn finish(&mut self, slug: String, body: String) {
        self.slug = slug;
        self.body = body;
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require_title(&self.title, path)
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn sort_key(&self) -> i32 {
        self.year
    }
}

/// Medium of an artwork piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkType {
    Photo,
    Oil,
    Illustration,
}

impl ArtworkType {
    /// Name used in record files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Oil => "oil",
            Self::Illustration => "illustration",
        }
    }
}

impl fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtworkType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "photo" => Ok(Self::Photo),
            "oil" => Ok(Self::Oil),
            "illustration" => Ok(Self::Illustration),
            other => Err(format!(
                "unknown artwork type '{other}' (expected photo, oil or illustration)"
            )),
        }
    }
}

/// A gallery piece: photograph, painting or illustration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(skip_deserializing)]
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub artwork_type: ArtworkType,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Optional notes below the metadata block; `None` when blank.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Record for Artwork {
    const KIND: ContentKind = ContentKind::Artwork;
    type Key = i32;

    fn finish(&mut self, slug: String, body: String) {
        self.slug = slug;
        self.body = if body.trim().is_empty() {
            None
        } else {
            Some(body)
        };
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require_title(&self.title, path)
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn sort_key(&self) -> i32 {
        self.year
    }
}

/// An article or essay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Writing {
    #[serde(skip_deserializing)]
    pub slug: String,
    pub title: String,
    /// Publication date exactly as written in the record.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: String,
    /// Minutes; estimated from the body when the record omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(skip_deserializing)]
    pub body: String,
}

impl Writing {
    /// The parsed publication date.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

impl Record for Writing {
    const KIND: ContentKind = ContentKind::Writings;
    type Key = Option<DateTime<Utc>>;

    fn finish(&mut self, slug: String, body: String) {
        if self.reading_time.is_none() {
            self.reading_time = Some(reading_time(&body));
        }
        self.slug = slug;
        self.body = body;
    }

    fn validate(&self, path: &Path) -> Result<()> {
        require_title(&self.title, path)?;
        if self.published_at().is_none() {
            return Err(CoreError::validation(
                path,
                format!("date '{}' is not a calendar date", self.date),
            ));
        }
        Ok(())
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn sort_key(&self) -> Option<DateTime<Utc>> {
        self.published_at()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_record_format_from_extension() {
        assert_eq!(
            RecordFormat::from_extension("md"),
            Some(RecordFormat::Markdown)
        );
        assert_eq!(RecordFormat::from_extension("MDX"), Some(RecordFormat::Mdx));
        assert_eq!(RecordFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(
            slug_from_path(Path::new("writings/Hello-World.mdx")).as_deref(),
            Some("Hello-World")
        );
        assert_eq!(
            slug_from_path(Path::new("artwork/sunset.md")).as_deref(),
            Some("sunset")
        );
        assert_eq!(slug_from_path(Path::new("artwork/notes.txt")), None);
        assert_eq!(slug_from_path(Path::new("artwork/.draft.md")), None);
        assert_eq!(slug_from_path(Path::new("artwork/README")), None);
    }

    #[test]
    fn test_content_kind_round_trips_through_str() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.to_string().parse::<ContentKind>(), Ok(kind));
        }
        assert_eq!("writing".parse::<ContentKind>(), Ok(ContentKind::Writings));
        assert!("posts".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date("2024-06-01").expect("date");
        assert_eq!((day.year(), day.month(), day.day()), (2024, 6, 1));

        let ts = parse_date("2024-06-01T10:30:00+02:00").expect("rfc3339");
        assert_eq!(ts.hour(), 8);

        assert!(parse_date("2024-06-01T10:30:00").is_some());
        assert!(parse_date("2024-06-01 10:30:00").is_some());
        assert!(parse_date("June 1st").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_date_ordering_is_chronological() {
        let a = parse_date("2023-12-31").expect("a");
        let b = parse_date("2024-01-01T00:00:00Z").expect("b");
        assert!(b > a);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
        assert_eq!(word_count("one two\nthree"), 3);
    }

    #[test]
    fn test_role_serde_names() {
        let role: Role = serde_yaml::from_str("UX/UI").expect("role");
        assert_eq!(role, Role::UxUi);
        let role: Role = serde_yaml::from_str("Research").expect("role");
        assert_eq!(role, Role::Research);
    }

    #[test]
    fn test_writing_finish_estimates_reading_time() {
        let mut writing: Writing =
            serde_yaml::from_str("title: T\ndate: 2024-01-01\npublished: true").expect("yaml");
        writing.finish("t".to_string(), "word ".repeat(450));

        assert_eq!(writing.slug, "t");
        assert_eq!(writing.reading_time, Some(3));
    }

    #[test]
    fn test_writing_keeps_declared_reading_time() {
        let mut writing: Writing =
            serde_yaml::from_str("title: T\ndate: 2024-01-01\nreadingTime: 7").expect("yaml");
        writing.finish("t".to_string(), "short".to_string());

        assert_eq!(writing.reading_time, Some(7));
        assert!(!writing.published);
    }

    #[test]
    fn test_writing_keeps_declared_zero_reading_time() {
        let mut writing: Writing =
            serde_yaml::from_str("title: T\ndate: 2024-01-01\nreadingTime: 0").expect("yaml");
        writing.finish("t".to_string(), "word ".repeat(450));

        assert_eq!(writing.reading_time, Some(0));
    }

    #[test]
    fn test_writing_rejects_bad_date() {
        let mut writing: Writing =
            serde_yaml::from_str("title: T\ndate: someday").expect("yaml");
        writing.finish("t".to_string(), String::new());

        let err = writing.validate(Path::new("writings/t.md")).unwrap_err();
        assert!(err.to_string().contains("someday"));
    }

    #[test]
    fn test_slug_in_metadata_is_ignored() {
        let mut artwork: Artwork =
            serde_yaml::from_str("title: A\nslug: other\ntype: oil\nyear: 2020").expect("yaml");
        artwork.finish("from-file".to_string(), "  \n".to_string());

        assert_eq!(artwork.slug, "from-file");
        assert!(artwork.body.is_none());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let project: Project =
            serde_yaml::from_str("title: \"  \"\nyear: 2021\ntype: backend").expect("yaml");
        assert!(project.validate(Path::new("projects/p.md")).is_err());
    }
}
