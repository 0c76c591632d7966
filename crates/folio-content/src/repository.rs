//! File-backed content repository.
//!
//! Each accessor re-reads its collection directory, parses every record file,
//! and returns typed records sorted most recent first. Faults are contained:
//! a missing or unreadable directory yields an empty collection and a
//! malformed file is skipped without affecting its siblings.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use folio_core::{
    Artwork, ArtworkType, CaseStudy, Config, ContentKind, CoreError, Project, Record, Writing,
    content::slug_from_path, frontmatter::parse_record,
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons a single record file was left out of its collection.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Front matter missing, malformed, or failing validation.
    #[error(transparent)]
    Record(#[from] CoreError),

    /// Another file in the same collection already claimed this slug.
    #[error("duplicate slug '{slug}' in {path} (already defined by {first})")]
    DuplicateSlug {
        slug: String,
        path: PathBuf,
        first: PathBuf,
    },
}

/// A record file that did not make it into its collection.
#[derive(Debug)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub error: RepositoryError,
}

/// Result of scanning one collection directory.
#[derive(Debug)]
pub struct Collection<T> {
    /// Loaded records, most recent first.
    pub records: Vec<T>,

    /// Files that were skipped, in path order.
    pub skipped: Vec<SkippedRecord>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Load summary for one content kind.
#[derive(Debug)]
pub struct CollectionReport {
    pub kind: ContentKind,

    /// Records that parsed and validated.
    pub loaded: usize,

    /// Loaded writings hidden from listings because they are unpublished.
    pub unpublished: usize,

    pub skipped: Vec<SkippedRecord>,
}

impl CollectionReport {
    fn new<T: Record>(collection: Collection<T>, unpublished: usize) -> Self {
        Self {
            kind: T::KIND,
            loaded: collection.records.len(),
            unpublished,
            skipped: collection.skipped,
        }
    }
}

/// Read access to the four record collections under a content root.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    root: PathBuf,
}

impl ContentRepository {
    /// Create a repository over the given content root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a repository over the configured content root.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.content_root())
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding records of `kind`.
    pub fn dir_for(&self, kind: ContentKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// All case studies, newest year first.
    pub fn list_case_studies(&self) -> Vec<CaseStudy> {
        self.list()
    }

    /// Look up a case study by exact slug.
    pub fn get_case_study(&self, slug: &str) -> Option<CaseStudy> {
        find_slug(self.list_case_studies(), slug)
    }

    /// All projects, newest year first.
    pub fn list_projects(&self) -> Vec<Project> {
        self.list()
    }

    /// Look up a project by exact slug.
    pub fn get_project(&self, slug: &str) -> Option<Project> {
        find_slug(self.list_projects(), slug)
    }

    /// All artwork, newest year first.
    pub fn list_artwork(&self) -> Vec<Artwork> {
        self.list()
    }

    /// Look up an artwork piece by exact slug.
    pub fn get_artwork(&self, slug: &str) -> Option<Artwork> {
        find_slug(self.list_artwork(), slug)
    }

    /// Artwork of one medium, in the order of [`Self::list_artwork`].
    pub fn list_artwork_by_type(&self, artwork_type: ArtworkType) -> Vec<Artwork> {
        self.list_artwork()
            .into_iter()
            .filter(|piece| piece.artwork_type == artwork_type)
            .collect()
    }

    /// Published writings, most recent date first.
    pub fn list_writings(&self) -> Vec<Writing> {
        let mut writings: Vec<Writing> = self.list();
        writings.retain(|writing| writing.published);
        writings
    }

    /// Published writings carrying `tag`, in the order of [`Self::list_writings`].
    pub fn list_writings_by_tag(&self, tag: &str) -> Vec<Writing> {
        self.list_writings()
            .into_iter()
            .filter(|writing| writing.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Look up a published writing by exact slug.
    ///
    /// Unpublished records are not found even when their file exists.
    pub fn get_writing(&self, slug: &str) -> Option<Writing> {
        find_slug(self.list_writings(), slug)
    }

    /// Load summary for one kind, including every skipped file.
    pub fn report(&self, kind: ContentKind) -> CollectionReport {
        match kind {
            ContentKind::CaseStudies => CollectionReport::new(self.scan::<CaseStudy>(), 0),
            ContentKind::Projects => CollectionReport::new(self.scan::<Project>(), 0),
            ContentKind::Artwork => CollectionReport::new(self.scan::<Artwork>(), 0),
            ContentKind::Writings => {
                let collection = self.scan::<Writing>();
                let unpublished = collection.records.iter().filter(|w| !w.published).count();
                CollectionReport::new(collection, unpublished)
            }
        }
    }

    /// Scan the collection for `T`, keeping skipped files alongside the
    /// loaded records.
    pub fn scan<T: Record>(&self) -> Collection<T> {
        let dir = self.dir_for(T::KIND);

        let files = match record_files(&dir) {
            Ok(files) => files,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "collection directory missing");
                return Collection::default();
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "collection directory unreadable");
                return Collection::default();
            }
        };

        let mut first_seen: HashMap<&str, &Path> = HashMap::new();
        let mut unique = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for (slug, path) in &files {
            if let Some(first) = first_seen.get(slug.as_str()) {
                skipped.push(SkippedRecord {
                    path: path.clone(),
                    error: RepositoryError::DuplicateSlug {
                        slug: slug.clone(),
                        path: path.clone(),
                        first: first.to_path_buf(),
                    },
                });
                continue;
            }
            first_seen.insert(slug, path);
            unique.push((slug, path));
        }

        let results: Vec<_> = unique
            .par_iter()
            .map(|(slug, path)| {
                load_record::<T>(path, slug).map_err(|error| SkippedRecord {
                    path: path.to_path_buf(),
                    error,
                })
            })
            .collect();

        let mut records = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(record) => records.push(record),
                Err(skip) => skipped.push(skip),
            }
        }

        records.sort_by(|a, b| {
            b.sort_key()
                .cmp(&a.sort_key())
                .then_with(|| a.slug().cmp(b.slug()))
        });
        skipped.sort_by(|a, b| a.path.cmp(&b.path));

        info!(
            kind = %T::KIND,
            loaded = records.len(),
            skipped = skipped.len(),
            "scanned collection"
        );

        Collection { records, skipped }
    }

    fn list<T: Record>(&self) -> Vec<T> {
        let collection = self.scan::<T>();
        for skip in &collection.skipped {
            warn!(path = %skip.path.display(), error = %skip.error, "skipping record");
        }
        collection.records
    }
}

/// Record files directly inside `dir` as `(slug, path)`, sorted by path.
fn record_files(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(slug) = slug_from_path(&path) {
            files.push((slug, path));
        }
    }

    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}

/// Read, parse, and validate one record file.
fn load_record<T: Record>(path: &Path, slug: &str) -> Result<T, RepositoryError> {
    debug!(path = %path.display(), "parsing record");

    let content = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (mut record, body): (T, String) = parse_record(&content, path)?;
    record.finish(slug.to_string(), body);
    record.validate(path)?;

    Ok(record)
}

fn find_slug<T: Record>(records: Vec<T>, slug: &str) -> Option<T> {
    records.into_iter().find(|record| record.slug() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).expect("create dir");
        fs::write(dir.join(name), content).expect("write record");
    }

    #[test]
    fn test_record_files_filters_and_sorts() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "b.md", "");
        write(dir.path(), "a.mdx", "");
        write(dir.path(), "notes.txt", "");
        write(dir.path(), ".hidden.md", "");
        fs::create_dir(dir.path().join("nested.md")).expect("mkdir");

        let files = record_files(dir.path()).expect("list");
        let slugs: Vec<_> = files.iter().map(|(slug, _)| slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_record_files_missing_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = record_files(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_duplicate_slug_keeps_first_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let projects = dir.path().join("projects");
        let record = "---\ntitle: P\nyear: 2022\ntype: design\n---\nBody";
        write(&projects, "p.md", record);
        write(&projects, "p.mdx", record);

        let repo = ContentRepository::new(dir.path());
        let collection = repo.scan::<Project>();

        assert_eq!(collection.records.len(), 1);
        assert_eq!(collection.skipped.len(), 1);
        assert!(collection.skipped[0].path.ends_with("p.mdx"));
        assert!(matches!(
            collection.skipped[0].error,
            RepositoryError::DuplicateSlug { .. }
        ));
    }

    #[test]
    fn test_ties_broken_by_slug() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let artwork = dir.path().join("artwork");
        for slug in ["c", "a", "b"] {
            write(
                &artwork,
                &format!("{slug}.md"),
                "---\ntitle: X\ntype: photo\nyear: 2020\n---\n",
            );
        }

        let repo = ContentRepository::new(dir.path());
        let slugs: Vec<_> = repo.list_artwork().into_iter().map(|a| a.slug).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_report_counts_unpublished_writings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let writings = dir.path().join("writings");
        write(
            &writings,
            "a.md",
            "---\ntitle: A\ndate: 2024-01-01\npublished: true\n---\nBody",
        );
        write(&writings, "b.md", "---\ntitle: B\ndate: 2024-02-01\n---\nBody");
        write(&writings, "c.md", "no front matter");

        let report = ContentRepository::new(dir.path()).report(ContentKind::Writings);

        assert_eq!(report.kind, ContentKind::Writings);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.unpublished, 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("c.md"));
    }
}
