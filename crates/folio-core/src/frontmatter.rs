//! Front matter splitting and schema-checked parsing for record files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CoreError, Result};

/// Delimiter types for front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML front matter delimited by `---`.
    Yaml,
    /// TOML front matter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into front matter and body.
///
/// Both delimiters must sit on their own line. The body starts right after
/// the closing delimiter's line break and is otherwise kept verbatim.
/// Returns `None` when the content has no opening delimiter or the block is
/// never closed.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let rest = &content[delimiter.len()..];
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            let frontmatter = rest[..offset].trim();
            let body = &rest[offset + line.len()..];
            return Some((format, frontmatter, body));
        }
        offset += line.len();
    }

    None
}

/// Parse a record file into its typed metadata and body.
///
/// The metadata block is deserialized straight into `T`, so a missing
/// required key or a value of the wrong shape surfaces as a
/// [`CoreError::Frontmatter`] naming the file.
pub fn parse_record<T: DeserializeOwned>(content: &str, path: &Path) -> Result<(T, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Err(CoreError::parse(path, "missing front matter block"));
    };

    let meta: T = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((meta, body.to_string()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Meta {
        title: String,
        #[serde(default)]
        tags: Vec<String>,
        year: Option<i32>,
    }

    #[test]
    fn test_split_yaml_frontmatter() {
        let content = r#"---
title: "Hello World"
date: 2024-01-14
---

This is the body content."#;

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Yaml);
        assert!(fm.contains("title:"));
        assert_eq!(body, "\nThis is the body content.");
    }

    #[test]
    fn test_split_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\n+++\nBody";

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Toml);
        assert_eq!(fm, "title = \"Hello\"");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let content = "---\r\ntitle: x\r\n---\r\nBody\r\n";

        let (_, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(fm, "title: x");
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_dashes_inside_value_do_not_close_block() {
        let content = "---\ntitle: \"a --- b\"\n---\nBody";

        let (_, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(fm, "title: \"a --- b\"");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_body_indentation_is_preserved() {
        let content = "---\ntitle: x\n---\n    fn main() {}\n\nText.\n";

        let (_, _, body) = split_frontmatter(content).expect("split");
        assert_eq!(body, "    fn main() {}\n\nText.\n");
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(split_frontmatter("Just some content.").is_none());
    }

    #[test]
    fn test_unclosed_frontmatter() {
        assert!(split_frontmatter("---\ntitle: x\nBody").is_none());
    }

    #[test]
    fn test_parse_yaml_record() {
        let content = "---\ntitle: \"Test\"\nyear: 2024\ntags:\n  - rust\n  - web\n---\n\nContent here.";

        let (meta, body): (Meta, String) =
            parse_record(content, Path::new("test.md")).expect("parse");

        assert_eq!(meta.title, "Test");
        assert_eq!(meta.year, Some(2024));
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert_eq!(body, "\nContent here.");
    }

    #[test]
    fn test_parse_toml_record() {
        let content = "+++\ntitle = \"Test\"\ntags = [\"a\"]\n+++\n\nContent here.";

        let (meta, body): (Meta, String) =
            parse_record(content, Path::new("test.md")).expect("parse");

        assert_eq!(meta.title, "Test");
        assert!(meta.year.is_none());
        assert_eq!(meta.tags, vec!["a"]);
        assert_eq!(body, "\nContent here.");
    }

    #[test]
    fn test_parse_missing_required_field() {
        let content = "---\nyear: 2024\n---\nBody";
        let result: Result<(Meta, String)> = parse_record(content, Path::new("bad.md"));

        let err = result.unwrap_err();
        assert!(matches!(err, CoreError::Frontmatter { .. }));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_parse_without_block_is_error() {
        let result: Result<(Meta, String)> = parse_record("# Heading", Path::new("plain.md"));
        assert!(matches!(result, Err(CoreError::Parse { .. })));
    }
}
