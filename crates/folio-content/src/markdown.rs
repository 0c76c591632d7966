//! Markdown body rendering using pulldown-cmark.

use std::collections::HashSet;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Anchor ID for linking.
    pub id: String,
}

/// A record body rendered to HTML.
#[derive(Debug, Clone, Default)]
pub struct RenderedBody {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// Render a record body to HTML, collecting headings into a table of
/// contents.
///
/// Headings without an explicit `{#id}` get one derived from their text;
/// repeated texts are suffixed `-1`, `-2`, ... so anchors stay unique.
pub fn render_body(markdown: &str) -> RenderedBody {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options()).collect();
    let mut toc = Vec::new();
    let mut used_ids = HashSet::new();
    let mut current: Option<(usize, String)> = None;

    for i in 0..events.len() {
        let heading_end = match &events[i] {
            Event::Start(Tag::Heading { .. }) => {
                current = Some((i, String::new()));
                None
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, heading_text)) = current.as_mut() {
                    heading_text.push_str(text);
                }
                None
            }
            Event::End(TagEnd::Heading(level)) => Some(*level),
            _ => None,
        };

        if let Some(level) = heading_end
            && let Some((start, text)) = current.take()
            && let Event::Start(Tag::Heading { id, .. }) = &mut events[start]
        {
            let anchor = match id {
                Some(explicit) => explicit.to_string(),
                None => {
                    let generated = unique_id(&slugify(&text), &mut used_ids);
                    *id = Some(CowStr::from(generated.clone()));
                    generated
                }
            };
            used_ids.insert(anchor.clone());
            toc.push(TocEntry {
                level: level as u8,
                text,
                id: anchor,
            });
        }
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    RenderedBody { html: out, toc }
}

fn unique_id(base: &str, used: &mut HashSet<String>) -> String {
    let base = if base.is_empty() { "section" } else { base };
    if !used.contains(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Convert heading text to a URL-safe anchor.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
