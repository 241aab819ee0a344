//! Content index for the navigation resolver.
//!
//! Walks a content directory of Markdown files (`*.md`, `*.mdx`) and builds a
//! [`ContentIndex`]: one [`ContentEntry`] per file, keyed by slug.
//!
//! # Slugs and titles
//!
//! The slug is derived from the file path (`intro/index.md` -> `intro`) unless
//! the front-matter sets `slug`. The title comes from the front-matter
//! `title`, then the first `# H1` heading, then the file name in title case.
//!
//! Slugs are unique across the whole tree: two files resolving to the same
//! slug fail the scan with [`ContentError::DuplicateSlug`].
//!
//! # Example
//!
//! ```ignore
//! use nav_content::ContentIndex;
//!
//! let index = ContentIndex::scan(Path::new("src/content/docs"))?;
//! for entry in index.in_directory("reference", true) {
//!     println!("{}: {}", entry.slug, entry.title);
//! }
//! ```

mod frontmatter;
mod scanner;
mod slug;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use frontmatter::{first_heading, parse_frontmatter};
use scanner::SourceFile;
use slug::{directory_of, file_path_to_slug, is_within, titlecase_from_slug};

pub use slug::normalize_slug;

/// Content scanning error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Two content files resolve to the same slug.
    #[error("Duplicate slug '{slug}': {} and {}", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
    /// Reading the content tree failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One content file.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentEntry {
    /// Unique page identifier (e.g. `"intro/start"`, `""` for the home page).
    pub slug: String,
    /// Page title.
    pub title: String,
    /// Sidebar label override from front-matter.
    pub sidebar_label: Option<String>,
    /// Sidebar order hint; lower values come first. Always finite.
    pub order: Option<f64>,
    /// Excluded from autogenerated sidebar sections.
    pub hidden: bool,
    /// Directory of the source file relative to the content root.
    pub directory: String,
    /// Source file path.
    pub source_path: PathBuf,
}

impl ContentEntry {
    /// Create an entry as if scanned from the file `{slug}.md`.
    ///
    /// The directory is taken before `index` collapses, so `"intro/index"`
    /// yields slug `intro` in directory `intro`, like a scanned
    /// `intro/index.md`.
    #[must_use]
    pub fn new(slug: &str, title: impl Into<String>) -> Self {
        let directory = directory_of(Path::new(slug.trim().trim_matches('/')));
        let slug = normalize_slug(slug);
        Self {
            slug,
            title: title.into(),
            sidebar_label: None,
            order: None,
            hidden: false,
            directory,
            source_path: PathBuf::new(),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: impl Into<f64>) -> Self {
        self.order = Some(order.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.sidebar_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn with_directory(mut self, directory: &str) -> Self {
        self.directory = normalize_slug(directory);
        self
    }

    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Label shown in navigation: sidebar label override, else the title.
    #[must_use]
    pub fn nav_label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }

    /// Whether the entry belongs to `directory`.
    ///
    /// With `recursive`, entries in subdirectories of `directory` match too.
    #[must_use]
    pub fn is_in(&self, directory: &str, recursive: bool) -> bool {
        if recursive {
            is_within(&self.directory, directory)
        } else {
            self.directory == directory
        }
    }
}

/// All content entries keyed by slug.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    entries: BTreeMap<String, ContentEntry>,
}

impl ContentIndex {
    /// Scan a content directory.
    ///
    /// Returns an empty index if the directory doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateSlug`] if two files share a slug and
    /// [`ContentError::Io`] if a directory or file cannot be read.
    pub fn scan(root: &Path) -> Result<Self, ContentError> {
        let files = scanner::discover(root)?;
        let entries = files
            .par_iter()
            .map(load_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let index = Self::from_entries(entries)?;
        tracing::debug!(root = %root.display(), entries = index.len(), "Scanned content");
        Ok(index)
    }

    /// Build an index from entries, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateSlug`] naming the first two entries
    /// that share a slug.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ContentEntry>,
    ) -> Result<Self, ContentError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            match map.entry(entry.slug.clone()) {
                Entry::Occupied(existing) => {
                    let existing: &ContentEntry = existing.get();
                    return Err(ContentError::DuplicateSlug {
                        slug: entry.slug,
                        first: existing.source_path.clone(),
                        second: entry.source_path,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Look up an entry by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ContentEntry> {
        self.entries.get(&normalize_slug(slug))
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// All entries in slug order.
    pub fn entries(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.values()
    }

    /// Entries belonging to `directory`, in slug order.
    ///
    /// The empty directory is the content root.
    pub fn in_directory(
        &self,
        directory: &str,
        recursive: bool,
    ) -> impl Iterator<Item = &ContentEntry> {
        let directory = normalize_slug(directory);
        self.entries
            .values()
            .filter(move |entry| entry.is_in(&directory, recursive))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read a content file and derive its entry.
fn load_entry(file: &SourceFile) -> Result<ContentEntry, ContentError> {
    let content =
        fs::read_to_string(&file.abs_path).map_err(|e| ContentError::io(&file.abs_path, e))?;
    let (fm, body) = parse_frontmatter(&content, &file.abs_path);

    let slug = fm
        .slug
        .as_deref()
        .map_or_else(|| file_path_to_slug(&file.rel_path), normalize_slug);
    let title = fm
        .title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| fallback_title(&slug));

    Ok(ContentEntry {
        title,
        sidebar_label: fm.sidebar.label.filter(|l| !l.trim().is_empty()),
        order: fm.sidebar.order,
        hidden: fm.sidebar.hidden,
        directory: directory_of(&file.rel_path),
        source_path: file.abs_path.clone(),
        slug,
    })
}

/// Title for a page without front-matter title or heading.
fn fallback_title(slug: &str) -> String {
    match slug.rsplit('/').next() {
        Some(name) if !name.is_empty() => titlecase_from_slug(name),
        _ => "Home".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn slugs<'a>(entries: impl Iterator<Item = &'a ContentEntry>) -> Vec<&'a str> {
        entries.map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_scan_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();

        let index = ContentIndex::scan(&temp_dir.path().join("missing")).unwrap();

        assert!(index.is_empty());
    }

    #[test]
    fn test_scan_derives_slugs_and_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "index.mdx", "# Welcome");
        write(root, "intro/index.md", "# Introduction");
        write(root, "intro/start.md", "# Getting Started");
        write(root, "reference/api/client.md", "# Client");

        let index = ContentIndex::scan(root).unwrap();

        assert_eq!(
            slugs(index.entries()),
            vec!["", "intro", "intro/start", "reference/api/client"]
        );
        assert_eq!(index.get("").unwrap().directory, "");
        assert_eq!(index.get("intro").unwrap().directory, "intro");
        assert_eq!(index.get("intro/start").unwrap().directory, "intro");
        assert_eq!(
            index.get("reference/api/client").unwrap().directory,
            "reference/api"
        );
        assert!(index.get("intro/start").unwrap().source_path.ends_with("start.md"));
    }

    #[test]
    fn test_scan_title_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "a.md", "---\ntitle: From Front Matter\n---\n# From Heading\n");
        write(root, "b.md", "Intro text\n\n# From Heading\n");
        write(root, "setup-guide.md", "No heading here");
        write(root, "index.md", "");

        let index = ContentIndex::scan(root).unwrap();

        assert_eq!(index.get("a").unwrap().title, "From Front Matter");
        assert_eq!(index.get("b").unwrap().title, "From Heading");
        assert_eq!(index.get("setup-guide").unwrap().title, "Setup Guide");
        assert_eq!(index.get("").unwrap().title, "Home");
    }

    #[test]
    fn test_scan_reads_sidebar_metadata() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "reference/b.md",
            "---\ntitle: Bee\nsidebar:\n  order: 1\n  label: B\n---\n",
        );
        write(root, "reference/secret.md", "---\nsidebar:\n  hidden: true\n---\n# Secret");

        let index = ContentIndex::scan(root).unwrap();

        let b = index.get("reference/b").unwrap();
        assert_eq!(b.order, Some(1.0));
        assert_eq!(b.nav_label(), "B");
        assert!(index.get("reference/secret").unwrap().hidden);
    }

    #[test]
    fn test_scan_fractional_order_keeps_front_matter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "reference/b.md",
            "---\ntitle: Bee Page\nsidebar:\n  order: 1.5\n  label: Bee\n---\n",
        );
        write(root, "reference/c.md", "---\nsidebar:\n  order: 2\n---\n# C\n");

        let index = ContentIndex::scan(root).unwrap();

        let b = index.get("reference/b").unwrap();
        assert_eq!(b.title, "Bee Page");
        assert_eq!(b.order, Some(1.5));
        assert_eq!(b.nav_label(), "Bee");
        assert_eq!(index.get("reference/c").unwrap().order, Some(2.0));
    }

    #[test]
    fn test_scan_ill_typed_order_keeps_title() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "reference/b.md",
            "---\ntitle: Bee Page\nsidebar:\n  order: soon\n---\n# Heading\n",
        );

        let index = ContentIndex::scan(root).unwrap();

        let b = index.get("reference/b").unwrap();
        assert_eq!(b.title, "Bee Page");
        assert_eq!(b.order, None);
    }

    #[test]
    fn test_scan_matches_extension_case_insensitively() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "guides/Guide.MD", "# Upper");
        write(root, "guides/setup.Mdx", "# Mixed");

        let index = ContentIndex::scan(root).unwrap();

        assert_eq!(slugs(index.entries()), vec!["guides/Guide", "guides/setup"]);
        assert_eq!(index.get("guides/Guide").unwrap().title, "Upper");
    }

    #[test]
    fn test_scan_frontmatter_slug_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "guides/old-name.md", "---\nslug: /guides/new-name/\n---\n# Renamed");

        let index = ContentIndex::scan(root).unwrap();

        assert!(index.contains("guides/new-name"));
        assert!(!index.contains("guides/old-name"));
        assert_eq!(index.get("guides/new-name").unwrap().directory, "guides");
    }

    #[test]
    fn test_scan_duplicate_slug() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "guide/x.md", "# X");
        write(root, "guide/x/index.md", "# X again");

        let err = ContentIndex::scan(root).unwrap_err();

        match err {
            ContentError::DuplicateSlug {
                slug,
                first,
                second,
            } => {
                assert_eq!(slug, "guide/x");
                // Path order compares components, so `x/` sorts before `x.md`.
                assert!(first.ends_with("guide/x/index.md"));
                assert!(second.ends_with("guide/x.md"));
            }
            other => panic!("expected DuplicateSlug, got {other}"),
        }
    }

    #[test]
    fn test_scan_duplicate_slug_via_frontmatter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "a.md", "---\nslug: shared\n---\n");
        write(root, "b.md", "---\nslug: shared\n---\n");

        let err = ContentIndex::scan(root).unwrap_err();

        assert!(matches!(err, ContentError::DuplicateSlug { ref slug, .. } if slug == "shared"));
        assert!(err.to_string().contains("shared"));
    }

    #[test]
    fn test_from_entries_duplicate_slug() {
        let entries = vec![
            ContentEntry::new("guide/x", "X").with_source_path("guide/x.md"),
            ContentEntry::new("guide/x/", "X").with_source_path("guide/x/index.md"),
        ];

        let err = ContentIndex::from_entries(entries).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Duplicate slug 'guide/x': guide/x.md and guide/x/index.md"
        );
    }

    #[test]
    fn test_in_directory_recursive_and_shallow() {
        let index = ContentIndex::from_entries(vec![
            ContentEntry::new("reference/a", "A"),
            ContentEntry::new("reference/api/client", "Client"),
            ContentEntry::new("references/other", "Other"),
            ContentEntry::new("intro/start", "Start"),
        ])
        .unwrap();

        assert_eq!(
            slugs(index.in_directory("reference", true)),
            vec!["reference/a", "reference/api/client"]
        );
        assert_eq!(slugs(index.in_directory("/reference/", false)), vec!["reference/a"]);
        assert_eq!(index.in_directory("", true).count(), 4);
        assert_eq!(index.in_directory("missing", true).count(), 0);
    }

    #[test]
    fn test_entry_builder_defaults() {
        let entry = ContentEntry::new("/intro/start/", "Start");

        assert_eq!(entry.slug, "intro/start");
        assert_eq!(entry.directory, "intro");
        assert_eq!(entry.nav_label(), "Start");
        assert!(!entry.hidden);

        let root = ContentEntry::new("guide", "Guide");
        assert_eq!(root.directory, "");
        assert_eq!(root.with_directory("guide").directory, "guide");
    }

    #[test]
    fn test_entry_for_index_page_matches_scanned_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "intro/index.md", "# Intro");
        let scanned = ContentIndex::scan(temp_dir.path()).unwrap();

        let entry = ContentEntry::new("intro/index", "Intro");

        assert_eq!(entry.slug, "intro");
        assert_eq!(entry.directory, "intro");
        assert_eq!(entry.directory, scanned.get("intro").unwrap().directory);
        assert_eq!(ContentEntry::new("/index/", "Home").directory, "");
        assert!(entry.is_in("intro", false));
    }

    #[test]
    fn test_get_normalizes_lookup() {
        let index = ContentIndex::from_entries(vec![ContentEntry::new("intro/start", "Start")]).unwrap();

        assert!(index.contains("/intro/start/"));
        assert!(!index.contains("intro"));
    }
}
