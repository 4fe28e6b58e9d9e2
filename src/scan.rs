//! Content directory scanning and sidebar assembly.
//!
//! Walks the content root depth-first and turns every directory into a
//! [`DirectoryNode`], or into nothing when it holds no content.
//!
//! ## Directory Structure
//!
//! ```text
//! src/content/docs/                # Content root
//! ├── index.md                     # Root files are not listed
//! ├── getting-started/             # Section (leaf directory)
//! │   ├── index.md                 # → "Overview" or its front-matter title
//! │   └── installation.md
//! ├── guides/                      # Section with a subdirectory
//! │   ├── index.md                 # → "Index" (directory is not a leaf)
//! │   └── deployment/              # Leaf child: items inlined into Guides
//! │       └── docker.mdx
//! └── reference/
//!     └── api/                     # Non-leaf child: nested collapsed group
//!         ├── index.md
//!         └── http/
//!             └── client.md
//! ```
//!
//! ## Ordering
//!
//! Subdirectory and file names are each sorted by plain string order
//! (case-sensitive, `"B" < "a"`) before processing, so the output never
//! depends on the order the file system reports entries in.
//!
//! ## Failure
//!
//! Any failure to list a directory aborts the whole scan with
//! [`ScanError::ReadDir`]. A half-built sidebar is never returned. Front-matter
//! lookups, in contrast, never fail (see [`crate::frontmatter`]).

use crate::config::SidebarConfig;
use crate::frontmatter;
use crate::naming::{format_title, is_index_file, is_markdown_file, strip_markdown_extension};
use crate::slug::{build_slug, dir_segments};
use crate::types::{DirectoryNode, Section, SidebarItem};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A directory entry's name, as displayed and as on disk.
///
/// `name` is the lossy UTF-8 form used for labels, slugs and ordering;
/// `os_name` is the real name and is the only one ever joined onto a path.
/// Field order gives the sort order: display name first, raw bytes to break
/// ties between names that only differ in invalid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    name: String,
    os_name: OsString,
}

/// Sorted content entries of one directory.
#[derive(Debug, Default)]
struct DirEntries {
    directories: Vec<Entry>,
    files: Vec<Entry>,
}

/// Build the full sidebar for `root`: one [`Section`] per non-empty
/// subdirectory, in name order.
pub fn generate_sidebar(root: &Path, config: &SidebarConfig) -> Result<Vec<Section>, ScanError> {
    let entries = collect_entries(root)?;

    let mut sections = Vec::new();
    for dir in &entries.directories {
        let Some(node) = build_directory_node(root, Path::new(&dir.os_name), true, config)? else {
            continue;
        };
        let label = match node.label() {
            "" => format_title(&dir.name),
            label => label.to_string(),
        };
        sections.push(Section {
            label,
            items: node.into_items(),
        });
    }
    Ok(sections)
}

/// Scan `root/relative_dir` and everything below it.
///
/// Returns `Ok(None)` when neither the directory nor any descendant holds a
/// content file. `top_level` marks a direct child of the content root, whose
/// group carries no collapsed flag.
pub fn build_directory_node(
    root: &Path,
    relative_dir: &Path,
    top_level: bool,
    config: &SidebarConfig,
) -> Result<Option<DirectoryNode>, ScanError> {
    let absolute_dir = root.join(relative_dir);
    let entries = collect_entries(&absolute_dir)?;

    let mut children = Vec::new();
    for dir in &entries.directories {
        if let Some(child) =
            build_directory_node(root, &relative_dir.join(&dir.os_name), false, config)?
        {
            children.push(child);
        }
    }

    if children.is_empty() && entries.files.is_empty() {
        return Ok(None);
    }

    let declared_title = declared_title(&absolute_dir, &entries.files);
    let label = declared_title
        .clone()
        .unwrap_or_else(|| directory_label(relative_dir));
    let is_leaf = children.is_empty();

    let mut items: Vec<SidebarItem> = entries
        .files
        .iter()
        .map(|file| {
            let label = if is_leaf && is_index_file(&file.name) {
                declared_title
                    .clone()
                    .unwrap_or_else(|| config.overview_label.clone())
            } else {
                format_title(strip_markdown_extension(&file.name))
            };
            SidebarItem::Link {
                label,
                slug: build_slug(relative_dir, &file.name),
            }
        })
        .collect();

    if is_leaf {
        return Ok(Some(DirectoryNode::Flat { label, items }));
    }

    items.extend(children.into_iter().flat_map(DirectoryNode::into_parent_items));

    Ok(Some(DirectoryNode::Group {
        label,
        collapsed: (!top_level).then_some(config.collapse_nested),
        items,
    }))
}

/// Title declared by the directory's index file, when it has exactly one.
fn declared_title(absolute_dir: &Path, files: &[Entry]) -> Option<String> {
    let mut index_files = files.iter().filter(|file| is_index_file(&file.name));
    match (index_files.next(), index_files.next()) {
        (Some(index), None) => frontmatter::read_title(&absolute_dir.join(&index.os_name)),
        _ => None,
    }
}

/// Label derived from the directory's own name.
fn directory_label(relative_dir: &Path) -> String {
    match dir_segments(relative_dir).last() {
        Some(name) => format_title(name),
        None => format_title(&relative_dir.to_string_lossy()),
    }
}

/// List subdirectories and content files of `dir`, each sorted by name.
///
/// Entries that are neither plain directories nor plain files (symlinks
/// included) are skipped.
fn collect_entries(dir: &Path) -> Result<DirEntries, ScanError> {
    let read_error = |source: std::io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = DirEntries::default();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let file_type = entry.file_type().map_err(read_error)?;
        let os_name = entry.file_name();
        let name = os_name.to_string_lossy().into_owned();
        let is_content = file_type.is_file() && is_markdown_file(&name);
        let entry = Entry { name, os_name };
        if file_type.is_dir() {
            entries.directories.push(entry);
        } else if is_content {
            entries.files.push(entry);
        }
    }

    entries.directories.sort();
    entries.files.sort();
    Ok(entries)
}
