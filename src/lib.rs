//! # Docs Sidebar
//!
//! Derives the navigation sidebar of a documentation site from its content
//! directory. The filesystem is the data source: each subdirectory of the
//! content root becomes a top-level section, nested directories become
//! groups, and every `.md`/`.mdx` file becomes a link.
//!
//! The result is a JSON array of sections, each `{ label, items }`, ready to
//! be handed to the site framework as its sidebar configuration.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root and assembles the sections |
//! | [`naming`] | Labels from names, recognized extensions, index detection |
//! | [`frontmatter`] | Best-effort `title` lookup in a file's front matter |
//! | [`slug`] | Link paths for content files |
//! | [`types`] | Output types (`Section`, `SidebarItem`) and the per-directory node |
//! | [`check`] | Duplicate-slug detection over a generated sidebar |
//! | [`config`] | `sidebar.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Rules
//!
//! ## Labels
//!
//! A directory is labeled by the `title` in its `index` file's front matter
//! when it has exactly one index file that declares one, otherwise by its
//! name run through [`naming::format_title`] (`getting-started` →
//! "Getting Started"). Files are labeled by their formatted base name, except
//! the index file of a directory without subdirectories, which takes the
//! declared title or "Overview".
//!
//! ## Flattening
//!
//! A subdirectory without subdirectories of its own is not wrapped in a
//! group: its links are spliced into the parent's items. Deeper structure
//! becomes a nested group, collapsed by default. Top-level sections are never
//! collapsed.
//!
//! ## Pruning
//!
//! Directories with no content files anywhere below them produce nothing.
//!
//! ## Determinism
//!
//! Names are sorted before processing and nothing is cached between runs,
//! so an unchanged tree always yields byte-identical output.

pub mod check;
pub mod config;
pub mod frontmatter;
pub mod naming;
pub mod output;
pub mod scan;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
