//! Slugs: the forward-slash path a content file is linked by.
//!
//! A slug is the file's directory (relative to the content root) plus its
//! base name, except that `index` files stand for their directory:
//!
//! ```text
//! index.md              → index
//! guides/index.md       → guides
//! guides/setup.md       → guides/setup
//! guides/deep/index.mdx → guides/deep
//! ```

use crate::naming::{INDEX_NAME, strip_markdown_extension};
use std::path::{Component, Path};

/// Build the slug for `file_name` inside `relative_dir`.
///
/// `relative_dir` is relative to the content root; an empty path means the
/// root itself. Separators are always emitted as `/` whatever the platform.
pub fn build_slug(relative_dir: &Path, file_name: &str) -> String {
    let base_name = strip_markdown_extension(file_name);
    let mut segments = dir_segments(relative_dir);
    if base_name != INDEX_NAME {
        segments.push(base_name.to_string());
    }
    if segments.is_empty() {
        return INDEX_NAME.to_string();
    }
    segments.join("/")
}

/// Normal components of a relative path, in order.
pub fn dir_segments(relative_dir: &Path) -> Vec<String> {
    relative_dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn root_index_is_index() {
        assert_eq!(build_slug(Path::new(""), "index.md"), "index");
    }

    #[test]
    fn root_page_is_its_base_name() {
        assert_eq!(build_slug(Path::new(""), "about.md"), "about");
    }

    #[test]
    fn nested_index_is_its_directory() {
        assert_eq!(build_slug(Path::new("guides"), "index.md"), "guides");
        assert_eq!(build_slug(Path::new("a/b"), "index.mdx"), "a/b");
    }

    #[test]
    fn nested_page_appends_base_name() {
        assert_eq!(build_slug(Path::new("guides"), "setup.md"), "guides/setup");
        assert_eq!(build_slug(Path::new("a/b"), "c.md"), "a/b/c");
    }

    #[test]
    fn extension_stripped_case_insensitively() {
        assert_eq!(build_slug(Path::new("guides"), "Setup.MDX"), "guides/Setup");
        assert_eq!(build_slug(Path::new("guides"), "INDEX.md"), "guides/INDEX");
    }

    #[test]
    fn inner_dots_survive() {
        assert_eq!(
            build_slug(Path::new("releases"), "v1.2.md"),
            "releases/v1.2"
        );
    }

    #[test]
    fn platform_separators_become_forward_slashes() {
        let dir: PathBuf = ["reference", "api", "http"].iter().collect();
        assert_eq!(build_slug(&dir, "client.md"), "reference/api/http/client");
    }

    #[test]
    fn dir_segments_skip_current_dir_markers() {
        assert_eq!(dir_segments(Path::new("./a/b")), vec!["a", "b"]);
        assert!(dir_segments(Path::new("")).is_empty());
    }
}
