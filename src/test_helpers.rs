//! Shared test utilities for the docs-sidebar test suite.
//!
//! Provides content-tree setup, item constructors, lookups that panic with
//! the available alternatives, and bulk extractors over generated sections.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let sections = generate_sidebar(tmp.path(), &SidebarConfig::default()).unwrap();
//!
//! let guides = find_section(&sections, "Guides");
//! assert_eq!(guides.items[0], link("Configuration", "guides/configuration"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Section, SidebarItem};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_page(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Item constructors
// =========================================================================

pub fn link(label: &str, slug: &str) -> SidebarItem {
    SidebarItem::Link {
        label: label.to_string(),
        slug: slug.to_string(),
    }
}

pub fn group(label: &str, collapsed: Option<bool>, items: Vec<SidebarItem>) -> SidebarItem {
    SidebarItem::Group {
        label: label.to_string(),
        collapsed,
        items,
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a top-level section by label. Panics if not found.
pub fn find_section<'a>(sections: &'a [Section], label: &str) -> &'a Section {
    sections
        .iter()
        .find(|s| s.label == label)
        .unwrap_or_else(|| {
            let labels = section_labels(sections);
            panic!("section '{label}' not found. Available: {labels:?}")
        })
}

/// Find a group item by label among direct items. Panics if not found.
pub fn find_group<'a>(items: &'a [SidebarItem], label: &str) -> &'a SidebarItem {
    items
        .iter()
        .find(|item| matches!(item, SidebarItem::Group { .. }) && item.label() == label)
        .unwrap_or_else(|| {
            let labels = item_labels(items);
            panic!("group '{label}' not found. Available: {labels:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Section labels in order.
pub fn section_labels(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.label.as_str()).collect()
}

/// Labels of direct items in order.
pub fn item_labels(items: &[SidebarItem]) -> Vec<&str> {
    items.iter().map(SidebarItem::label).collect()
}

/// Every link slug in the sidebar, depth-first.
pub fn all_slugs(sections: &[Section]) -> Vec<String> {
    fn walk(items: &[SidebarItem], out: &mut Vec<String>) {
        for item in items {
            match item {
                SidebarItem::Link { slug, .. } => out.push(slug.clone()),
                SidebarItem::Group { items, .. } => walk(items, out),
            }
        }
    }

    let mut slugs = Vec::new();
    for section in sections {
        walk(&section.items, &mut slugs);
    }
    slugs
}
