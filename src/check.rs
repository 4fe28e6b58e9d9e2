//! Structural checks over a generated sidebar.
//!
//! Slugs come from directory path plus base name, so two files can only
//! collide when they differ by extension alone (`setup.md` next to
//! `setup.mdx`, or `index.md` next to `index.mdx`). Generation does not fail
//! on this; the `check` command reports it.

use crate::types::{Section, SidebarItem};
use std::collections::BTreeMap;

/// A slug produced by more than one link.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateSlug {
    pub slug: String,
    /// Labels of the colliding links, in sidebar order.
    pub labels: Vec<String>,
}

/// Result of [`check_sidebar`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Sorted by slug.
    pub duplicates: Vec<DuplicateSlug>,
    pub link_count: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

pub fn check_sidebar(sections: &[Section]) -> CheckReport {
    let mut by_slug: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for section in sections {
        collect_links(&section.items, &mut by_slug);
    }

    let link_count = by_slug.values().map(Vec::len).sum();
    let duplicates = by_slug
        .into_iter()
        .filter(|(_, labels)| labels.len() > 1)
        .map(|(slug, labels)| DuplicateSlug {
            slug: slug.to_string(),
            labels: labels.into_iter().map(String::from).collect(),
        })
        .collect();

    CheckReport {
        duplicates,
        link_count,
    }
}

fn collect_links<'a>(items: &'a [SidebarItem], by_slug: &mut BTreeMap<&'a str, Vec<&'a str>>) {
    for item in items {
        match item {
            SidebarItem::Link { label, slug } => {
                by_slug.entry(slug).or_default().push(label);
            }
            SidebarItem::Group { items, .. } => collect_links(items, by_slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SidebarConfig;
    use crate::scan::generate_sidebar;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn fixture_sidebar_is_clean() {
        let tmp = setup_fixtures();
        let sections = generate_sidebar(tmp.path(), &SidebarConfig::default()).unwrap();
        let report = check_sidebar(&sections);
        assert!(report.is_clean());
        assert_eq!(report.link_count, all_slugs(&sections).len());
    }

    #[test]
    fn extension_twins_are_reported() {
        let tmp = TempDir::new().unwrap();
        write_page(tmp.path(), "guides/setup.md", "");
        write_page(tmp.path(), "guides/setup.mdx", "");
        write_page(tmp.path(), "guides/other.md", "");

        let sections = generate_sidebar(tmp.path(), &SidebarConfig::default()).unwrap();
        let report = check_sidebar(&sections);
        assert_eq!(
            report.duplicates,
            vec![DuplicateSlug {
                slug: "guides/setup".to_string(),
                labels: vec!["Setup".to_string(), "Setup".to_string()],
            }]
        );
        assert_eq!(report.link_count, 3);
    }

    #[test]
    fn duplicates_found_across_nested_groups() {
        let sections = vec![Section {
            label: "Docs".to_string(),
            items: vec![
                link("Index", "docs"),
                group("Deep", Some(true), vec![link("Overview", "docs")]),
            ],
        }];
        let report = check_sidebar(&sections);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].labels, vec!["Index", "Overview"]);
    }

    #[test]
    fn empty_sidebar_is_clean() {
        let report = check_sidebar(&[]);
        assert!(report.is_clean());
        assert_eq!(report.link_count, 0);
    }
}
