//! CLI output formatting.
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Sidebar
//!
//! ```text
//! 001 Quick Start
//!     001 Quick Start → getting-started
//!     002 Installation → getting-started/installation
//! 002 Reference
//!     001 Cli → reference/cli
//!     002 API Reference (collapsed)
//!         001 Index → reference/api
//!
//! Generated 2 sections, 4 links
//! ```
//!
//! ## Check
//!
//! ```text
//! Duplicate slug: guides/setup (Setup, Setup)
//! ```

use crate::check::CheckReport;
use crate::types::{Section, SidebarItem};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn format_items(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) -> usize {
    let mut links = 0;
    for (i, item) in items.iter().enumerate() {
        let prefix = format!("{}{}", indent(depth), format_index(i + 1));
        match item {
            SidebarItem::Link { label, slug } => {
                lines.push(format!("{prefix} {label} → {slug}"));
                links += 1;
            }
            SidebarItem::Group {
                label,
                collapsed,
                items,
            } => {
                match collapsed {
                    Some(true) => lines.push(format!("{prefix} {label} (collapsed)")),
                    _ => lines.push(format!("{prefix} {label}")),
                }
                links += format_items(items, depth + 1, lines);
            }
        }
    }
    links
}

/// Format the generated sidebar as an indented tree with a summary line.
pub fn format_sidebar_output(sections: &[Section]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut links = 0;
    for (i, section) in sections.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), section.label));
        links += format_items(&section.items, 1, &mut lines);
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Generated {}, {}",
        plural(sections.len(), "section"),
        plural(links, "link")
    ));
    lines
}

pub fn print_sidebar_output(sections: &[Section]) {
    for line in format_sidebar_output(sections) {
        println!("{}", line);
    }
}

/// Format the result of a structural check.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    if report.is_clean() {
        return vec![format!(
            "No problems found ({} checked)",
            plural(report.link_count, "link")
        )];
    }
    report
        .duplicates
        .iter()
        .map(|dup| format!("Duplicate slug: {} ({})", dup.slug, dup.labels.join(", ")))
        .collect()
}

pub fn print_check_report(report: &CheckReport) {
    for line in format_check_report(report) {
        println!("{}", line);
    }
}
