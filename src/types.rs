//! Shared sidebar types.
//!
//! [`Section`] and [`SidebarItem`] are the output shape handed to the site
//! framework as JSON. [`DirectoryNode`] is the intermediate result of
//! scanning one directory, before its parent folds it in.

use serde::{Deserialize, Serialize};

/// One entry in a sidebar menu.
///
/// Serialized untagged: a link is `{ "label", "slug" }`, a group is
/// `{ "label", "collapsed"?, "items" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Link {
        label: String,
        slug: String,
    },
    Group {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    pub fn label(&self) -> &str {
        match self {
            SidebarItem::Link { label, .. } | SidebarItem::Group { label, .. } => label,
        }
    }
}

/// A top-level sidebar section: one per non-empty subdirectory of the
/// content root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub items: Vec<SidebarItem>,
}

/// What a scanned directory contributes to its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryNode {
    /// Files only, no surviving subdirectories. A parent inlines these items
    /// rather than wrapping them in a group.
    Flat {
        label: String,
        items: Vec<SidebarItem>,
    },
    /// At least one surviving subdirectory. A parent nests this as a
    /// [`SidebarItem::Group`].
    Group {
        label: String,
        collapsed: Option<bool>,
        items: Vec<SidebarItem>,
    },
}

impl DirectoryNode {
    pub fn label(&self) -> &str {
        match self {
            DirectoryNode::Flat { label, .. } | DirectoryNode::Group { label, .. } => label,
        }
    }

    pub fn into_items(self) -> Vec<SidebarItem> {
        match self {
            DirectoryNode::Flat { items, .. } | DirectoryNode::Group { items, .. } => items,
        }
    }

    /// The items this node adds to its parent's item list.
    ///
    /// Flat nodes are spliced in; groups become a single nested group item.
    pub fn into_parent_items(self) -> Vec<SidebarItem> {
        match self {
            DirectoryNode::Flat { items, .. } => items,
            DirectoryNode::Group {
                label,
                collapsed,
                items,
            } => vec![SidebarItem::Group {
                label,
                collapsed,
                items,
            }],
        }
    }
}
