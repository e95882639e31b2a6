use log::debug;
use serde::{Deserialize, Serialize};

use crate::toc::tree::{ItemId, TocTree};

/// One already-extracted heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: usize,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// A heading in nested serialized form; the level is implied by depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub children: Vec<HeadingNode>,
}

/// Build a tree from a flat heading sequence.
///
/// Each heading becomes a child of the nearest preceding heading with a
/// smaller level, or of the synthetic root when there is none. Levels are
/// kept exactly as given; a document that skips levels yields the degenerate
/// numbering described in [`crate::toc::numbering::number_for`] rather than
/// a repaired outline.
pub fn build_tree(headings: &[Heading]) -> TocTree {
    let mut tree = TocTree::new();
    let mut open: Vec<(usize, ItemId)> = Vec::new();

    for heading in headings {
        while open.last().map_or(false, |&(level, _)| level >= heading.level) {
            open.pop();
        }
        let (parent_level, parent) = open
            .last()
            .copied()
            .unwrap_or((0, tree.root()));

        if heading.level > parent_level + 1 {
            debug!(
                "heading '{}' skips from level {} to {}",
                heading.id, parent_level, heading.level
            );
        }

        let item = tree.append_child(parent, heading.id.clone(), heading.title.clone(), heading.level);
        open.push((heading.level, item));
    }

    tree
}

/// Build a tree from nested heading nodes, assigning levels by depth.
pub fn tree_from_nodes(nodes: &[HeadingNode]) -> TocTree {
    let mut tree = TocTree::new();
    let root = tree.root();
    for node in nodes {
        attach_node(&mut tree, root, node, 1);
    }
    tree
}

fn attach_node(tree: &mut TocTree, parent: ItemId, node: &HeadingNode, level: usize) {
    let item = tree.append_child(parent, node.id.clone(), node.title.clone(), level);
    for child in &node.children {
        attach_node(tree, item, child, level + 1);
    }
}
