use crate::toc::tree::{ItemId, TocTree};

/// Hierarchical number for one heading: the dotted ancestor prefix plus the
/// heading's own segment.
///
/// A level-1 heading gets an empty prefix and a segment like `"2."`; deeper
/// headings get a prefix like `"2.3."` and a segment like `"1"`, so the full
/// label reads `"2.3.1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNumber {
    pub levels: String,
    pub segment: String,
}

impl ItemNumber {
    /// The full display label, prefix and segment concatenated.
    pub fn label(&self) -> String {
        format!("{}{}", self.levels, self.segment)
    }
}

/// Compute the outline number for a heading by walking its ancestor chain.
///
/// Level-1 headings are numbered by their own sibling position with a
/// trailing dot and no prefix. Deeper headings climb one level at a time,
/// collecting each ancestor's sibling position, and stop once a level-1
/// ancestor has been recorded, so exactly one top-section position forms the
/// outermost prefix segment and the unnumbered root is excluded.
///
/// Input that skips levels still terminates and yields a label, but the
/// result is not a clean outline; a heading deeper than level 1 that sits
/// directly under the root simply gets no prefix for the missing levels.
pub fn number_for(tree: &TocTree, item: ItemId) -> ItemNumber {
    let position = tree.position_among_siblings(item);

    if tree.item(item).level <= 1 {
        return ItemNumber {
            levels: String::new(),
            segment: format!("{}.", position),
        };
    }

    let mut positions = Vec::new();
    let mut ancestor = tree
        .item(item)
        .parent()
        .expect("non-root item without a parent");
    loop {
        let node = tree.item(ancestor);
        match node.parent() {
            Some(up) => {
                positions.push(tree.position_among_siblings(ancestor));
                if node.level <= 1 {
                    break;
                }
                ancestor = up;
            }
            // The climb reached the synthetic root: level-skipped input put
            // this heading directly below it. The root carries no number.
            None => break,
        }
    }

    positions.reverse();
    let levels = if positions.is_empty() {
        String::new()
    } else {
        let joined = positions
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        format!("{}.", joined)
    };

    ItemNumber {
        levels,
        segment: position.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_siblings_numbered_by_position() {
        let mut tree = TocTree::new();
        let root = tree.root();
        let first = tree.append_child(root, "one", "One", 1);
        let second = tree.append_child(root, "two", "Two", 1);
        let third = tree.append_child(root, "three", "Three", 1);

        for (item, expected) in [(first, "1."), (second, "2."), (third, "3.")] {
            let number = number_for(&tree, item);
            assert_eq!(number.levels, "");
            assert_eq!(number.segment, expected);
            assert_eq!(number.label(), expected);
        }
    }

    #[test]
    fn test_nested_chain_labels() {
        let mut tree = TocTree::new();
        let root = tree.root();
        let _first = tree.append_child(root, "h1a", "First", 1);
        let second = tree.append_child(root, "h1b", "Second", 1);
        let child = tree.append_child(second, "h2", "Child", 2);
        let grandchild = tree.append_child(child, "h3", "Grandchild", 3);

        assert_eq!(number_for(&tree, second).label(), "2.");
        assert_eq!(number_for(&tree, child).label(), "2.1");
        assert_eq!(number_for(&tree, grandchild).label(), "2.1.1");
    }

    #[test]
    fn test_deep_outline_prefix_includes_one_top_section() {
        let mut tree = TocTree::new();
        let root = tree.root();
        let top = tree.append_child(root, "t", "Top", 1);
        let _mid_a = tree.append_child(top, "ma", "Mid A", 2);
        let mid_b = tree.append_child(top, "mb", "Mid B", 2);
        let _leaf_a = tree.append_child(mid_b, "la", "Leaf A", 3);
        let leaf_b = tree.append_child(mid_b, "lb", "Leaf B", 3);

        let number = number_for(&tree, leaf_b);
        assert_eq!(number.levels, "1.2.");
        assert_eq!(number.segment, "2");
        assert_eq!(number.label(), "1.2.2");
    }

    #[test]
    fn test_level_skip_under_root_does_not_panic() {
        let mut tree = TocTree::new();
        let root = tree.root();
        // A level-3 heading attached directly under the root: malformed
        // input that the numbering must survive.
        let skipped = tree.append_child(root, "deep", "Deep", 3);

        let number = number_for(&tree, skipped);
        assert_eq!(number.levels, "");
        assert_eq!(number.segment, "1");
    }

    #[test]
    fn test_level_skip_below_top_section_still_labels() {
        let mut tree = TocTree::new();
        let root = tree.root();
        let top = tree.append_child(root, "t", "Top", 1);
        // Level jumps from 1 straight to 3.
        let skipped = tree.append_child(top, "s", "Skipped", 3);

        let number = number_for(&tree, skipped);
        assert_eq!(number.levels, "1.");
        assert_eq!(number.segment, "1");
    }
}
