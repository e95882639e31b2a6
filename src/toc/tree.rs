/// Index of an item inside a `TocTree` arena.
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(usize);

/// A single heading entry in the table of contents tree.
#[derive(Debug, Clone)]
pub struct Item {
    /// Anchor identifier for the heading. Supplied by the caller, never
    /// generated or escaped here.
    pub id: String,
    /// Display text for the heading, substituted verbatim into templates.
    pub title: String,
    /// Heading depth. `0` is reserved for the synthetic root; real headings
    /// start at `1`.
    pub level: usize,
    children: Vec<ItemId>,
    parent: Option<ItemId>,
}

impl Item {
    /// The item's children, in document order.
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    /// Non-owning reference to the parent item. `None` only for the root.
    pub fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed tree of heading items.
///
/// The tree always contains a synthetic level-0 root that holds the
/// top-level headings as children and is never itself rendered. Items are
/// owned by the arena; parent links are plain indices, so the tree stays
/// strictly tree-shaped with no shared ownership.
#[derive(Debug, Clone)]
pub struct TocTree {
    items: Vec<Item>,
}

impl TocTree {
    /// Create a tree containing only the synthetic root.
    pub fn new() -> Self {
        Self {
            items: vec![Item {
                id: String::new(),
                title: String::new(),
                level: 0,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// The synthetic level-0 root.
    pub fn root(&self) -> ItemId {
        ItemId(0)
    }

    /// Append a new heading to the end of `parent`'s child list and return
    /// its id. Child order is purely insertion order.
    pub fn append_child(
        &mut self,
        parent: ItemId,
        id: impl Into<String>,
        title: impl Into<String>,
        level: usize,
    ) -> ItemId {
        let child = ItemId(self.items.len());
        self.items.push(Item {
            id: id.into(),
            title: title.into(),
            level,
            children: Vec::new(),
            parent: Some(parent),
        });
        self.items[parent.0].children.push(child);
        child
    }

    pub fn item(&self, item: ItemId) -> &Item {
        &self.items[item.0]
    }

    pub fn has_children(&self, item: ItemId) -> bool {
        self.item(item).has_children()
    }

    /// The 1-based position of `item` within its parent's children.
    ///
    /// # Panics
    ///
    /// Panics when called on the root, which has no siblings. The root is
    /// never numbered, so reaching this is a caller bug rather than bad
    /// document data.
    pub fn position_among_siblings(&self, item: ItemId) -> usize {
        let parent = self
            .item(item)
            .parent
            .expect("sibling position requested for the root item");
        let index = self.items[parent.0]
            .children
            .iter()
            .position(|&child| child == item)
            .expect("item missing from its parent's child list");
        index + 1
    }

    /// Number of headings in the tree, excluding the synthetic root.
    pub fn len(&self) -> usize {
        self.items.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TocTree {
    fn default() -> Self {
        Self::new()
    }
}
