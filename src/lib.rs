//! Rustoc renders a numbered, nested table of contents from a tree of
//! document headings.
//!
//! Callers hand over an already-built [`TocTree`] (or a flat/nested heading
//! sequence for the builder to assemble) together with a [`TocTemplate`] of
//! markup fragments, and get back one concatenated markup string with
//! hierarchical outline numbers like `2.3.1`. Extracting headings from
//! document markup and escaping titles or anchors are the caller's concerns.

// Module declarations
pub mod cli;
pub mod config;
pub mod toc;
pub mod utils;

pub use toc::{
    build_tree, number_for, render_toc, tree_from_nodes, Heading, HeadingNode, Item, ItemId,
    ItemNumber, TocTemplate, TocTree,
};
pub use utils::error::{BoxResult, RustocError};
