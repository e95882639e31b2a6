pub mod builder;
pub mod numbering;
pub mod renderer;
pub mod template;
pub mod tree;

pub use builder::{build_tree, tree_from_nodes, Heading, HeadingNode};
pub use numbering::{number_for, ItemNumber};
pub use renderer::render_toc;
pub use template::TocTemplate;
pub use tree::{Item, ItemId, TocTree};
