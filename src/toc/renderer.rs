use crate::toc::numbering::number_for;
use crate::toc::template::TocTemplate;
use crate::toc::tree::{ItemId, TocTree};

/// Render the whole tree as one concatenated markup string.
///
/// Only the root's children and their descendants are emitted; the synthetic
/// root itself gets no wrapper. A root with no children produces the empty
/// string. The accumulator is local to each call, so the same tree and
/// template always produce byte-identical output and one call leaves no
/// residue for the next.
pub fn render_toc(tree: &TocTree, template: &TocTemplate) -> String {
    let mut output = String::new();
    render_children(tree, tree.root(), template, &mut output);
    output
}

fn render_children(tree: &TocTree, parent: ItemId, template: &TocTemplate, output: &mut String) {
    for &child in tree.item(parent).children() {
        let item = tree.item(child);
        output.push_str(&template.item_start);
        output.push_str(&template.replace_tokens(&item.id, &number_for(tree, child), &item.title));

        if item.has_children() {
            output.push_str(&template.level_start);
            render_children(tree, child, template, output);
            output.push_str(&template.level_end);
        }

        output.push_str(&template.item_end);
    }
}
