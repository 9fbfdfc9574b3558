//! Diagnostic tree rendering with box-drawing connectors.

use std::fmt;

use super::file::File;
use super::node::Node;

/// Anything the renderer can draw: a label and ordered children.
pub trait TreeItem {
    /// Number of children.
    fn child_count(&self) -> usize;
    /// Child at `index`, if any.
    fn child(&self, index: usize) -> Option<&dyn TreeItem>;
    /// Text for this item's own line.
    fn label(&self) -> String;
}

/// Render `root` and its descendants to `f`.
///
/// The root renders as a bare `.` marker when its label is empty;
/// descendants get `├──`/`└──` connectors with `│` rails for open
/// ancestor levels.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn render(f: &mut fmt::Formatter<'_>, root: &dyn TreeItem) -> fmt::Result {
    let label = root.label();
    if label.is_empty() {
        writeln!(f, ".")?;
    } else {
        writeln!(f, "{label}")?;
    }
    let mut rails = Vec::new();
    write_children(f, root, &mut rails)
}

fn write_children(
    f: &mut fmt::Formatter<'_>,
    item: &dyn TreeItem,
    rails: &mut Vec<bool>,
) -> fmt::Result {
    let count = item.child_count();
    for index in 0..count {
        let Some(child) = item.child(index) else {
            continue;
        };
        let last = index + 1 == count;
        for open in rails.iter() {
            f.write_str(if *open { "    " } else { "│   " })?;
        }
        f.write_str(if last { "└── " } else { "├── " })?;
        writeln!(f, "{}", child.label())?;

        rails.push(last);
        write_children(f, child, rails)?;
        rails.pop();
    }
    Ok(())
}

/// A prepared, column-aligned render tree for [`Node`]s.
///
/// Built in one pass over the node tree so that every target name is
/// padded to the widest one, keeping the `<-` arrows in a single column.
#[derive(Debug)]
pub struct NodePrinter {
    label: String,
    children: Vec<NodePrinter>,
}

impl NodePrinter {
    /// Prepare the render tree for `root` (the tree's root node).
    #[must_use]
    pub fn new(root: &Node) -> Self {
        let width = name_width(root, 0);
        Self::build(root, width, true)
    }

    fn build(node: &Node, width: usize, is_root: bool) -> Self {
        let label = if is_root {
            String::new()
        } else {
            node_label(node, width)
        };
        Self {
            label,
            children: node
                .children
                .iter()
                .map(|c| Self::build(c, width, false))
                .collect(),
        }
    }
}

impl TreeItem for NodePrinter {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&dyn TreeItem> {
        self.children.get(index).map(|c| c as &dyn TreeItem)
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Widest target name among nodes that carry a link.
fn name_width(node: &Node, acc: usize) -> usize {
    let mut width = acc;
    if !node.link.is_unset() {
        width = width.max(display_name(&node.target).chars().count());
    }
    for child in &node.children {
        width = name_width(child, width);
    }
    width
}

fn display_name(target: &File) -> &str {
    target.base_name().unwrap_or_default()
}

fn node_label(node: &Node, width: usize) -> String {
    let name = display_name(&node.target);
    if node.link.is_unset() {
        return name.to_string();
    }
    let mut label = format!(
        "{name:<width$} <- {}",
        node.link.full_path().display()
    );
    if node.status.is_tagged() {
        label.push_str(&format!(" ({})", node.status));
    }
    label
}
