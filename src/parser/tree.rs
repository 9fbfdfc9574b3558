//! Tree container with depth-first traversal.

use std::fmt;

use super::node::Node;
use super::printer;

/// A parsed configuration tree.
///
/// Wraps the root node and exposes depth-first pre-order traversal, used
/// both by the linker's resolution walk and by diagnostic rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    /// Entry point; carries no target or link of its own.
    pub root: Node,
}

impl Tree {
    /// Wrap a root node.
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self { root }
    }

    /// Visit every node below the root in depth-first pre-order, stopping
    /// at and propagating the first visitor error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`.
    pub fn walk<E>(&self, visit: &mut impl FnMut(&Node) -> Result<(), E>) -> Result<(), E> {
        for child in &self.root.children {
            walk(child, visit)?;
        }
        Ok(())
    }

    /// Mutable depth-first pre-order traversal.
    ///
    /// A node is visited before its children, so children appended to a
    /// node during its own visit are traversed as well — the linker relies
    /// on this for directory expansion.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`.
    pub fn walk_mut<E>(
        &mut self,
        visit: &mut impl FnMut(&mut Node) -> Result<(), E>,
    ) -> Result<(), E> {
        for child in &mut self.root.children {
            walk_mut(child, visit)?;
        }
        Ok(())
    }
}

fn walk<E>(node: &Node, visit: &mut impl FnMut(&Node) -> Result<(), E>) -> Result<(), E> {
    visit(node)?;
    for child in &node.children {
        walk(child, visit)?;
    }
    Ok(())
}

fn walk_mut<E>(node: &mut Node, visit: &mut impl FnMut(&mut Node) -> Result<(), E>) -> Result<(), E> {
    visit(node)?;
    for child in &mut node.children {
        walk_mut(child, visit)?;
    }
    Ok(())
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        printer::render(f, &printer::NodePrinter::new(&self.root))
    }
}
