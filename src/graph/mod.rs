//! Hand-off of a parsed outline to a graph store.
//!
//! The parser produces a plain [`TreeNode<Link>`]; anything that persists
//! notes implements [`TopicGraph`] and receives the tree through
//! [`materialize`].

mod memory;

pub use memory::{GraphStats, LinkHandle, MemoryGraph, PageHandle, TopicHandle, TreeHandle};

use crate::domain::{Link, Page, Role, TopicId, TreeNode};

/// A store that can hold topics, pages, links and ordered trees of links.
pub trait TopicGraph {
    type Topic;
    type Page;
    type Link;
    type Tree;
    type Error: std::error::Error;

    /// Allocates a topic. `None` asks the store for a fresh identity.
    fn create_topic(&mut self, id: Option<&TopicId>) -> Result<Self::Topic, Self::Error>;

    /// Allocates a page holding a copy of `properties`.
    fn create_page(&mut self, properties: &Page) -> Result<Self::Page, Self::Error>;

    /// Allocates an edge to `target`.
    fn create_link(
        &mut self,
        role: Option<Role>,
        label: Option<&str>,
        target: Self::Topic,
        page: Self::Page,
    ) -> Result<Self::Link, Self::Error>;

    /// Wraps a link as a tree node with no children.
    fn create_tree(&mut self, link: Self::Link) -> Result<Self::Tree, Self::Error>;

    /// Assigns the ordered child list of `parent`.
    fn set_children(&mut self, parent: &Self::Tree, children: Vec<Self::Tree>)
    -> Result<(), Self::Error>;
}

enum Visit<'a> {
    Enter(&'a TreeNode<Link>),
    Exit(&'a TreeNode<Link>),
}

/// Writes a parsed tree into `graph`, returning the handle of its root.
///
/// Nodes are created children-first; each node's child list is assigned
/// once, in source order. The walk uses an explicit stack, so arbitrarily
/// deep outlines are fine.
///
/// # Errors
///
/// Returns the first error reported by the graph; nodes created before the
/// failure are left to the graph to roll back.
pub fn materialize<G: TopicGraph>(graph: &mut G, root: &TreeNode<Link>) -> Result<G::Tree, G::Error> {
    let mut stack = vec![Visit::Enter(root)];
    let mut built: Vec<G::Tree> = Vec::new();

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) => {
                stack.push(Visit::Exit(node));
                stack.extend(node.children().iter().rev().map(Visit::Enter));
            }
            Visit::Exit(node) => {
                let children = built.split_off(built.len() - node.child_count());
                let link = node.value();

                let topic = graph.create_topic(link.target().id())?;
                let page = graph.create_page(link.page())?;
                let edge = graph.create_link(link.role(), link.label(), topic, page)?;
                let tree = graph.create_tree(edge)?;
                if !children.is_empty() {
                    graph.set_children(&tree, children)?;
                }
                built.push(tree);
            }
        }
    }

    Ok(built.pop().expect("the root is the last node built"))
}
