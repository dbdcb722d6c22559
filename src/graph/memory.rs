//! In-process arena implementation of [`TopicGraph`].

use super::TopicGraph;
use crate::domain::{Page, PropertySchema, Role, TopicId};
use serde::Serialize;
use std::collections::HashMap;
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopicHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeHandle(usize);

#[derive(Debug)]
struct StoredLink {
    role: Option<Role>,
    label: Option<String>,
    target: TopicHandle,
    page: PageHandle,
}

#[derive(Debug)]
struct StoredTree {
    link: LinkHandle,
    children: Vec<TreeHandle>,
    height: usize,
}

/// Summary counts over everything written to a [`MemoryGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Distinct topics, with repeated identifiers counted once.
    pub topics: usize,
    pub fresh_topics: usize,
    pub referenced_topics: usize,
    pub links: usize,
    pub relations: usize,
    /// Pages carrying at least one property.
    pub pages_with_properties: usize,
    /// Longest root-to-leaf path, in edges.
    pub max_depth: usize,
}

/// A graph kept entirely in memory.
///
/// Topics with the same identifier resolve to the same handle; fresh topics
/// are always distinct.
#[derive(Debug)]
pub struct MemoryGraph {
    schema: &'static PropertySchema,
    topics: Vec<Option<TopicId>>,
    by_id: HashMap<TopicId, TopicHandle>,
    pages: Vec<Page>,
    links: Vec<StoredLink>,
    trees: Vec<StoredTree>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::with_schema(PropertySchema::standard())
    }

    /// Uses `schema` to decide which page properties are copied.
    pub fn with_schema(schema: &'static PropertySchema) -> Self {
        Self {
            schema,
            topics: Vec::new(),
            by_id: HashMap::new(),
            pages: Vec::new(),
            links: Vec::new(),
            trees: Vec::new(),
        }
    }

    pub fn children(&self, tree: TreeHandle) -> &[TreeHandle] {
        &self.trees[tree.0].children
    }

    pub fn label(&self, tree: TreeHandle) -> Option<&str> {
        self.link_of(tree).label.as_deref()
    }

    pub fn role(&self, tree: TreeHandle) -> Option<Role> {
        self.link_of(tree).role
    }

    pub fn page(&self, tree: TreeHandle) -> &Page {
        &self.pages[self.link_of(tree).page.0]
    }

    pub fn topic(&self, tree: TreeHandle) -> TopicHandle {
        self.link_of(tree).target
    }

    /// Identifier of a topic, if it was created from one.
    pub fn topic_id(&self, topic: TopicHandle) -> Option<&TopicId> {
        self.topics[topic.0].as_ref()
    }

    pub fn stats(&self) -> GraphStats {
        let referenced_topics = self.by_id.len();
        GraphStats {
            topics: self.topics.len(),
            fresh_topics: self.topics.len() - referenced_topics,
            referenced_topics,
            links: self.links.len(),
            relations: self
                .links
                .iter()
                .filter(|l| l.role == Some(Role::Relation))
                .count(),
            pages_with_properties: self.pages.iter().filter(|p| !p.is_empty()).count(),
            max_depth: self.trees.iter().map(|t| t.height).max().unwrap_or(0),
        }
    }

    fn link_of(&self, tree: TreeHandle) -> &StoredLink {
        &self.links[self.trees[tree.0].link.0]
    }
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicGraph for MemoryGraph {
    type Topic = TopicHandle;
    type Page = PageHandle;
    type Link = LinkHandle;
    type Tree = TreeHandle;
    type Error = Infallible;

    fn create_topic(&mut self, id: Option<&TopicId>) -> Result<TopicHandle, Infallible> {
        if let Some(id) = id
            && let Some(existing) = self.by_id.get(id)
        {
            return Ok(*existing);
        }

        let handle = TopicHandle(self.topics.len());
        self.topics.push(id.cloned());
        if let Some(id) = id {
            self.by_id.insert(id.clone(), handle);
        }
        Ok(handle)
    }

    fn create_page(&mut self, properties: &Page) -> Result<PageHandle, Infallible> {
        let mut page = Page::new();
        self.schema.copy_properties(properties, &mut page);
        self.pages.push(page);
        Ok(PageHandle(self.pages.len() - 1))
    }

    fn create_link(
        &mut self,
        role: Option<Role>,
        label: Option<&str>,
        target: TopicHandle,
        page: PageHandle,
    ) -> Result<LinkHandle, Infallible> {
        self.links.push(StoredLink {
            role,
            label: label.map(str::to_string),
            target,
            page,
        });
        Ok(LinkHandle(self.links.len() - 1))
    }

    fn create_tree(&mut self, link: LinkHandle) -> Result<TreeHandle, Infallible> {
        self.trees.push(StoredTree {
            link,
            children: Vec::new(),
            height: 0,
        });
        Ok(TreeHandle(self.trees.len() - 1))
    }

    fn set_children(&mut self, parent: &TreeHandle, children: Vec<TreeHandle>) -> Result<(), Infallible> {
        let height = children
            .iter()
            .map(|c| self.trees[c.0].height + 1)
            .max()
            .unwrap_or(0);
        let tree = &mut self.trees[parent.0];
        tree.children = children;
        tree.height = height;
        Ok(())
    }
}
