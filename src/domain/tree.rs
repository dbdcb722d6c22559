//! Ordered tree used for the parsed outline.

use serde::Serialize;

/// A node holding one value and an ordered list of children.
///
/// Children are attached when a subtree closes during parsing; order of
/// attachment is the order of the source lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<T> {
    value: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the ordered children.
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    /// Returns the child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<&TreeNode<T>> {
        self.children.get(index)
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Appends a closed run of siblings after any children already attached.
    pub fn attach_children(&mut self, children: Vec<TreeNode<T>>) {
        if self.children.is_empty() {
            self.children = children;
        } else {
            self.children.extend(children);
        }
    }

    /// Returns the number of nodes below this one.
    pub fn count_descendants(&self) -> usize {
        self.iter().count() - 1
    }

    /// Returns the length of the longest path from this node to a leaf.
    ///
    /// A leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Iterates over this node and its descendants in pre-order.
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder { stack: vec![self] }
    }

    /// Like [`iter`](Self::iter), but yields the depth of each node as well.
    pub fn iter_with_depth(&self) -> impl Iterator<Item = (usize, &TreeNode<T>)> {
        let mut stack = vec![(0usize, self)];
        std::iter::from_fn(move || {
            let (depth, node) = stack.pop()?;
            stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
            Some((depth, node))
        })
    }
}

/// Pre-order iterator over a tree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
