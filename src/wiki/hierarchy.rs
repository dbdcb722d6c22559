//! Indentation tree builder.
//!
//! Converts a flat, ordered stream of `(indent, node)` pairs into a nested
//! tree without recursion. Two parallel stacks are kept:
//!
//! - `indents`: the indent level that opened each frame, strictly
//!   increasing from bottom to top
//! - `siblings`: for each frame, the nodes seen at that level whose
//!   subtree is still open
//!
//! The bottom frame belongs to the document root (indent `ROOT_INDENT`) and
//! is never popped. When a line arrives at a shallower indent than the top
//! frame, frames are closed one at a time and each closed run of siblings is
//! attached to the most recent node of the frame below it.

use crate::domain::TreeNode;

/// Indent level of the root frame; lower than any real line.
const ROOT_INDENT: isize = -1;

#[derive(Debug)]
pub struct Hierarchy<T> {
    indents: Vec<isize>,
    siblings: Vec<Vec<TreeNode<T>>>,
}

impl<T> Hierarchy<T> {
    /// Starts a hierarchy whose bottom frame holds `root`.
    pub fn new(root: TreeNode<T>) -> Self {
        Self {
            indents: vec![ROOT_INDENT],
            siblings: vec![vec![root]],
        }
    }

    /// Adds a node at the given indent level.
    pub fn push(&mut self, indent: usize, node: TreeNode<T>) {
        let indent = indent as isize;
        self.adjust(indent);
        if let Some(frame) = self.siblings.last_mut() {
            frame.push(node);
        }
    }

    /// Returns the most recently pushed node, or the root if none has been.
    pub fn current_mut(&mut self) -> &mut TreeNode<T> {
        self.siblings
            .last_mut()
            .and_then(|frame| frame.last_mut())
            .expect("every open frame holds at least one node")
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.siblings[0][0]
    }

    /// Returns the document root.
    pub fn root_mut(&mut self) -> &mut TreeNode<T> {
        &mut self.siblings[0][0]
    }

    /// Number of open frames, including the root frame.
    pub fn open_frames(&self) -> usize {
        debug_assert_eq!(self.indents.len(), self.siblings.len());
        self.indents.len()
    }

    /// Closes every open frame and returns the finished root.
    pub fn finish(mut self) -> TreeNode<T> {
        self.adjust(ROOT_INDENT);
        self.siblings
            .pop()
            .and_then(|frame| frame.into_iter().next())
            .expect("root frame holds the root node")
    }

    fn adjust(&mut self, indent: isize) {
        while indent < self.top_indent() {
            self.indents.pop();
            let closed = self.siblings.pop().unwrap_or_default();
            if let Some(parent) = self.siblings.last_mut().and_then(|f| f.last_mut()) {
                parent.attach_children(closed);
            }
        }

        if indent > self.top_indent() {
            self.indents.push(indent);
            self.siblings.push(Vec::new());
        }
    }

    fn top_indent(&self) -> isize {
        self.indents.last().copied().unwrap_or(ROOT_INDENT)
    }
}
