// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rose-tree traversals without recursion.

use std::collections::VecDeque;

/// A node with any number of ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self { value, children: Vec::new() }
    }

    pub fn with_children(value: T, children: Vec<TreeNode<T>>) -> Self {
        Self { value, children }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn push_child(&mut self, child: TreeNode<T>) {
        self.children.push(child);
    }
}

/// Preorder walk over node references, children left to right.
pub struct DepthFirst<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

/// Walks the tree depth-first on an explicit stack, so arbitrarily deep
/// trees traverse without recursion.
pub fn depth_first<T>(root: &TreeNode<T>) -> DepthFirst<'_, T> {
    DepthFirst { stack: vec![root] }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<&'a TreeNode<T>> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Level-order walk over node references.
pub struct BreadthFirst<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

pub fn breadth_first<T>(root: &TreeNode<T>) -> BreadthFirst<'_, T> {
    BreadthFirst { queue: VecDeque::from([root]) }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<&'a TreeNode<T>> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children.iter());
        Some(node)
    }
}
