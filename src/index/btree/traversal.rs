//! In-order traversal and iterators.

use std::iter::FusedIterator;
use std::vec;

use crate::index::btree::node::Node;

impl<K> Node<K> {
    /// Visit every key of the subtree in ascending order.
    pub(crate) fn in_order<F: FnMut(&K)>(&self, visit: &mut F) {
        if self.is_leaf {
            self.keys.iter().for_each(|key| visit(key));
            return;
        }

        for (child, key) in self.children.iter().zip(&self.keys) {
            child.in_order(visit);
            visit(key);
        }
        if let Some(last) = self.children.last() {
            last.in_order(visit);
        }
    }
}

/// A lazy, ascending iterator over the keys of a [`BTree`].
///
/// Holds one `(node, next key index)` frame per level, so it needs
/// `O(height)` memory regardless of tree size.
///
/// Created by [`BTree::iter`].
///
/// [`BTree`]: crate::BTree
/// [`BTree::iter`]: crate::BTree::iter
pub struct Iter<'a, K> {
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        if let Some(root) = root {
            iter.push_left_spine(root);
        }
        iter
    }

    /// Push `node` and its chain of leftmost descendants.
    fn push_left_spine(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child.as_ref(),
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some((node, index)) = self.stack.pop() {
            let Some(key) = node.keys.get(index) else {
                // Node exhausted, resume its parent.
                continue;
            };

            self.stack.push((node, index + 1));
            if let Some(child) = node.children.get(index + 1) {
                self.push_left_spine(child);
            }
            self.remaining -= 1;
            return Some(key);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning, ascending iterator over the keys of a [`BTree`].
///
/// Dismantles the tree as it goes: one frame per level holds the not yet
/// yielded keys and children of a node, so it needs `O(height)` memory on
/// top of the tree itself. Dropping it early releases the remaining nodes.
///
/// Created by the `IntoIterator` implementation of [`BTree`].
///
/// [`BTree`]: crate::BTree
pub struct IntoIter<K> {
    stack: Vec<Frame<K>>,
    remaining: usize,
}

/// The unconsumed parts of one node. The next child to visit always sits
/// right after the next key to yield.
struct Frame<K> {
    keys: vec::IntoIter<K>,
    children: vec::IntoIter<Box<Node<K>>>,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Option<Box<Node<K>>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        if let Some(root) = root {
            iter.push_left_spine(root);
        }
        iter
    }

    /// Take `node` apart and push it with its chain of leftmost descendants.
    fn push_left_spine(&mut self, mut node: Box<Node<K>>) {
        loop {
            let Node { keys, children, .. } = *node;
            let mut children = children.into_iter();
            let leftmost = children.next();
            self.stack.push(Frame {
                keys: keys.into_iter(),
                children,
            });
            match leftmost {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some(frame) = self.stack.last_mut() {
            let Some(key) = frame.keys.next() else {
                // Node exhausted, resume its parent.
                self.stack.pop();
                continue;
            };

            if let Some(child) = frame.children.next() {
                self.push_left_spine(child);
            }
            self.remaining -= 1;
            return Some(key);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
