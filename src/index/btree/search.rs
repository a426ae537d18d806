//! Search walker.

use std::borrow::Borrow;

use crate::index::btree::node::Node;

impl<K> Node<K> {
    /// Find the stored key equal to `key` in this subtree.
    ///
    /// Read-only, `O(log t * log_t n)` comparisons with the binary scan
    /// per node.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self;
        loop {
            match node.find_index(key) {
                Ok(index) => return Some(&node.keys[index]),
                Err(_) if node.is_leaf => return None,
                Err(index) => node = node.children[index].as_ref(),
            }
        }
    }
}
