//! Split engine: the one operation that grows the tree.

use crate::common::MinDegree;
use crate::index::btree::node::Node;

impl<K> Node<K> {
    /// Split the full child at `index`, promoting its median into `self`.
    ///
    /// Preconditions: `self` is not full and `children[index]` holds exactly
    /// `2t-1` keys. Afterwards the child keeps its lower `t-1` keys (and `t`
    /// children), a new sibling at `index + 1` takes the upper `t-1` keys
    /// (and `t` children), and `keys[index]` is the old median.
    ///
    /// ```text
    ///   parent: [ .. a  b .. ]          parent: [ .. a  m  b .. ]
    ///                 |            =>                |     |
    ///   child:  [k0 .. m .. k2t-2]      [k0 .. kt-2]   [kt .. k2t-2]
    /// ```
    pub(crate) fn split_child(&mut self, index: usize, degree: MinDegree) {
        debug_assert!(!self.is_full(degree), "parent of a split must not be full");

        let t = degree.get();
        let (median, sibling) = {
            let child = &mut self.children[index];
            debug_assert_eq!(child.len(), degree.max_keys(), "only full nodes split");

            let mut sibling = Node::new(degree, child.is_leaf);
            sibling.keys.extend(child.keys.drain(t..));
            if !child.is_leaf {
                sibling.children.extend(child.children.drain(t..));
            }
            // Child now holds k0..=k(t-1); the last of those is the median.
            let median = child.keys.remove(t - 1);
            (median, sibling)
        };

        self.keys.insert(index, median);
        self.children.insert(index + 1, Box::new(sibling));

        tracing::trace!(index, min_degree = t, "split full child");
    }
}
