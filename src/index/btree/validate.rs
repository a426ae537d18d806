//! Structural invariant checker.

use crate::common::{MinDegree, Violation};
use crate::index::btree::node::Node;

/// Walks a tree once and reports the first broken invariant.
///
/// Beyond the per-node key-count, ordering and child-count rules this also
/// verifies that every key respects the separators above it and that all
/// leaves share one depth.
pub(crate) struct Checker {
    degree: MinDegree,
    leaf_depth: Option<usize>,
}

impl Checker {
    pub(crate) fn new(degree: MinDegree) -> Self {
        Self {
            degree,
            leaf_depth: None,
        }
    }

    /// Check the tree under `root`, returning how many keys it stores.
    pub(crate) fn check<K: Ord>(&mut self, root: &Node<K>) -> Result<usize, Violation> {
        self.check_node(root, 0, None, None)
    }

    fn check_node<'a, K: Ord>(
        &mut self,
        node: &'a Node<K>,
        depth: usize,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
    ) -> Result<usize, Violation> {
        let found = node.len();
        let max = self.degree.max_keys();
        let min = if depth == 0 { 1 } else { self.degree.min_keys() };
        if found < min || found > max {
            return Err(Violation::KeyCount {
                depth,
                found,
                min,
                max,
            });
        }

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Violation::Unordered { depth });
        }

        // Keys are ascending, so checking the ends against the bounds suffices.
        let below = matches!((lower, node.keys.first()), (Some(lo), Some(first)) if first <= lo);
        let above = matches!((upper, node.keys.last()), (Some(hi), Some(last)) if last >= hi);
        if below || above {
            return Err(Violation::OutOfRange { depth });
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(Violation::ChildCount {
                    depth,
                    keys: found,
                    children: node.children.len(),
                });
            }
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(Violation::LeafDepth {
                        expected,
                        found: depth,
                    })
                }
                Some(_) => {}
            }
            return Ok(found);
        }

        if node.children.len() != found + 1 {
            return Err(Violation::ChildCount {
                depth,
                keys: found,
                children: node.children.len(),
            });
        }

        let mut total = found;
        for (i, child) in node.children.iter().enumerate() {
            let lo = if i == 0 { lower } else { node.keys.get(i - 1) };
            let hi = node.keys.get(i).or(upper);
            total += self.check_node(child.as_ref(), depth + 1, lo, hi)?;
        }
        Ok(total)
    }
}
