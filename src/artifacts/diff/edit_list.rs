//! Cost-annotated edit list
//!
//! An `EditList` is a persistent cons list of `(diff, cumulative_cost)` pairs.
//! Prepending shares the tail instead of copying it, which is what lets the
//! solver keep one script per grid position without quadratic copying.
//!
//! ## Invariant
//!
//! The cumulative cost of every node equals the cost of its own diff plus the
//! cumulative cost of the node after it. The annotation on the head is thus the
//! total cost of the whole list, and comparing two candidate continuations is
//! O(1).

use crate::artifacts::core::Cost;
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
struct Node<D> {
    diff: D,
    cumulative_cost: Cost,
    rest: EditList<D>,
}

pub struct EditList<D> {
    head: Option<Rc<Node<D>>>,
    len: usize,
}

impl<D> EditList<D> {
    pub fn empty() -> Self {
        EditList { head: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Total cost of the list, 0 when empty
    pub fn total_cost(&self) -> Cost {
        self.head.as_ref().map_or(0, |node| node.cumulative_cost)
    }

    /// Returns a new list with `diff` in front, sharing `self` as its tail
    pub fn prepend(&self, diff: D, cost: Cost) -> Self {
        EditList {
            head: Some(Rc::new(Node {
                diff,
                cumulative_cost: cost + self.total_cost(),
                rest: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<D: Clone> EditList<D> {
    /// Strips the cost annotations, moving out of nodes nobody else shares
    pub fn into_diffs(mut self) -> Vec<D> {
        let mut diffs = Vec::with_capacity(self.len);
        let mut next = self.head.take();

        while let Some(node) = next {
            let Node { diff, mut rest, .. } = Rc::unwrap_or_clone(node);
            diffs.push(diff);
            next = rest.head.take();
        }

        diffs
    }
}

impl<D> Default for EditList<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<D> Clone for EditList<D> {
    fn clone(&self) -> Self {
        EditList {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

// The derived drop would recurse once per node
impl<D> Drop for EditList<D> {
    fn drop(&mut self) {
        let mut next = self.head.take();

        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<D: fmt::Debug> fmt::Debug for EditList<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'l, D> {
    next: Option<&'l Node<D>>,
}

impl<'l, D> Iterator for Iter<'l, D> {
    type Item = (&'l D, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.rest.head.as_deref();
        Some((&node.diff, node.cumulative_cost))
    }
}

impl<'l, D> IntoIterator for &'l EditList<D> {
    type Item = (&'l D, Cost);
    type IntoIter = Iter<'l, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
