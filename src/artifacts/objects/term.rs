//! Labelled rose tree
//!
//! A `Term` is the simplest structure that makes recursive diffing interesting:
//! a label plus an ordered sequence of children. Leaves are terms without
//! children.

use derive_new::new;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Term<L> {
    pub label: L,
    pub children: Vec<Term<L>>,
}

impl<L> Term<L> {
    pub fn leaf(label: L) -> Self {
        Term::new(label, Vec::new())
    }

    pub fn node(label: L, children: impl IntoIterator<Item = Term<L>>) -> Self {
        Term::new(label, children.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the term, the term itself included
    pub fn size(&self) -> usize {
        // explicit stack, terms can be arbitrarily deep
        let mut size = 0;
        let mut pending = vec![self];

        while let Some(term) = pending.pop() {
            size += 1;
            pending.extend(term.children.iter());
        }

        size
    }
}

impl<L: Display> Display for Term<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;

        if self.children.is_empty() {
            return Ok(());
        }

        write!(f, "(")?;
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}
