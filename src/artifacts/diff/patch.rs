use bitflags::bitflags;
use std::fmt::{self, Display};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct EditKind: u8 {
        const INSERT = 0b001;
        const DELETE = 0b010;
        const REPLACE = 0b100;
    }
}

impl EditKind {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut kinds = Self::empty();

        for c in s.chars() {
            match c {
                'I' => kinds |= Self::INSERT,
                'D' => kinds |= Self::DELETE,
                'R' => kinds |= Self::REPLACE,
                _ => return None,
            }
        }

        Some(kinds)
    }
}

/// A single primitive edit over a payload, typically a term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Patch<T> {
    Insert(T),
    Delete(T),
    Replace(T, T),
}

impl<T> Patch<T> {
    /// The value on the old side, if the patch has one
    pub fn before(&self) -> Option<&T> {
        match self {
            Patch::Delete(value) | Patch::Replace(value, _) => Some(value),
            Patch::Insert(_) => None,
        }
    }

    /// The value on the new side, if the patch has one
    pub fn after(&self) -> Option<&T> {
        match self {
            Patch::Insert(value) | Patch::Replace(_, value) => Some(value),
            Patch::Delete(_) => None,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Patch<U> {
        match self {
            Patch::Insert(value) => Patch::Insert(f(value)),
            Patch::Delete(value) => Patch::Delete(f(value)),
            Patch::Replace(old, new) => {
                let old = f(old);
                Patch::Replace(old, f(new))
            }
        }
    }

    pub fn kind(&self) -> EditKind {
        match self {
            Patch::Insert(_) => EditKind::INSERT,
            Patch::Delete(_) => EditKind::DELETE,
            Patch::Replace(..) => EditKind::REPLACE,
        }
    }

    pub fn matches_filter(&self, filter: EditKind) -> bool {
        filter.contains(self.kind())
    }

    pub fn symbol(&self) -> char {
        match self {
            Patch::Insert(_) => '+',
            Patch::Delete(_) => '-',
            Patch::Replace(..) => '~',
        }
    }
}

impl<T: Display> Display for Patch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::Insert(value) | Patch::Delete(value) => write!(f, "{}{}", self.symbol(), value),
            Patch::Replace(old, new) => write!(f, "{}{} -> {}", self.symbol(), old, new),
        }
    }
}
