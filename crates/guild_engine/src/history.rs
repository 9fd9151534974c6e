//! In-memory move log
//!
//! The log is a persistent singly linked list. Appending shares the whole
//! previous history with the old state, so every accepted move produces a
//! new game state in O(1) without copying earlier records.

use std::sync::Arc;

#[derive(Debug)]
struct LogNode<M> {
    entry: M,
    previous: Option<Arc<LogNode<M>>>,
}

/// Ordered, append-only record of accepted moves
///
/// # Example
///
/// ```rust,ignore
/// let log = MoveLog::new().push("e2-e4").push("e7-e5");
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.last(), Some(&"e7-e5"));
/// ```
#[derive(Debug)]
pub struct MoveLog<M> {
    head: Option<Arc<LogNode<M>>>,
    len: usize,
}

impl<M> Clone for MoveLog<M> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<M> Default for MoveLog<M> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<M> Drop for MoveLog<M> {
    // Unlink iteratively so a long game does not recurse once per ply.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => cursor = inner.previous.take(),
                Err(_) => break,
            }
        }
    }
}

impl<M> MoveLog<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new log with `entry` appended; `self` is unchanged
    #[must_use]
    pub fn push(&self, entry: M) -> Self {
        Self {
            head: Some(Arc::new(LogNode {
                entry,
                previous: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of recorded plies
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<&M> {
        self.head.as_deref().map(|node| &node.entry)
    }

    /// Entries from most recent to oldest
    pub fn iter_recent(&self) -> impl Iterator<Item = &M> {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.previous.as_deref();
            Some(&node.entry)
        })
    }

    /// Entries in the order they were played
    pub fn to_vec(&self) -> Vec<&M> {
        let mut entries: Vec<&M> = self.iter_recent().collect();
        entries.reverse();
        entries
    }
}
