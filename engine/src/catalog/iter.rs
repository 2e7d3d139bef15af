use crate::storage::record::Record;
use crate::storage::{Link, Node};

/// Borrowing iterator over a catalog in chain order.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: &'a Link) -> Self {
        Self {
            next: head.as_deref(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}
