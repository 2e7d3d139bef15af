pub mod record;

use crate::storage::record::Record;

/// Owning pointer to the next node. `None` marks the end of the chain.
pub type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    pub record: Record,
    pub next: Link,
}

impl Node {
    pub fn boxed(record: Record) -> Box<Self> {
        Box::new(Self { record, next: None })
    }
}

/// Walks forward from `link` while the record it holds satisfies `pass`.
///
/// Returns the first link whose record fails the predicate, or the empty
/// tail link when every record passes.
pub fn seek(mut link: &mut Link, mut pass: impl FnMut(&Record) -> bool) -> &mut Link {
    while link.as_ref().is_some_and(|node| pass(&node.record)) {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/// Unlinks the node held by `link`, rebinding `link` to its successor.
pub fn detach(link: &mut Link) -> Option<Box<Node>> {
    let mut node = link.take()?;
    *link = node.next.take();
    Some(node)
}

/// Places `node` into `link`, pushing the previous occupant after it.
pub fn splice(link: &mut Link, mut node: Box<Node>) {
    node.next = link.take();
    *link = Some(node);
}
